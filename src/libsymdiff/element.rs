// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elements of heterogeneous sets.
//!
//! A set has a single element type, so sets mixing booleans, numbers and text store `Element` values. Elements of different kinds are always distinct: `Element::Bool(true)` and `Element::Int(1)` are two elements.
//!
//! ```rust
//! #[macro_use] extern crate symdiff;
//! use symdiff::algebra::symmetric_difference;
//! use symdiff::element::Element;
//!
//! # fn main() {
//! let a = btree_set![Element::from(1), Element::from("hello"), Element::from(3.14), Element::from(true)];
//! let b = btree_set![Element::from("hello"), Element::from(3.14), Element::from(false), Element::from("world")];
//! let expected = btree_set![Element::from(false), Element::from(true), Element::from(1), Element::from("world")];
//! assert_eq!(symmetric_difference(&a, &b), expected);
//! # }
//! ```

use serde::{Serialize, Deserialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Floating point number ordered by the IEEE 754 `totalOrder` predicate, so it can be stored in any set.
///
/// `-0.0` and `0.0` are the same element, and a NaN is equal to itself.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Float(pub f64);

impl Float {
  // Both zeros compare and hash as `0.0`.
  fn key(self) -> f64 {
    if self.0 == 0.0 { 0.0 } else { self.0 }
  }
}

impl PartialEq for Float {
  fn eq(&self, other: &Float) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Float {}

impl PartialOrd for Float {
  fn partial_cmp(&self, other: &Float) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Float {
  fn cmp(&self, other: &Float) -> Ordering {
    self.key().total_cmp(&other.key())
  }
}

// Equal under `total_cmp` means bitwise equal keys.
impl Hash for Float {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.key().to_bits().hash(state)
  }
}

impl Display for Float {
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    Display::fmt(&self.0, f)
  }
}

/// Element of a mixed set. Kinds are ordered as declared: booleans, integers, floats, then text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Element {
  Bool(bool),
  Int(i64),
  Float(Float),
  Text(String)
}

impl Display for Element {
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    match self {
      Element::Bool(b) => write!(f, "{}", b),
      Element::Int(i) => write!(f, "{}", i),
      Element::Float(x) => write!(f, "{}", x),
      Element::Text(s) => write!(f, "{:?}", s)
    }
  }
}

/// Reads the most specific kind: a boolean, then an integer, then a finite float, and text otherwise.
impl FromStr for Element {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Element, Infallible> {
    let s = s.trim();
    let element =
      if let Ok(b) = s.parse::<bool>() {
        Element::Bool(b)
      }
      else if let Ok(i) = s.parse::<i64>() {
        Element::Int(i)
      }
      else if let Some(x) = s.parse::<f64>().ok().filter(|x| x.is_finite()) {
        Element::Float(Float(x))
      }
      else {
        Element::Text(s.to_string())
      };
    Ok(element)
  }
}

impl From<bool> for Element {
  fn from(b: bool) -> Element {
    Element::Bool(b)
  }
}

impl From<i64> for Element {
  fn from(i: i64) -> Element {
    Element::Int(i)
  }
}

impl From<i32> for Element {
  fn from(i: i32) -> Element {
    Element::Int(i64::from(i))
  }
}

impl From<f64> for Element {
  fn from(x: f64) -> Element {
    Element::Float(Float(x))
  }
}

impl From<&str> for Element {
  fn from(s: &str) -> Element {
    Element::Text(s.to_string())
  }
}

impl From<String> for Element {
  fn from(s: String) -> Element {
    Element::Text(s)
  }
}
