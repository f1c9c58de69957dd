// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Labeled breakdown of the symmetric difference of two sets.

use crate::algebra::*;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::debug;

/// Every intermediate set involved in the symmetric difference of `a` and `b`.
///
/// `Display` prints one labeled line per set, the sets being named `name_a` and `name_b`.
#[derive(Debug, Clone)]
pub struct Report<'a, A> {
  name_a: &'a str,
  name_b: &'a str,
  a: &'a A,
  b: &'a A,
  union: A,
  intersection: A,
  a_minus_b: A,
  b_minus_a: A,
  direct: A,
  by_union: A,
  by_differences: A,
  agrees: bool
}

impl<'a, A> Report<'a, A> where
  A: SetAlgebra + PartialEq
{
  pub fn new(a: &'a A, b: &'a A, name_a: &'a str, name_b: &'a str) -> Report<'a, A> {
    let direct = symmetric_difference(a, b);
    let by_union = symmetric_difference_by_union(a, b);
    let by_differences = symmetric_difference_by_differences(a, b);
    let agrees = direct == by_union && direct == by_differences;
    if !agrees {
      debug!(name_a, name_b, "symmetric difference strategies disagree");
    }
    Report {
      name_a: name_a,
      name_b: name_b,
      a: a,
      b: b,
      union: union(a, b),
      intersection: intersection(a, b),
      a_minus_b: difference(a, b),
      b_minus_a: difference(b, a),
      direct: direct,
      by_union: by_union,
      by_differences: by_differences,
      agrees: agrees
    }
  }
}

impl<'a, A> Report<'a, A>
{
  pub fn union(&self) -> &A {
    &self.union
  }

  pub fn intersection(&self) -> &A {
    &self.intersection
  }

  /// `(a \ b, b \ a)`
  pub fn differences(&self) -> (&A, &A) {
    (&self.a_minus_b, &self.b_minus_a)
  }

  pub fn symmetric_difference(&self) -> &A {
    &self.direct
  }

  pub fn into_symmetric_difference(self) -> A {
    self.direct
  }

  /// `true` if the three strategies computed the same symmetric difference.
  pub fn agrees(&self) -> bool {
    self.agrees
  }
}

impl<'a, A: Display> Display for Report<'a, A>
{
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    let (a, b) = (self.name_a, self.name_b);
    writeln!(f, "{}: {}", a, self.a)?;
    writeln!(f, "{}: {}", b, self.b)?;
    writeln!(f, "Union ({} ∪ {}): {}", a, b, self.union)?;
    writeln!(f, "Intersection ({} ∩ {}): {}", a, b, self.intersection)?;
    writeln!(f, "Difference ({} - {}): {}", a, b, self.a_minus_b)?;
    writeln!(f, "Difference ({} - {}): {}", b, a, self.b_minus_a)?;
    writeln!(f, "Symmetric Difference ({} Δ {}) using direct operator: {}", a, b, self.direct)?;
    writeln!(f, "Symmetric Difference ({} Δ {}) via union minus intersection: {}", a, b, self.by_union)?;
    writeln!(f, "Symmetric Difference ({} Δ {}) via both differences: {}", a, b, self.by_differences)?;
    writeln!(f, "Methods produce same result: {}", self.agrees)
  }
}
