// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Wrappers of the standard collection library for generic programming.
//!
//! Each wrapper implements the set operations of `gcollections` (`Union`, `Intersection`, `Difference`, `SymmetricDifference`, ...) so that the algorithms of the [algebra module](../algebra/index.html) can be written once, with trait bounds on type parameters, and used on every backend.
//!
//! The wrappers are needed because the standard collections already have methods with the same names as the operations (and they return iterators instead of sets). The wrapped collection stays reachable through `Deref` and `DerefMut`.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use symdiff::collections::BTreeSet;
//!
//! fn symmetric_difference<A>(a: &A, b: &A) -> A where
//!  A: Intersection<Output=A> + Union<Output=A> + Difference<Output=A>
//! {
//!   let union = a.union(b);
//!   let intersect = a.intersection(b);
//!   union.difference(&intersect)
//! }
//!
//! let a = BTreeSet::wrap([1, 2, 3, 4].iter().cloned().collect());
//! let b = BTreeSet::wrap([3, 4, 5, 6].iter().cloned().collect());
//! let res = BTreeSet::wrap([1, 2, 5, 6].iter().cloned().collect());
//! assert_eq!(symmetric_difference(&a, &b), res);
//! assert_eq!(&a ^ &b, res);
//! ```

mod macros;
pub mod hash_set;
pub mod btree_set;
pub mod bit_set;
pub mod ops;
mod serialization;

pub use crate::collections::hash_set::HashSet;
pub use crate::collections::btree_set::BTreeSet;
pub use crate::collections::bit_set::BitSet;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Writes the elements in roster notation, `{a, b, c}`, or `∅` when there is none.
pub(crate) fn fmt_roster<I>(f: &mut Formatter, items: I) -> FmtResult where
  I: IntoIterator,
  I::Item: Display
{
  let mut items = items.into_iter().peekable();
  if items.peek().is_none() {
    return write!(f, "∅");
  }
  write!(f, "{{")?;
  for (i, item) in items.enumerate() {
    if i > 0 {
      write!(f, ", ")?;
    }
    write!(f, "{}", item)?;
  }
  write!(f, "}}")
}
