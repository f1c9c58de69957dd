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

//! This library computes the symmetric difference of two sets, the elements belonging to exactly one of them, and checks it against its two classic formulations: `(A ∪ B) \ (A ∩ B)` and `(A \ B) ∪ (B \ A)`. The operations are generic over the collection thanks to the traits of `gcollections`, and the [collections module](collections/index.html) provides the wrappers of the standard sets implementing them.
//!
//! # Examples
//!
//! ```rust
//! #[macro_use] extern crate symdiff;
//! use symdiff::algebra::*;
//!
//! # fn main() {
//! let fruits1 = btree_set!["apple", "banana", "orange", "grape"];
//! let fruits2 = btree_set!["banana", "grape", "kiwi", "mango"];
//! let res = btree_set!["apple", "orange", "kiwi", "mango"];
//! assert_eq!(symmetric_difference(&fruits1, &fruits2), res);
//! assert_eq!(symmetric_difference_by_union(&fruits1, &fruits2), res);
//! assert_eq!(symmetric_difference_by_differences(&fruits1, &fruits2), res);
//! assert_eq!(&fruits1 ^ &fruits2, res);
//! # }
//! ```
//!
//! For sets mixing several kinds of values, see the [element module](element/index.html). The [demo module](demo/index.html) is the walkthrough printed by the `symdiff` binary.

#[macro_use]
pub mod collections;
pub mod algebra;
pub mod element;
pub mod report;
pub mod input;
pub mod demo;

pub use crate::algebra::SetAlgebra;
pub use crate::element::Element;
pub use crate::report::Report;
