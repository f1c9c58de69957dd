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

//! Set operations of `gcollections` implemented on the wrapped collections.
//!
//! The operators `|`, `&`, `-` and `^` are also available on every wrapper, for owned values and references, and they stand respectively for union, intersection, difference and symmetric difference.
//!
//! For general informations, see the [module documentation](../index.html).

use crate::collections::{HashSet, BTreeSet, BitSet};
use gcollections::kind::*;
use gcollections::ops::*;
use std::hash::{BuildHasher, Hash};
use std::ops::{Deref, BitOr, BitAnd, BitXor, Sub};

macro_rules! set_op_impl
{
  ( $( $t: ident, $m:ident, $v:ident );* ) =>
  {$(
    impl<T> $t for BTreeSet<T>
    where T: Ord+Clone
    {
      type Output = BTreeSet<T>;

      fn $m(&self, other: &BTreeSet<T>) -> BTreeSet<T> {
        self.deref().$m(other.deref()).cloned().collect()
      }
    }

    impl $t for BitSet {
      type Output = BitSet;

      fn $m(&self, other: &BitSet) -> BitSet {
        let mut new = self.deref().clone();
        new.$v(other.deref());
        BitSet::wrap(new)
      }
    }

    impl<T, S> $t for HashSet<T, S>
    where T: Eq + Hash + Clone,
          S: BuildHasher + Default
    {
      type Output = HashSet<T, S>;

      fn $m(&self, other: &HashSet<T, S>) -> HashSet<T, S> {
        self.deref().$m(other.deref()).cloned().collect()
      }
    }
  )*}
}

set_op_impl! {
  Intersection, intersection, intersect_with;
  Union, union, union_with;
  Difference, difference, difference_with;
  SymmetricDifference, symmetric_difference, symmetric_difference_with
}

macro_rules! set_binop_impl
{
  ( $( [$($gen:tt)*] $res:ty );* ) =>
  {$(
    forward_all_binop!([$($gen)*] BitOr for $res, bitor => Union, union);
    forward_all_binop!([$($gen)*] BitAnd for $res, bitand => Intersection, intersection);
    forward_all_binop!([$($gen)*] Sub for $res, sub => Difference, difference);
    forward_all_binop!([$($gen)*] BitXor for $res, bitxor => SymmetricDifference, symmetric_difference);
  )*}
}

set_binop_impl! {
  [T: Ord + Clone] BTreeSet<T>;
  [T: Eq + Hash + Clone, S: BuildHasher + Default] HashSet<T, S>;
  [] BitSet
}

// Kind and membership

impl<T> Collection for BTreeSet<T> {
  type Item = T;
}

impl<T, S> Collection for HashSet<T, S> {
  type Item = T;
}

impl Collection for BitSet {
  type Item = usize;
}

macro_rules! contains_impl {
  ($t:ty) => {
    fn contains(&self, value: &$t) -> bool {
      self.deref().contains(value)
    }
  }
}

impl<T, S> Contains for HashSet<T, S>
where T: Eq + Hash,
      S: BuildHasher
{
  contains_impl!(T);
}

impl<T: Ord> Contains for BTreeSet<T> {
  contains_impl!(T);
}

impl Contains for BitSet {
  fn contains(&self, value: &usize) -> bool {
    self.deref().contains(*value)
  }
}

// Cardinality

impl<T, S> Cardinality for HashSet<T, S> {
  type Size = usize;
  fn size(&self) -> usize {
    self.len()
  }
}

impl<T> Cardinality for BTreeSet<T> {
  type Size = usize;
  fn size(&self) -> usize {
    self.len()
  }
}

impl Cardinality for BitSet {
  type Size = usize;
  fn size(&self) -> usize {
    self.len()
  }
}

// Construction

impl<T, S> Empty for HashSet<T, S>
where S: Default
{
  fn empty() -> HashSet<T, S> {
    HashSet::default()
  }
}

impl<T> Empty for BTreeSet<T> {
  fn empty() -> BTreeSet<T> {
    BTreeSet::default()
  }
}

impl Empty for BitSet {
  fn empty() -> BitSet {
    BitSet::default()
  }
}

impl<T, S> Singleton for HashSet<T, S>
where T: Eq + Hash,
      S: BuildHasher + Default
{
  fn singleton(value: T) -> HashSet<T, S> {
    let mut set = HashSet::default();
    set.insert(value);
    set
  }
}

impl<T: Ord> Singleton for BTreeSet<T> {
  fn singleton(value: T) -> BTreeSet<T> {
    let mut set = BTreeSet::default();
    set.insert(value);
    set
  }
}

impl Singleton for BitSet {
  fn singleton(value: usize) -> BitSet {
    let mut set = BitSet::default();
    set.insert(value);
    set
  }
}
