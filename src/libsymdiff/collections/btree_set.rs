// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::collections::fmt_roster;
use std::collections::BTreeSet as StdBTreeSet;
use std::collections::btree_set;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// Set of totally ordered elements, displayed in ascending order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BTreeSet<T>
{
  ts: StdBTreeSet<T>
}

impl<T: Ord> BTreeSet<T>
{
  pub fn wrap(ts: StdBTreeSet<T>) -> BTreeSet<T> {
    BTreeSet{ts: ts}
  }

  pub fn unwrap(self) -> StdBTreeSet<T> {
    self.ts
  }
}

impl<T> Default for BTreeSet<T>
{
  fn default() -> BTreeSet<T> {
    BTreeSet{ts: StdBTreeSet::new()}
  }
}

impl<T> Deref for BTreeSet<T>
{
  type Target = StdBTreeSet<T>;

  fn deref<'a>(&'a self) -> &'a StdBTreeSet<T> {
    &self.ts
  }
}

impl<T> DerefMut for BTreeSet<T>
{
  fn deref_mut<'a>(&'a mut self) -> &'a mut StdBTreeSet<T> {
    &mut self.ts
  }
}

impl<T: Display> Display for BTreeSet<T>
{
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    fmt_roster(f, self.ts.iter())
  }
}

impl<T: Ord> From<StdBTreeSet<T>> for BTreeSet<T>
{
  fn from(ts: StdBTreeSet<T>) -> BTreeSet<T> {
    BTreeSet::wrap(ts)
  }
}

impl<T: Ord> FromIterator<T> for BTreeSet<T>
{
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> BTreeSet<T> {
    BTreeSet::wrap(StdBTreeSet::from_iter(iter))
  }
}

impl<T: Ord> Extend<T> for BTreeSet<T>
{
  fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
    self.ts.extend(iter)
  }
}

impl<T> IntoIterator for BTreeSet<T>
{
  type Item = T;
  type IntoIter = btree_set::IntoIter<T>;

  fn into_iter(self) -> btree_set::IntoIter<T> {
    self.ts.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a BTreeSet<T>
{
  type Item = &'a T;
  type IntoIter = btree_set::Iter<'a, T>;

  fn into_iter(self) -> btree_set::Iter<'a, T> {
    self.ts.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_is_sorted_roster() {
    let set = btree_set![5, 1, 3, 1];
    assert_eq!(format!("{}", set), "{1, 3, 5}");
    let words = btree_set!["orange", "apple"];
    assert_eq!(format!("{}", words), "{apple, orange}");
  }

  #[test]
  fn display_empty() {
    let empty: BTreeSet<u8> = BTreeSet::default();
    assert_eq!(format!("{}", empty), "∅");
  }

  #[test]
  fn wrap_unwrap() {
    let std_set: StdBTreeSet<i32> = vec![3, 2, 1].into_iter().collect();
    let set = BTreeSet::wrap(std_set.clone());
    assert_eq!(*set, std_set);
    assert_eq!(set.unwrap(), std_set);
  }
}
