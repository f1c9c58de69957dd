// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::collections::fmt_roster;
use std::collections::HashSet as StdHashSet;
use std::collections::hash_map::RandomState;
use std::collections::hash_set;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// Unordered set of hashable elements.
///
/// Iteration order, and therefore the order of the `Display` output, is unspecified.
#[derive(Clone)]
pub struct HashSet<T, S = RandomState>
{
  hs: StdHashSet<T, S>
}

impl<T, S> HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  pub fn wrap(hs: StdHashSet<T, S>) -> HashSet<T, S> {
    HashSet{hs: hs}
  }

  pub fn unwrap(self) -> StdHashSet<T, S> {
    self.hs
  }
}

impl<T, S> Default for HashSet<T, S> where
  S: Default
{
  fn default() -> HashSet<T, S> {
    HashSet{hs: StdHashSet::default()}
  }
}

impl<T, S> Deref for HashSet<T, S>
{
  type Target = StdHashSet<T, S>;

  fn deref<'a>(&'a self) -> &'a StdHashSet<T, S> {
    &self.hs
  }
}

impl<T, S> DerefMut for HashSet<T, S>
{
  fn deref_mut<'a>(&'a mut self) -> &'a mut StdHashSet<T, S> {
    &mut self.hs
  }
}

impl<T, S> PartialEq for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn eq(&self, other: &HashSet<T, S>) -> bool {
    self.hs == other.hs
  }
}

impl<T, S> Eq for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{}

impl<T: Debug, S> Debug for HashSet<T, S>
{
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    Debug::fmt(&self.hs, f)
  }
}

impl<T: Display, S> Display for HashSet<T, S>
{
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    fmt_roster(f, self.hs.iter())
  }
}

impl<T, S> From<StdHashSet<T, S>> for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn from(hs: StdHashSet<T, S>) -> HashSet<T, S> {
    HashSet::wrap(hs)
  }
}

impl<T, S> FromIterator<T> for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher + Default
{
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> HashSet<T, S> {
    HashSet::wrap(StdHashSet::from_iter(iter))
  }
}

impl<T, S> Extend<T> for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
    self.hs.extend(iter)
  }
}

impl<T, S> IntoIterator for HashSet<T, S>
{
  type Item = T;
  type IntoIter = hash_set::IntoIter<T>;

  fn into_iter(self) -> hash_set::IntoIter<T> {
    self.hs.into_iter()
  }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S>
{
  type Item = &'a T;
  type IntoIter = hash_set::Iter<'a, T>;

  fn into_iter(self) -> hash_set::Iter<'a, T> {
    self.hs.iter()
  }
}
