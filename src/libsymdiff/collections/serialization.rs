// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The wrappers serialize exactly like the collection they wrap, as a sequence of elements.

use crate::collections::{HashSet, BTreeSet};
use ::serde::de::{Deserialize, Deserializer};
use ::serde::ser::{Serialize, Serializer};
use std::collections::BTreeSet as StdBTreeSet;
use std::collections::HashSet as StdHashSet;
use std::hash::{BuildHasher, Hash};
use std::ops::Deref;

impl<T, S> Serialize for HashSet<T, S> where
  T: Serialize + Eq + Hash,
  S: BuildHasher
{
  fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
    self.deref().serialize(serializer)
  }
}

impl<'de, T, S> Deserialize<'de> for HashSet<T, S> where
  T: Deserialize<'de> + Eq + Hash,
  S: BuildHasher + Default
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<HashSet<T, S>, D::Error> {
    StdHashSet::deserialize(deserializer).map(HashSet::wrap)
  }
}

impl<T> Serialize for BTreeSet<T> where
  T: Serialize + Ord
{
  fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
    self.deref().serialize(serializer)
  }
}

impl<'de, T> Deserialize<'de> for BTreeSet<T> where
  T: Deserialize<'de> + Ord
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<T>, D::Error> {
    StdBTreeSet::deserialize(deserializer).map(BTreeSet::wrap)
  }
}
