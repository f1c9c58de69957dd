// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::collections::fmt_roster;
use bit_set::BitSet as StdBitSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// Dense set of small non-negative integers, one bit per possible element.
#[derive(Clone, Debug, Default)]
pub struct BitSet
{
  bs: StdBitSet
}

impl BitSet {
  pub fn wrap(bs: StdBitSet) -> BitSet {
    BitSet{bs: bs}
  }

  pub fn unwrap(self) -> StdBitSet {
    self.bs
  }
}

impl Deref for BitSet
{
  type Target = StdBitSet;

  fn deref<'a>(&'a self) -> &'a StdBitSet {
    &self.bs
  }
}

impl DerefMut for BitSet
{
  fn deref_mut<'a>(&'a mut self) -> &'a mut StdBitSet {
    &mut self.bs
  }
}

// Two sets are equal when they hold the same elements, whatever the capacity of their bit vectors.
impl PartialEq for BitSet
{
  fn eq(&self, other: &BitSet) -> bool {
    self.bs.iter().eq(other.bs.iter())
  }
}

impl Eq for BitSet {}

impl Display for BitSet
{
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    fmt_roster(f, self.bs.iter())
  }
}

impl FromIterator<usize> for BitSet
{
  fn from_iter<I: IntoIterator<Item=usize>>(iter: I) -> BitSet {
    BitSet::wrap(StdBitSet::from_iter(iter))
  }
}

impl Extend<usize> for BitSet
{
  fn extend<I: IntoIterator<Item=usize>>(&mut self, iter: I) {
    self.bs.extend(iter)
  }
}
