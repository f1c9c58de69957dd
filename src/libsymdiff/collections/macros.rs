// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
// The reference-reference operator is the real implementation, it delegates to the set operation trait.
macro_rules! forward_ref_ref_binop {
  ([$($gen:tt)*] $imp:ident for $res:ty, $method:ident => $set_op:ident, $set_method:ident) => {
    impl<'a, 'b, $($gen)*> $imp<&'b $res> for &'a $res {
      type Output = $res;

      fn $method(self, other: &'b $res) -> $res {
        <$res as $set_op>::$set_method(self, other)
      }
    }
  }
}

macro_rules! forward_val_val_binop {
  ([$($gen:tt)*] $imp:ident for $res:ty, $method:ident) => {
    impl<$($gen)*> $imp<$res> for $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  ([$($gen:tt)*] $imp:ident for $res:ty, $method:ident) => {
    impl<'a, $($gen)*> $imp<$res> for &'a $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  ([$($gen:tt)*] $imp:ident for $res:ty, $method:ident) => {
    impl<'b, $($gen)*> $imp<&'b $res> for $res {
      type Output = $res;

      fn $method(self, other: &'b $res) -> $res {
        (&self).$method(other)
      }
    }
  }
}

macro_rules! forward_all_binop {
  ([$($gen:tt)*] $imp:ident for $res:ty, $method:ident => $set_op:ident, $set_method:ident) => {
    forward_ref_ref_binop!([$($gen)*] $imp for $res, $method => $set_op, $set_method);
    forward_val_val_binop!([$($gen)*] $imp for $res, $method);
    forward_ref_val_binop!([$($gen)*] $imp for $res, $method);
    forward_val_ref_binop!([$($gen)*] $imp for $res, $method);
  };
}

/// Builds a [`BTreeSet`](collections/struct.BTreeSet.html) from a list of elements.
///
/// ```rust
/// # #[macro_use] extern crate symdiff;
/// # fn main() {
/// let fruits = btree_set!["kiwi", "apple", "kiwi"];
/// assert_eq!(fruits.len(), 2);
/// assert_eq!(format!("{}", fruits), "{apple, kiwi}");
/// # }
/// ```
#[macro_export]
macro_rules! btree_set {
  ($($x:expr),* $(,)?) => {{
    #[allow(unused_mut)]
    let mut set = $crate::collections::BTreeSet::default();
    $( set.insert($x); )*
    set
  }}
}

/// Builds a [`HashSet`](collections/struct.HashSet.html) from a list of elements.
#[macro_export]
macro_rules! hash_set {
  ($($x:expr),* $(,)?) => {{
    #[allow(unused_mut)]
    let mut set: $crate::collections::HashSet<_> = $crate::collections::HashSet::default();
    $( set.insert($x); )*
    set
  }}
}

/// Builds a [`BitSet`](collections/struct.BitSet.html) from a list of `usize`.
#[macro_export]
macro_rules! bit_set {
  ($($x:expr),* $(,)?) => {{
    #[allow(unused_mut)]
    let mut set = $crate::collections::BitSet::default();
    $( set.insert($x); )*
    set
  }}
}
