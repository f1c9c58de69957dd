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

//! Set algebra generic over the collection.
//!
//! Every function takes its operands by reference and builds a new set, inputs are never mutated. The symmetric difference is provided three ways: with the direct operation of the collection, as the union minus the intersection, and as the union of the two differences. They always agree, which [`strategies_agree`](fn.strategies_agree.html) checks.
//!
//! # Examples
//!
//! ```rust
//! #[macro_use] extern crate symdiff;
//! use symdiff::algebra::*;
//!
//! # fn main() {
//! let a = btree_set![1, 2, 3, 4, 5];
//! let b = btree_set![4, 5, 6, 7, 8];
//! assert_eq!(symmetric_difference(&a, &b), btree_set![1, 2, 3, 6, 7, 8]);
//! assert!(strategies_agree(&a, &b));
//!
//! let sets = vec![btree_set![1, 2, 3, 4], btree_set![3, 4, 5, 6], btree_set![5, 6, 7, 8]];
//! assert_eq!(symmetric_difference_all(&sets), btree_set![1, 2, 7, 8]);
//! # }
//! ```

use gcollections::ops::*;
use tracing::debug;

/// Collections closed under the four binary set operations.
pub trait SetAlgebra: Sized
  + Union<Output=Self>
  + Intersection<Output=Self>
  + Difference<Output=Self>
  + SymmetricDifference<Output=Self>
{}

impl<A> SetAlgebra for A where
  A: Union<Output=A> + Intersection<Output=A> + Difference<Output=A> + SymmetricDifference<Output=A>
{}

/// Elements of `a` or `b`.
pub fn union<A>(a: &A, b: &A) -> A where
  A: Union<Output=A>
{
  a.union(b)
}

/// Elements of both `a` and `b`.
pub fn intersection<A>(a: &A, b: &A) -> A where
  A: Intersection<Output=A>
{
  a.intersection(b)
}

/// Elements of `a` that are not in `b`.
pub fn difference<A>(a: &A, b: &A) -> A where
  A: Difference<Output=A>
{
  a.difference(b)
}

/// Elements in exactly one of `a` and `b`, computed by the collection itself.
pub fn symmetric_difference<A>(a: &A, b: &A) -> A where
  A: SymmetricDifference<Output=A>
{
  a.symmetric_difference(b)
}

/// `(a ∪ b) \ (a ∩ b)`
pub fn symmetric_difference_by_union<A>(a: &A, b: &A) -> A where
  A: Union<Output=A> + Intersection<Output=A> + Difference<Output=A>
{
  let union = a.union(b);
  let intersect = a.intersection(b);
  union.difference(&intersect)
}

/// `(a \ b) ∪ (b \ a)`
pub fn symmetric_difference_by_differences<A>(a: &A, b: &A) -> A where
  A: Union<Output=A> + Difference<Output=A>
{
  let left = a.difference(b);
  let right = b.difference(a);
  left.union(&right)
}

/// `true` if the three ways of computing the symmetric difference give the same set.
pub fn strategies_agree<A>(a: &A, b: &A) -> bool where
  A: SetAlgebra + PartialEq
{
  let direct = symmetric_difference(a, b);
  direct == symmetric_difference_by_union(a, b)
    && direct == symmetric_difference_by_differences(a, b)
}

/// Symmetric difference of a sequence of sets, folded from left to right.
///
/// The result of an empty sequence is the empty set and the result of a single set is a copy of it. Since the symmetric difference is associative and commutative, the result contains the elements appearing in an odd number of sets.
pub fn symmetric_difference_all<'a, A, I>(sets: I) -> A where
  I: IntoIterator<Item=&'a A>,
  A: 'a + SymmetricDifference<Output=A> + Empty + Clone
{
  let mut sets = sets.into_iter();
  match sets.next() {
    None => A::empty(),
    Some(first) => {
      sets.enumerate().fold(first.clone(), |acc, (i, set)| {
        debug!(step = i + 1, "folding symmetric difference");
        acc.symmetric_difference(set)
      })
    }
  }
}

/// Intermediate results of [`symmetric_difference_all`](fn.symmetric_difference_all.html).
///
/// The `i`-th step is the symmetric difference of the first `i + 2` sets, so the last step is the final result. There is no step for less than two sets.
pub fn symmetric_difference_steps<'a, A, I>(sets: I) -> Vec<A> where
  I: IntoIterator<Item=&'a A>,
  A: 'a + SymmetricDifference<Output=A> + Clone
{
  let mut sets = sets.into_iter();
  let mut steps: Vec<A> = vec![];
  if let Some(first) = sets.next() {
    for set in sets {
      let next = match steps.last() {
        Some(acc) => acc.symmetric_difference(set),
        None => first.symmetric_difference(set)
      };
      steps.push(next);
    }
  }
  steps
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::collections::{BTreeSet, HashSet, BitSet};

  fn test_strategies<A>(test_id: &str, a: A, b: A, expected: A) where
    A: SetAlgebra + PartialEq + std::fmt::Debug
  {
    println!("Info: {}.", test_id);
    assert_eq!(symmetric_difference(&a, &b), expected, "{} | direct", test_id);
    assert_eq!(symmetric_difference_by_union(&a, &b), expected, "{} | union minus intersection", test_id);
    assert_eq!(symmetric_difference_by_differences(&a, &b), expected, "{} | union of differences", test_id);
    assert_eq!(symmetric_difference(&b, &a), expected, "{} | commuted", test_id);
    assert!(strategies_agree(&a, &b), "{} | strategies disagree", test_id);
  }

  #[test]
  fn integer_sets() {
    test_strategies("overlapping",
      btree_set![1, 2, 3, 4, 5], btree_set![4, 5, 6, 7, 8], btree_set![1, 2, 3, 6, 7, 8]);
    test_strategies("empty and normal",
      btree_set![], btree_set![1, 2, 3], btree_set![1, 2, 3]);
    test_strategies("identical",
      btree_set![10, 20, 30], btree_set![10, 20, 30], btree_set![]);
    test_strategies("disjoint",
      btree_set![1, 3, 5], btree_set![2, 4, 6], btree_set![1, 2, 3, 4, 5, 6]);
  }

  #[test]
  fn string_sets() {
    test_strategies("fruits",
      hash_set!["apple", "banana", "orange", "grape"],
      hash_set!["banana", "grape", "kiwi", "mango"],
      hash_set!["apple", "orange", "kiwi", "mango"]);
  }

  #[test]
  fn bit_sets() {
    test_strategies("bits",
      bit_set![0, 1, 100], bit_set![1, 2], bit_set![0, 2, 100]);
  }

  #[test]
  fn basic_operations() {
    let a = btree_set![1, 2, 3];
    let b = btree_set![2, 3, 4];
    assert_eq!(union(&a, &b), btree_set![1, 2, 3, 4]);
    assert_eq!(intersection(&a, &b), btree_set![2, 3]);
    assert_eq!(difference(&a, &b), btree_set![1]);
    assert_eq!(difference(&b, &a), btree_set![4]);
  }

  #[test]
  fn inputs_are_untouched() {
    let a = btree_set![1, 2];
    let b = btree_set![2, 3];
    let _ = symmetric_difference_by_union(&a, &b);
    let _ = symmetric_difference_by_differences(&a, &b);
    assert_eq!(a, btree_set![1, 2]);
    assert_eq!(b, btree_set![2, 3]);
  }

  #[test]
  fn fold_of_no_set_is_empty() {
    let sets: Vec<BTreeSet<i32>> = vec![];
    assert_eq!(symmetric_difference_all(&sets), BTreeSet::empty());
    assert!(symmetric_difference_steps(&sets).is_empty());
  }

  #[test]
  fn fold_of_one_set_is_the_set() {
    let sets = vec![hash_set!["a", "b"]];
    assert_eq!(symmetric_difference_all(&sets), hash_set!["a", "b"]);
    assert!(symmetric_difference_steps(&sets).is_empty());
  }

  #[test]
  fn fold_of_three_sets() {
    let sets = vec![btree_set![1, 2, 3, 4], btree_set![3, 4, 5, 6], btree_set![5, 6, 7, 8]];
    assert_eq!(symmetric_difference_all(&sets), btree_set![1, 2, 7, 8]);
    assert_eq!(symmetric_difference_steps(&sets),
      vec![btree_set![1, 2, 5, 6], btree_set![1, 2, 7, 8]]);
    let nested = symmetric_difference(&symmetric_difference(&sets[0], &sets[1]), &sets[2]);
    assert_eq!(symmetric_difference_all(&sets), nested);
  }

  #[derive(Clone, Default)]
  struct SharedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

  impl std::io::Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn fold_logs_each_step_at_debug_level() {
    let log = SharedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();
    let sets = vec![btree_set![1, 2, 3, 4], btree_set![3, 4, 5, 6], btree_set![5, 6, 7, 8]];
    tracing::subscriber::with_default(subscriber, || {
      assert_eq!(symmetric_difference_all(&sets), btree_set![1, 2, 7, 8]);
    });
    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    let steps: Vec<&str> = output.lines()
      .filter(|line| line.contains("folding symmetric difference"))
      .collect();
    assert_eq!(steps.len(), 2, "{}", output);
    assert!(steps.iter().all(|line| line.contains("DEBUG")), "{}", output);
    assert!(steps[0].contains("step=1") && steps[1].contains("step=2"), "{}", output);
  }

  #[test]
  fn fold_keeps_elements_of_odd_multiplicity() {
    let sets: Vec<BitSet> = vec![bit_set![1, 2], bit_set![1, 3], bit_set![1, 4]];
    assert_eq!(symmetric_difference_all(sets.iter()), bit_set![1, 2, 3, 4]);
  }

  #[test]
  fn fold_over_hash_sets_with_default_hasher() {
    let sets: Vec<HashSet<u32>> = vec![hash_set![1], hash_set![1]];
    assert_eq!(symmetric_difference_all(&sets), HashSet::empty());
  }
}
