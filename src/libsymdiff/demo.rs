// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Console walkthrough of the symmetric difference.
//!
//! It prints a breakdown for six fixed pairs of sets, asks the user for two comma-separated lists, and finishes with the symmetric difference of three sets. Errors on the user input are printed and never stop the walkthrough.

use crate::algebra::*;
use crate::collections::BTreeSet;
use crate::element::Element;
use crate::input::{prompt_set, InputError};
use crate::report::Report;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const WIDE_RULE: usize = 50;
const NARROW_RULE: usize = 30;

pub fn run<R, W>(input: &mut R, output: &mut W) -> io::Result<()> where
  R: BufRead,
  W: Write
{
  writeln!(output, "Symmetric Difference Between Sets")?;
  writeln!(output, "{}", "=".repeat(WIDE_RULE))?;
  fixed_examples(output)?;
  interactive_example(input, output)?;
  multiple_sets_example(output)
}

fn example<W, A>(output: &mut W, number: usize, title: &str, a: &A, b: &A, name_a: &str, name_b: &str) -> io::Result<()> where
  W: Write,
  A: SetAlgebra + PartialEq + Display
{
  writeln!(output, "\n{}. {}:", number, title)?;
  writeln!(output, "{}", "-".repeat(NARROW_RULE))?;
  write!(output, "{}", Report::new(a, b, name_a, name_b))
}

fn fixed_examples<W: Write>(output: &mut W) -> io::Result<()> {
  example(output, 1, "Integer Sets",
    &btree_set![1, 2, 3, 4, 5], &btree_set![4, 5, 6, 7, 8], "Set A", "Set B")?;
  example(output, 2, "String Sets",
    &btree_set!["apple", "banana", "orange", "grape"],
    &btree_set!["banana", "grape", "kiwi", "mango"], "Fruits 1", "Fruits 2")?;
  example(output, 3, "Mixed Data Types",
    &btree_set![Element::from(1), Element::from("hello"), Element::from(3.14), Element::from(true)],
    &btree_set![Element::from("hello"), Element::from(3.14), Element::from(false), Element::from("world")],
    "Mixed 1", "Mixed 2")?;
  example(output, 4, "Empty Sets",
    &BTreeSet::default(), &btree_set![1, 2, 3], "Empty Set", "Normal Set")?;
  example(output, 5, "Identical Sets",
    &btree_set![10, 20, 30], &btree_set![10, 20, 30], "Identical 1", "Identical 2")?;
  example(output, 6, "Disjoint Sets",
    &btree_set![1, 3, 5], &btree_set![2, 4, 6], "Disjoint 1", "Disjoint 2")
}

fn read_user_sets<R, W>(input: &mut R, output: &mut W) -> Result<(BTreeSet<String>, BTreeSet<String>), InputError> where
  R: BufRead,
  W: Write
{
  let first = prompt_set::<_, _, String, _>(input, output, "Enter elements for first set (comma-separated): ")?;
  let second = prompt_set::<_, _, String, _>(input, output, "Enter elements for second set (comma-separated): ")?;
  Ok((first, second))
}

fn interactive_example<R, W>(input: &mut R, output: &mut W) -> io::Result<()> where
  R: BufRead,
  W: Write
{
  writeln!(output, "\n{}", "=".repeat(WIDE_RULE))?;
  writeln!(output, "Interactive Example")?;
  writeln!(output, "{}", "=".repeat(WIDE_RULE))?;
  match read_user_sets(input, output) {
    Ok((first, second)) => {
      info!(first = first.len(), second = second.len(), "read user sets");
      writeln!(output, "\nYour sets:")?;
      write!(output, "{}", Report::new(&first, &second, "Your Set 1", "Your Set 2"))
    }
    Err(err) => {
      warn!(%err, "interactive example skipped");
      writeln!(output, "Error: {}", err)
    }
  }
}

fn multiple_sets_example<W: Write>(output: &mut W) -> io::Result<()> {
  writeln!(output, "\n{}", "=".repeat(WIDE_RULE))?;
  writeln!(output, "Symmetric Difference with Multiple Sets")?;
  writeln!(output, "{}", "=".repeat(WIDE_RULE))?;

  let sets = vec![btree_set![1, 2, 3, 4], btree_set![3, 4, 5, 6], btree_set![5, 6, 7, 8]];
  for (i, set) in sets.iter().enumerate() {
    writeln!(output, "Set {}: {}", i + 1, set)?;
  }
  writeln!(output, "Symmetric Difference of all sets: {}", symmetric_difference_all(&sets))?;
  for (i, step) in symmetric_difference_steps(&sets).iter().enumerate() {
    if i == 0 {
      writeln!(output, "Step 1 (Set1 Δ Set2): {}", step)?;
    }
    else {
      writeln!(output, "Step {} (Result Δ Set{}): {}", i + 1, i + 2, step)?;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn transcript(input: &str) -> String {
    let mut input = Cursor::new(input.to_string());
    let mut output = vec![];
    run(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
  }

  #[test]
  fn fixed_examples_are_printed() {
    let out = transcript("a\nb\n");
    assert!(out.starts_with("Symmetric Difference Between Sets\n"));
    for title in &["1. Integer Sets:", "2. String Sets:", "3. Mixed Data Types:", "4. Empty Sets:", "5. Identical Sets:", "6. Disjoint Sets:"] {
      assert!(out.contains(title), "missing block {}", title);
    }
    assert!(out.contains("Symmetric Difference (Set A Δ Set B) using direct operator: {1, 2, 3, 6, 7, 8}\n"));
    assert!(out.contains("Symmetric Difference (Fruits 1 Δ Fruits 2) using direct operator: {apple, kiwi, mango, orange}\n"));
    assert!(out.contains("Symmetric Difference (Mixed 1 Δ Mixed 2) using direct operator: {false, true, 1, \"world\"}\n"));
    assert!(out.contains("Empty Set: ∅\n"));
    assert!(out.contains("Symmetric Difference (Empty Set Δ Normal Set) using direct operator: {1, 2, 3}\n"));
    assert!(out.contains("Symmetric Difference (Identical 1 Δ Identical 2) using direct operator: ∅\n"));
    assert!(out.contains("Symmetric Difference (Disjoint 1 Δ Disjoint 2) using direct operator: {1, 2, 3, 4, 5, 6}\n"));
    assert!(!out.contains("Methods produce same result: false"));
  }

  #[test]
  fn user_sets() {
    let out = transcript("apple, kiwi, pear\nkiwi,mango\n");
    assert!(out.contains("Enter elements for first set (comma-separated): Enter elements for second set (comma-separated): \nYour sets:\n"));
    assert!(out.contains("Your Set 1: {apple, kiwi, pear}\n"));
    assert!(out.contains("Symmetric Difference (Your Set 1 Δ Your Set 2) using direct operator: {apple, mango, pear}\n"));
    assert_eq!(out.matches("Methods produce same result: true").count(), 7);
  }

  #[test]
  fn blank_user_items_are_skipped() {
    let out = transcript("\n kiwi,, pear ,\n");
    let expected = "\
Your Set 1: ∅
Your Set 2: {kiwi, pear}
Union (Your Set 1 ∪ Your Set 2): {kiwi, pear}
Intersection (Your Set 1 ∩ Your Set 2): ∅
Difference (Your Set 1 - Your Set 2): ∅
Difference (Your Set 2 - Your Set 1): {kiwi, pear}
Symmetric Difference (Your Set 1 Δ Your Set 2) using direct operator: {kiwi, pear}
Symmetric Difference (Your Set 1 Δ Your Set 2) via union minus intersection: {kiwi, pear}
Symmetric Difference (Your Set 1 Δ Your Set 2) via both differences: {kiwi, pear}
Methods produce same result: true
";
    assert!(out.contains(expected), "unexpected transcript:\n{}", out);
    assert!(!out.contains("\"\""));
  }

  #[test]
  fn closed_input_is_reported() {
    let out = transcript("only one line\n");
    assert!(out.contains("Error: input stream closed before a line was read\n"));
    assert!(!out.contains("Your sets:"));
    assert!(out.contains("Symmetric Difference of all sets: {1, 2, 7, 8}\n"));
  }

  #[test]
  fn multiple_sets_trace() {
    let out = transcript("");
    let expected = "\
Set 1: {1, 2, 3, 4}
Set 2: {3, 4, 5, 6}
Set 3: {5, 6, 7, 8}
Symmetric Difference of all sets: {1, 2, 7, 8}
Step 1 (Set1 Δ Set2): {1, 2, 5, 6}
Step 2 (Result Δ Set3): {1, 2, 7, 8}
";
    assert!(out.ends_with(expected), "unexpected ending:\n{}", out);
  }
}
