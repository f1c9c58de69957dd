// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading sets typed by a user as comma-separated lists.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::iter::FromIterator;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
  #[error("input stream closed before a line was read")]
  Closed,
  #[error("could not read input: {0}")]
  Io(#[from] io::Error),
  #[error("invalid element `{item}`: {reason}")]
  Element { item: String, reason: String }
}

/// Reads one line without its line terminator. Fails with `InputError::Closed` at the end of the stream.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
  let mut line = String::new();
  if reader.read_line(&mut line)? == 0 {
    return Err(InputError::Closed);
  }
  let len = line.trim_end_matches(&['\n', '\r'][..]).len();
  line.truncate(len);
  Ok(line)
}

/// Parses a comma-separated list into a set.
///
/// Items are trimmed and blank items are skipped, so an empty line gives the empty set. Repeated items collapse into one element.
pub fn parse_set<T, A>(line: &str) -> Result<A, InputError> where
  T: FromStr,
  T::Err: Display,
  A: FromIterator<T>
{
  line.split(',')
    .map(str::trim)
    .filter(|item| !item.is_empty())
    .map(|item| item.parse::<T>().map_err(|e| InputError::Element {
      item: item.to_string(),
      reason: e.to_string()
    }))
    .collect()
}

/// Writes `prompt` on `writer` then reads and parses one line of `reader`.
pub fn prompt_set<R, W, T, A>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<A, InputError> where
  R: BufRead,
  W: Write,
  T: FromStr,
  T::Err: Display,
  A: FromIterator<T>
{
  write!(writer, "{}", prompt)?;
  writer.flush()?;
  let line = read_line(reader)?;
  parse_set(&line)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::collections::BTreeSet;
  use std::io::Cursor;

  #[test]
  fn read_lines_until_closed() {
    let mut input = Cursor::new("a, b\r\nc\nlast");
    assert_eq!(read_line(&mut input).unwrap(), "a, b");
    assert_eq!(read_line(&mut input).unwrap(), "c");
    assert_eq!(read_line(&mut input).unwrap(), "last");
    match read_line(&mut input) {
      Err(InputError::Closed) => (),
      other => panic!("expected a closed stream, got {:?}", other)
    }
  }

  #[test]
  fn parse_trims_and_deduplicates() {
    let set: BTreeSet<String> = parse_set(" kiwi ,apple, kiwi,,  ").unwrap();
    assert_eq!(set, btree_set!["apple".to_string(), "kiwi".to_string()]);
  }

  #[test]
  fn parse_empty_line() {
    let set: BTreeSet<String> = parse_set("").unwrap();
    assert!(set.is_empty());
  }

  #[test]
  fn parse_typed_elements() {
    let set: BTreeSet<i32> = parse_set("3, 1, 2").unwrap();
    assert_eq!(set, btree_set![1, 2, 3]);

    match parse_set::<i32, BTreeSet<i32>>("1, two") {
      Err(InputError::Element { item, .. }) => assert_eq!(item, "two"),
      other => panic!("expected an invalid element, got {:?}", other)
    }
  }

  #[test]
  fn prompt_writes_then_reads() {
    let mut input = Cursor::new("1,2\n");
    let mut output = vec![];
    let set: BTreeSet<u8> = prompt_set(&mut input, &mut output, "Enter: ").unwrap();
    assert_eq!(set, btree_set![1, 2]);
    assert_eq!(String::from_utf8(output).unwrap(), "Enter: ");
  }

  #[test]
  fn error_messages() {
    assert_eq!(InputError::Closed.to_string(), "input stream closed before a line was read");
    let err = InputError::Element { item: "x".to_string(), reason: "not a number".to_string() };
    assert_eq!(err.to_string(), "invalid element `x`: not a number");
  }
}
