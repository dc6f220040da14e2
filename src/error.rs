//! Errors returned when querying a parsed tree.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// No direct child has the requested key.
  #[error("key not found: {0}")]
  KeyNotFound(String),

  /// No element matches the dotted path.
  #[error("subelement not found for path: {0}")]
  PathNotFound(String),

  #[error("empty path")]
  EmptyPath,

  /// A block was expected but the node holds a string.
  #[error("unexpected element type: {0} is not a block")]
  NotABlock(String),

  /// A string was expected but the node holds children.
  #[error("unexpected value type for key {0}")]
  NotALeaf(String),

  #[error("can't convert key {key} to int: {source}")]
  InvalidInt {
    key: String,
    #[source]
    source: ParseIntError,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
