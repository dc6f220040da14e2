//! Parser for Valve's VDF (KeyValues) text format.
//!
//! [`parse`] turns a buffer into a [`Node`] tree. Parsing never fails: malformed input yields a
//! best-effort tree, and only the accessors on [`Node`] report [`Error`]s.

mod access;
mod dedup;
pub mod error;
mod format;
mod json;
pub mod lexer;
mod node;
mod parse;

pub use error::{Error, Result};
pub use node::{Node, Value};
pub use parse::{parse, parse_str};
