use crate::error::{Error, Result};
use crate::node::{Node, Value};
use std::collections::HashMap;

impl Node {
  /// The string value of a leaf.
  pub fn as_str(&self) -> Option<&str> {
    match self.value() {
      Value::Leaf(s) => Some(s),
      Value::Block(_) => None,
    }
  }

  /// Children of a block; a leaf has none.
  pub fn children(&self) -> &[Node] {
    match self.value() {
      Value::Block(children) => children,
      Value::Leaf(_) => &[],
    }
  }

  fn block_children(&self) -> Result<&[Node]> {
    match self.value() {
      Value::Block(children) => Ok(children),
      Value::Leaf(_) => Err(Error::NotABlock(self.key().to_owned())),
    }
  }

  /// First direct child with the given key.
  pub fn get(&self, key: &str) -> Result<&Node> {
    self
      .block_children()?
      .iter()
      .find(|x| x.key() == key)
      .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
  }

  /// All direct children with the given key, in document order.
  pub fn get_all(&self, key: &str) -> Result<Vec<&Node>> {
    let found: Vec<&Node> = self
      .block_children()?
      .iter()
      .filter(|x| x.key() == key)
      .collect();
    if found.is_empty() {
      return Err(Error::KeyNotFound(key.to_owned()));
    }
    Ok(found)
  }

  /// Walks `path` one key per level. Siblings sharing a key are tried in order and the first
  /// one that resolves the rest of the path wins.
  pub fn get_sub_element(&self, path: &[&str]) -> Result<&Node> {
    let (first, rest) = path.split_first().ok_or(Error::EmptyPath)?;
    let candidates = self.get_all(first)?;
    if rest.is_empty() {
      return Ok(candidates[0]);
    }
    candidates
      .into_iter()
      .find_map(|x| x.get_sub_element(rest).ok())
      .ok_or_else(|| Error::PathNotFound(path.join(".")))
  }

  pub fn to_str(&self) -> Result<&str> {
    self
      .as_str()
      .ok_or_else(|| Error::NotALeaf(self.key().to_owned()))
  }

  pub fn to_int(&self) -> Result<i64> {
    self.to_str()?.parse().map_err(|source| Error::InvalidInt {
      key: self.key().to_owned(),
      source,
    })
  }

  /// `"1"` is true, any other string is false.
  pub fn to_bool(&self) -> Result<bool> {
    Ok(self.to_str()? == "1")
  }

  pub fn get_str(&self, key: &str) -> Result<&str> {
    self.get(key)?.to_str()
  }

  pub fn get_int(&self, key: &str) -> Result<i64> {
    self.get(key)?.to_int()
  }

  pub fn get_bool(&self, key: &str) -> Result<bool> {
    self.get(key)?.to_bool()
  }

  /// Leaf children as a map. Blocks are skipped and a repeated key keeps its last value.
  pub fn to_string_map(&self) -> Result<HashMap<&str, &str>> {
    Ok(
      self
        .block_children()?
        .iter()
        .filter_map(|x| x.as_str().map(|v| (x.key(), v)))
        .collect(),
    )
  }

  pub fn get_string_map(&self, key: &str) -> Result<HashMap<&str, &str>> {
    self.get(key)?.to_string_map()
  }

  pub fn get_sub_element_string_map(&self, path: &[&str]) -> Result<HashMap<&str, &str>> {
    self.get_sub_element(path)?.to_string_map()
  }
}
