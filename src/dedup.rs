use crate::node::{Node, Value};
use std::collections::HashSet;

impl Node {
  /// Keeps only the first child for each key, recursively. Dropped children are not visited.
  pub fn remove_duplicates(&mut self) {
    let mut pending = vec![self];
    while let Some(node) = pending.pop() {
      if let Value::Block(xs) = node.value_mut() {
        let mut seen = HashSet::new();
        xs.retain(|x| seen.insert(x.key().to_owned()));
        pending.extend(xs.iter_mut());
      }
    }
  }
}
