use std::mem;

/// The value of a node: either a string or an ordered list of child nodes.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
  Leaf(String),
  Block(Vec<Node>),
}

/// An element of a parsed VDF document.
///
/// Dropping and comparing nodes work at any nesting depth. The derived `Debug` output recurses
/// once per level and is meant for shallow trees.
#[derive(Debug)]
pub struct Node {
  key: String,
  value: Value,
  is_root: bool,
}

impl Node {
  /// The synthetic top-level container of a document.
  pub fn root(children: Vec<Node>) -> Node {
    Node {
      key: "root".to_owned(),
      value: Value::Block(children),
      is_root: true,
    }
  }

  pub fn leaf(key: impl Into<String>, value: impl Into<String>) -> Node {
    Node {
      key: key.into(),
      value: Value::Leaf(value.into()),
      is_root: false,
    }
  }

  pub fn block(key: impl Into<String>, children: Vec<Node>) -> Node {
    Node {
      key: key.into(),
      value: Value::Block(children),
      is_root: false,
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn value(&self) -> &Value {
    &self.value
  }

  pub fn is_root(&self) -> bool {
    self.is_root
  }

  pub fn is_leaf(&self) -> bool {
    matches!(self.value, Value::Leaf(_))
  }

  /// Appends a child. Has no effect on a leaf.
  pub(crate) fn push(&mut self, child: Node) {
    if let Value::Block(children) = &mut self.value {
      children.push(child);
    }
  }

  pub(crate) fn value_mut(&mut self) -> &mut Value {
    &mut self.value
  }
}

impl PartialEq for Node {
  fn eq(&self, other: &Node) -> bool {
    let mut pending = vec![(self, other)];
    while let Some((a, b)) = pending.pop() {
      if a.key != b.key || a.is_root != b.is_root {
        return false;
      }
      match (&a.value, &b.value) {
        (Value::Leaf(x), Value::Leaf(y)) if x == y => {}
        (Value::Block(xs), Value::Block(ys)) if xs.len() == ys.len() => {
          pending.extend(xs.iter().zip(ys))
        }
        _ => return false,
      }
    }
    true
  }
}

impl Eq for Node {}

impl Drop for Node {
  fn drop(&mut self) {
    let mut pending = match &mut self.value {
      Value::Block(xs) => mem::take(xs),
      Value::Leaf(_) => return,
    };
    while let Some(mut node) = pending.pop() {
      if let Value::Block(xs) = &mut node.value {
        pending.append(xs);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Node;

  fn chain(depth: usize) -> Node {
    let mut node = Node::leaf("k", "v");
    for _ in 0..depth {
      node = Node::block("a", vec![node]);
    }
    node
  }

  #[test]
  fn eq() {
    let tests = vec![
      (Node::leaf("a", "1"), Node::leaf("a", "1"), true),
      (Node::leaf("a", "1"), Node::leaf("a", "2"), false),
      (Node::leaf("a", "1"), Node::leaf("b", "1"), false),
      (Node::leaf("a", "1"), Node::block("a", vec![]), false),
      (Node::root(vec![]), Node::block("root", vec![]), false),
      (
        Node::block("a", vec![Node::leaf("b", "1")]),
        Node::block("a", vec![Node::leaf("b", "1"), Node::leaf("c", "2")]),
        false,
      ),
      (chain(3), chain(3), true),
      (chain(3), chain(4), false),
    ];

    for (a, b, expected) in tests {
      assert_eq!(a == b, expected, "\n a: {:?}\n b: {:?}\n", a, b);
    }
  }

  #[test]
  fn deep_trees_compare_and_drop() {
    let handle = std::thread::Builder::new()
      .stack_size(128 * 1024)
      .spawn(|| {
        let a = chain(200_000);
        let b = chain(200_000);
        assert!(a == b);
        assert!(a != chain(199_999));
        let unclosed = crate::parse::parse_str(&"\"a\"{".repeat(200_000));
        assert_eq!(unclosed.children().len(), 1);
        drop(unclosed);
      })
      .unwrap();
    handle.join().unwrap();
  }
}
