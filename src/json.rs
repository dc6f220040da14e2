use crate::node::{Node, Value};
use serde::{Serialize, Serializer};
use serde_json::Map;
use std::collections::BTreeMap;

struct Frame<'a> {
  key: &'a str,
  children: std::slice::Iter<'a, Node>,
  map: Map<String, serde_json::Value>,
}

enum Step<'a> {
  Value(&'a Node, usize),
  Entry(&'a str, &'a Node, usize, bool),
  Text(&'static str),
  Close(usize),
}

impl Node {
  /// Converts the tree to nested JSON objects with string leaves. When a key repeats, the last
  /// occurrence wins.
  ///
  /// The conversion has no depth limit, but dropping or serializing the returned value recurses
  /// inside serde_json. [`Node::to_json_pretty`] does not.
  pub fn to_json(&self) -> serde_json::Value {
    let children = match self.value() {
      Value::Leaf(x) => return serde_json::Value::String(x.clone()),
      Value::Block(xs) => xs,
    };
    let mut frames = vec![Frame {
      key: self.key(),
      children: children.iter(),
      map: Map::new(),
    }];
    loop {
      let next = match frames.last_mut() {
        Some(frame) => frame.children.next(),
        None => return serde_json::Value::Object(Map::new()),
      };
      match next.map(|x| (x, x.value())) {
        Some((x, Value::Leaf(s))) => {
          if let Some(frame) = frames.last_mut() {
            frame.map.insert(x.key().to_owned(), serde_json::Value::String(s.clone()));
          }
        }
        Some((x, Value::Block(xs))) => frames.push(Frame {
          key: x.key(),
          children: xs.iter(),
          map: Map::new(),
        }),
        None => {
          let Some(done) = frames.pop() else { continue };
          let object = serde_json::Value::Object(done.map);
          match frames.last_mut() {
            Some(parent) => {
              parent.map.insert(done.key.to_owned(), object);
            }
            None => return object,
          }
        }
      }
    }
  }

  /// Pretty-printed JSON text, the same as `serde_json::to_string_pretty(&self.to_json())`.
  pub fn to_json_pretty(&self) -> serde_json::Result<String> {
    let print_indent = |level: usize, buf: &mut String| (0..level).for_each(|_| buf.push_str("  "));

    let mut buf = String::new();
    let mut pending = vec![Step::Value(self, 0)];
    while let Some(step) = pending.pop() {
      match step {
        Step::Value(node, level) => match node.value() {
          Value::Leaf(x) => buf.push_str(&serde_json::to_string(x)?),
          Value::Block(xs) if xs.is_empty() => buf.push_str("{}"),
          Value::Block(xs) => {
            let entries: BTreeMap<&str, &Node> = xs.iter().map(|x| (x.key(), x)).collect();
            buf.push_str("{\n");
            pending.push(Step::Close(level));
            let last = entries.len() - 1;
            pending.extend(
              entries
                .into_iter()
                .enumerate()
                .rev()
                .map(|(i, (key, x))| Step::Entry(key, x, level + 1, i == last)),
            );
          }
        },
        Step::Entry(key, node, level, last) => {
          print_indent(level, &mut buf);
          buf.push_str(&serde_json::to_string(key)?);
          buf.push_str(": ");
          pending.push(Step::Text(if last { "\n" } else { ",\n" }));
          pending.push(Step::Value(node, level));
        }
        Step::Text(s) => buf.push_str(s),
        Step::Close(level) => {
          print_indent(level, &mut buf);
          buf.push('}');
        }
      }
    }
    Ok(buf)
  }
}

impl Serialize for Node {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.to_json().serialize(serializer)
  }
}
