use crate::node::{Node, Value};
use std::fmt;

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut buf = String::new();
    if self.is_root() {
      self.children().iter().for_each(|x| x.format(&mut buf));
    } else {
      self.format(&mut buf);
    }
    f.write_str(&buf)
  }
}

enum Step<'a> {
  Node(&'a Node, usize),
  Close(usize),
}

impl Node {
  fn format(&self, buf: &mut String) {
    let print_indent = |level: usize, buf: &mut String| (0..level).for_each(|_| buf.push('\t'));

    let mut pending = vec![Step::Node(self, 0)];
    while let Some(step) = pending.pop() {
      match step {
        Step::Node(node, level) => {
          print_indent(level, buf);
          buf.push('"');
          buf.push_str(node.key());
          buf.push('"');

          match node.value() {
            Value::Leaf(x) => {
              buf.push_str("\t\t\"");
              buf.push_str(x);
              buf.push_str("\"\n");
            }
            Value::Block(xs) => {
              buf.push('\n');
              print_indent(level, buf);
              buf.push_str("{\n");
              pending.push(Step::Close(level));
              pending.extend(xs.iter().rev().map(|x| Step::Node(x, level + 1)));
            }
          }
        }
        Step::Close(level) => {
          print_indent(level, buf);
          buf.push_str("}\n");
        }
      }
    }
  }
}
