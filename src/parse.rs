use crate::lexer::{Lexer, Token};
use crate::node::Node;
use std::mem;

/// Parses a VDF document. Invalid UTF-8 is decoded lossily.
///
/// Malformed input never fails: unbalanced braces, dangling keys and unterminated strings all
/// produce a best-effort tree. See [`parse_str`].
pub fn parse(input: &[u8]) -> Node {
  parse_str(&String::from_utf8_lossy(input))
}

/// Parses a VDF document.
///
/// The returned node is the one the last `}` returned to, which is the root for balanced input.
/// Blocks still open at the end of input are attached to their parents first. Without any `}`
/// the root is returned.
pub fn parse_str(input: &str) -> Node {
  let mut lexer = Lexer::new(input);
  let mut builder = Builder::new();
  loop {
    let token = lexer.next_token();
    tracing::trace!(?token);
    match token {
      Token::OpenBrace => builder.open(),
      Token::CloseBrace => builder.close(),
      Token::LineBreak => builder.line_break(),
      Token::Str(s) => builder.strings.push(s.to_owned()),
      Token::End => return builder.finish(),
    }
  }
}

struct Builder {
  strings: Vec<String>,
  levels: Vec<Node>,
  current: Node,
  result_depth: Option<usize>,
}

impl Builder {
  fn new() -> Builder {
    Builder {
      strings: Vec::new(),
      levels: Vec::new(),
      current: Node::root(Vec::new()),
      result_depth: None,
    }
  }

  fn open(&mut self) {
    let key = self.strings.pop().unwrap_or_else(|| {
      tracing::debug!(depth = self.levels.len(), "block without a key");
      String::new()
    });
    let parent = mem::replace(&mut self.current, Node::block(key, Vec::new()));
    self.levels.push(parent);
  }

  fn close(&mut self) {
    match self.levels.pop() {
      Some(parent) => {
        let closed = mem::replace(&mut self.current, parent);
        self.current.push(closed);
        self.result_depth = Some(self.levels.len());
      }
      None => tracing::debug!("unmatched closing brace ignored"),
    }
  }

  fn line_break(&mut self) {
    if self.strings.len() > 1 {
      let value = self.strings.pop().unwrap_or_default();
      let key = self.strings.pop().unwrap_or_default();
      self.current.push(Node::leaf(key, value));
    }
  }

  fn finish(mut self) -> Node {
    let depth = self.result_depth.unwrap_or(0);
    if self.levels.len() > depth {
      tracing::debug!(open = self.levels.len() - depth, "unclosed blocks at end of input");
    }
    while self.levels.len() > depth {
      if let Some(parent) = self.levels.pop() {
        let closed = mem::replace(&mut self.current, parent);
        self.current.push(closed);
      }
    }
    if !self.strings.is_empty() {
      tracing::debug!(pending = self.strings.len(), "unpaired strings dropped");
    }
    self.current
  }
}
