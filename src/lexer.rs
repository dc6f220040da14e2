use nom::{
  branch::alt,
  bytes::complete::{is_not, take_till},
  character::complete::{anychar, char},
  combinator::recognize,
  multi::many0_count,
  sequence::{delimited, pair},
  IResult,
};

type Result<'a, O> = IResult<&'a str, O>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
  OpenBrace,
  CloseBrace,
  LineBreak,
  Str(&'a str),
  End,
}

/// Splits VDF text into tokens, one per call to [`Lexer::next_token`].
pub struct Lexer<'a> {
  rest: &'a str,
}

impl<'a> Lexer<'a> {
  pub fn new(input: &'a str) -> Lexer<'a> {
    Lexer { rest: input }
  }

  /// Returns the next token. Once the input is exhausted every call returns [`Token::End`].
  pub fn next_token(&mut self) -> Token<'a> {
    loop {
      let mut chars = self.rest.chars();
      let c = match chars.next() {
        Some(c) => c,
        None => return Token::End,
      };
      match c {
        '{' | '}' | '\r' | '\n' => {
          self.rest = chars.as_str();
          return match c {
            '{' => Token::OpenBrace,
            '}' => Token::CloseBrace,
            _ => Token::LineBreak,
          };
        }
        '"' => match quoted()(self.rest) {
          Ok((rest, text)) => {
            self.rest = rest;
            return Token::Str(text);
          }
          Err(_) => {
            tracing::debug!(len = self.rest.len(), "unterminated string at end of input");
            self.rest = "";
            return Token::End;
          }
        },
        '/' => {
          // the line break ending the comment is left for the next call
          self.rest = comment()(self.rest).map_or("", |(rest, _)| rest);
        }
        _ => self.rest = chars.as_str(),
      }
    }
  }
}

/// A double-quoted string. Escapes are kept as written, so `\"` yields the two characters `\"`.
fn quoted() -> impl Fn(&str) -> Result<&str> {
  |input| {
    delimited(
      char('"'),
      recognize(many0_count(alt((
        is_not("\\\""),
        recognize(pair(char('\\'), anychar)),
      )))),
      char('"'),
    )(input)
  }
}

fn comment() -> impl Fn(&str) -> Result<&str> {
  |input| take_till(|c: char| c == '\r' || c == '\n')(input)
}
