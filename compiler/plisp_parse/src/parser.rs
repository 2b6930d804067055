//! Recursive-descent parser over the token stream.
//!
//! Produces the generic tree described in [`crate::tags`]: the root holds a
//! start marker, every top-level expression, and an end marker; list nodes
//! keep their bracket characters as `char` children around the nested
//! expressions.

use plisp_stack::ensure_sufficient_stack;

use crate::lexer::{lex, RawToken, Token};
use crate::node::{tags, ParseNode};
use crate::ParseError;

/// Parse a whole program into a tree rooted at a [`tags::ROOT`] node.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        source,
        tokens: &tokens,
        pos: 0,
    };

    let mut children = vec![ParseNode::leaf(tags::REGEX, "")];
    while let Some(token) = parser.peek() {
        if let Some(found) = closing(token.kind) {
            return Err(ParseError::UnexpectedDelimiter {
                found,
                offset: token.span.start,
            });
        }
        children.push(parser.expr()?);
    }
    children.push(ParseNode::leaf(tags::REGEX, ""));

    tracing::trace!(expressions = children.len() - 2, "parsed program");
    Ok(ParseNode::branch(tags::ROOT, children))
}

/// The closing bracket character, if `kind` is one.
fn closing(kind: RawToken) -> Option<char> {
    match kind {
        RawToken::RParen | RawToken::RBrace => kind.delimiter(),
        _ => None,
    }
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn slice(&self, token: &Token) -> &str {
        &self.source[token.span.clone()]
    }

    /// Parse one expression. The caller has checked that a token remains and
    /// that it is not a closing bracket.
    fn expr(&mut self) -> Result<ParseNode, ParseError> {
        let Some(token) = self.next().cloned() else {
            return Err(ParseError::UnclosedDelimiter {
                open: '(',
                offset: self.source.len(),
            });
        };

        match token.kind {
            RawToken::Number => Ok(ParseNode::leaf(tags::NUMBER, self.slice(&token))),
            RawToken::Symbol => Ok(ParseNode::leaf(tags::SYMBOL, self.slice(&token))),
            RawToken::LParen => ensure_sufficient_stack(|| self.list(&token, tags::SEXPR, '(', ')')),
            RawToken::LBrace => ensure_sufficient_stack(|| self.list(&token, tags::QEXPR, '{', '}')),
            RawToken::RParen | RawToken::RBrace => Err(ParseError::UnexpectedDelimiter {
                found: token.kind.delimiter().unwrap_or(')'),
                offset: token.span.start,
            }),
        }
    }

    /// Parse the remainder of a list whose opening bracket was `open_token`.
    fn list(
        &mut self,
        open_token: &Token,
        tag: &str,
        open: char,
        close: char,
    ) -> Result<ParseNode, ParseError> {
        let mut children = vec![ParseNode::leaf(tags::CHAR, open.to_string())];

        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::UnclosedDelimiter {
                    open,
                    offset: open_token.span.start,
                });
            };

            if let Some(found) = closing(token.kind) {
                if found != close {
                    return Err(ParseError::MismatchedDelimiter {
                        open,
                        expected: close,
                        found,
                        offset: token.span.start,
                    });
                }
                self.pos += 1;
                children.push(ParseNode::leaf(tags::CHAR, close.to_string()));
                return Ok(ParseNode::branch(tag, children));
            }

            children.push(self.expr()?);
        }
    }
}
