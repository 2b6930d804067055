//! Tokenizer.
//!
//! `RawToken` is the logos-derived token set. Whitespace is skipped.
//!
//! A number is tried before a symbol at every position: `-5` is a number,
//! `-` is a symbol, and `1-2` is the number `1` followed by the number `-2`.
//! A symbol token whose text starts with digits is therefore split after
//! its numeric prefix and lexing resumes from there.

use std::ops::Range;

use logos::Logos;

use crate::ParseError;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+\.?[0-9]*", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&%]+")]
    Symbol,
}

impl RawToken {
    /// The bracket character, for delimiter tokens.
    pub(crate) fn delimiter(self) -> Option<char> {
        match self {
            RawToken::LParen => Some('('),
            RawToken::RParen => Some(')'),
            RawToken::LBrace => Some('{'),
            RawToken::RBrace => Some('}'),
            RawToken::Number | RawToken::Symbol => None,
        }
    }
}

/// A token with its source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: RawToken,
    pub span: Range<usize>,
}

/// Split `source` into tokens, failing on the first character no token
/// pattern accepts.
pub(crate) fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut start = 0;

    'restart: loop {
        let mut logos = RawToken::lexer(&source[start..]);

        while let Some(token_result) = logos.next() {
            let span = logos.span().start + start..logos.span().end + start;
            match token_result {
                Ok(RawToken::Symbol) => {
                    if let Some(len) = numeric_prefix(logos.slice()) {
                        let end = span.start + len;
                        tokens.push(Token {
                            kind: RawToken::Number,
                            span: span.start..end,
                        });
                        start = end;
                        continue 'restart;
                    }
                    tokens.push(Token {
                        kind: RawToken::Symbol,
                        span,
                    });
                }
                Ok(kind) => tokens.push(Token { kind, span }),
                Err(()) => {
                    let ch = logos.slice().chars().next().unwrap_or('\0');
                    return Err(ParseError::UnexpectedChar {
                        ch,
                        offset: span.start,
                    });
                }
            }
        }

        return Ok(tokens);
    }
}

/// Length of the `-?[0-9]+` prefix of a symbol's text, if it has one.
///
/// Symbol text never contains `.`, so the integer form is the whole number
/// pattern here.
fn numeric_prefix(text: &str) -> Option<usize> {
    let sign = usize::from(text.starts_with('-'));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then_some(sign + digits)
}
