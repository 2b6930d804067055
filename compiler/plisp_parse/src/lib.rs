//! Plisp Parse - source text to generic parse tree.
//!
//! The output is deliberately untyped: every node is a tag, the literal text
//! it matched, and its children. Consumers classify nodes by tag, so the
//! tree carries the grammar's punctuation (brackets, start/end markers)
//! along with the expressions.
//!
//! # Grammar
//!
//! ```text
//! number  : /-?[0-9]+[.]?[0-9]*/
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&%]+/
//! sexpr   : '(' <expr>* ')'
//! qexpr   : '{' <expr>* '}'
//! expr    : <number> | <symbol> | <sexpr> | <qexpr>
//! program : /^/ <expr>* /$/
//! ```

mod error;
mod lexer;
mod node;
mod parser;

pub use error::ParseError;
pub use node::{tags, ParseNode};
pub use parser::parse;

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// Offsets past the end of `source` map to the position just after the last
/// character.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (pos, c) in source.char_indices() {
        if pos >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
