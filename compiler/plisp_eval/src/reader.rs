//! Reader: generic parse tree to `Value`.

use plisp_parse::{tags, ParseNode};
use plisp_stack::ensure_sufficient_stack;
use plisp_value::{invalid_number, Cells, Value};

/// A parse node the reader has no rule for.
///
/// Trees from `plisp_parse` never contain one; this guards hand-built or
/// foreign trees.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("cannot read parse node tagged '{tag}'")]
    UnknownNode { tag: String },
}

/// Build an owned `Value` tree from a parse tree.
///
/// Numbers and symbols become atoms; the root and `sexpr` nodes become
/// s-expressions, `qexpr` nodes q-expressions. Bracket characters and the
/// root's start/end markers are skipped. A numeric literal that does not
/// fit an `f64` becomes an `Error` value in place, so the rest of the tree
/// still reads.
pub fn read(node: &ParseNode) -> Result<Value, ReadError> {
    let tag = node.tag();

    if tag.contains("number") {
        return Ok(read_number(node.contents()));
    }
    if tag.contains("symbol") {
        return Ok(Value::symbol(node.contents()));
    }

    let quoted = if tag == tags::ROOT || tag.contains("sexpr") {
        false
    } else if tag.contains("qexpr") {
        true
    } else {
        return Err(ReadError::UnknownNode {
            tag: tag.to_string(),
        });
    };

    let mut cells = Cells::new();
    for child in node.children().iter().filter(|child| !is_punctuation(child)) {
        cells.push(ensure_sufficient_stack(|| read(child))?);
    }

    Ok(if quoted {
        Value::QExpr(cells)
    } else {
        Value::SExpr(cells)
    })
}

fn is_punctuation(node: &ParseNode) -> bool {
    matches!(node.contents(), "(" | ")" | "{" | "}") || node.tag() == tags::REGEX
}

fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && !underflowed(n, text) => Value::number(n),
        _ => Value::from(invalid_number(text)),
    }
}

/// A literal with a non-zero digit that still parsed to zero.
fn underflowed(n: f64, text: &str) -> bool {
    n == 0.0 && text.bytes().any(|b| matches!(b, b'1'..=b'9'))
}
