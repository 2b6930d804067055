//! Generic parse tree.

use std::mem;

use plisp_stack::ensure_sufficient_stack;

/// Tags attached to parse nodes.
///
/// Tags are `|`-separated rule paths, so consumers match on substrings
/// (`number`, `symbol`, `sexpr`, `qexpr`) rather than whole tags. The root
/// is tagged `>`.
pub mod tags {
    pub const ROOT: &str = ">";
    pub const NUMBER: &str = "expr|number|regex";
    pub const SYMBOL: &str = "expr|symbol|regex";
    pub const SEXPR: &str = "expr|sexpr|>";
    pub const QEXPR: &str = "expr|qexpr|>";
    /// A single bracket character.
    pub const CHAR: &str = "char";
    /// Start/end-of-input markers around the root's expressions.
    pub const REGEX: &str = "regex";
}

/// One node of a parse tree: a tag, the literal text it matched, and its
/// children in source order.
///
/// Dropping a tree walks it with a work list, so nesting depth is bounded
/// by memory rather than by the native stack.
#[derive(Debug)]
pub struct ParseNode {
    tag: String,
    contents: String,
    children: Vec<ParseNode>,
}

impl ParseNode {
    /// A node with no children.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        ParseNode {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// A node with children and no literal text.
    pub fn branch(tag: impl Into<String>, children: Vec<ParseNode>) -> Self {
        ParseNode {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// Render the tree one node per line, indented by depth.
    pub fn dump(&self) -> String {
        fn walk(node: &ParseNode, depth: usize, out: &mut String) {
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(&node.tag);
            if !node.contents.is_empty() {
                out.push_str(" '");
                out.push_str(&node.contents);
                out.push('\'');
            }
            out.push('\n');
            for child in &node.children {
                ensure_sufficient_stack(|| walk(child, depth + 1, out));
            }
        }

        let mut out = String::new();
        walk(self, 0, &mut out);
        out
    }
}

impl Clone for ParseNode {
    fn clone(&self) -> Self {
        ParseNode {
            tag: self.tag.clone(),
            contents: self.contents.clone(),
            children: self
                .children
                .iter()
                .map(|child| ensure_sufficient_stack(|| child.clone()))
                .collect(),
        }
    }
}

impl PartialEq for ParseNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.contents == other.contents
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(lhs, rhs)| ensure_sufficient_stack(|| lhs == rhs))
    }
}

impl Eq for ParseNode {}

impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
