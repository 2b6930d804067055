//! The owned child sequence of a list value.

use std::mem;
use std::slice;
use std::vec;

use plisp_stack::ensure_sufficient_stack;

use super::Value;

/// Ordered children of an s-expression or q-expression.
///
/// `Cells` owns every child. Moving a child out (`remove`, `take`) hands
/// ownership to the caller; `join` moves the children of one sequence into
/// another. These are the only ways children leave a list, so a value is
/// never reachable from two parents.
///
/// Nesting depth is bounded only by memory. `Drop` releases descendants
/// from a work list instead of recursing, and `Clone`/`PartialEq` grow the
/// stack as they descend.
#[derive(Debug, Default)]
pub struct Cells(Vec<Value>);

impl Cells {
    pub fn new() -> Self {
        Cells(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Append a child, taking ownership of it.
    #[inline]
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    /// Remove the child at `index` and return it, shifting later children
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Value {
        self.0.remove(index)
    }

    /// Remove the child at `index` and drop the rest, container included.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn take(mut self, index: usize) -> Value {
        self.0.swap_remove(index)
    }

    /// Move every child of `other` to the end of `self`, in order.
    pub fn join(&mut self, mut other: Cells) {
        self.0.append(&mut other.0);
    }

    /// Drop the last child, if any.
    pub fn truncate_last(&mut self) {
        self.0.pop();
    }

    /// Keep only the first `len` children.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }
}

impl Clone for Cells {
    fn clone(&self) -> Self {
        Cells(
            self.0
                .iter()
                .map(|child| ensure_sufficient_stack(|| child.clone()))
                .collect(),
        )
    }
}

impl PartialEq for Cells {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(lhs, rhs)| ensure_sufficient_stack(|| lhs == rhs))
    }
}

impl Drop for Cells {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.0);
        while let Some(mut child) = pending.pop() {
            // Detach grandchildren first so `child` drops as a leaf.
            if let Some(cells) = child.cells_mut() {
                pending.append(&mut cells.0);
            }
        }
    }
}

impl From<Vec<Value>> for Cells {
    fn from(values: Vec<Value>) -> Self {
        Cells(values)
    }
}

impl FromIterator<Value> for Cells {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Cells(iter.into_iter().collect())
    }
}

impl IntoIterator for Cells {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(mut self) -> Self::IntoIter {
        mem::take(&mut self.0).into_iter()
    }
}

impl<'a> IntoIterator for &'a Cells {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
