//! Stack safety for deep recursion.
//!
//! The reader, the parser and the evaluator all recurse once per level of
//! list nesting. Wrapping each recursive step in [`ensure_sufficient_stack`]
//! lets `((((...))))` nested thousands of levels deep run on a stack that
//! grows on demand instead of overflowing the main thread's stack.
//!
//! Growth is unbounded on its own, so callers that can recurse without a
//! syntactic bound (the evaluator, through `eval`) also enforce a depth limit.

/// Stay this far away from the end of the current stack segment (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if less than the red zone
/// remains on the current one.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; just call `f`.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
