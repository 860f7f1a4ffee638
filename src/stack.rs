//! Stack growth for the recursive walks over a tree.
//!
//! Reading, writing and converting recurse once per compound or list level,
//! and a tree [`MAX_DEPTH`][crate::MAX_DEPTH] levels deep is more than a
//! default thread stack holds in a debug build. Each level runs through
//! [`ensure_sufficient_stack`], which moves onto a fresh heap-allocated stack
//! segment when the current one is close to running out.

/// Left free below each level before it starts.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new segment.
const STACK_PER_SEGMENT: usize = 1024 * 1024;

/// Nesting that `serde_json` handles on any thread; its own parser stops at
/// 128 levels by default.
const SHALLOW_JSON: usize = 128;

/// Generous for one level of `serde_json` parsing or printing in a debug
/// build.
const STACK_PER_JSON_LEVEL: usize = 8 * 1024;

pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_SEGMENT, f)
}

/// For `serde_json`'s own recursion over a document `nesting` levels deep
/// (parsing, printing and dropping it), which can't be split per level.
/// Deep documents run on a stack sized for them.
pub(crate) fn ensure_json_stack<R>(nesting: usize, f: impl FnOnce() -> R) -> R {
    if nesting <= SHALLOW_JSON {
        return f();
    }
    stacker::grow(STACK_PER_SEGMENT + nesting * STACK_PER_JSON_LEVEL, f)
}
