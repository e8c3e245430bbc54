//! Centralized limits and thresholds.
//!
//! The resolver walks the tree recursively, so nesting depth translates
//! directly into stack depth.

/// Maximum number of simultaneously open scopes during one resolution run.
///
/// Every block, function, catch clause, switch body and loop head opens a
/// scope. A run that nests deeper than this aborts with a fatal error instead
/// of risking a stack overflow.
///
/// ```javascript
/// // 1000+ nested blocks or closures:
/// { { { { /* ... */ } } } }
/// ```
pub const MAX_SCOPE_DEPTH: usize = 1_000;

/// Expected number of block-level scopes between a hoisted `var` and the
/// function scope it belongs to.
///
/// Used as the inline capacity when the resolver collects that chain; deeper
/// chains spill to the heap.
pub const BLOCK_CHAIN_INLINE: usize = 4;
