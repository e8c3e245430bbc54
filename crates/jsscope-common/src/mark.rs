//! Binding marks.
//!
//! A [`Mark`] is an opaque, totally ordered tag. Every scope created during a
//! resolution run receives a fresh mark, and an identifier is bound to a
//! declaration by carrying the same `(name, mark)` pair. [`Mark::UNRESOLVED`]
//! is the reserved value for references with no enclosing declaration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque binding context.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mark(u32);

impl Mark {
    /// Sentinel for "no enclosing declaration found". Never returned by
    /// [`MarkAllocator::allocate`].
    pub const UNRESOLVED: Mark = Mark(0);

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_unresolved(self) -> bool {
        self.0 == Self::UNRESOLVED.0
    }
}

impl fmt::Debug for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unresolved() {
            f.write_str("Mark(unresolved)")
        } else {
            write!(f, "Mark({})", self.0)
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues fresh marks for one resolution run.
///
/// Marks from different allocators are not comparable; each run owns its own
/// allocator.
#[derive(Debug, Default)]
pub struct MarkAllocator {
    last: u32,
}

impl MarkAllocator {
    pub const fn new() -> Self {
        MarkAllocator { last: 0 }
    }

    /// Return a mark strictly greater than every mark issued before.
    ///
    /// # Panics
    ///
    /// Panics after `u32::MAX` allocations rather than reissuing
    /// [`Mark::UNRESOLVED`].
    pub fn allocate(&mut self) -> Mark {
        let Some(next) = self.last.checked_add(1) else {
            panic!("mark allocator exhausted after {} marks", u32::MAX);
        };
        self.last = next;
        Mark(next)
    }

    /// Number of marks issued so far.
    pub const fn issued(&self) -> u32 {
        self.last
    }
}
