//! Output of a resolution run.

use crate::error::BindingConflict;
use crate::scope::{ScopeId, ScopeTree};
use jsscope_common::{Diagnostic, Mark};
use serde::Serialize;

/// Everything a run produces besides the marks written into the tree.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Every scope opened during the run; the program scope is the root.
    pub scopes: ScopeTree,
    /// Redeclaration conflicts in discovery order.
    pub conflicts: Vec<BindingConflict>,
    /// Number of marks the run allocated (one per scope).
    pub marks_issued: u32,
    pub(crate) references: usize,
    pub(crate) unresolved: usize,
}

/// Counters for one resolution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionStats {
    pub scopes: usize,
    /// Bindings declared, not counting block-level aliases of hoisted ones.
    pub symbols: usize,
    /// Identifier references resolved by lookup.
    pub references: usize,
    /// References that found no binding.
    pub unresolved: usize,
}

impl Resolution {
    pub fn root(&self) -> ScopeId {
        if self.scopes.is_empty() {
            ScopeId::NONE
        } else {
            ScopeId(0)
        }
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.conflicts.iter().map(Diagnostic::from).collect()
    }

    /// The scope that owns `mark`. Marks are issued one per scope.
    pub fn scope_of_mark(&self, mark: Mark) -> Option<ScopeId> {
        if mark.is_unresolved() {
            return None;
        }
        self.scopes
            .iter()
            .find(|(_, scope)| scope.mark == mark)
            .map(|(id, _)| id)
    }

    pub fn stats(&self) -> ResolutionStats {
        ResolutionStats {
            scopes: self.scopes.len(),
            symbols: self.scopes.symbol_count(),
            references: self.references,
            unresolved: self.unresolved,
        }
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        let stats = self.stats();
        format!(
            "{} scopes, {} symbols, {} references ({} unresolved), {} conflicts",
            stats.scopes,
            stats.symbols,
            stats.references,
            stats.unresolved,
            self.conflicts.len()
        )
    }
}
