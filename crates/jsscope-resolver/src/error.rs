//! Resolver errors and binding conflicts.

use crate::scope::{DeclKind, ScopeId};
use jsscope_common::{Diagnostic, diagnostic_codes};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Fatal errors. The tree does not have the expected shape, so no part of
/// the resolution can be trusted and the run is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid statement in input tree: {message}")]
    InvalidStatement { message: String },

    #[error("invalid expression in input tree: {message}")]
    InvalidExpression { message: String },

    #[error("invalid binding pattern in input tree: {message}")]
    InvalidPattern { message: String },

    #[error("expression used as a binding target in {context}")]
    ExpressionInBindingPosition { context: &'static str },

    #[error("scopes nested deeper than {limit}")]
    ScopeDepthExceeded { limit: usize },
}

/// A declaration that collides with an existing binding in the same scope.
///
/// Conflicts are collected rather than raised: the colliding declaration is
/// still bound (to the existing symbol) so the tree stays fully marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingConflict {
    pub name: String,
    pub existing: DeclKind,
    pub redeclared: DeclKind,
    pub scope: ScopeId,
}

impl BindingConflict {
    /// Whether either side is a `let`, `const` or `class` binding.
    pub fn is_lexical(&self) -> bool {
        self.existing.is_lexical() || self.redeclared.is_lexical()
    }

    pub fn code(&self) -> u32 {
        if self.is_lexical() {
            diagnostic_codes::CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE
        } else {
            diagnostic_codes::DUPLICATE_IDENTIFIER
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.code();
        Diagnostic::from_code(code, &[self.name.as_str()])
            .unwrap_or_else(|| Diagnostic::error(self.to_string(), code))
    }
}

impl fmt::Display for BindingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' conflicts with existing {} in {}",
            self.redeclared, self.name, self.existing, self.scope
        )
    }
}

impl From<&BindingConflict> for Diagnostic {
    fn from(conflict: &BindingConflict) -> Self {
        conflict.to_diagnostic()
    }
}
