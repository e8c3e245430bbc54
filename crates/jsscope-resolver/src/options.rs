use serde::{Deserialize, Serialize};

/// Configuration options for the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Apply the legacy web-compatibility rule that hoists function
    /// declarations nested in blocks to the enclosing function scope.
    /// Never applies to strict code.
    pub annex_b: bool,
    /// Treat the whole program as strict code, as if it began with a
    /// `"use strict"` directive.
    pub strict: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            annex_b: true,
            strict: false,
        }
    }
}

impl ResolverOptions {
    pub fn strict() -> Self {
        ResolverOptions {
            strict: true,
            ..Self::default()
        }
    }
}
