//! Scope resolution for jsscope syntax trees.
//!
//! This crate binds every identifier in a [`Program`] to the declaration it
//! refers to:
//! - Scope and symbol table (`ScopeTree`, `Scope`, `Symbol`, `DeclKind`)
//! - Var/function hoisting with the Annex B catch and block-function rules
//! - The resolver pass that writes binding marks into the tree
//! - Binding conflicts and fatal structural errors

// Scope arena, symbols and the redeclaration policy
pub mod scope;
pub use scope::{
    DeclKind, Declaration, FxIndexMap, Redeclaration, Scope, ScopeId, ScopeKind, ScopeTree, Symbol,
};

// Resolver configuration
pub mod options;
pub use options::ResolverOptions;

// Fatal errors and collected conflicts
pub mod error;
pub use error::{BindingConflict, ResolveError};

// Result of a run
pub mod resolution;
pub use resolution::{Resolution, ResolutionStats};

// Per-function pre-pass
mod hoister;

// Main pass
pub mod resolver;
pub use resolver::Resolver;

use jsscope_ast::Program;

/// Resolve `program` in place with a fresh resolver.
pub fn resolve(
    program: &mut Program,
    options: ResolverOptions,
) -> Result<Resolution, ResolveError> {
    Resolver::new(options).resolve_program(program)
}
