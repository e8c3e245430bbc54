//! jsscope - scope resolution for JavaScript syntax trees.
//!
//! Given a tree from a parser front end, jsscope decides for every
//! identifier which declaration it refers to, following JavaScript's
//! hoisting and block-scoping rules, and records the answer as a binding
//! mark on the identifier node.
//!
//! - [`ast`] - Syntax tree, visitor and node factory
//! - [`resolver`] - Scope table, hoister and resolver
//! - [`common`] - Marks, diagnostics and limits
//!
//! ```
//! use jsscope::ast::factory::*;
//! use jsscope::{ResolverOptions, resolve};
//!
//! // var x; x;
//! let mut tree = program(vec![var_decl("x"), expr_stmt(ident_expr("x"))]);
//! let resolution = resolve(&mut tree, ResolverOptions::default()).unwrap();
//! assert!(!resolution.has_conflicts());
//! ```

pub use jsscope_ast as ast;
pub use jsscope_common as common;
pub use jsscope_resolver as resolver;

pub use jsscope_common::{Diagnostic, Mark};
pub use jsscope_resolver::{
    BindingConflict, DeclKind, Resolution, ResolutionStats, ResolveError, Resolver,
    ResolverOptions, ScopeId, ScopeKind, resolve,
};

// Subscriber set-up for JSSCOPE_LOG / JSSCOPE_LOG_FORMAT
pub mod tracing_config;

use jsscope_ast::Program;
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

/// Resolve independent programs in parallel.
///
/// Every program gets its own resolver and mark allocator, so marks from
/// different results are not comparable. Results are in input order.
#[tracing::instrument(level = "debug", skip_all, fields(programs = programs.len()))]
pub fn resolve_many(
    programs: &mut [Program],
    options: ResolverOptions,
) -> Vec<Result<Resolution, ResolveError>> {
    programs
        .par_iter_mut()
        .map(|program| resolve(program, options))
        .collect()
}
