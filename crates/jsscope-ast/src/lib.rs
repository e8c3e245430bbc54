//! JavaScript syntax tree for the jsscope resolver.
//!
//! The tree is a closed set of tagged unions (`Stmt`, `Expr`, `Pat`, ...)
//! owned top-down from [`Program`]. Identifier nodes ([`Ident`]) carry a
//! mutable mark slot that the resolver fills in place.
//!
//! - [`visit`] - `VisitMut` / `VisitMutWith` double dispatch, generated from the node list
//! - [`factory`] - Helpers for building trees programmatically

pub mod expr;
pub mod function;
pub mod ident;
pub mod lit;
pub mod pat;
pub mod stmt;

pub mod factory;
pub mod visit;

pub use expr::*;
pub use function::*;
pub use ident::{BindingIdent, Ident, IdentName};
pub use lit::Lit;
pub use pat::*;
pub use stmt::*;
pub use visit::{VisitMut, VisitMutWith};

pub use jsscope_common::Mark;
