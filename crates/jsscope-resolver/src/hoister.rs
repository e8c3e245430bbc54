//! Var and function hoisting.
//!
//! One [`Hoister`] run happens per function-level scope (program, function
//! body, class static block), before the resolver's main pass enters that
//! scope's statements. It registers every `var` and function declaration
//! reachable without crossing into a nested function, so that references
//! anywhere in the function see them.
//!
//! Declarations directly in the function body (not nested in a block) are
//! registered with their own kind, `let`, `const` and `class` included, and
//! before any nested block is entered. Inside blocks only `var` and, under
//! the Annex B rules, function declarations are hoisted.
//!
//! The hoister nests block scopes the same way the main pass does and stops
//! descending at [`MAX_SCOPE_DEPTH`]; [`Hoister::finish`] reports the
//! overflow.

use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::scope::DeclKind;
use jsscope_ast::{
    BindingIdent, BlockStmt, CatchClause, ClassDecl, Expr, FnDecl, ForHead, ForInStmt, ForOfStmt,
    ForStmt, Function, Ident, PropName, Stmt, SwitchStmt, VarDecl, VarDeclarator, VarKind,
    VisitMut, VisitMutWith,
};
use jsscope_common::limits::MAX_SCOPE_DEPTH;
use rustc_hash::FxHashSet;
use std::mem;
use tracing::trace;

pub(crate) struct Hoister<'r> {
    resolver: &'r mut Resolver,
    /// Kind applied to the binding identifiers currently being walked.
    kind: DeclKind,
    /// Inside a block, switch body or loop relative to the function root.
    in_block: bool,
    in_catch_body: bool,
    /// Whether block-nested function declarations may be hoisted at all.
    /// False in strict code and when Annex B is disabled.
    hoist_block_functions: bool,
    /// Names bound by the innermost enclosing catch parameter.
    catch_param_decls: FxHashSet<String>,
    /// Catch-parameter names whose `var` redeclaration was hoisted as an
    /// independent function-scope binding.
    excluded_from_catch: FxHashSet<String>,
    /// Open block-level scopes, on top of the resolver's own depth.
    depth: usize,
    overflowed: bool,
}

impl<'r> Hoister<'r> {
    pub(crate) fn new(resolver: &'r mut Resolver, hoist_block_functions: bool) -> Self {
        Hoister {
            resolver,
            kind: DeclKind::Var,
            in_block: false,
            in_catch_body: false,
            hoist_block_functions,
            catch_param_decls: FxHashSet::default(),
            excluded_from_catch: FxHashSet::default(),
            depth: 0,
            overflowed: false,
        }
    }

    pub(crate) fn finish(self) -> Result<(), ResolveError> {
        if self.overflowed {
            return Err(ResolveError::ScopeDepthExceeded {
                limit: MAX_SCOPE_DEPTH,
            });
        }
        Ok(())
    }

    fn add_ident(&mut self, id: &mut Ident) {
        if self.in_catch_body && self.catch_param_decls.contains(&id.sym) {
            // `catch (e) { var e; }` names the catch parameter unless `e` is
            // already bound from the function scope.
            if !self.excluded_from_catch.contains(&id.sym)
                && self.resolver.lookup_context(&id.sym).is_unresolved()
            {
                trace!(name = %id.sym, "var merges with catch parameter");
                return;
            }
            self.excluded_from_catch.insert(id.sym.clone());
        }

        self.resolver.modify(id, self.kind);
    }

    fn in_block_scope(&mut self, f: impl FnOnce(&mut Self)) {
        if self.overflowed || self.resolver.depth() + self.depth >= MAX_SCOPE_DEPTH {
            self.overflowed = true;
            return;
        }

        let old = mem::replace(&mut self.in_block, true);
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self.in_block = old;
    }
}

/// Statements that bind a name in the scope they appear in, visited before
/// the rest so nested blocks see them.
fn declares_in_place(stmt: &Stmt) -> bool {
    stmt.is_hoistable_decl() || matches!(stmt, Stmt::Class(_))
}

impl VisitMut for Hoister<'_> {
    fn visit_mut_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        for stmt in stmts.iter_mut().filter(|stmt| declares_in_place(stmt)) {
            stmt.visit_mut_with(self);
        }
        for stmt in stmts.iter_mut().filter(|stmt| !declares_in_place(stmt)) {
            stmt.visit_mut_with(self);
        }
    }

    fn visit_mut_block_stmt(&mut self, n: &mut BlockStmt) {
        self.in_block_scope(|h| n.visit_mut_children_with(h));
    }

    fn visit_mut_var_decl(&mut self, n: &mut VarDecl) {
        if self.in_block && n.kind != VarKind::Var {
            return;
        }

        let old_kind = mem::replace(&mut self.kind, DeclKind::from(n.kind));
        n.visit_mut_children_with(self);
        self.kind = old_kind;
    }

    fn visit_mut_var_declarator(&mut self, n: &mut VarDeclarator) {
        n.name.visit_mut_with(self);
    }

    fn visit_mut_binding_ident(&mut self, n: &mut BindingIdent) {
        self.add_ident(&mut n.id);
    }

    fn visit_mut_fn_decl(&mut self, n: &mut FnDecl) {
        let name = &n.ident.sym;
        if self.catch_param_decls.contains(name) {
            trace!(%name, "function declaration shadows catch parameter, not hoisted");
            return;
        }

        if self.in_block {
            if !self.hoist_block_functions {
                return;
            }
            if let Some(symbol) = self.resolver.find_own(name)
                && !symbol.kind.is_var_like()
            {
                trace!(%name, existing = %symbol.kind, "block function stays block-scoped");
                return;
            }
        }

        self.resolver.modify(&mut n.ident, DeclKind::Function);
    }

    fn visit_mut_switch_stmt(&mut self, n: &mut SwitchStmt) {
        n.discriminant.visit_mut_with(self);
        self.in_block_scope(|h| n.cases.visit_mut_with(h));
    }

    fn visit_mut_catch_clause(&mut self, n: &mut CatchClause) {
        let mut names = FxHashSet::default();
        if let Some(param) = &n.param {
            param.for_each_binding_ident(&mut |id| {
                names.insert(id.sym.clone());
            });
        }

        let old_params = mem::replace(&mut self.catch_param_decls, names);
        let old_in_catch = mem::replace(&mut self.in_catch_body, true);
        n.body.visit_mut_with(self);
        self.in_catch_body = old_in_catch;
        self.catch_param_decls = old_params;
    }

    // Loop heads open their own scope.

    fn visit_mut_for_stmt(&mut self, n: &mut ForStmt) {
        self.in_block_scope(|h| n.visit_mut_children_with(h));
    }

    fn visit_mut_for_in_stmt(&mut self, n: &mut ForInStmt) {
        self.in_block_scope(|h| n.visit_mut_children_with(h));
    }

    fn visit_mut_for_of_stmt(&mut self, n: &mut ForOfStmt) {
        self.in_block_scope(|h| n.visit_mut_children_with(h));
    }

    fn visit_mut_for_head(&mut self, n: &mut ForHead) {
        // `for (x of xs)` assigns to an existing binding.
        if let ForHead::Var(decl) = n {
            decl.visit_mut_with(self);
        }
    }

    // Function boundaries and everything that only holds expressions.

    fn visit_mut_expr(&mut self, _: &mut Expr) {}

    fn visit_mut_function(&mut self, _: &mut Function) {}

    fn visit_mut_class_decl(&mut self, n: &mut ClassDecl) {
        if !self.in_block {
            self.resolver.modify(&mut n.ident, DeclKind::Class);
        }
    }

    fn visit_mut_prop_name(&mut self, _: &mut PropName) {}
}
