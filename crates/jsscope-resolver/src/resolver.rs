//! Resolver - assigns a binding mark to every identifier in a tree.
//!
//! Resolution is two-level. Entering a program or function scope runs a
//! [`Hoister`] over that scope's statements first, so `var` and function
//! declarations are visible from the top of the function. The main pass then
//! walks the tree in source order: block-like constructs open nested scopes,
//! block-level `let`/`const`/`class` and parameter/catch-parameter
//! declarations are bound at their declaration point, and every identifier
//! read or written is looked up through the scope chain.
//!
//! The walk is a set of explicit `match`-based functions returning
//! `Result`; a structural error anywhere aborts the run.

use crate::error::{BindingConflict, ResolveError};
use crate::hoister::Hoister;
use crate::options::ResolverOptions;
use crate::resolution::Resolution;
use crate::scope::{DeclKind, Declaration, ScopeId, ScopeKind, ScopeTree, Symbol};
use jsscope_ast::{
    ArrowExpr, AssignTarget, BlockStmtOrExpr, Class, ClassMember, Expr, ForHead, ForInit,
    Function, Ident, MemberProp, ObjectPatProp, Pat, Program, Prop, PropName, Stmt, SwitchStmt,
    TryStmt, VarDecl, VisitMut, has_use_strict_directive,
};
use jsscope_common::limits::{BLOCK_CHAIN_INLINE, MAX_SCOPE_DEPTH};
use jsscope_common::{Mark, MarkAllocator};
use smallvec::SmallVec;
use tracing::{debug, trace};

type ResolveResult = Result<(), ResolveError>;

/// Single-use resolver. Each run owns a fresh mark allocator and scope
/// arena; [`Resolver::resolve_program`] consumes it.
pub struct Resolver {
    options: ResolverOptions,
    marks: MarkAllocator,
    scopes: ScopeTree,
    current: ScopeId,
    depth: usize,
    /// Strictness of the code being walked.
    strict: bool,
    conflicts: Vec<BindingConflict>,
    references: usize,
    unresolved: usize,
}

impl Resolver {
    pub fn new(options: ResolverOptions) -> Self {
        Resolver {
            options,
            marks: MarkAllocator::new(),
            scopes: ScopeTree::new(),
            current: ScopeId::NONE,
            depth: 0,
            strict: options.strict,
            conflicts: Vec::new(),
            references: 0,
            unresolved: 0,
        }
    }

    /// Resolve `program` in place.
    ///
    /// On success every identifier in the tree carries a mark: either the
    /// mark of the binding it refers to or [`Mark::UNRESOLVED`]. On error the
    /// tree may be partially marked and must not be used.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.body.len()))]
    pub fn resolve_program(mut self, program: &mut Program) -> Result<Resolution, ResolveError> {
        self.strict = self.options.strict || has_use_strict_directive(&program.body);

        let mark = self.marks.allocate();
        self.current = self.scopes.push(ScopeKind::Program, ScopeId::NONE, mark);
        self.depth = 1;
        debug!(scope = %self.current, %mark, strict = self.strict, "enter program scope");

        self.hoist(&mut program.body)?;
        self.resolve_stmts(&mut program.body)?;

        let resolution = Resolution {
            scopes: self.scopes,
            conflicts: self.conflicts,
            marks_issued: self.marks.issued(),
            references: self.references,
            unresolved: self.unresolved,
        };
        debug!(summary = %resolution.summary(), "resolved program");
        Ok(resolution)
    }

    // =========================================================================
    // Scope operations shared with the hoister
    // =========================================================================

    /// Declare `ident` in the current scope and write the binding's mark
    /// onto it. A mark already present on the node is kept.
    pub(crate) fn modify(&mut self, ident: &mut Ident, kind: DeclKind) {
        let scope = self.current;
        let declaration = self.scopes[scope].declare(&ident.sym, kind);
        trace!(name = %ident.sym, %kind, mark = %declaration.mark(), %scope, "declare");
        self.record_conflict(scope, &ident.sym, kind, declaration);

        if ident.mark.is_none() {
            ident.mark = Some(declaration.mark());
        }
    }

    /// Mark of the nearest binding of `name` visible from the current scope.
    pub(crate) fn lookup_context(&self, name: &str) -> Mark {
        self.scopes.lookup(self.current, name)
    }

    /// Number of scopes currently open.
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Binding of `name` in the current scope only.
    pub(crate) fn find_own(&self, name: &str) -> Option<&Symbol> {
        self.scopes.find_own(self.current, name)
    }

    fn record_conflict(
        &mut self,
        scope: ScopeId,
        name: &str,
        redeclared: DeclKind,
        declaration: Declaration,
    ) {
        if let Declaration::Conflict { existing, .. } = declaration {
            let conflict = BindingConflict {
                name: name.to_string(),
                existing,
                redeclared,
                scope,
            };
            debug!(%conflict, "binding conflict");
            self.conflicts.push(conflict);
        }
    }

    /// Run `f` inside a fresh scope of `kind`. The previous scope and
    /// strictness are restored whether `f` succeeds or fails.
    fn with_scope<F>(&mut self, kind: ScopeKind, f: F) -> ResolveResult
    where
        F: FnOnce(&mut Self) -> ResolveResult,
    {
        if self.depth >= MAX_SCOPE_DEPTH {
            return Err(ResolveError::ScopeDepthExceeded {
                limit: MAX_SCOPE_DEPTH,
            });
        }

        let parent = self.current;
        let mark = self.marks.allocate();
        let id = self.scopes.push(kind, parent, mark);
        let _span = tracing::debug_span!("scope", id = %id, ?kind, %mark).entered();
        debug!(%parent, "enter scope");

        let strict = self.strict;
        self.current = id;
        self.depth += 1;

        let result = f(self);

        self.depth -= 1;
        self.current = parent;
        self.strict = strict;
        debug!(scope = %id, "exit scope");
        result
    }

    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(scope = %self.current, strict = self.strict)
    )]
    fn hoist(&mut self, stmts: &mut Vec<Stmt>) -> ResolveResult {
        let hoist_block_functions = self.options.annex_b && !self.strict;
        let mut hoister = Hoister::new(self, hoist_block_functions);
        hoister.visit_mut_stmts(stmts);
        hoister.finish()
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    fn resolve_ident(&mut self, ident: &mut Ident) {
        if ident.is_marked() {
            return;
        }

        let mark = self.lookup_context(&ident.sym);
        trace!(name = %ident.sym, %mark, scope = %self.current, "lookup");
        self.references += 1;
        if mark.is_unresolved() {
            self.unresolved += 1;
        }
        ident.mark = Some(mark);
    }

    /// Bind a declared name at its declaration point.
    fn bind_ident(&mut self, ident: &mut Ident, kind: DeclKind) {
        match (kind, ident.mark) {
            (DeclKind::Var, Some(hoisted)) => self.alias_hoisted(&ident.sym, hoisted),
            // Left to the catch parameter by the hoister.
            (DeclKind::Var, None) => self.resolve_ident(ident),
            // Already registered at function level by the hoister.
            (_, Some(_)) => {}
            (_, None) => self.modify(ident, kind),
        }
    }

    /// Make a hoisted `var` visible in every block-level scope between the
    /// declaration and its function scope, so that lexical declarations of
    /// the same name in those scopes are reported as conflicts.
    fn alias_hoisted(&mut self, name: &str, hoisted: Mark) {
        let function_scope = self.scopes.nearest_function_scope(self.current);
        let chain: SmallVec<[ScopeId; BLOCK_CHAIN_INLINE]> = self
            .scopes
            .ancestors(self.current)
            .map(|(id, _)| id)
            .take_while(|id| Some(*id) != function_scope)
            .collect();

        for scope in chain {
            let declaration = self.scopes[scope].declare_alias(name, DeclKind::Var, hoisted);
            self.record_conflict(scope, name, DeclKind::Var, declaration);
        }
    }

    /// Function declarations in a block are instantiated on block entry:
    /// hoisted ones become aliases of their function-scope binding, the rest
    /// are block-local.
    fn declare_block_functions(&mut self, stmts: &mut [Stmt]) {
        for stmt in stmts.iter_mut() {
            let Stmt::Fn(decl) = stmt else {
                continue;
            };
            match decl.ident.mark {
                Some(hoisted) => {
                    let scope = self.current;
                    let name = &decl.ident.sym;
                    let declaration =
                        self.scopes[scope].declare_alias(name, DeclKind::Function, hoisted);
                    self.record_conflict(scope, name, DeclKind::Function, declaration);
                }
                None => self.modify(&mut decl.ident, DeclKind::Function),
            }
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn resolve_stmts(&mut self, stmts: &mut [Stmt]) -> ResolveResult {
        for stmt in stmts {
            self.resolve_stmt(stmt)?;
        }
        Ok(())
    }

    fn resolve_block_body(&mut self, stmts: &mut [Stmt]) -> ResolveResult {
        self.declare_block_functions(stmts);
        self.resolve_stmts(stmts)
    }

    fn resolve_stmt(&mut self, stmt: &mut Stmt) -> ResolveResult {
        match stmt {
            Stmt::Block(block) => {
                self.with_scope(ScopeKind::Block, |this| this.resolve_block_body(&mut block.stmts))
            }
            Stmt::Empty | Stmt::Debugger | Stmt::Break(_) | Stmt::Continue(_) => Ok(()),
            Stmt::Expr(s) => self.resolve_expr(&mut s.expr),
            Stmt::If(s) => {
                self.resolve_expr(&mut s.test)?;
                self.resolve_stmt(&mut s.cons)?;
                if let Some(alt) = &mut s.alt {
                    self.resolve_stmt(alt)?;
                }
                Ok(())
            }
            Stmt::While(s) => {
                self.resolve_expr(&mut s.test)?;
                self.resolve_stmt(&mut s.body)
            }
            Stmt::DoWhile(s) => {
                self.resolve_stmt(&mut s.body)?;
                self.resolve_expr(&mut s.test)
            }
            Stmt::For(s) => self.with_scope(ScopeKind::Block, |this| {
                match &mut s.init {
                    Some(ForInit::Var(decl)) => this.resolve_var_decl(decl)?,
                    Some(ForInit::Expr(init)) => this.resolve_expr(init)?,
                    None => {}
                }
                if let Some(test) = &mut s.test {
                    this.resolve_expr(test)?;
                }
                if let Some(update) = &mut s.update {
                    this.resolve_expr(update)?;
                }
                this.resolve_stmt(&mut s.body)
            }),
            Stmt::ForIn(s) => self.with_scope(ScopeKind::Block, |this| {
                this.resolve_for_head(&mut s.left)?;
                this.resolve_expr(&mut s.right)?;
                this.resolve_stmt(&mut s.body)
            }),
            Stmt::ForOf(s) => self.with_scope(ScopeKind::Block, |this| {
                this.resolve_for_head(&mut s.left)?;
                this.resolve_expr(&mut s.right)?;
                this.resolve_stmt(&mut s.body)
            }),
            Stmt::Labeled(s) => self.resolve_stmt(&mut s.body),
            Stmt::Return(s) => match &mut s.arg {
                Some(arg) => self.resolve_expr(arg),
                None => Ok(()),
            },
            Stmt::Throw(s) => self.resolve_expr(&mut s.arg),
            Stmt::Try(s) => self.resolve_try(s),
            Stmt::Switch(s) => self.resolve_switch(s),
            Stmt::With(s) => {
                self.resolve_expr(&mut s.object)?;
                self.resolve_stmt(&mut s.body)
            }
            Stmt::Var(decl) => self.resolve_var_decl(decl),
            Stmt::Fn(decl) => {
                if !decl.ident.is_marked() {
                    self.modify(&mut decl.ident, DeclKind::Function);
                }
                self.resolve_function(&mut decl.function)
            }
            Stmt::Class(decl) => {
                self.bind_ident(&mut decl.ident, DeclKind::Class);
                self.resolve_class(&mut decl.class, None)
            }
            Stmt::Invalid(invalid) => Err(ResolveError::InvalidStatement {
                message: invalid.message.clone(),
            }),
        }
    }

    fn resolve_var_decl(&mut self, decl: &mut VarDecl) -> ResolveResult {
        let kind = DeclKind::from(decl.kind);
        for declarator in &mut decl.decls {
            self.declare_pat(&mut declarator.name, kind, "variable declaration")?;
            self.resolve_pat_exprs(&mut declarator.name)?;
            if let Some(init) = &mut declarator.init {
                self.resolve_expr(init)?;
            }
        }
        Ok(())
    }

    fn resolve_for_head(&mut self, head: &mut ForHead) -> ResolveResult {
        match head {
            ForHead::Var(decl) => self.resolve_var_decl(decl),
            ForHead::Pat(pat) => self.resolve_assign_pat(pat),
        }
    }

    fn resolve_try(&mut self, n: &mut TryStmt) -> ResolveResult {
        self.with_scope(ScopeKind::Block, |this| {
            this.resolve_block_body(&mut n.block.stmts)
        })?;

        if let Some(handler) = &mut n.handler {
            // The parameter and the body's own declarations share one scope.
            self.with_scope(ScopeKind::Catch, |this| {
                if let Some(param) = &mut handler.param {
                    this.declare_pat(param, DeclKind::CatchParam, "catch clause")?;
                    this.resolve_pat_exprs(param)?;
                }
                this.resolve_block_body(&mut handler.body.stmts)
            })?;
        }

        if let Some(finalizer) = &mut n.finalizer {
            self.with_scope(ScopeKind::Block, |this| {
                this.resolve_block_body(&mut finalizer.stmts)
            })?;
        }
        Ok(())
    }

    fn resolve_switch(&mut self, n: &mut SwitchStmt) -> ResolveResult {
        self.resolve_expr(&mut n.discriminant)?;

        // All case clauses share one lexical environment.
        self.with_scope(ScopeKind::Switch, |this| {
            for case in &mut n.cases {
                this.declare_block_functions(&mut case.cons);
            }
            for case in &mut n.cases {
                if let Some(test) = &mut case.test {
                    this.resolve_expr(test)?;
                }
                this.resolve_stmts(&mut case.cons)?;
            }
            Ok(())
        })
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    fn resolve_params(&mut self, params: &mut [Pat]) -> ResolveResult {
        for param in params.iter_mut() {
            self.declare_pat(param, DeclKind::Param, "parameter list")?;
        }
        for param in params.iter_mut() {
            self.resolve_pat_exprs(param)?;
        }
        Ok(())
    }

    fn resolve_function(&mut self, function: &mut Function) -> ResolveResult {
        self.with_scope(ScopeKind::Function, |this| {
            if has_use_strict_directive(&function.body.stmts) {
                this.strict = true;
            }
            this.resolve_params(&mut function.params)?;
            this.hoist(&mut function.body.stmts)?;
            this.resolve_stmts(&mut function.body.stmts)
        })
    }

    fn resolve_arrow(&mut self, arrow: &mut ArrowExpr) -> ResolveResult {
        self.with_scope(ScopeKind::Function, |this| {
            this.resolve_params(&mut arrow.params)?;
            match &mut arrow.body {
                BlockStmtOrExpr::BlockStmt(body) => {
                    if has_use_strict_directive(&body.stmts) {
                        this.strict = true;
                    }
                    this.hoist(&mut body.stmts)?;
                    this.resolve_stmts(&mut body.stmts)
                }
                BlockStmtOrExpr::Expr(expr) => this.resolve_expr(expr),
            }
        })
    }

    /// Class bodies are strict code. A class expression's own name is only
    /// visible inside the class.
    fn resolve_class(&mut self, class: &mut Class, name: Option<&mut Ident>) -> ResolveResult {
        self.with_scope(ScopeKind::Block, |this| {
            this.strict = true;
            if let Some(name) = name {
                this.modify(name, DeclKind::Class);
            }
            if let Some(super_class) = &mut class.super_class {
                this.resolve_expr(super_class)?;
            }
            for member in &mut class.body {
                this.resolve_class_member(member)?;
            }
            Ok(())
        })
    }

    fn resolve_class_member(&mut self, member: &mut ClassMember) -> ResolveResult {
        match member {
            ClassMember::Method(method) => {
                self.resolve_prop_name(&mut method.key)?;
                self.resolve_function(&mut method.function)
            }
            ClassMember::Prop(prop) => {
                self.resolve_prop_name(&mut prop.key)?;
                match &mut prop.value {
                    Some(value) => self.resolve_expr(value),
                    None => Ok(()),
                }
            }
            // Static blocks are var scopes of their own.
            ClassMember::StaticBlock(block) => self.with_scope(ScopeKind::Function, |this| {
                this.hoist(&mut block.body.stmts)?;
                this.resolve_stmts(&mut block.body.stmts)
            }),
            ClassMember::Empty => Ok(()),
        }
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    /// Bind every name `pat` declares. Default values are left to
    /// [`Resolver::resolve_pat_exprs`].
    fn declare_pat(
        &mut self,
        pat: &mut Pat,
        kind: DeclKind,
        context: &'static str,
    ) -> ResolveResult {
        match pat {
            Pat::Ident(binding) => {
                self.bind_ident(&mut binding.id, kind);
                Ok(())
            }
            Pat::Array(array) => {
                for elem in array.elems.iter_mut().flatten() {
                    self.declare_pat(elem, kind, context)?;
                }
                Ok(())
            }
            Pat::Object(object) => {
                for prop in &mut object.props {
                    match prop {
                        ObjectPatProp::KeyValue(kv) => {
                            self.declare_pat(&mut kv.value, kind, context)?;
                        }
                        ObjectPatProp::Assign(assign) => self.bind_ident(&mut assign.key.id, kind),
                        ObjectPatProp::Rest(rest) => {
                            self.declare_pat(&mut rest.arg, kind, context)?;
                        }
                    }
                }
                Ok(())
            }
            Pat::Assign(assign) => self.declare_pat(&mut assign.left, kind, context),
            Pat::Rest(rest) => self.declare_pat(&mut rest.arg, kind, context),
            Pat::Expr(_) => Err(ResolveError::ExpressionInBindingPosition { context }),
            Pat::Invalid(invalid) => Err(ResolveError::InvalidPattern {
                message: invalid.message.clone(),
            }),
        }
    }

    /// Resolve default values and computed keys inside a binding pattern.
    fn resolve_pat_exprs(&mut self, pat: &mut Pat) -> ResolveResult {
        match pat {
            Pat::Ident(_) | Pat::Expr(_) | Pat::Invalid(_) => Ok(()),
            Pat::Array(array) => {
                for elem in array.elems.iter_mut().flatten() {
                    self.resolve_pat_exprs(elem)?;
                }
                Ok(())
            }
            Pat::Object(object) => {
                for prop in &mut object.props {
                    match prop {
                        ObjectPatProp::KeyValue(kv) => {
                            self.resolve_prop_name(&mut kv.key)?;
                            self.resolve_pat_exprs(&mut kv.value)?;
                        }
                        ObjectPatProp::Assign(assign) => {
                            if let Some(value) = &mut assign.value {
                                self.resolve_expr(value)?;
                            }
                        }
                        ObjectPatProp::Rest(rest) => self.resolve_pat_exprs(&mut rest.arg)?,
                    }
                }
                Ok(())
            }
            Pat::Assign(assign) => {
                self.resolve_pat_exprs(&mut assign.left)?;
                self.resolve_expr(&mut assign.right)
            }
            Pat::Rest(rest) => self.resolve_pat_exprs(&mut rest.arg),
        }
    }

    /// Destructuring assignment target: every leaf is a reference.
    fn resolve_assign_pat(&mut self, pat: &mut Pat) -> ResolveResult {
        match pat {
            Pat::Ident(binding) => {
                self.resolve_ident(&mut binding.id);
                Ok(())
            }
            Pat::Array(array) => {
                for elem in array.elems.iter_mut().flatten() {
                    self.resolve_assign_pat(elem)?;
                }
                Ok(())
            }
            Pat::Object(object) => {
                for prop in &mut object.props {
                    match prop {
                        ObjectPatProp::KeyValue(kv) => {
                            self.resolve_prop_name(&mut kv.key)?;
                            self.resolve_assign_pat(&mut kv.value)?;
                        }
                        ObjectPatProp::Assign(assign) => {
                            self.resolve_ident(&mut assign.key.id);
                            if let Some(value) = &mut assign.value {
                                self.resolve_expr(value)?;
                            }
                        }
                        ObjectPatProp::Rest(rest) => self.resolve_assign_pat(&mut rest.arg)?,
                    }
                }
                Ok(())
            }
            Pat::Assign(assign) => {
                self.resolve_assign_pat(&mut assign.left)?;
                self.resolve_expr(&mut assign.right)
            }
            Pat::Rest(rest) => self.resolve_assign_pat(&mut rest.arg),
            Pat::Expr(expr) => self.resolve_expr(expr),
            Pat::Invalid(invalid) => Err(ResolveError::InvalidPattern {
                message: invalid.message.clone(),
            }),
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn resolve_exprs(&mut self, exprs: &mut [Expr]) -> ResolveResult {
        for expr in exprs {
            self.resolve_expr(expr)?;
        }
        Ok(())
    }

    fn resolve_prop_name(&mut self, key: &mut PropName) -> ResolveResult {
        match key {
            PropName::Computed(computed) => self.resolve_expr(&mut computed.expr),
            PropName::Ident(_) | PropName::Lit(_) | PropName::Private(_) => Ok(()),
        }
    }

    fn resolve_prop(&mut self, prop: &mut Prop) -> ResolveResult {
        match prop {
            Prop::KeyValue(kv) => {
                self.resolve_prop_name(&mut kv.key)?;
                self.resolve_expr(&mut kv.value)
            }
            Prop::Shorthand(ident) => {
                self.resolve_ident(ident);
                Ok(())
            }
            Prop::Method(method) => {
                self.resolve_prop_name(&mut method.key)?;
                self.resolve_function(&mut method.function)
            }
            Prop::Spread(spread) => self.resolve_expr(&mut spread.expr),
        }
    }

    fn resolve_expr(&mut self, expr: &mut Expr) -> ResolveResult {
        match expr {
            Expr::Ident(ident) => {
                self.resolve_ident(ident);
                Ok(())
            }
            Expr::Lit(_) | Expr::This | Expr::Super | Expr::MetaProp(_) => Ok(()),
            Expr::Tpl(tpl) => self.resolve_exprs(&mut tpl.exprs),
            Expr::TaggedTpl(tagged) => {
                self.resolve_expr(&mut tagged.tag)?;
                self.resolve_exprs(&mut tagged.tpl.exprs)
            }
            Expr::Array(array) => {
                for elem in array.elems.iter_mut().flatten() {
                    self.resolve_expr(elem)?;
                }
                Ok(())
            }
            Expr::Object(object) => {
                for prop in &mut object.props {
                    self.resolve_prop(prop)?;
                }
                Ok(())
            }
            Expr::Fn(fn_expr) => match &mut fn_expr.ident {
                // The name of a function expression is bound only inside it.
                Some(ident) => self.with_scope(ScopeKind::Block, |this| {
                    this.modify(ident, DeclKind::Function);
                    this.resolve_function(&mut fn_expr.function)
                }),
                None => self.resolve_function(&mut fn_expr.function),
            },
            Expr::Arrow(arrow) => self.resolve_arrow(arrow),
            Expr::Class(class_expr) => {
                self.resolve_class(&mut class_expr.class, class_expr.ident.as_mut())
            }
            Expr::Unary(unary) => self.resolve_expr(&mut unary.arg),
            Expr::Update(update) => self.resolve_expr(&mut update.arg),
            Expr::Bin(bin) => {
                self.resolve_expr(&mut bin.left)?;
                self.resolve_expr(&mut bin.right)
            }
            Expr::Assign(assign) => {
                match &mut assign.left {
                    AssignTarget::Simple(target) => self.resolve_expr(target)?,
                    AssignTarget::Pat(pat) => self.resolve_assign_pat(pat)?,
                }
                self.resolve_expr(&mut assign.right)
            }
            Expr::Cond(cond) => {
                self.resolve_expr(&mut cond.test)?;
                self.resolve_expr(&mut cond.cons)?;
                self.resolve_expr(&mut cond.alt)
            }
            Expr::Call(call) => {
                self.resolve_expr(&mut call.callee)?;
                self.resolve_exprs(&mut call.args)
            }
            Expr::New(new) => {
                self.resolve_expr(&mut new.callee)?;
                match &mut new.args {
                    Some(args) => self.resolve_exprs(args),
                    None => Ok(()),
                }
            }
            Expr::Member(member) => {
                self.resolve_expr(&mut member.obj)?;
                match &mut member.prop {
                    MemberProp::Computed(computed) => self.resolve_expr(&mut computed.expr),
                    MemberProp::Ident(_) | MemberProp::Private(_) => Ok(()),
                }
            }
            Expr::Seq(seq) => self.resolve_exprs(&mut seq.exprs),
            Expr::Spread(spread) => self.resolve_expr(&mut spread.expr),
            Expr::Yield(yield_expr) => match &mut yield_expr.arg {
                Some(arg) => self.resolve_expr(arg),
                None => Ok(()),
            },
            Expr::Await(await_expr) => self.resolve_expr(&mut await_expr.arg),
            Expr::Paren(paren) => self.resolve_expr(&mut paren.expr),
            Expr::Invalid(invalid) => Err(ResolveError::InvalidExpression {
                message: invalid.message.clone(),
            }),
        }
    }
}
