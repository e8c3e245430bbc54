//! Node construction helpers.
//!
//! Every identifier produced here starts with an unset mark. Trees built
//! with these helpers are what the resolver tests and benchmarks feed in,
//! in place of a parser front end.

use crate::*;

// =============================================================================
// Identifiers and literals
// =============================================================================

pub fn ident(sym: &str) -> Ident {
    Ident::new(sym)
}

pub fn ident_expr(sym: &str) -> Expr {
    Expr::Ident(Ident::new(sym))
}

/// Simple binding target.
pub fn binding(sym: &str) -> Pat {
    Pat::Ident(BindingIdent::from(Ident::new(sym)))
}

pub fn num(value: f64) -> Expr {
    Expr::Lit(Lit::Num(value))
}

pub fn str_lit(value: &str) -> Expr {
    Expr::Lit(Lit::Str(value.to_string()))
}

pub fn prop_name(name: &str) -> PropName {
    PropName::Ident(IdentName::new(name))
}

// =============================================================================
// Statements
// =============================================================================

pub fn program(body: Vec<Stmt>) -> Program {
    Program { body }
}

pub fn block_stmt(stmts: Vec<Stmt>) -> BlockStmt {
    BlockStmt { stmts }
}

pub fn block(stmts: Vec<Stmt>) -> Stmt {
    Stmt::Block(block_stmt(stmts))
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(ExprStmt {
        expr: Box::new(expr),
    })
}

/// `"use strict";`
pub fn use_strict() -> Stmt {
    expr_stmt(str_lit("use strict"))
}

pub fn return_stmt(arg: Option<Expr>) -> Stmt {
    Stmt::Return(ReturnStmt {
        arg: arg.map(Box::new),
    })
}

pub fn throw_stmt(arg: Expr) -> Stmt {
    Stmt::Throw(ThrowStmt { arg: Box::new(arg) })
}

pub fn if_stmt(test: Expr, cons: Stmt, alt: Option<Stmt>) -> Stmt {
    Stmt::If(IfStmt {
        test: Box::new(test),
        cons: Box::new(cons),
        alt: alt.map(Box::new),
    })
}

pub fn while_stmt(test: Expr, body: Stmt) -> Stmt {
    Stmt::While(WhileStmt {
        test: Box::new(test),
        body: Box::new(body),
    })
}

pub fn labeled(label: &str, body: Stmt) -> Stmt {
    Stmt::Labeled(LabeledStmt {
        label: IdentName::new(label),
        body: Box::new(body),
    })
}

pub fn break_stmt(label: Option<&str>) -> Stmt {
    Stmt::Break(BreakStmt {
        label: label.map(IdentName::new),
    })
}

pub fn with_stmt(object: Expr, body: Stmt) -> Stmt {
    Stmt::With(WithStmt {
        object: Box::new(object),
        body: Box::new(body),
    })
}

// =============================================================================
// Declarations
// =============================================================================

pub fn declarator(name: Pat, init: Option<Expr>) -> VarDeclarator {
    VarDeclarator {
        name,
        init: init.map(Box::new),
    }
}

pub fn var_decl_with(kind: VarKind, decls: Vec<VarDeclarator>) -> VarDecl {
    VarDecl { kind, decls }
}

/// Single-declarator declaration with an arbitrary binding target.
pub fn decl(kind: VarKind, name: Pat, init: Option<Expr>) -> Stmt {
    Stmt::Var(var_decl_with(kind, vec![declarator(name, init)]))
}

/// `var name;`
pub fn var_decl(name: &str) -> Stmt {
    decl(VarKind::Var, binding(name), None)
}

/// `let name;`
pub fn let_decl(name: &str) -> Stmt {
    decl(VarKind::Let, binding(name), None)
}

/// `const name = init;`
pub fn const_decl(name: &str, init: Expr) -> Stmt {
    decl(VarKind::Const, binding(name), Some(init))
}

pub fn function(params: Vec<Pat>, body: Vec<Stmt>) -> Box<Function> {
    Box::new(Function {
        params,
        body: block_stmt(body),
        is_async: false,
        is_generator: false,
    })
}

pub fn fn_decl(name: &str, params: Vec<Pat>, body: Vec<Stmt>) -> Stmt {
    Stmt::Fn(FnDecl {
        ident: ident(name),
        function: function(params, body),
    })
}

pub fn class(super_class: Option<Expr>, body: Vec<ClassMember>) -> Box<Class> {
    Box::new(Class {
        super_class: super_class.map(Box::new),
        body,
    })
}

pub fn class_decl(name: &str, super_class: Option<Expr>, body: Vec<ClassMember>) -> Stmt {
    Stmt::Class(ClassDecl {
        ident: ident(name),
        class: class(super_class, body),
    })
}

pub fn method(key: PropName, params: Vec<Pat>, body: Vec<Stmt>) -> ClassMember {
    ClassMember::Method(ClassMethod {
        key,
        kind: MethodKind::Method,
        is_static: false,
        function: function(params, body),
    })
}

pub fn class_prop(key: PropName, value: Option<Expr>) -> ClassMember {
    ClassMember::Prop(ClassProp {
        key,
        is_static: false,
        value: value.map(Box::new),
    })
}

pub fn static_block(stmts: Vec<Stmt>) -> ClassMember {
    ClassMember::StaticBlock(StaticBlock {
        body: block_stmt(stmts),
    })
}

// =============================================================================
// Control flow with scopes
// =============================================================================

pub fn catch_clause(param: Option<Pat>, body: Vec<Stmt>) -> CatchClause {
    CatchClause {
        param,
        body: block_stmt(body),
    }
}

/// `try { block } catch (param) { handler }`
pub fn try_catch(block: Vec<Stmt>, param: Option<Pat>, handler: Vec<Stmt>) -> Stmt {
    Stmt::Try(TryStmt {
        block: block_stmt(block),
        handler: Some(catch_clause(param, handler)),
        finalizer: None,
    })
}

/// `try { block } finally { finalizer }`
pub fn try_finally(block: Vec<Stmt>, finalizer: Vec<Stmt>) -> Stmt {
    Stmt::Try(TryStmt {
        block: block_stmt(block),
        handler: None,
        finalizer: Some(block_stmt(finalizer)),
    })
}

pub fn case(test: Option<Expr>, cons: Vec<Stmt>) -> SwitchCase {
    SwitchCase {
        test: test.map(Box::new),
        cons,
    }
}

pub fn switch(discriminant: Expr, cases: Vec<SwitchCase>) -> Stmt {
    Stmt::Switch(SwitchStmt {
        discriminant: Box::new(discriminant),
        cases,
    })
}

pub fn for_stmt(
    init: Option<ForInit>,
    test: Option<Expr>,
    update: Option<Expr>,
    body: Stmt,
) -> Stmt {
    Stmt::For(ForStmt {
        init,
        test: test.map(Box::new),
        update: update.map(Box::new),
        body: Box::new(body),
    })
}

pub fn for_in(left: ForHead, right: Expr, body: Stmt) -> Stmt {
    Stmt::ForIn(ForInStmt {
        left,
        right: Box::new(right),
        body: Box::new(body),
    })
}

pub fn for_of(left: ForHead, right: Expr, body: Stmt) -> Stmt {
    Stmt::ForOf(ForOfStmt {
        is_await: false,
        left,
        right: Box::new(right),
        body: Box::new(body),
    })
}

/// Loop head declaring a single name: `for (let x of ...)`.
pub fn for_head(kind: VarKind, name: &str) -> ForHead {
    ForHead::Var(var_decl_with(kind, vec![declarator(binding(name), None)]))
}

// =============================================================================
// Expressions
// =============================================================================

pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
        callee: Box::new(callee),
        args,
        optional: false,
    })
}

pub fn member(obj: Expr, prop: &str) -> Expr {
    Expr::Member(MemberExpr {
        obj: Box::new(obj),
        prop: MemberProp::Ident(IdentName::new(prop)),
        optional: false,
    })
}

pub fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Bin(BinExpr {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `target = value` with an identifier or member target.
pub fn assign(target: Expr, value: Expr) -> Expr {
    Expr::Assign(AssignExpr {
        op: AssignOp::Assign,
        left: AssignTarget::Simple(Box::new(target)),
        right: Box::new(value),
    })
}

/// Destructuring assignment: `[a, b] = value`.
pub fn assign_pat(target: Pat, value: Expr) -> Expr {
    Expr::Assign(AssignExpr {
        op: AssignOp::Assign,
        left: AssignTarget::Pat(Box::new(target)),
        right: Box::new(value),
    })
}

pub fn fn_expr(name: Option<&str>, params: Vec<Pat>, body: Vec<Stmt>) -> Expr {
    Expr::Fn(FnExpr {
        ident: name.map(ident),
        function: function(params, body),
    })
}

pub fn arrow(params: Vec<Pat>, body: Vec<Stmt>) -> Expr {
    Expr::Arrow(ArrowExpr {
        params,
        body: BlockStmtOrExpr::BlockStmt(block_stmt(body)),
        is_async: false,
    })
}

/// Arrow with an expression body: `(params) => body`.
pub fn arrow_expr(params: Vec<Pat>, body: Expr) -> Expr {
    Expr::Arrow(ArrowExpr {
        params,
        body: BlockStmtOrExpr::Expr(Box::new(body)),
        is_async: false,
    })
}

pub fn class_expr(name: Option<&str>, super_class: Option<Expr>, body: Vec<ClassMember>) -> Expr {
    Expr::Class(ClassExpr {
        ident: name.map(ident),
        class: class(super_class, body),
    })
}

pub fn object(props: Vec<Prop>) -> Expr {
    Expr::Object(ObjectLit { props })
}

pub fn array(elems: Vec<Option<Expr>>) -> Expr {
    Expr::Array(ArrayLit { elems })
}

// =============================================================================
// Patterns
// =============================================================================

pub fn array_pat(elems: Vec<Option<Pat>>) -> Pat {
    Pat::Array(ArrayPat { elems })
}

pub fn object_pat(props: Vec<ObjectPatProp>) -> Pat {
    Pat::Object(ObjectPat { props })
}

/// `{ name }` inside an object pattern.
pub fn shorthand(name: &str) -> ObjectPatProp {
    ObjectPatProp::Assign(AssignPatProp {
        key: BindingIdent::from(ident(name)),
        value: None,
    })
}

/// `{ key: value }` inside an object pattern.
pub fn key_value_pat(key: &str, value: Pat) -> ObjectPatProp {
    ObjectPatProp::KeyValue(KeyValuePatProp {
        key: prop_name(key),
        value: Box::new(value),
    })
}

/// `left = right` as a binding target with a default value.
pub fn with_default(left: Pat, right: Expr) -> Pat {
    Pat::Assign(AssignPat {
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn rest(arg: Pat) -> Pat {
    Pat::Rest(RestPat { arg: Box::new(arg) })
}
