//! Statements and declarations.

use crate::{BindingIdent, Class, Expr, Function, Ident, IdentName, Lit, Pat};
use serde::{Deserialize, Serialize};

/// Root of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Block(BlockStmt),
    Empty,
    Expr(ExprStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    ForIn(ForInStmt),
    ForOf(ForOfStmt),
    Labeled(LabeledStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
    Throw(ThrowStmt),
    Try(TryStmt),
    Switch(SwitchStmt),
    With(WithStmt),
    Debugger,
    Var(VarDecl),
    Fn(FnDecl),
    Class(ClassDecl),
    /// Placeholder left by a front end that failed to produce a statement.
    Invalid(Invalid),
}

impl Stmt {
    /// `var`/`let`/`const` declarations and function declarations: the
    /// statements the hoister registers ahead of everything else.
    pub fn is_hoistable_decl(&self) -> bool {
        matches!(self, Stmt::Var(_) | Stmt::Fn(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub test: Box<Expr>,
    pub cons: Box<Stmt>,
    pub alt: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub test: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub test: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub test: Option<Box<Expr>>,
    pub update: Option<Box<Expr>>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForInit {
    Var(VarDecl),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForInStmt {
    pub left: ForHead,
    pub right: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForOfStmt {
    pub is_await: bool,
    pub left: ForHead,
    pub right: Box<Expr>,
    pub body: Box<Stmt>,
}

/// Left-hand side of `for-in` / `for-of`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForHead {
    Var(VarDecl),
    /// Assignment target, e.g. `for (x of xs)` or `for ([a, b] of pairs)`.
    Pat(Box<Pat>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStmt {
    pub label: IdentName,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStmt {
    pub label: Option<IdentName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueStmt {
    pub label: Option<IdentName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub arg: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStmt {
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryStmt {
    pub block: BlockStmt,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    /// `None` for optional catch binding: `catch { ... }`.
    pub param: Option<Pat>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    pub discriminant: Box<Expr>,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// `None` for `default:`.
    pub test: Option<Box<Expr>>,
    pub cons: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithStmt {
    pub object: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub kind: VarKind,
    pub decls: Vec<VarDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclarator {
    pub name: Pat,
    pub init: Option<Box<Expr>>,
}

impl VarDeclarator {
    /// Declared name when the target is a plain identifier.
    pub fn simple_name(&self) -> Option<&BindingIdent> {
        match &self.name {
            Pat::Ident(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FnDecl {
    pub ident: Ident,
    pub function: Box<Function>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub ident: Ident,
    pub class: Box<Class>,
}

/// Parse-error placeholder. The resolver refuses trees that contain one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invalid {
    pub message: String,
}

/// Whether a statement list starts with a `"use strict"` directive prologue.
pub fn has_use_strict_directive(stmts: &[Stmt]) -> bool {
    for stmt in stmts {
        let Stmt::Expr(ExprStmt { expr }) = stmt else {
            return false;
        };
        match expr.as_ref() {
            Expr::Lit(Lit::Str(value)) if value == "use strict" => return true,
            Expr::Lit(Lit::Str(_)) => continue,
            _ => return false,
        }
    }
    false
}
