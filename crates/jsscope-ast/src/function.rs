//! Functions, arrows and classes.

use crate::{BlockStmt, Expr, IdentName, Lit, Pat};
use serde::{Deserialize, Serialize};

/// Parameters and body shared by function declarations, function
/// expressions, methods and accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub params: Vec<Pat>,
    pub body: BlockStmt,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub is_generator: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowExpr {
    pub params: Vec<Pat>,
    pub body: BlockStmtOrExpr,
    #[serde(default)]
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockStmtOrExpr {
    BlockStmt(BlockStmt),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub super_class: Option<Box<Expr>>,
    pub body: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassMember {
    Method(ClassMethod),
    Prop(ClassProp),
    StaticBlock(StaticBlock),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    Method,
    Getter,
    Setter,
    Constructor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMethod {
    pub key: PropName,
    pub kind: MethodKind,
    #[serde(default)]
    pub is_static: bool,
    pub function: Box<Function>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProp {
    pub key: PropName,
    #[serde(default)]
    pub is_static: bool,
    pub value: Option<Box<Expr>>,
}

/// `static { ... }` - its own var scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticBlock {
    pub body: BlockStmt,
}

/// Property key in object literals, object patterns and class bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropName {
    Ident(IdentName),
    Lit(Lit),
    Computed(ComputedPropName),
    /// `#name` in class bodies.
    Private(IdentName),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedPropName {
    pub expr: Box<Expr>,
}
