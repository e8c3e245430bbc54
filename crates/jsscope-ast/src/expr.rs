//! Expressions.

use crate::{
    ArrowExpr, Class, ComputedPropName, Function, Ident, IdentName, Invalid, Lit, MethodKind, Pat,
    PropName,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Ident(Ident),
    Lit(Lit),
    Tpl(Tpl),
    TaggedTpl(TaggedTpl),
    Array(ArrayLit),
    Object(ObjectLit),
    Fn(FnExpr),
    Arrow(ArrowExpr),
    Class(ClassExpr),
    Unary(UnaryExpr),
    Update(UpdateExpr),
    Bin(BinExpr),
    Assign(AssignExpr),
    Cond(CondExpr),
    Call(CallExpr),
    New(NewExpr),
    Member(MemberExpr),
    Seq(SeqExpr),
    Spread(SpreadElement),
    Yield(YieldExpr),
    Await(AwaitExpr),
    Paren(ParenExpr),
    This,
    Super,
    MetaProp(MetaPropExpr),
    Invalid(Invalid),
}

/// Template literal; `quasis.len() == exprs.len() + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tpl {
    pub quasis: Vec<String>,
    pub exprs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedTpl {
    pub tag: Box<Expr>,
    pub tpl: Tpl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLit {
    /// `None` marks an elision: `[a, , b]`.
    pub elems: Vec<Option<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLit {
    pub props: Vec<Prop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Prop {
    KeyValue(KeyValueProp),
    /// `{ a }` - `a` is a reference.
    Shorthand(Ident),
    Method(MethodProp),
    Spread(SpreadElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueProp {
    pub key: PropName,
    pub value: Box<Expr>,
}

/// Method, getter or setter in an object literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodProp {
    pub key: PropName,
    pub kind: MethodKind,
    pub function: Box<Function>,
}

/// Function literal. A present `ident` is visible only inside the function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FnExpr {
    pub ident: Option<Ident>,
    pub function: Box<Function>,
}

/// Class literal. A present `ident` is visible only inside the class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassExpr {
    pub ident: Option<Ident>,
    pub class: Box<Class>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Minus,
    Plus,
    Bang,
    Tilde,
    TypeOf,
    Void,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOp {
    PlusPlus,
    MinusMinus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpr {
    pub op: UpdateOp,
    pub prefix: bool,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    LShift,
    RShift,
    ZeroFillRShift,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    BitOr,
    BitXor,
    BitAnd,
    LogicalOr,
    LogicalAnd,
    NullishCoalescing,
    In,
    InstanceOf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ExpAssign,
    LShiftAssign,
    RShiftAssign,
    ZeroFillRShiftAssign,
    BitOrAssign,
    BitXorAssign,
    BitAndAssign,
    AndAssign,
    OrAssign,
    NullishAssign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExpr {
    pub op: AssignOp,
    pub left: AssignTarget,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssignTarget {
    /// Identifier or member expression.
    Simple(Box<Expr>),
    /// Destructuring assignment: `[a, b] = pair`.
    Pat(Box<Pat>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondExpr {
    pub test: Box<Expr>,
    pub cons: Box<Expr>,
    pub alt: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    /// `Expr::Super` for `super(...)`.
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpr {
    pub callee: Box<Expr>,
    /// `None` for `new Foo` without an argument list.
    pub args: Option<Vec<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpr {
    pub obj: Box<Expr>,
    pub prop: MemberProp,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberProp {
    Ident(IdentName),
    Private(IdentName),
    Computed(ComputedPropName),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeqExpr {
    pub exprs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadElement {
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldExpr {
    pub arg: Option<Box<Expr>>,
    #[serde(default)]
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwaitExpr {
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaPropKind {
    NewTarget,
    ImportMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaPropExpr {
    pub kind: MetaPropKind,
}
