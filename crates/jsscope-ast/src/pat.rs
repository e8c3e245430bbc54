//! Binding targets.

use crate::{BindingIdent, Expr, Ident, Invalid, PropName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pat {
    Ident(BindingIdent),
    Array(ArrayPat),
    Object(ObjectPat),
    /// Target with a default value: `a = 1` inside a pattern or parameter list.
    Assign(AssignPat),
    Rest(RestPat),
    /// Member expression target. Only valid in assignment patterns.
    Expr(Box<Expr>),
    Invalid(Invalid),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayPat {
    /// `None` marks an elision: `[, b]`.
    pub elems: Vec<Option<Pat>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPat {
    pub props: Vec<ObjectPatProp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectPatProp {
    /// `{ key: target }`
    KeyValue(KeyValuePatProp),
    /// `{ a }` or `{ a = 1 }`
    Assign(AssignPatProp),
    /// `{ ...rest }`
    Rest(RestPat),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePatProp {
    pub key: PropName,
    pub value: Box<Pat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignPatProp {
    pub key: BindingIdent,
    pub value: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignPat {
    pub left: Box<Pat>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestPat {
    pub arg: Box<Pat>,
}

impl Pat {
    /// Call `f` for every identifier this target binds, left to right.
    /// Default-value expressions and member targets are not entered.
    pub fn for_each_binding_ident<'a>(&'a self, f: &mut impl FnMut(&'a Ident)) {
        match self {
            Pat::Ident(b) => f(&b.id),
            Pat::Array(arr) => {
                for elem in arr.elems.iter().flatten() {
                    elem.for_each_binding_ident(f);
                }
            }
            Pat::Object(obj) => {
                for prop in &obj.props {
                    match prop {
                        ObjectPatProp::KeyValue(kv) => kv.value.for_each_binding_ident(f),
                        ObjectPatProp::Assign(a) => f(&a.key.id),
                        ObjectPatProp::Rest(r) => r.arg.for_each_binding_ident(f),
                    }
                }
            }
            Pat::Assign(a) => a.left.for_each_binding_ident(f),
            Pat::Rest(r) => r.arg.for_each_binding_ident(f),
            Pat::Expr(_) | Pat::Invalid(_) => {}
        }
    }
}
