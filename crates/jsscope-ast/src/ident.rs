//! Identifier nodes.

use jsscope_common::Mark;
use serde::{Deserialize, Serialize};

/// An identifier that participates in scope resolution, either as a
/// reference or as the name introduced by a declaration.
///
/// `mark` is `None` until the resolver visits the node; afterwards it holds
/// either [`Mark::UNRESOLVED`] or the mark of the binding it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub sym: String,
    #[serde(default)]
    pub mark: Option<Mark>,
}

impl Ident {
    pub fn new(sym: impl Into<String>) -> Self {
        Ident {
            sym: sym.into(),
            mark: None,
        }
    }

    #[inline]
    pub fn is_marked(&self) -> bool {
        self.mark.is_some()
    }

    /// `(name, mark)` pair identifying the binding this node refers to.
    pub fn to_id(&self) -> (String, Option<Mark>) {
        (self.sym.clone(), self.mark)
    }
}

/// A name that is never a binding: property keys, member properties,
/// labels, private names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentName {
    pub sym: String,
}

impl IdentName {
    pub fn new(sym: impl Into<String>) -> Self {
        IdentName { sym: sym.into() }
    }
}

/// An identifier in binding position (declaration target or assignment
/// pattern leaf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingIdent {
    pub id: Ident,
}

impl From<Ident> for BindingIdent {
    fn from(id: Ident) -> Self {
        BindingIdent { id }
    }
}
