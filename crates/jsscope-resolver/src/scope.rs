//! Scope and symbol table.
//!
//! Scopes live in an append-only arena ([`ScopeTree`]) and point at their
//! parent by [`ScopeId`]. A closed scope stays in the arena, so parent chains
//! remain walkable after the resolver has moved on.
//!
//! Every scope owns one [`Mark`]. A symbol declared in a scope carries that
//! scope's mark, except for alias symbols (see [`Symbol::alias`]), which
//! carry the mark of the hoisted binding they stand for.

use indexmap::IndexMap;
use jsscope_ast::VarKind;
use jsscope_common::Mark;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Insertion-ordered map with the Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// How a name was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    Var,
    Let,
    Const,
    Function,
    Param,
    Class,
    CatchParam,
}

impl DeclKind {
    /// `var` and function declarations: the kinds that merge with each other.
    #[inline]
    pub const fn is_var_like(self) -> bool {
        matches!(self, DeclKind::Var | DeclKind::Function)
    }

    /// `let`, `const` and `class`: the kinds that never tolerate a duplicate.
    #[inline]
    pub const fn is_lexical(self) -> bool {
        matches!(self, DeclKind::Let | DeclKind::Const | DeclKind::Class)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DeclKind::Var => "var",
            DeclKind::Let => "let",
            DeclKind::Const => "const",
            DeclKind::Function => "function",
            DeclKind::Param => "parameter",
            DeclKind::Class => "class",
            DeclKind::CatchParam => "catch parameter",
        }
    }
}

impl From<VarKind> for DeclKind {
    fn from(kind: VarKind) -> Self {
        match kind {
            VarKind::Var => DeclKind::Var,
            VarKind::Let => DeclKind::Let,
            VarKind::Const => DeclKind::Const,
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens when a name already bound in a scope is declared again in
/// that same scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redeclaration {
    /// Keep the existing binding and its mark; the binding takes this kind.
    Merge(DeclKind),
    /// Early error. The existing binding is left untouched.
    Conflict,
}

impl Redeclaration {
    pub const fn between(existing: DeclKind, redeclared: DeclKind) -> Self {
        use DeclKind::*;
        match (existing, redeclared) {
            (_, Let | Const | Class) | (Let | Const | Class, _) => Redeclaration::Conflict,
            (Var, Var) => Redeclaration::Merge(Var),
            // A function declared directly in a catch body cannot reuse the
            // parameter's name.
            (CatchParam, Function) => Redeclaration::Conflict,
            // Otherwise a function declaration wins over var and parameter
            // bindings of the same name.
            (_, Function) | (Function, Var) => Redeclaration::Merge(Function),
            (Param | CatchParam, Var) => Redeclaration::Merge(existing),
            (Param, Param) => Redeclaration::Merge(Param),
            (Var | Function, Param | CatchParam) => Redeclaration::Merge(existing),
            (CatchParam, CatchParam) | (Param, CatchParam) | (CatchParam, Param) => {
                Redeclaration::Conflict
            }
        }
    }
}

/// One binding in a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: DeclKind,
    pub mark: Mark,
    /// Present in this block-level scope on behalf of a binding hoisted to
    /// an enclosing function scope. Aliases take part in redeclaration
    /// checks and lookups but are not bindings of their own.
    #[serde(default)]
    pub alias: bool,
}

/// Result of [`Scope::declare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Inserted(Mark),
    Merged(Mark),
    /// The name stays bound to the existing symbol, whose mark is `mark`.
    Conflict { mark: Mark, existing: DeclKind },
}

impl Declaration {
    #[inline]
    pub const fn mark(self) -> Mark {
        match self {
            Declaration::Inserted(mark)
            | Declaration::Merged(mark)
            | Declaration::Conflict { mark, .. } => mark,
        }
    }

    #[inline]
    pub const fn is_conflict(self) -> bool {
        matches!(self, Declaration::Conflict { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    Program,
    Function,
    Block,
    Catch,
    Switch,
}

impl ScopeKind {
    /// Scopes that receive hoisted `var` and function declarations.
    #[inline]
    pub const fn is_function_like(self) -> bool {
        matches!(self, ScopeKind::Program | ScopeKind::Function)
    }
}

/// Index of a scope in a [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub u32);

impl ScopeId {
    /// Parent of the program scope.
    pub const NONE: ScopeId = ScopeId(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// One lexical environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: ScopeId,
    pub mark: Mark,
    pub bindings: FxIndexMap<String, Symbol>,
}

impl Scope {
    pub fn new(kind: ScopeKind, parent: ScopeId, mark: Mark) -> Self {
        Scope {
            kind,
            parent,
            mark,
            bindings: FxIndexMap::default(),
        }
    }

    /// Same-scope lookup; never walks to the parent.
    pub fn find_own(&self, name: &str) -> Option<&Symbol> {
        self.bindings.get(name)
    }

    /// Bind `name` in this scope with this scope's mark.
    pub fn declare(&mut self, name: &str, kind: DeclKind) -> Declaration {
        let mark = self.mark;
        self.insert(name, kind, mark, false)
    }

    /// Record a hoisted binding as visible in this block-level scope.
    pub fn declare_alias(&mut self, name: &str, kind: DeclKind, mark: Mark) -> Declaration {
        self.insert(name, kind, mark, true)
    }

    fn insert(&mut self, name: &str, kind: DeclKind, mark: Mark, alias: bool) -> Declaration {
        if let Some(existing) = self.bindings.get_mut(name) {
            return match Redeclaration::between(existing.kind, kind) {
                Redeclaration::Merge(merged) => {
                    existing.kind = merged;
                    Declaration::Merged(existing.mark)
                }
                Redeclaration::Conflict => Declaration::Conflict {
                    mark: existing.mark,
                    existing: existing.kind,
                },
            };
        }

        self.bindings.insert(
            name.to_string(),
            Symbol {
                name: name.to_string(),
                kind,
                mark,
                alias,
            },
        );
        Declaration::Inserted(mark)
    }

    /// Symbols declared here, excluding aliases.
    pub fn own_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.bindings.values().filter(|symbol| !symbol.alias)
    }
}

/// Append-only arena of every scope created during one resolution run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    pub fn new() -> Self {
        ScopeTree { scopes: Vec::new() }
    }

    /// Open a scope under `parent` (or [`ScopeId::NONE`] for the root).
    pub fn push(&mut self, kind: ScopeKind, parent: ScopeId, mark: Mark) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::new(kind, parent, mark));
        id
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .map(|(i, scope)| (ScopeId(i as u32), scope))
    }

    /// `id` followed by each enclosing scope up to the root.
    pub fn ancestors(&self, id: ScopeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: id,
        }
    }

    /// Nearest enclosing program or function scope, `id` included.
    pub fn nearest_function_scope(&self, id: ScopeId) -> Option<ScopeId> {
        self.ancestors(id)
            .find(|(_, scope)| scope.kind.is_function_like())
            .map(|(id, _)| id)
    }

    /// Walk from `from` to the root and return the first binding of `name`.
    pub fn lookup_symbol(&self, from: ScopeId, name: &str) -> Option<(ScopeId, &Symbol)> {
        self.ancestors(from)
            .find_map(|(id, scope)| scope.find_own(name).map(|symbol| (id, symbol)))
    }

    /// Mark of the nearest binding of `name`, or [`Mark::UNRESOLVED`].
    pub fn lookup(&self, from: ScopeId, name: &str) -> Mark {
        self.lookup_symbol(from, name)
            .map_or(Mark::UNRESOLVED, |(_, symbol)| symbol.mark)
    }

    pub fn find_own(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.get(scope).and_then(|scope| scope.find_own(name))
    }

    /// Number of non-alias symbols across all scopes.
    pub fn symbol_count(&self) -> usize {
        self.scopes.iter().map(|scope| scope.own_symbols().count()).sum()
    }
}

/// Panics if `id` was not issued by this tree.
impl Index<ScopeId> for ScopeTree {
    type Output = Scope;

    fn index(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }
}

impl IndexMut<ScopeId> for ScopeTree {
    fn index_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.index()]
    }
}

/// Iterator returned by [`ScopeTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a ScopeTree,
    next: ScopeId,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (ScopeId, &'a Scope);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let id = self.next;
        let scope = self.tree.get(id)?;
        self.next = scope.parent;
        Some((id, scope))
    }
}
