//! Mutable double-dispatch traversal.
//!
//! [`VisitMut`] has one `visit_mut_*` method per node type, each defaulting
//! to "visit the children". [`VisitMutWith`] is implemented for every node
//! type and routes a node to the matching `VisitMut` method. Both are
//! generated by `define_visit_mut!` from the node list at the bottom of
//! this file, so adding a node type means adding one line there.
//!
//! A visitor overrides the methods for the nodes it cares about and calls
//! `n.visit_mut_children_with(self)` to keep descending.

use crate::*;

pub trait VisitMutWith<V: ?Sized + VisitMut> {
    /// Dispatch `self` to the visitor method for its type.
    fn visit_mut_with(&mut self, visitor: &mut V);

    /// Visit each child of `self` in source order.
    fn visit_mut_children_with(&mut self, visitor: &mut V);
}

impl<V, T> VisitMutWith<V> for Box<T>
where
    V: ?Sized + VisitMut,
    T: VisitMutWith<V>,
{
    fn visit_mut_with(&mut self, visitor: &mut V) {
        (**self).visit_mut_with(visitor)
    }

    fn visit_mut_children_with(&mut self, visitor: &mut V) {
        (**self).visit_mut_children_with(visitor)
    }
}

impl<V, T> VisitMutWith<V> for Option<T>
where
    V: ?Sized + VisitMut,
    T: VisitMutWith<V>,
{
    fn visit_mut_with(&mut self, visitor: &mut V) {
        if let Some(node) = self {
            node.visit_mut_with(visitor);
        }
    }

    fn visit_mut_children_with(&mut self, visitor: &mut V) {
        if let Some(node) = self {
            node.visit_mut_children_with(visitor);
        }
    }
}

/// Generates `VisitMut` and every `VisitMutWith` impl.
///
/// - `nodes`: structs, listing the fields that hold child nodes, in source order
/// - `enums`: sum types, listing every variant; `(n)` marks a variant with a payload
/// - `vecs`: sequences that get their own visitor hook
macro_rules! define_visit_mut {
    (
        nodes {
            $( $node:ident => $node_method:ident { $( $field:ident ),* $(,)? } ),* $(,)?
        }
        enums {
            $( $enum_ty:ident => $enum_method:ident {
                $( $variant:ident $( ($bind:ident) )? ),* $(,)?
            } ),* $(,)?
        }
        vecs {
            $( $vec_ty:ty => $vec_method:ident ),* $(,)?
        }
    ) => {
        pub trait VisitMut {
            $(
                fn $node_method(&mut self, n: &mut $node) {
                    n.visit_mut_children_with(self)
                }
            )*
            $(
                fn $enum_method(&mut self, n: &mut $enum_ty) {
                    n.visit_mut_children_with(self)
                }
            )*
            $(
                fn $vec_method(&mut self, n: &mut $vec_ty) {
                    n.visit_mut_children_with(self)
                }
            )*
        }

        $(
            impl<V: ?Sized + VisitMut> VisitMutWith<V> for $node {
                fn visit_mut_with(&mut self, visitor: &mut V) {
                    visitor.$node_method(self)
                }

                fn visit_mut_children_with(&mut self, _visitor: &mut V) {
                    $( self.$field.visit_mut_with(_visitor); )*
                }
            }
        )*

        $(
            impl<V: ?Sized + VisitMut> VisitMutWith<V> for $enum_ty {
                fn visit_mut_with(&mut self, visitor: &mut V) {
                    visitor.$enum_method(self)
                }

                fn visit_mut_children_with(&mut self, _visitor: &mut V) {
                    match self {
                        $(
                            $enum_ty::$variant $( ($bind) )? => {
                                $( $bind.visit_mut_with(_visitor); )?
                            }
                        )*
                    }
                }
            }
        )*

        $(
            impl<V: ?Sized + VisitMut> VisitMutWith<V> for $vec_ty {
                fn visit_mut_with(&mut self, visitor: &mut V) {
                    visitor.$vec_method(self)
                }

                fn visit_mut_children_with(&mut self, visitor: &mut V) {
                    for node in self.iter_mut() {
                        node.visit_mut_with(visitor);
                    }
                }
            }
        )*
    };
}

define_visit_mut! {
    nodes {
        Program => visit_mut_program { body },
        BlockStmt => visit_mut_block_stmt { stmts },
        ExprStmt => visit_mut_expr_stmt { expr },
        IfStmt => visit_mut_if_stmt { test, cons, alt },
        WhileStmt => visit_mut_while_stmt { test, body },
        DoWhileStmt => visit_mut_do_while_stmt { body, test },
        ForStmt => visit_mut_for_stmt { init, test, update, body },
        ForInStmt => visit_mut_for_in_stmt { left, right, body },
        ForOfStmt => visit_mut_for_of_stmt { left, right, body },
        LabeledStmt => visit_mut_labeled_stmt { label, body },
        BreakStmt => visit_mut_break_stmt { label },
        ContinueStmt => visit_mut_continue_stmt { label },
        ReturnStmt => visit_mut_return_stmt { arg },
        ThrowStmt => visit_mut_throw_stmt { arg },
        TryStmt => visit_mut_try_stmt { block, handler, finalizer },
        CatchClause => visit_mut_catch_clause { param, body },
        SwitchStmt => visit_mut_switch_stmt { discriminant, cases },
        SwitchCase => visit_mut_switch_case { test, cons },
        WithStmt => visit_mut_with_stmt { object, body },
        VarDecl => visit_mut_var_decl { decls },
        VarDeclarator => visit_mut_var_declarator { name, init },
        FnDecl => visit_mut_fn_decl { ident, function },
        ClassDecl => visit_mut_class_decl { ident, class },
        Invalid => visit_mut_invalid {},

        Ident => visit_mut_ident {},
        IdentName => visit_mut_ident_name {},
        BindingIdent => visit_mut_binding_ident { id },
        Lit => visit_mut_lit {},

        Function => visit_mut_function { params, body },
        ArrowExpr => visit_mut_arrow_expr { params, body },
        Class => visit_mut_class { super_class, body },
        ClassMethod => visit_mut_class_method { key, function },
        ClassProp => visit_mut_class_prop { key, value },
        StaticBlock => visit_mut_static_block { body },
        ComputedPropName => visit_mut_computed_prop_name { expr },

        Tpl => visit_mut_tpl { exprs },
        TaggedTpl => visit_mut_tagged_tpl { tag, tpl },
        ArrayLit => visit_mut_array_lit { elems },
        ObjectLit => visit_mut_object_lit { props },
        KeyValueProp => visit_mut_key_value_prop { key, value },
        MethodProp => visit_mut_method_prop { key, function },
        FnExpr => visit_mut_fn_expr { ident, function },
        ClassExpr => visit_mut_class_expr { ident, class },
        UnaryExpr => visit_mut_unary_expr { arg },
        UpdateExpr => visit_mut_update_expr { arg },
        BinExpr => visit_mut_bin_expr { left, right },
        AssignExpr => visit_mut_assign_expr { left, right },
        CondExpr => visit_mut_cond_expr { test, cons, alt },
        CallExpr => visit_mut_call_expr { callee, args },
        NewExpr => visit_mut_new_expr { callee, args },
        MemberExpr => visit_mut_member_expr { obj, prop },
        SeqExpr => visit_mut_seq_expr { exprs },
        SpreadElement => visit_mut_spread_element { expr },
        YieldExpr => visit_mut_yield_expr { arg },
        AwaitExpr => visit_mut_await_expr { arg },
        ParenExpr => visit_mut_paren_expr { expr },
        MetaPropExpr => visit_mut_meta_prop_expr {},

        ArrayPat => visit_mut_array_pat { elems },
        ObjectPat => visit_mut_object_pat { props },
        KeyValuePatProp => visit_mut_key_value_pat_prop { key, value },
        AssignPatProp => visit_mut_assign_pat_prop { key, value },
        AssignPat => visit_mut_assign_pat { left, right },
        RestPat => visit_mut_rest_pat { arg },
    }
    enums {
        Stmt => visit_mut_stmt {
            Block(n), Empty, Expr(n), If(n), While(n), DoWhile(n), For(n), ForIn(n),
            ForOf(n), Labeled(n), Break(n), Continue(n), Return(n), Throw(n), Try(n),
            Switch(n), With(n), Debugger, Var(n), Fn(n), Class(n), Invalid(n),
        },
        ForInit => visit_mut_for_init { Var(n), Expr(n) },
        ForHead => visit_mut_for_head { Var(n), Pat(n) },
        Expr => visit_mut_expr {
            Ident(n), Lit(n), Tpl(n), TaggedTpl(n), Array(n), Object(n), Fn(n), Arrow(n),
            Class(n), Unary(n), Update(n), Bin(n), Assign(n), Cond(n), Call(n), New(n),
            Member(n), Seq(n), Spread(n), Yield(n), Await(n), Paren(n), This, Super,
            MetaProp(n), Invalid(n),
        },
        Prop => visit_mut_prop { KeyValue(n), Shorthand(n), Method(n), Spread(n) },
        AssignTarget => visit_mut_assign_target { Simple(n), Pat(n) },
        MemberProp => visit_mut_member_prop { Ident(n), Private(n), Computed(n) },
        BlockStmtOrExpr => visit_mut_block_stmt_or_expr { BlockStmt(n), Expr(n) },
        ClassMember => visit_mut_class_member { Method(n), Prop(n), StaticBlock(n), Empty },
        PropName => visit_mut_prop_name { Ident(n), Lit(n), Computed(n), Private(n) },
        Pat => visit_mut_pat {
            Ident(n), Array(n), Object(n), Assign(n), Rest(n), Expr(n), Invalid(n),
        },
        ObjectPatProp => visit_mut_object_pat_prop { KeyValue(n), Assign(n), Rest(n) },
    }
    vecs {
        Vec<Stmt> => visit_mut_stmts,
        Vec<SwitchCase> => visit_mut_switch_cases,
        Vec<VarDeclarator> => visit_mut_var_declarators,
        Vec<Pat> => visit_mut_pats,
        Vec<ClassMember> => visit_mut_class_members,
        Vec<Expr> => visit_mut_exprs,
        Vec<Option<Expr>> => visit_mut_opt_exprs,
        Vec<Prop> => visit_mut_props,
        Vec<Option<Pat>> => visit_mut_opt_pats,
        Vec<ObjectPatProp> => visit_mut_object_pat_props,
    }
}
