mod common;

use common::{Marks, run};
use jsscope_ast::factory::*;
use jsscope_ast::{
    ComputedPropName, Expr, ForHead, ForInit, Ident, Invalid, KeyValueProp, Mark, Pat, Program,
    Prop, PropName, Stmt, VarKind,
};
use jsscope_common::diagnostic_codes;
use jsscope_common::limits::MAX_SCOPE_DEPTH;
use jsscope_resolver::{
    DeclKind, ResolveError, Resolver, ResolverOptions, ScopeId, ScopeKind, resolve,
};

fn invalid(message: &str) -> Invalid {
    Invalid {
        message: message.to_string(),
    }
}

// =============================================================================
// Block scoping
// =============================================================================

#[test]
fn test_block_let_is_not_visible_outside() {
    // { let x = 1; x; } x;
    let mut tree = program(vec![
        block(vec![
            decl(VarKind::Let, binding("x"), Some(num(1.0))),
            expr_stmt(ident_expr("x")),
        ]),
        expr_stmt(ident_expr("x")),
    ]);

    let (resolution, marks) = run(&mut tree);
    let x = marks.of("x");
    assert!(!x[0].is_unresolved());
    assert_eq!(x[0], x[1]);
    assert_eq!(x[2], Mark::UNRESOLVED);
    assert_eq!(resolution.stats().unresolved, 1);
}

#[test]
fn test_inner_let_shadows_outer() {
    // let x; { let x; x; } x;
    let mut tree = program(vec![
        let_decl("x"),
        block(vec![let_decl("x"), expr_stmt(ident_expr("x"))]),
        expr_stmt(ident_expr("x")),
    ]);

    let (resolution, marks) = run(&mut tree);
    let x = marks.of("x");
    assert_ne!(x[0], x[1]);
    assert_eq!(x[1], x[2]);
    assert_eq!(x[0], x[3]);
    assert!(!resolution.has_conflicts());
}

#[test]
fn test_const_and_class_are_block_scoped() {
    // { const c = 1; class K {} } c; K;
    let mut tree = program(vec![
        block(vec![const_decl("c", num(1.0)), class_decl("K", None, vec![])]),
        expr_stmt(ident_expr("c")),
        expr_stmt(ident_expr("K")),
    ]);

    let (resolution, marks) = run(&mut tree);
    assert_eq!(marks.of("c")[1], Mark::UNRESOLVED);
    assert_eq!(marks.of("K")[1], Mark::UNRESOLVED);

    let block_scope = resolution.scope_of_mark(marks.of("K")[0]).expect("block");
    assert_eq!(resolution.scopes[block_scope].kind, ScopeKind::Block);
    assert_eq!(
        resolution.scopes.find_own(block_scope, "K").map(|s| s.kind),
        Some(DeclKind::Class)
    );
}

#[test]
fn test_loop_let_is_scoped_to_the_loop() {
    // for (let i = 0; i; ) { i; } i;
    let mut tree = program(vec![
        for_stmt(
            Some(ForInit::Var(var_decl_with(
                VarKind::Let,
                vec![declarator(binding("i"), Some(num(0.0)))],
            ))),
            Some(ident_expr("i")),
            None,
            block(vec![expr_stmt(ident_expr("i"))]),
        ),
        expr_stmt(ident_expr("i")),
    ]);

    let (_, marks) = run(&mut tree);
    let i = marks.of("i");
    assert!(!i[0].is_unresolved());
    assert_eq!(i[0], i[1]);
    assert_eq!(i[0], i[2]);
    assert_eq!(i[3], Mark::UNRESOLVED);
}

#[test]
fn test_for_of_assignment_head_is_a_reference() {
    // let x; for (x of xs) {}
    let mut tree = program(vec![
        let_decl("x"),
        for_of(
            ForHead::Pat(Box::new(binding("x"))),
            ident_expr("xs"),
            block(vec![]),
        ),
    ]);

    let (resolution, marks) = run(&mut tree);
    let x = marks.of("x");
    assert_eq!(x[0], x[1]);
    assert_eq!(marks.of("xs")[0], Mark::UNRESOLVED);
    assert_eq!(resolution.scopes.find_own(ScopeId(1), "x"), None);
}

#[test]
fn test_switch_cases_share_one_scope() {
    // switch (x) { case 1: let y = 1; break; case 2: let y = 2; }
    let mut tree = program(vec![switch(
        ident_expr("x"),
        vec![
            case(
                Some(num(1.0)),
                vec![
                    decl(VarKind::Let, binding("y"), Some(num(1.0))),
                    break_stmt(None),
                ],
            ),
            case(
                Some(num(2.0)),
                vec![decl(VarKind::Let, binding("y"), Some(num(2.0)))],
            ),
        ],
    )]);

    let (resolution, marks) = run(&mut tree);
    assert_eq!(resolution.conflicts.len(), 1);
    let conflict = &resolution.conflicts[0];
    assert_eq!(conflict.name, "y");
    assert_eq!(conflict.existing, DeclKind::Let);
    assert_eq!(conflict.redeclared, DeclKind::Let);
    assert_eq!(resolution.scopes[conflict.scope].kind, ScopeKind::Switch);

    // The conflicting declaration is still bound.
    let y = marks.of("y");
    assert_eq!(y[0], y[1]);

    let diagnostics = resolution.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE
    );
    assert_eq!(
        diagnostics[0].message_text,
        "Cannot redeclare block-scoped variable 'y'."
    );
}

#[test]
fn test_switch_discriminant_resolves_outside() {
    // switch (y) { default: let y; }
    let mut tree = program(vec![switch(
        ident_expr("y"),
        vec![case(None, vec![let_decl("y")])],
    )]);

    let (_, marks) = run(&mut tree);
    let y = marks.of("y");
    assert_eq!(y[0], Mark::UNRESOLVED);
    assert!(!y[1].is_unresolved());
}

// =============================================================================
// Redeclaration conflicts
// =============================================================================

#[test]
fn test_var_and_let_in_same_scope_conflict() {
    // var a; let a;
    let mut tree = program(vec![var_decl("a"), let_decl("a")]);

    let (resolution, marks) = run(&mut tree);
    assert_eq!(resolution.conflicts.len(), 1);
    assert_eq!(resolution.conflicts[0].existing, DeclKind::Var);
    assert_eq!(resolution.conflicts[0].redeclared, DeclKind::Let);
    assert_eq!(resolution.conflicts[0].scope, resolution.root());

    let a = marks.of("a");
    assert_eq!(a[0], a[1]);
}

#[test]
fn test_duplicate_var_is_not_a_conflict() {
    // var a; var a;
    let mut tree = program(vec![var_decl("a"), var_decl("a")]);

    let (resolution, marks) = run(&mut tree);
    assert!(!resolution.has_conflicts());
    let a = marks.of("a");
    assert_eq!(a[0], a[1]);
}

#[test]
fn test_hoisted_var_collides_with_enclosing_block_let() {
    // { let x; { var x; } }
    let mut tree = program(vec![block(vec![
        let_decl("x"),
        block(vec![var_decl("x")]),
    ])]);

    let (resolution, marks) = run(&mut tree);
    assert_eq!(resolution.conflicts.len(), 1);
    let conflict = &resolution.conflicts[0];
    assert_eq!(conflict.existing, DeclKind::Let);
    assert_eq!(conflict.redeclared, DeclKind::Var);
    assert_eq!(conflict.scope, ScopeId(1));

    // The var keeps its function-scope binding.
    let x = marks.of("x");
    assert_ne!(x[0], x[1]);
    assert_eq!(resolution.scope_of_mark(x[1]), Some(resolution.root()));
}

#[test]
fn test_var_then_let_in_same_block_conflicts() {
    // { var x; let x; }
    let mut tree = program(vec![block(vec![var_decl("x"), let_decl("x")])]);

    let (resolution, _) = run(&mut tree);
    assert_eq!(resolution.conflicts.len(), 1);
    assert_eq!(resolution.conflicts[0].existing, DeclKind::Var);
    assert_eq!(resolution.conflicts[0].redeclared, DeclKind::Let);
}

#[test]
fn test_every_conflict_is_reported() {
    // let a; let a; const b = 1; class b {}
    let mut tree = program(vec![
        let_decl("a"),
        let_decl("a"),
        const_decl("b", num(1.0)),
        class_decl("b", None, vec![]),
    ]);

    let (resolution, _) = run(&mut tree);
    let names: Vec<&str> = resolution
        .conflicts
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b"]);
}

// =============================================================================
// Functions and parameters
// =============================================================================

#[test]
fn test_parameters_and_defaults() {
    // function f(a, b = a) { var a; return a + b; }
    let mut tree = program(vec![fn_decl(
        "f",
        vec![binding("a"), with_default(binding("b"), ident_expr("a"))],
        vec![
            var_decl("a"),
            return_stmt(Some(bin(
                jsscope_ast::BinaryOp::Add,
                ident_expr("a"),
                ident_expr("b"),
            ))),
        ],
    )]);

    let (resolution, marks) = run(&mut tree);
    let a = marks.of("a");
    assert_eq!(a.len(), 4);
    assert!(a.iter().all(|m| *m == a[0]), "all a bind to the parameter: {a:?}");
    let b = marks.of("b");
    assert_eq!(b[0], b[1]);
    assert_eq!(b[0], a[0]);
    assert!(!resolution.has_conflicts());

    let scope = resolution.scope_of_mark(a[0]).expect("function scope");
    assert_eq!(
        resolution.scopes.find_own(scope, "a").map(|s| s.kind),
        Some(DeclKind::Param)
    );
}

#[test]
fn test_parameter_and_let_conflict() {
    // function f(a) { let a; }
    let mut tree = program(vec![fn_decl("f", vec![binding("a")], vec![let_decl("a")])]);

    let (resolution, _) = run(&mut tree);
    assert_eq!(resolution.conflicts.len(), 1);
    assert_eq!(resolution.conflicts[0].existing, DeclKind::Param);
    assert_eq!(resolution.conflicts[0].redeclared, DeclKind::Let);
}

#[test]
fn test_destructured_parameters_and_rest() {
    // function f({ a }, [b, ...c]) { a; b; c; }
    let mut tree = program(vec![fn_decl(
        "f",
        vec![
            object_pat(vec![shorthand("a")]),
            array_pat(vec![Some(binding("b")), Some(rest(binding("c")))]),
        ],
        vec![
            expr_stmt(ident_expr("a")),
            expr_stmt(ident_expr("b")),
            expr_stmt(ident_expr("c")),
        ],
    )]);

    let (_, marks) = run(&mut tree);
    for name in ["a", "b", "c"] {
        let m = marks.of(name);
        assert!(!m[0].is_unresolved());
        assert_eq!(m[0], m[1], "{name}");
    }
}

#[test]
fn test_named_function_expression_binds_only_inside() {
    // let g = function fact(n) { return fact(n); }; fact;
    let mut tree = program(vec![
        decl(
            VarKind::Let,
            binding("g"),
            Some(fn_expr(
                Some("fact"),
                vec![binding("n")],
                vec![return_stmt(Some(call(
                    ident_expr("fact"),
                    vec![ident_expr("n")],
                )))],
            )),
        ),
        expr_stmt(ident_expr("fact")),
    ]);

    let (_, marks) = run(&mut tree);
    let fact = marks.of("fact");
    assert!(!fact[0].is_unresolved());
    assert_eq!(fact[0], fact[1]);
    assert_eq!(fact[2], Mark::UNRESOLVED);
}

#[test]
fn test_arrow_parameters_and_free_variables() {
    // let h = (p) => p + q;
    let mut tree = program(vec![decl(
        VarKind::Let,
        binding("h"),
        Some(arrow_expr(
            vec![binding("p")],
            bin(jsscope_ast::BinaryOp::Add, ident_expr("p"), ident_expr("q")),
        )),
    )]);

    let (resolution, marks) = run(&mut tree);
    let p = marks.of("p");
    assert_eq!(p[0], p[1]);
    assert_eq!(marks.of("q")[0], Mark::UNRESOLVED);

    let scope = resolution.scope_of_mark(p[0]).expect("arrow scope");
    assert_eq!(resolution.scopes[scope].kind, ScopeKind::Function);
}

#[test]
fn test_closure_sees_enclosing_function_bindings() {
    // function outer(a) { let b; return () => a + b; }
    let mut tree = program(vec![fn_decl(
        "outer",
        vec![binding("a")],
        vec![
            let_decl("b"),
            return_stmt(Some(arrow_expr(
                vec![],
                bin(jsscope_ast::BinaryOp::Add, ident_expr("a"), ident_expr("b")),
            ))),
        ],
    )]);

    let (_, marks) = run(&mut tree);
    for name in ["a", "b"] {
        let m = marks.of(name);
        assert_eq!(m[0], m[1], "{name}");
    }
}

// =============================================================================
// Classes
// =============================================================================

#[test]
fn test_named_class_expression_binds_only_inside() {
    // let C = class Inner { m() { return Inner; } }; Inner;
    let mut tree = program(vec![
        decl(
            VarKind::Let,
            binding("C"),
            Some(class_expr(
                Some("Inner"),
                None,
                vec![method(
                    prop_name("m"),
                    vec![],
                    vec![return_stmt(Some(ident_expr("Inner")))],
                )],
            )),
        ),
        expr_stmt(ident_expr("Inner")),
    ]);

    let (_, marks) = run(&mut tree);
    let inner = marks.of("Inner");
    assert_eq!(inner[0], inner[1]);
    assert_eq!(inner[2], Mark::UNRESOLVED);
    assert!(marks.of("m").is_empty());
}

#[test]
fn test_class_members_resolve_in_enclosing_scope() {
    // let k; class A extends B { [k] = v; static { k; } }
    let mut tree = program(vec![
        let_decl("k"),
        class_decl(
            "A",
            Some(ident_expr("B")),
            vec![
                class_prop(
                    PropName::Computed(ComputedPropName {
                        expr: Box::new(ident_expr("k")),
                    }),
                    Some(ident_expr("v")),
                ),
                static_block(vec![expr_stmt(ident_expr("k"))]),
            ],
        ),
    ]);

    let (resolution, marks) = run(&mut tree);
    let k = marks.of("k");
    assert!(k.iter().all(|m| *m == k[0]));
    assert_eq!(marks.of("B")[0], Mark::UNRESOLVED);
    assert_eq!(marks.of("v")[0], Mark::UNRESOLVED);
    assert_eq!(
        resolution.scopes.find_own(resolution.root(), "A").map(|s| s.kind),
        Some(DeclKind::Class)
    );
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn test_object_literal_and_member_names() {
    // let q, r; o.p; ({ q, [r]: 1, key: q });
    let mut tree = program(vec![
        let_decl("q"),
        let_decl("r"),
        expr_stmt(member(ident_expr("o"), "p")),
        expr_stmt(object(vec![
            Prop::Shorthand(ident("q")),
            Prop::KeyValue(KeyValueProp {
                key: PropName::Computed(ComputedPropName {
                    expr: Box::new(ident_expr("r")),
                }),
                value: Box::new(num(1.0)),
            }),
            Prop::KeyValue(KeyValueProp {
                key: prop_name("key"),
                value: Box::new(ident_expr("q")),
            }),
        ])),
    ]);

    let (_, marks) = run(&mut tree);
    let q = marks.of("q");
    assert_eq!(q.len(), 3);
    assert!(q.iter().all(|m| *m == q[0]));
    let r = marks.of("r");
    assert_eq!(r[0], r[1]);
    assert!(marks.of("p").is_empty());
    assert!(marks.of("key").is_empty());
}

#[test]
fn test_destructuring_assignment_targets_are_references() {
    // var a; [a, b] = arr;
    let mut tree = program(vec![
        var_decl("a"),
        expr_stmt(assign_pat(
            array_pat(vec![Some(binding("a")), Some(binding("b"))]),
            ident_expr("arr"),
        )),
    ]);

    let (resolution, marks) = run(&mut tree);
    let a = marks.of("a");
    assert_eq!(a[0], a[1]);
    assert_eq!(marks.of("b")[0], Mark::UNRESOLVED);
    assert_eq!(resolution.stats().symbols, 1);
}

#[test]
fn test_with_statement_does_not_bind() {
    // with (o) { x; }
    let mut tree = program(vec![with_stmt(
        ident_expr("o"),
        block(vec![expr_stmt(ident_expr("x"))]),
    )]);

    let (resolution, _) = run(&mut tree);
    assert_eq!(resolution.stats().unresolved, 2);
}

#[test]
fn test_existing_marks_are_kept() {
    // var a; a;  (the reference arrives already marked)
    let mut tree = program(vec![
        var_decl("a"),
        expr_stmt(Expr::Ident(Ident {
            sym: "a".to_string(),
            mark: Some(Mark::UNRESOLVED),
        })),
    ]);

    let (resolution, marks) = run(&mut tree);
    let a = marks.of("a");
    assert!(!a[0].is_unresolved());
    assert_eq!(a[1], Mark::UNRESOLVED);
    assert_eq!(resolution.stats().references, 0);
}

// =============================================================================
// Whole-run properties
// =============================================================================

/// function f(a) { var b = a; { let a = b; c(a); } return a; }
fn sample_tree() -> Program {
    program(vec![fn_decl(
        "f",
        vec![binding("a")],
        vec![
            decl(VarKind::Var, binding("b"), Some(ident_expr("a"))),
            block(vec![
                decl(VarKind::Let, binding("a"), Some(ident_expr("b"))),
                expr_stmt(call(ident_expr("c"), vec![ident_expr("a")])),
            ]),
            return_stmt(Some(ident_expr("a"))),
        ],
    )])
}

#[test]
fn test_independent_runs_bind_identically() {
    let mut first = sample_tree();
    let mut second = sample_tree();

    let (_, first_marks) = run(&mut first);
    let (_, second_marks) = run(&mut second);
    assert_eq!(first_marks.partition(), second_marks.partition());
}

#[test]
fn test_stats_and_summary() {
    // var a; a; b;
    let mut tree = program(vec![
        var_decl("a"),
        expr_stmt(ident_expr("a")),
        expr_stmt(ident_expr("b")),
    ]);

    let (resolution, _) = run(&mut tree);
    let stats = resolution.stats();
    assert_eq!(stats.scopes, 1);
    assert_eq!(stats.symbols, 1);
    assert_eq!(stats.references, 2);
    assert_eq!(stats.unresolved, 1);
    assert_eq!(resolution.marks_issued, 1);
    assert_eq!(
        resolution.summary(),
        "1 scopes, 1 symbols, 2 references (1 unresolved), 0 conflicts"
    );
}

#[test]
fn test_one_mark_per_scope() {
    let mut tree = sample_tree();

    let (resolution, _) = run(&mut tree);
    assert_eq!(resolution.marks_issued as usize, resolution.scopes.len());
    for (id, scope) in resolution.scopes.iter() {
        assert_eq!(resolution.scope_of_mark(scope.mark), Some(id));
    }
    assert_eq!(resolution.scope_of_mark(Mark::UNRESOLVED), None);
}

#[test]
fn test_resolver_entry_point_matches_free_function() {
    let mut via_free = sample_tree();
    let mut via_struct = sample_tree();

    let first = resolve(&mut via_free, ResolverOptions::default()).expect("resolves");
    let second = Resolver::new(ResolverOptions::default())
        .resolve_program(&mut via_struct)
        .expect("resolves");
    assert_eq!(via_free, via_struct);
    assert_eq!(first.stats(), second.stats());
}

#[test]
fn test_resolved_tree_round_trips_through_json() {
    let mut tree = sample_tree();
    let (resolution, marks) = run(&mut tree);

    let json = serde_json::to_string(&tree).expect("serialize tree");
    assert!(json.contains(r#""mark":1"#));
    let mut restored: Program = serde_json::from_str(&json).expect("deserialize tree");
    assert_eq!(restored, tree);
    assert_eq!(Marks::collect(&mut restored).0, marks.0);

    let value = serde_json::to_value(&resolution).expect("serialize resolution");
    assert_eq!(value["scopes"]["scopes"][0]["kind"], "Program");
    assert_eq!(value["conflicts"], serde_json::json!([]));
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: ResolverOptions = serde_json::from_str(r#"{"strict":true}"#).expect("options");
    assert!(options.strict);
    assert!(options.annex_b);
    assert_eq!(options, ResolverOptions::strict());
}

// =============================================================================
// Fatal errors
// =============================================================================

#[test]
fn test_invalid_statement_aborts() {
    let mut tree = program(vec![var_decl("a"), Stmt::Invalid(invalid("unexpected token"))]);

    let err = resolve(&mut tree, ResolverOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::InvalidStatement {
            message: "unexpected token".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid statement in input tree: unexpected token"
    );
}

#[test]
fn test_invalid_expression_aborts() {
    let mut tree = program(vec![expr_stmt(call(
        ident_expr("f"),
        vec![Expr::Invalid(invalid("missing operand"))],
    ))]);

    let err = resolve(&mut tree, ResolverOptions::default()).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidExpression { .. }));
}

#[test]
fn test_invalid_parameter_pattern_aborts() {
    let mut tree = program(vec![fn_decl(
        "f",
        vec![Pat::Invalid(invalid("bad parameter"))],
        vec![],
    )]);

    let err = resolve(&mut tree, ResolverOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::InvalidPattern {
            message: "bad parameter".to_string()
        }
    );
}

#[test]
fn test_expression_in_binding_position_aborts() {
    // let o.p;
    let mut tree = program(vec![decl(
        VarKind::Let,
        Pat::Expr(Box::new(member(ident_expr("o"), "p"))),
        None,
    )]);

    let err = resolve(&mut tree, ResolverOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::ExpressionInBindingPosition {
            context: "variable declaration"
        }
    );
}

#[test]
fn test_member_target_allowed_in_assignment_pattern() {
    // [o.p] = xs;
    let mut tree = program(vec![expr_stmt(assign_pat(
        array_pat(vec![Some(Pat::Expr(Box::new(member(ident_expr("o"), "p"))))]),
        ident_expr("xs"),
    ))]);

    let (resolution, _) = run(&mut tree);
    assert_eq!(resolution.stats().unresolved, 2);
}

fn nested_blocks(depth: usize) -> Program {
    let mut stmt = expr_stmt(ident_expr("x"));
    for _ in 0..depth {
        stmt = block(vec![stmt]);
    }
    program(vec![stmt])
}

#[test]
fn test_scope_depth_limit() {
    // Deep trees need more stack than the default test thread has.
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let mut within = nested_blocks(MAX_SCOPE_DEPTH - 1);
            let resolution = resolve(&mut within, ResolverOptions::default())
                .expect("nesting below the limit resolves");
            assert_eq!(resolution.scopes.len(), MAX_SCOPE_DEPTH);

            let mut beyond = nested_blocks(MAX_SCOPE_DEPTH);
            resolve(&mut beyond, ResolverOptions::default()).unwrap_err()
        })
        .expect("spawn test thread");

    let err = handle.join().expect("test thread panicked");
    assert_eq!(
        err,
        ResolveError::ScopeDepthExceeded {
            limit: MAX_SCOPE_DEPTH
        }
    );
}

#[test]
fn test_scope_depth_limit_stops_hoisting() {
    // Hoisting runs before the main pass and must give up at the same depth.
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let mut tree = nested_blocks(MAX_SCOPE_DEPTH * 200);
            let result = resolve(&mut tree, ResolverOptions::default());
            // Dropping the tree recurses once per level.
            std::mem::forget(tree);
            result.map(|_| ())
        })
        .expect("spawn test thread");

    let result = handle.join().expect("test thread panicked");
    assert_eq!(
        result,
        Err(ResolveError::ScopeDepthExceeded {
            limit: MAX_SCOPE_DEPTH
        })
    );
}

#[test]
fn test_scope_depth_limit_inside_function_body() {
    // function f() { var v; {{{ ... }}} }
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let mut body = nested_blocks(MAX_SCOPE_DEPTH * 2).body;
            body.insert(0, var_decl("v"));
            let mut tree = program(vec![fn_decl("f", vec![], body)]);
            resolve(&mut tree, ResolverOptions::default()).map(|_| ())
        })
        .expect("spawn test thread");

    let result = handle.join().expect("test thread panicked");
    assert_eq!(
        result,
        Err(ResolveError::ScopeDepthExceeded {
            limit: MAX_SCOPE_DEPTH
        })
    );
}

#[test]
fn test_unresolved_free_variable() {
    let mut tree = program(vec![expr_stmt(ident_expr("undeclared"))]);

    let (resolution, marks) = run(&mut tree);
    assert_eq!(marks.of("undeclared"), [Mark::UNRESOLVED]);
    assert_eq!(resolution.stats().unresolved, 1);
    assert!(!resolution.has_conflicts());
}

#[test]
fn test_try_finally_blocks_are_scopes() {
    // try { let t; } finally { t; }
    let mut tree = program(vec![try_finally(
        vec![let_decl("t")],
        vec![expr_stmt(ident_expr("t"))],
    )]);

    let (resolution, marks) = run(&mut tree);
    assert_eq!(marks.of("t")[1], Mark::UNRESOLVED);
    assert_eq!(resolution.scopes.len(), 3);
}

#[test]
fn test_destructured_catch_parameter() {
    // try {} catch ({ message }) { message; }
    let mut tree = program(vec![try_catch(
        vec![],
        Some(object_pat(vec![shorthand("message")])),
        vec![expr_stmt(ident_expr("message"))],
    )]);

    let (resolution, marks) = run(&mut tree);
    let message = marks.of("message");
    assert_eq!(message[0], message[1]);
    let scope = resolution.scope_of_mark(message[0]).expect("catch scope");
    assert_eq!(
        resolution.scopes.find_own(scope, "message").map(|s| s.kind),
        Some(DeclKind::CatchParam)
    );
}
