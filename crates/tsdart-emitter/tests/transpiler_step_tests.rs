//! Driver dispatch and the helpers rules build on.

mod common;

use common::{TreeBuilder, translate, translate_unchecked};
use tsdart_common::TranspileOptions;
use tsdart_common::diagnostics::diagnostic_codes;
use tsdart_common::tracing_config::init_tracing;
use tsdart_emitter::{TranspileError, Transpiler, TranspilerStep};
use tsdart_syntax::{NodeIndex, NodeList, SyntaxKind};

fn idents(b: &mut TreeBuilder, names: &[&str]) -> NodeList {
    NodeList::new(names.iter().map(|name| b.ident(name)).collect())
}

#[test]
fn test_visit_list_separator_counts() {
    init_tracing();
    let mut b = TreeBuilder::new();
    let empty = idents(&mut b, &[]);
    let one = idents(&mut b, &["a"]);
    let three = idents(&mut b, &["a", "b", "c"]);

    for (list, expected, separators) in [(&empty, "", 0), (&one, " a", 0), (&three, " a , b , c", 2)] {
        let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
        t.visit_list(list).unwrap();
        assert_eq!(t.output(), expected);
        assert_eq!(t.output().matches(',').count(), separators);
    }
}

#[test]
fn test_visit_list_with_custom_separator() {
    let mut b = TreeBuilder::new();
    let list = idents(&mut b, &["a", "b"]);
    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    t.visit_list_with(&list, ";").unwrap();
    assert_eq!(t.output(), " a ; b");
}

#[test]
fn test_visit_each_if_present() {
    let mut b = TreeBuilder::new();
    let list = idents(&mut b, &["a", "b"]);
    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    t.visit_each_if_present(None).unwrap();
    assert_eq!(t.output(), "");
    t.visit_each_if_present(Some(&list)).unwrap();
    assert_eq!(t.output(), " a b");
}

#[test]
fn test_emit_and_emit_no_space() {
    let b = TreeBuilder::new();
    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    t.emit("foo");
    t.emit_no_space("()");
    t.emit(";");
    assert_eq!(t.output(), " foo() ;");
}

#[test]
fn test_visit_type_name_remaps_simple_names_only() {
    let mut b = TreeBuilder::new();
    let promise = b.ident("Promise");
    let foo = b.ident("Foo");
    let qualified = b.qualified(&["lib", "Promise"]);

    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    t.visit_type_name(promise).unwrap();
    t.visit_type_name(foo).unwrap();
    t.visit_type_name(qualified).unwrap();
    assert_eq!(t.output(), " Future Foo lib . Promise");
}

#[test]
fn test_maybe_visit_type_arguments() {
    let mut b = TreeBuilder::new();
    let number = b.token(SyntaxKind::NumberKeyword);
    let date = b.type_ref("Date", vec![]);
    let args = NodeList::new(vec![number, date]);

    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    t.maybe_visit_type_arguments(None).unwrap();
    assert_eq!(t.output(), "");
    t.maybe_visit_type_arguments(Some(&args)).unwrap();
    assert_eq!(t.output(), " < num , DateTime >");
}

#[test]
fn test_keyword_types() {
    let mut b = TreeBuilder::new();
    let kinds = [
        SyntaxKind::NumberKeyword,
        SyntaxKind::BooleanKeyword,
        SyntaxKind::AnyKeyword,
        SyntaxKind::StringKeyword,
        SyntaxKind::VoidKeyword,
    ];
    let list = NodeList::new(kinds.iter().map(|&kind| b.token(kind)).collect());
    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    t.visit_each(&list).unwrap();
    assert_eq!(t.output(), " num bool dynamic string void");
}

#[test]
fn test_array_type_becomes_list() {
    let mut b = TreeBuilder::new();
    let element = b.type_ref("Observable", vec![]);
    let ty = b.array_type(element);
    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    t.visit(ty).unwrap();
    assert_eq!(t.output(), " List < Stream >");
}

#[test]
fn test_unimplemented_kind_aborts_with_location() {
    let mut b = TreeBuilder::new();
    let ok = b.ident("a");
    let ok_stmt = b.expr_stmt(ok);
    let unsupported = b.token(SyntaxKind::WhileStatement);
    let root = b.source_file(vec![ok_stmt, unsupported]);
    let while_node = *b.arena.get(unsupported).unwrap();

    let err = translate_unchecked(&b, root).unwrap_err();
    assert_eq!(
        err,
        TranspileError::Unimplemented {
            kind: SyntaxKind::WhileStatement,
            file: "input.ts".to_string(),
            pos: while_node.pos,
            end: while_node.end,
        }
    );
    assert!(err.to_string().contains("WhileStatement"));
}

#[test]
fn test_default_step_is_unimplemented() {
    struct NoRules;
    impl TranspilerStep for NoRules {}

    let mut b = TreeBuilder::new();
    let x = b.ident("x");
    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    let err = NoRules.visit_node(&mut t, x).unwrap_err();
    assert!(matches!(
        err,
        TranspileError::Unimplemented {
            kind: SyntaxKind::Identifier,
            ..
        }
    ));
    assert_eq!(t.output(), "");
}

#[test]
fn test_missing_child_index() {
    let b = TreeBuilder::new();
    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    let err = t.visit(NodeIndex(7)).unwrap_err();
    assert_eq!(err, TranspileError::MissingNode { index: NodeIndex(7) });
}

#[test]
fn test_library_directive() {
    let mut b = TreeBuilder::new();
    let root = b.source_file(vec![]);
    let options = TranspileOptions::new("a.ts").with_library_name("my_lib");
    let mut t = Transpiler::new(&b.arena, options);
    assert_eq!(t.library_name(), "my_lib");
    let output = t.translate(root).unwrap();
    assert_eq!(output.code, " library my_lib ;");

    let output = translate(&b, root).unwrap();
    assert_eq!(output.code, "");
}

#[test]
fn test_type_checker_accessor() {
    let b = TreeBuilder::new();
    let t = Transpiler::new(&b.arena, TranspileOptions::default());
    assert!(matches!(
        t.type_checker(),
        Err(TranspileError::TypeCheckerUnavailable)
    ));
}

#[test]
fn test_report_error_is_soft() {
    let mut b = TreeBuilder::new();
    let x = b.ident("x");
    let node = *b.arena.get(x).unwrap();
    let mut t = Transpiler::new(&b.arena, TranspileOptions::new("lib.ts"));
    t.report_error(x, "something odd");
    t.visit(x).unwrap();

    assert_eq!(t.output(), " x");
    let diagnostics = t.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, diagnostic_codes::TRANSLATION_ERROR);
    assert_eq!(diagnostics[0].file, "lib.ts");
    assert_eq!(diagnostics[0].start, node.pos);
    assert_eq!(diagnostics[0].message_text, "something odd");
}

#[test]
fn test_translate_is_reentrant() {
    let mut b = TreeBuilder::new();
    let a = b.ident("a");
    let stmt_a = b.expr_stmt(a);
    let file_a = b.source_file(vec![stmt_a]);
    let c = b.ident("c");
    let stmt_c = b.expr_stmt(c);
    let file_c = b.source_file(vec![stmt_c]);

    let mut t = Transpiler::new(&b.arena, TranspileOptions::default());
    assert_eq!(t.translate(file_a).unwrap().code, " a ;");
    assert_eq!(t.translate(file_c).unwrap().code, " c ;");
    assert_eq!(t.translate(file_a).unwrap().code, " a ;");
}

#[test]
fn test_statements_and_expressions() {
    let mut b = TreeBuilder::new();
    let this = b.token(SyntaxKind::ThisKeyword);
    let field = b.prop_access(this, "count");
    let one = b.number("1");
    let sum = b.binary(field, SyntaxKind::PlusToken, one);
    let ret = b.return_stmt(sum);
    let body = b.block(vec![ret]);
    let left = b.ident("a");
    let right = b.token(SyntaxKind::NullKeyword);
    let cond = b.binary(left, SyntaxKind::EqualsEqualsEqualsToken, right);
    let (pos, end) = (1000, 1001);
    let if_stmt = b.arena.add_if_statement(
        pos,
        end,
        tsdart_syntax::node::IfStatementData {
            expression: cond,
            then_statement: body,
            else_statement: NodeIndex::NONE,
        },
    );
    let root = b.source_file(vec![if_stmt]);

    let output = translate(&b, root).unwrap();
    assert_eq!(
        output.code,
        " if ( a == null ) { return this . count + 1 ; }"
    );
}

#[test]
fn test_tracing_init_is_idempotent() {
    init_tracing();
    init_tracing();
}
