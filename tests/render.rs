use easy_protocol::ast::{
    Ast, BinOp, BinaryOperator, Block, Break, Constant, Declaration, Declarator, ExpStatement,
    Identifier, IfStatement, PrimitiveType, Statement, Type, UnaOp, UnaryOperator,
    WhileStatement,
};
use easy_protocol::forest::{load_forest, render_forest};
use easy_protocol::lifecycle::release_forest;
use easy_protocol::{Node, NodeKind, ToStringVisitor};
use indoc::indoc;

fn demo_path(name: &str) -> String {
    format!("{}/demos/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// `depth` blocks nested inside each other, innermost holding a single `break`.
fn nested_blocks(depth: usize) -> Statement {
    let mut stmt: Statement = Break.into();
    for _ in 0..depth {
        stmt = Block::new(vec![stmt]).into();
    }
    stmt
}

#[test]
fn demo_forest_renders() {
    let forest = load_forest(demo_path("point.json")).expect("demo document should load");
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].kind(), NodeKind::StructDeclaration);
    assert_eq!(forest[1].kind(), NodeKind::FunctionDeclaration);

    let rendered = render_forest(&forest);
    let expected_struct = indoc! {"
        struct Point {
            int x
            int y
        }"};
    let expected_func = indoc! {"
        int sum(Point[8I] pts, int n) {
            int total = 0I i = 0I
            while ((i < n)) {
                (total += (pts[i].x))
                (i++)
            }
            return total
        }"};
    assert_eq!(rendered, vec![expected_struct, expected_func]);

    assert!(release_forest(forest) > 0);
}

#[test]
fn missing_demo_is_an_io_error() {
    let result = load_forest(demo_path("does-not-exist.json"));
    assert!(matches!(
        result,
        Err(easy_protocol::CompileError::IoError(_))
    ));
}

#[test]
fn indentation_tracks_nesting_depth() {
    for depth in 1..=5 {
        let text = nested_blocks(depth).to_string();
        let lines: Vec<&str> = text.lines().collect();

        // The `break` line sits inside `depth` blocks.
        let stmt_line = lines[depth];
        assert_eq!(stmt_line, format!("{}break", " ".repeat(depth * 4)));

        // The innermost closing brace belongs to a block at depth `depth`.
        let close_line = lines[depth + 1];
        assert_eq!(close_line, format!("{}}}", " ".repeat((depth - 1) * 4)));
    }
}

#[test]
fn sibling_roots_do_not_share_depth() {
    let forest: Vec<Ast> = vec![nested_blocks(3).into(), nested_blocks(1).into()];
    let rendered = render_forest(&forest);
    assert_eq!(rendered[1], "{\n    break\n}");

    // Reusing one visitor after a clear starts from depth zero again.
    let mut visitor = ToStringVisitor::new();
    forest[0].accept(&mut visitor);
    visitor.clear();
    forest[1].accept(&mut visitor);
    assert_eq!(visitor.result(), "{\n    break\n}");
}

#[test]
fn if_else_inside_while() {
    let counter = || -> easy_protocol::ast::Expression { Identifier::new("k").into() };
    let body = Block::new(vec![IfStatement::new(
        BinOp::new(
            BinaryOperator::Equal,
            BinOp::new(BinaryOperator::Modulo, counter(), Constant::int(2).into()).into(),
            Constant::int(0).into(),
        )
        .into(),
        Block::new(vec![Break.into()]).into(),
        Some(
            ExpStatement::new(UnaOp::new(UnaryOperator::PreDec, counter()).into()).into(),
        ),
    )
    .into()]);
    let stmt = WhileStatement::new(
        BinOp::new(BinaryOperator::Greater, counter(), Constant::int(0).into()).into(),
        body.into(),
    );

    let expected = indoc! {"
        while ((k > 0I)) {
            if (((k % 2I) == 0I)) {
                break
            } else (--k)
        }"};
    assert_eq!(stmt.to_string(), expected);
}

#[test]
fn grouped_declaration_keeps_order() {
    let mut ty = Type::primitive(PrimitiveType::Short);
    ty.set_dims(vec![Constant::int(2).into(), Constant::int(3).into()])
        .unwrap();
    let decl = Declaration::new(
        ty,
        vec![
            Declarator::new(Identifier::new("c"), None),
            Declarator::new(Identifier::new("a"), None),
            Declarator::new(Identifier::new("b"), None),
        ],
    )
    .unwrap();
    assert_eq!(decl.to_string(), "short[2I][3I] c a b");
}
