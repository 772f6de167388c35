use crate::ast::{
    Access, Assign, Ast, BinOp, Block, Declaration, Declarator, ExpStatement, Expression,
    FormalParameter, FunctionCall, FunctionDeclaration, FunctionHeader, Identifier, IfStatement,
    IndexOf, Return, Statement, StructDeclaration, Type, TypeBase, TypeCast, UnaOp,
    WhileStatement,
};
use crate::visitor::NodeKind;

/// Consume a tree and return the kinds of its nodes in release order.
/// Children are always released before their parent.
pub fn release(root: Ast) -> Vec<NodeKind> {
    let mut releaser = Releaser::default();
    releaser.ast(root);
    releaser.released
}

/// Release every root of a forest and return how many nodes were freed.
pub fn release_forest(forest: Vec<Ast>) -> usize {
    forest.into_iter().map(|root| release(root).len()).sum()
}

#[derive(Default)]
struct Releaser {
    released: Vec<NodeKind>,
}

impl Releaser {
    fn done(&mut self, kind: NodeKind) {
        self.released.push(kind);
    }

    fn ast(&mut self, ast: Ast) {
        match ast {
            Ast::Expression(expr) => self.expression(expr),
            Ast::Statement(stmt) => self.statement(stmt),
            Ast::Type(ty) => self.ty(ty),
            Ast::Declarator(declarator) => self.declarator(declarator),
            Ast::FormalParameter(param) => self.formal_parameter(param),
            Ast::FunctionHeader(header) => self.function_header(header),
            Ast::FunctionDeclaration(decl) => self.function_declaration(decl),
            Ast::StructDeclaration(decl) => self.struct_declaration(decl),
        }
    }

    fn identifier(&mut self, id: Identifier) {
        drop(id);
        self.done(NodeKind::Identifier);
    }

    fn ty(&mut self, ty: Type) {
        let Type { base, dims } = ty;
        if let TypeBase::Reference(id) = base {
            self.identifier(id);
        }
        for dim in dims.into_iter().flatten() {
            self.expression(dim);
        }
        self.done(NodeKind::Type);
    }

    fn expression(&mut self, expr: Expression) {
        match expr {
            Expression::Identifier(id) => self.identifier(id),
            Expression::Constant(constant) => {
                drop(constant);
                self.done(NodeKind::Constant);
            }
            Expression::FunctionCall(FunctionCall { func, args }) => {
                self.expression(*func);
                for arg in args {
                    self.expression(arg);
                }
                self.done(NodeKind::FunctionCall);
            }
            Expression::IndexOf(IndexOf { var, idx }) => {
                self.expression(*var);
                self.expression(*idx);
                self.done(NodeKind::IndexOf);
            }
            Expression::Access(Access { var, field }) => {
                self.expression(*var);
                self.expression(*field);
                self.done(NodeKind::Access);
            }
            Expression::TypeCast(TypeCast { ty, expr }) => {
                self.ty(ty);
                self.expression(*expr);
                self.done(NodeKind::TypeCast);
            }
            Expression::UnaOp(UnaOp { expr, .. }) => {
                self.expression(*expr);
                self.done(NodeKind::UnaOp);
            }
            Expression::BinOp(BinOp { left, right, .. }) => {
                self.expression(*left);
                self.expression(*right);
                self.done(NodeKind::BinOp);
            }
            Expression::Assign(Assign { lval, rval, .. }) => {
                self.expression(*lval);
                self.expression(*rval);
                self.done(NodeKind::Assign);
            }
        }
    }

    fn statement(&mut self, stmt: Statement) {
        match stmt {
            Statement::Break(_) => self.done(NodeKind::Break),
            Statement::Continue(_) => self.done(NodeKind::Continue),
            Statement::Return(Return { value }) => {
                if let Some(value) = value {
                    self.expression(value);
                }
                self.done(NodeKind::Return);
            }
            Statement::Block(block) => self.block(block),
            Statement::ExpStatement(ExpStatement { expr }) => {
                self.expression(expr);
                self.done(NodeKind::ExpStatement);
            }
            Statement::Declaration(decl) => self.declaration(decl),
            Statement::If(IfStatement {
                condition,
                then_branch,
                else_branch,
            }) => {
                self.expression(condition);
                self.statement(*then_branch);
                if let Some(else_branch) = else_branch {
                    self.statement(*else_branch);
                }
                self.done(NodeKind::IfStatement);
            }
            Statement::While(WhileStatement { condition, body }) => {
                self.expression(condition);
                self.statement(*body);
                self.done(NodeKind::WhileStatement);
            }
        }
    }

    fn block(&mut self, block: Block) {
        for stat in block.stats {
            self.statement(stat);
        }
        self.done(NodeKind::Block);
    }

    fn declarator(&mut self, declarator: Declarator) {
        let Declarator { id, init } = declarator;
        self.identifier(id);
        if let Some(init) = init {
            self.expression(init);
        }
        self.done(NodeKind::Declarator);
    }

    fn declaration(&mut self, decl: Declaration) {
        let Declaration { ty, declarators } = decl;
        self.ty(ty);
        for declarator in declarators {
            self.declarator(declarator);
        }
        self.done(NodeKind::Declaration);
    }

    fn formal_parameter(&mut self, param: FormalParameter) {
        let FormalParameter { ty, id } = param;
        self.ty(ty);
        self.identifier(id);
        self.done(NodeKind::FormalParameter);
    }

    fn function_header(&mut self, header: FunctionHeader) {
        let FunctionHeader { ty, id, params } = header;
        self.ty(ty);
        self.identifier(id);
        for param in params {
            self.formal_parameter(param);
        }
        self.done(NodeKind::FunctionHeader);
    }

    fn function_declaration(&mut self, decl: FunctionDeclaration) {
        let FunctionDeclaration { header, body } = decl;
        self.function_header(header);
        self.block(body);
        self.done(NodeKind::FunctionDeclaration);
    }

    fn struct_declaration(&mut self, decl: StructDeclaration) {
        let StructDeclaration { id, fields } = decl;
        self.identifier(id);
        for field in fields {
            self.declaration(field);
        }
        self.done(NodeKind::StructDeclaration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, Break, Constant, PrimitiveType};
    use crate::visitor::{self, DefaultVisitor, Node};

    /// Counts every node reachable from a root.
    #[derive(Default)]
    struct NodeCounter {
        count: usize,
    }

    impl DefaultVisitor for NodeCounter {
        fn visit_identifier(&mut self, _id: &Identifier) {
            self.count += 1;
        }

        fn visit_type(&mut self, ty: &Type) {
            self.count += 1;
            visitor::walk_type(self, ty);
        }

        fn visit_constant(&mut self, _constant: &Constant) {
            self.count += 1;
        }

        fn visit_bin_op(&mut self, bin_op: &BinOp) {
            self.count += 1;
            visitor::walk_bin_op(self, bin_op);
        }

        fn visit_break(&mut self, _bk: &Break) {
            self.count += 1;
        }

        fn visit_return(&mut self, ret: &Return) {
            self.count += 1;
            visitor::walk_return(self, ret);
        }

        fn visit_block(&mut self, block: &Block) {
            self.count += 1;
            visitor::walk_block(self, block);
        }

        fn visit_declarator(&mut self, declarator: &Declarator) {
            self.count += 1;
            visitor::walk_declarator(self, declarator);
        }

        fn visit_declaration(&mut self, declaration: &Declaration) {
            self.count += 1;
            visitor::walk_declaration(self, declaration);
        }

        fn visit_if_statement(&mut self, stmt: &IfStatement) {
            self.count += 1;
            visitor::walk_if_statement(self, stmt);
        }

        fn visit_formal_parameter(&mut self, param: &FormalParameter) {
            self.count += 1;
            visitor::walk_formal_parameter(self, param);
        }

        fn visit_function_header(&mut self, header: &FunctionHeader) {
            self.count += 1;
            visitor::walk_function_header(self, header);
        }

        fn visit_function_declaration(&mut self, decl: &FunctionDeclaration) {
            self.count += 1;
            visitor::walk_function_declaration(self, decl);
        }
    }

    fn sample_function() -> Ast {
        let int = || Type::primitive(PrimitiveType::Int);
        let header = FunctionHeader::new(
            int(),
            Identifier::new("abs"),
            vec![FormalParameter::new(int(), Identifier::new("x"))],
        );
        let body = Block::new(vec![
            Declaration::new(int(), vec![Declarator::new(Identifier::new("y"), None)])
                .unwrap()
                .into(),
            IfStatement::new(
                BinOp::new(
                    BinaryOperator::Less,
                    Identifier::new("x").into(),
                    Constant::int(0).into(),
                )
                .into(),
                Return::new(None).into(),
                None,
            )
            .into(),
            Break.into(),
        ]);
        FunctionDeclaration::new(header, body).into()
    }

    #[test]
    fn test_release_is_post_order() {
        let root: Ast = Statement::from(Return::new(Some(
            BinOp::new(
                BinaryOperator::Add,
                Identifier::new("a").into(),
                Constant::int(1).into(),
            )
            .into(),
        )))
        .into();

        assert_eq!(
            release(root),
            vec![
                NodeKind::Identifier,
                NodeKind::Constant,
                NodeKind::BinOp,
                NodeKind::Return,
            ]
        );
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let bare: Ast = Statement::from(Return::new(None)).into();
        assert_eq!(release(bare), vec![NodeKind::Return]);

        let declarator: Ast = Declarator::new(Identifier::new("v"), None).into();
        assert_eq!(
            release(declarator),
            vec![NodeKind::Identifier, NodeKind::Declarator]
        );
    }

    #[test]
    fn test_every_node_released_once() {
        let root = sample_function();
        let mut counter = NodeCounter::default();
        root.accept(&mut counter);

        let released = release(root);
        assert_eq!(released.len(), counter.count);
        assert_eq!(released.len(), 18);
        assert_eq!(released.last(), Some(&NodeKind::FunctionDeclaration));
        assert_eq!(
            released.iter().filter(|k| **k == NodeKind::Identifier).count(),
            4
        );
    }

    #[test]
    fn test_release_forest_counts_all_roots() {
        let forest = vec![
            sample_function(),
            Statement::from(Break).into(),
            Type::reference(Identifier::new("Point")).into(),
        ];
        // 18 + 1 + 2
        assert_eq!(release_forest(forest), 21);
    }
}
