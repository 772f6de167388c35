use serde::{Deserialize, Serialize};

use crate::ast::{
    Access, Assign, Ast, BinOp, Block, Break, Constant, Continue, Declaration, Declarator,
    ExpStatement, Expression, FormalParameter, FunctionCall, FunctionDeclaration, FunctionHeader,
    Identifier, IfStatement, IndexOf, Return, Statement, StructDeclaration, Type, TypeBase,
    TypeCast, UnaOp, WhileStatement,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Identifier,
    Type,
    Constant,
    FunctionCall,
    IndexOf,
    Access,
    TypeCast,
    UnaOp,
    BinOp,
    Assign,
    Break,
    Continue,
    Return,
    Block,
    ExpStatement,
    Declarator,
    Declaration,
    IfStatement,
    WhileStatement,
    FormalParameter,
    FunctionHeader,
    FunctionDeclaration,
    StructDeclaration,
}

pub trait Visitor {
    fn visit_identifier(&mut self, id: &Identifier);

    fn visit_type(&mut self, ty: &Type);

    fn visit_constant(&mut self, constant: &Constant);

    fn visit_function_call(&mut self, call: &FunctionCall);

    fn visit_index_of(&mut self, index_of: &IndexOf);

    fn visit_access(&mut self, access: &Access);

    fn visit_type_cast(&mut self, type_cast: &TypeCast);

    fn visit_una_op(&mut self, una_op: &UnaOp);

    fn visit_bin_op(&mut self, bin_op: &BinOp);

    fn visit_assign(&mut self, assign: &Assign);

    fn visit_break(&mut self, bk: &Break);

    fn visit_continue(&mut self, ct: &Continue);

    fn visit_return(&mut self, ret: &Return);

    fn visit_block(&mut self, block: &Block);

    fn visit_exp_statement(&mut self, stmt: &ExpStatement);

    fn visit_declarator(&mut self, declarator: &Declarator);

    fn visit_declaration(&mut self, declaration: &Declaration);

    fn visit_if_statement(&mut self, stmt: &IfStatement);

    fn visit_while_statement(&mut self, stmt: &WhileStatement);

    fn visit_formal_parameter(&mut self, param: &FormalParameter);

    fn visit_function_header(&mut self, header: &FunctionHeader);

    fn visit_function_declaration(&mut self, decl: &FunctionDeclaration);

    fn visit_struct_declaration(&mut self, decl: &StructDeclaration);
}

/// Visitor with a no-op body for every kind. Implementors override the
/// kinds they care about and get [`Visitor`] for free.
pub trait DefaultVisitor {
    fn visit_identifier(&mut self, _id: &Identifier) {}

    fn visit_type(&mut self, _ty: &Type) {}

    fn visit_constant(&mut self, _constant: &Constant) {}

    fn visit_function_call(&mut self, _call: &FunctionCall) {}

    fn visit_index_of(&mut self, _index_of: &IndexOf) {}

    fn visit_access(&mut self, _access: &Access) {}

    fn visit_type_cast(&mut self, _type_cast: &TypeCast) {}

    fn visit_una_op(&mut self, _una_op: &UnaOp) {}

    fn visit_bin_op(&mut self, _bin_op: &BinOp) {}

    fn visit_assign(&mut self, _assign: &Assign) {}

    fn visit_break(&mut self, _bk: &Break) {}

    fn visit_continue(&mut self, _ct: &Continue) {}

    fn visit_return(&mut self, _ret: &Return) {}

    fn visit_block(&mut self, _block: &Block) {}

    fn visit_exp_statement(&mut self, _stmt: &ExpStatement) {}

    fn visit_declarator(&mut self, _declarator: &Declarator) {}

    fn visit_declaration(&mut self, _declaration: &Declaration) {}

    fn visit_if_statement(&mut self, _stmt: &IfStatement) {}

    fn visit_while_statement(&mut self, _stmt: &WhileStatement) {}

    fn visit_formal_parameter(&mut self, _param: &FormalParameter) {}

    fn visit_function_header(&mut self, _header: &FunctionHeader) {}

    fn visit_function_declaration(&mut self, _decl: &FunctionDeclaration) {}

    fn visit_struct_declaration(&mut self, _decl: &StructDeclaration) {}
}

macro_rules! forward_to_default {
    ($($method:ident($node:ty)),* $(,)?) => {
        impl<T: DefaultVisitor> Visitor for T {
            $(
                fn $method(&mut self, node: &$node) {
                    DefaultVisitor::$method(self, node)
                }
            )*
        }
    };
}

forward_to_default!(
    visit_identifier(Identifier),
    visit_type(Type),
    visit_constant(Constant),
    visit_function_call(FunctionCall),
    visit_index_of(IndexOf),
    visit_access(Access),
    visit_type_cast(TypeCast),
    visit_una_op(UnaOp),
    visit_bin_op(BinOp),
    visit_assign(Assign),
    visit_break(Break),
    visit_continue(Continue),
    visit_return(Return),
    visit_block(Block),
    visit_exp_statement(ExpStatement),
    visit_declarator(Declarator),
    visit_declaration(Declaration),
    visit_if_statement(IfStatement),
    visit_while_statement(WhileStatement),
    visit_formal_parameter(FormalParameter),
    visit_function_header(FunctionHeader),
    visit_function_declaration(FunctionDeclaration),
    visit_struct_declaration(StructDeclaration),
);

/// The dispatch hook every node carries.
pub trait Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);

    fn kind(&self) -> NodeKind;
}

macro_rules! impl_node {
    ($($node:ident => $method:ident),* $(,)?) => {
        $(
            impl Node for $node {
                fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                    visitor.$method(self)
                }

                fn kind(&self) -> NodeKind {
                    NodeKind::$node
                }
            }
        )*
    };
}

impl_node!(
    Identifier => visit_identifier,
    Type => visit_type,
    Constant => visit_constant,
    FunctionCall => visit_function_call,
    IndexOf => visit_index_of,
    Access => visit_access,
    TypeCast => visit_type_cast,
    UnaOp => visit_una_op,
    BinOp => visit_bin_op,
    Assign => visit_assign,
    Break => visit_break,
    Continue => visit_continue,
    Return => visit_return,
    Block => visit_block,
    ExpStatement => visit_exp_statement,
    Declarator => visit_declarator,
    Declaration => visit_declaration,
    IfStatement => visit_if_statement,
    WhileStatement => visit_while_statement,
    FormalParameter => visit_formal_parameter,
    FunctionHeader => visit_function_header,
    FunctionDeclaration => visit_function_declaration,
    StructDeclaration => visit_struct_declaration,
);

impl Node for Expression {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Expression::Identifier(node) => node.accept(visitor),
            Expression::Constant(node) => node.accept(visitor),
            Expression::FunctionCall(node) => node.accept(visitor),
            Expression::IndexOf(node) => node.accept(visitor),
            Expression::Access(node) => node.accept(visitor),
            Expression::TypeCast(node) => node.accept(visitor),
            Expression::UnaOp(node) => node.accept(visitor),
            Expression::BinOp(node) => node.accept(visitor),
            Expression::Assign(node) => node.accept(visitor),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Expression::Identifier(node) => Node::kind(node),
            Expression::Constant(node) => Node::kind(node),
            Expression::FunctionCall(node) => Node::kind(node),
            Expression::IndexOf(node) => Node::kind(node),
            Expression::Access(node) => Node::kind(node),
            Expression::TypeCast(node) => Node::kind(node),
            Expression::UnaOp(node) => Node::kind(node),
            Expression::BinOp(node) => Node::kind(node),
            Expression::Assign(node) => Node::kind(node),
        }
    }
}

impl Node for Statement {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Statement::Break(node) => node.accept(visitor),
            Statement::Continue(node) => node.accept(visitor),
            Statement::Return(node) => node.accept(visitor),
            Statement::Block(node) => node.accept(visitor),
            Statement::ExpStatement(node) => node.accept(visitor),
            Statement::Declaration(node) => node.accept(visitor),
            Statement::If(node) => node.accept(visitor),
            Statement::While(node) => node.accept(visitor),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Statement::Break(node) => Node::kind(node),
            Statement::Continue(node) => Node::kind(node),
            Statement::Return(node) => Node::kind(node),
            Statement::Block(node) => Node::kind(node),
            Statement::ExpStatement(node) => Node::kind(node),
            Statement::Declaration(node) => Node::kind(node),
            Statement::If(node) => Node::kind(node),
            Statement::While(node) => Node::kind(node),
        }
    }
}

impl Node for Ast {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Ast::Expression(node) => node.accept(visitor),
            Ast::Statement(node) => node.accept(visitor),
            Ast::Type(node) => node.accept(visitor),
            Ast::Declarator(node) => node.accept(visitor),
            Ast::FormalParameter(node) => node.accept(visitor),
            Ast::FunctionHeader(node) => node.accept(visitor),
            Ast::FunctionDeclaration(node) => node.accept(visitor),
            Ast::StructDeclaration(node) => node.accept(visitor),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Ast::Expression(node) => Node::kind(node),
            Ast::Statement(node) => Node::kind(node),
            Ast::Type(node) => Node::kind(node),
            Ast::Declarator(node) => Node::kind(node),
            Ast::FormalParameter(node) => Node::kind(node),
            Ast::FunctionHeader(node) => Node::kind(node),
            Ast::FunctionDeclaration(node) => Node::kind(node),
            Ast::StructDeclaration(node) => Node::kind(node),
        }
    }
}

// Child traversal for visitors that need to descend. Each function sends the
// visitor into the node's children in field order; leaves have nothing to walk.

pub fn walk_type<V: Visitor + ?Sized>(visitor: &mut V, ty: &Type) {
    if let TypeBase::Reference(id) = &ty.base {
        id.accept(visitor);
    }
    for dim in ty.dims.iter().flatten() {
        dim.accept(visitor);
    }
}

pub fn walk_function_call<V: Visitor + ?Sized>(visitor: &mut V, call: &FunctionCall) {
    call.func.accept(visitor);
    for arg in &call.args {
        arg.accept(visitor);
    }
}

pub fn walk_index_of<V: Visitor + ?Sized>(visitor: &mut V, index_of: &IndexOf) {
    index_of.var.accept(visitor);
    index_of.idx.accept(visitor);
}

pub fn walk_access<V: Visitor + ?Sized>(visitor: &mut V, access: &Access) {
    access.var.accept(visitor);
    access.field.accept(visitor);
}

pub fn walk_type_cast<V: Visitor + ?Sized>(visitor: &mut V, type_cast: &TypeCast) {
    type_cast.ty.accept(visitor);
    type_cast.expr.accept(visitor);
}

pub fn walk_una_op<V: Visitor + ?Sized>(visitor: &mut V, una_op: &UnaOp) {
    una_op.expr.accept(visitor);
}

pub fn walk_bin_op<V: Visitor + ?Sized>(visitor: &mut V, bin_op: &BinOp) {
    bin_op.left.accept(visitor);
    bin_op.right.accept(visitor);
}

pub fn walk_assign<V: Visitor + ?Sized>(visitor: &mut V, assign: &Assign) {
    assign.lval.accept(visitor);
    assign.rval.accept(visitor);
}

pub fn walk_return<V: Visitor + ?Sized>(visitor: &mut V, ret: &Return) {
    if let Some(value) = &ret.value {
        value.accept(visitor);
    }
}

pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) {
    for stat in &block.stats {
        stat.accept(visitor);
    }
}

pub fn walk_exp_statement<V: Visitor + ?Sized>(visitor: &mut V, stmt: &ExpStatement) {
    stmt.expr.accept(visitor);
}

pub fn walk_declarator<V: Visitor + ?Sized>(visitor: &mut V, declarator: &Declarator) {
    declarator.id.accept(visitor);
    if let Some(init) = &declarator.init {
        init.accept(visitor);
    }
}

pub fn walk_declaration<V: Visitor + ?Sized>(visitor: &mut V, declaration: &Declaration) {
    declaration.ty.accept(visitor);
    for declarator in &declaration.declarators {
        declarator.accept(visitor);
    }
}

pub fn walk_if_statement<V: Visitor + ?Sized>(visitor: &mut V, stmt: &IfStatement) {
    stmt.condition.accept(visitor);
    stmt.then_branch.accept(visitor);
    if let Some(else_branch) = &stmt.else_branch {
        else_branch.accept(visitor);
    }
}

pub fn walk_while_statement<V: Visitor + ?Sized>(visitor: &mut V, stmt: &WhileStatement) {
    stmt.condition.accept(visitor);
    stmt.body.accept(visitor);
}

pub fn walk_formal_parameter<V: Visitor + ?Sized>(visitor: &mut V, param: &FormalParameter) {
    param.ty.accept(visitor);
    param.id.accept(visitor);
}

pub fn walk_function_header<V: Visitor + ?Sized>(visitor: &mut V, header: &FunctionHeader) {
    header.ty.accept(visitor);
    header.id.accept(visitor);
    for param in &header.params {
        param.accept(visitor);
    }
}

pub fn walk_function_declaration<V: Visitor + ?Sized>(visitor: &mut V, decl: &FunctionDeclaration) {
    decl.header.accept(visitor);
    decl.body.accept(visitor);
}

pub fn walk_struct_declaration<V: Visitor + ?Sized>(visitor: &mut V, decl: &StructDeclaration) {
    decl.id.accept(visitor);
    for field in &decl.fields {
        field.accept(visitor);
    }
}
