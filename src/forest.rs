use std::fs;
use std::path::Path;

use crate::ast::{
    Access, Assign, Ast, BinOp, Block, Break, Constant, Continue, Declaration, Declarator,
    ExpStatement, FormalParameter, FunctionCall, FunctionDeclaration, FunctionHeader, Identifier,
    IfStatement, IndexOf, Return, StructDeclaration, Type, TypeCast, UnaOp, WhileStatement,
};
use crate::error::{AstError, AstResult, CompileResult};
use crate::printer::ToStringVisitor;
use crate::visitor::{self, Node, Visitor};

pub fn parse_forest(source: &str) -> CompileResult<Vec<Ast>> {
    let forest: Vec<Ast> = serde_json::from_str(source)?;
    for root in &forest {
        check_invariants(root)?;
    }
    Ok(forest)
}

pub fn load_forest(path: impl AsRef<Path>) -> CompileResult<Vec<Ast>> {
    let source = fs::read_to_string(path)?;
    parse_forest(&source)
}

pub fn forest_to_json(forest: &[Ast]) -> CompileResult<String> {
    Ok(serde_json::to_string_pretty(forest)?)
}

/// Render every root with its own visitor.
pub fn render_forest(forest: &[Ast]) -> Vec<String> {
    forest.iter().map(ToStringVisitor::render).collect()
}

/// Check the invariants that decoding cannot enforce on its own.
pub fn check_invariants(root: &Ast) -> AstResult<()> {
    let mut check = InvariantCheck::default();
    root.accept(&mut check);
    match check.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Walks the whole tree and keeps the first violation it finds.
#[derive(Default)]
struct InvariantCheck {
    error: Option<AstError>,
}

impl Visitor for InvariantCheck {
    fn visit_identifier(&mut self, _id: &Identifier) {}

    fn visit_type(&mut self, ty: &Type) {
        visitor::walk_type(self, ty);
    }

    fn visit_constant(&mut self, constant: &Constant) {
        if self.error.is_none() {
            self.error = constant.validate().err();
        }
    }

    fn visit_function_call(&mut self, call: &FunctionCall) {
        visitor::walk_function_call(self, call);
    }

    fn visit_index_of(&mut self, index_of: &IndexOf) {
        visitor::walk_index_of(self, index_of);
    }

    fn visit_access(&mut self, access: &Access) {
        visitor::walk_access(self, access);
    }

    fn visit_type_cast(&mut self, type_cast: &TypeCast) {
        visitor::walk_type_cast(self, type_cast);
    }

    fn visit_una_op(&mut self, una_op: &UnaOp) {
        visitor::walk_una_op(self, una_op);
    }

    fn visit_bin_op(&mut self, bin_op: &BinOp) {
        visitor::walk_bin_op(self, bin_op);
    }

    fn visit_assign(&mut self, assign: &Assign) {
        visitor::walk_assign(self, assign);
    }

    fn visit_break(&mut self, _bk: &Break) {}

    fn visit_continue(&mut self, _ct: &Continue) {}

    fn visit_return(&mut self, ret: &Return) {
        visitor::walk_return(self, ret);
    }

    fn visit_block(&mut self, block: &Block) {
        visitor::walk_block(self, block);
    }

    fn visit_exp_statement(&mut self, stmt: &ExpStatement) {
        visitor::walk_exp_statement(self, stmt);
    }

    fn visit_declarator(&mut self, declarator: &Declarator) {
        visitor::walk_declarator(self, declarator);
    }

    fn visit_declaration(&mut self, declaration: &Declaration) {
        if declaration.declarators.is_empty() && self.error.is_none() {
            self.error = Some(AstError::EmptyDeclaration {
                ty: declaration.ty.to_string(),
            });
        }
        visitor::walk_declaration(self, declaration);
    }

    fn visit_if_statement(&mut self, stmt: &IfStatement) {
        visitor::walk_if_statement(self, stmt);
    }

    fn visit_while_statement(&mut self, stmt: &WhileStatement) {
        visitor::walk_while_statement(self, stmt);
    }

    fn visit_formal_parameter(&mut self, param: &FormalParameter) {
        visitor::walk_formal_parameter(self, param);
    }

    fn visit_function_header(&mut self, header: &FunctionHeader) {
        visitor::walk_function_header(self, header);
    }

    fn visit_function_declaration(&mut self, decl: &FunctionDeclaration) {
        visitor::walk_function_declaration(self, decl);
    }

    fn visit_struct_declaration(&mut self, decl: &StructDeclaration) {
        visitor::walk_struct_declaration(self, decl);
    }
}
