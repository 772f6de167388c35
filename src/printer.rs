use std::fmt;

use crate::ast::{
    Access, Assign, Ast, BinOp, Block, Break, Constant, Continue, Declaration, Declarator,
    ExpStatement, Expression, FormalParameter, FunctionCall, FunctionDeclaration, FunctionHeader,
    Identifier, IfStatement, IndexOf, PrimitiveType, Return, Scalar, Statement, StructDeclaration,
    Type, TypeBase, TypeCast, UnaOp, WhileStatement,
};
use crate::visitor::{Node, Visitor};

// Every compound expression is fully parenthesized; the output is never minimal.
pub const INDENT: &str = "    ";

/// Emitted in place of a literal whose kind cannot read its payload.
pub const ILLEGAL_TYPE: &str = "<illegal type>";

/// Renders nodes into an internal buffer.
///
/// Block nesting depth lives on the instance, so independent renderers never
/// see each other's indentation. One instance serves one traversal at a time.
#[derive(Debug, Default)]
pub struct ToStringVisitor {
    result: String,
    indent_level: usize,
}

impl ToStringVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a single node with a fresh visitor.
    pub fn render<N: Node>(node: &N) -> String {
        let mut visitor = Self::new();
        node.accept(&mut visitor);
        visitor.into_result()
    }

    pub fn clear(&mut self) {
        self.result.clear();
        self.indent_level = 0;
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn into_result(self) -> String {
        self.result
    }

    fn visit_list<'a, N, I>(&mut self, items: I, separator: &str, prefix: &str, suffix: &str)
    where
        N: Node + 'a,
        I: IntoIterator<Item = &'a N>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.result.push_str(separator);
            }
            self.result.push_str(prefix);
            item.accept(self);
            self.result.push_str(suffix);
        }
    }

    fn push_literal(&mut self, kind: PrimitiveType, value: Scalar) {
        match (kind, value) {
            (PrimitiveType::Bool, value) => {
                self.result
                    .push_str(if value.is_zero() { "false" } else { "true" });
                return;
            }
            (_, Scalar::Int(v)) => self.result.push_str(&v.to_string()),
            (PrimitiveType::Float, Scalar::Float(v)) => {
                self.result.push_str(&(v as f32).to_string())
            }
            (PrimitiveType::Double, Scalar::Float(v)) => self.result.push_str(&v.to_string()),
            (_, Scalar::Float(_)) => {
                self.result.push_str(ILLEGAL_TYPE);
                return;
            }
        }
        self.result.push_str(kind.suffix().unwrap_or(ILLEGAL_TYPE));
    }
}

impl Visitor for ToStringVisitor {
    fn visit_identifier(&mut self, id: &Identifier) {
        self.result.push_str(&id.name);
    }

    fn visit_type(&mut self, ty: &Type) {
        match &ty.base {
            TypeBase::Primitive(kind) => self.result.push_str(kind.as_str()),
            TypeBase::Reference(id) => id.accept(self),
        }
        if let Some(dims) = &ty.dims {
            self.visit_list(dims, "", "[", "]");
        }
    }

    fn visit_constant(&mut self, constant: &Constant) {
        self.push_literal(constant.kind, constant.value);
    }

    fn visit_function_call(&mut self, call: &FunctionCall) {
        call.func.accept(self);
        self.result.push('(');
        self.visit_list(&call.args, ", ", "", "");
        self.result.push(')');
    }

    fn visit_index_of(&mut self, index_of: &IndexOf) {
        index_of.var.accept(self);
        self.result.push('[');
        index_of.idx.accept(self);
        self.result.push(']');
    }

    fn visit_access(&mut self, access: &Access) {
        self.result.push('(');
        access.var.accept(self);
        self.result.push('.');
        access.field.accept(self);
        self.result.push(')');
    }

    fn visit_type_cast(&mut self, type_cast: &TypeCast) {
        self.result.push('(');
        type_cast.ty.accept(self);
        self.result.push(' ');
        type_cast.expr.accept(self);
        self.result.push(')');
    }

    fn visit_una_op(&mut self, una_op: &UnaOp) {
        self.result.push('(');
        if una_op.op.is_postfix() {
            una_op.expr.accept(self);
            self.result.push_str(una_op.op.as_str());
        } else {
            self.result.push_str(una_op.op.as_str());
            una_op.expr.accept(self);
        }
        self.result.push(')');
    }

    fn visit_bin_op(&mut self, bin_op: &BinOp) {
        self.result.push('(');
        bin_op.left.accept(self);
        self.result.push(' ');
        self.result.push_str(bin_op.op.as_str());
        self.result.push(' ');
        bin_op.right.accept(self);
        self.result.push(')');
    }

    fn visit_assign(&mut self, assign: &Assign) {
        self.result.push('(');
        assign.lval.accept(self);
        self.result.push(' ');
        self.result.push_str(assign.op.as_str());
        self.result.push(' ');
        assign.rval.accept(self);
        self.result.push(')');
    }

    fn visit_break(&mut self, _bk: &Break) {
        self.result.push_str("break");
    }

    fn visit_continue(&mut self, _ct: &Continue) {
        self.result.push_str("continue");
    }

    fn visit_return(&mut self, ret: &Return) {
        self.result.push_str("return");
        if let Some(value) = &ret.value {
            self.result.push(' ');
            value.accept(self);
        }
    }

    fn visit_block(&mut self, block: &Block) {
        let indents = INDENT.repeat(self.indent_level);

        self.result.push_str("{\n");
        self.indent_level += 1;
        let prefix = format!("{}{}", indents, INDENT);
        self.visit_list(&block.stats, "\n", &prefix, "");
        self.indent_level -= 1;
        self.result.push('\n');
        self.result.push_str(&indents);
        self.result.push('}');
    }

    fn visit_exp_statement(&mut self, stmt: &ExpStatement) {
        stmt.expr.accept(self);
    }

    fn visit_declarator(&mut self, declarator: &Declarator) {
        declarator.id.accept(self);
        if let Some(init) = &declarator.init {
            self.result.push_str(" = ");
            init.accept(self);
        }
    }

    fn visit_declaration(&mut self, declaration: &Declaration) {
        declaration.ty.accept(self);
        self.result.push(' ');
        self.visit_list(&declaration.declarators, " ", "", "");
    }

    fn visit_if_statement(&mut self, stmt: &IfStatement) {
        self.result.push_str("if (");
        stmt.condition.accept(self);
        self.result.push_str(") ");
        stmt.then_branch.accept(self);
        if let Some(else_branch) = &stmt.else_branch {
            self.result.push_str(" else ");
            else_branch.accept(self);
        }
    }

    fn visit_while_statement(&mut self, stmt: &WhileStatement) {
        self.result.push_str("while (");
        stmt.condition.accept(self);
        self.result.push_str(") ");
        stmt.body.accept(self);
    }

    fn visit_formal_parameter(&mut self, param: &FormalParameter) {
        param.ty.accept(self);
        self.result.push(' ');
        param.id.accept(self);
    }

    fn visit_function_header(&mut self, header: &FunctionHeader) {
        header.ty.accept(self);
        self.result.push(' ');
        header.id.accept(self);
        self.result.push('(');
        self.visit_list(&header.params, ", ", "", "");
        self.result.push(')');
    }

    fn visit_function_declaration(&mut self, decl: &FunctionDeclaration) {
        decl.header.accept(self);
        self.result.push(' ');
        decl.body.accept(self);
    }

    fn visit_struct_declaration(&mut self, decl: &StructDeclaration) {
        self.result.push_str("struct ");
        decl.id.accept(self);
        self.result.push_str(" {\n");
        self.visit_list(&decl.fields, "\n", INDENT, "");
        self.result.push_str("\n}");
    }
}

macro_rules! impl_display {
    ($($node:ty),* $(,)?) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str(&ToStringVisitor::render(self))
                }
            }
        )*
    };
}

impl_display!(
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
    Expression,
    Statement,
    Ast,
);
