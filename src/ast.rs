use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AstError, AstResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// One-letter literal suffix. `bool` literals are spelled out and have none.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            PrimitiveType::Bool => None,
            PrimitiveType::Byte => Some("B"),
            PrimitiveType::Short => Some("S"),
            PrimitiveType::Int => Some("I"),
            PrimitiveType::Long => Some("L"),
            PrimitiveType::Float => Some("F"),
            PrimitiveType::Double => Some("D"),
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, PrimitiveType::Float | PrimitiveType::Double)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOperator {
    Pos,
    Neg,
    Not,
    BitNot,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Pos => "+",
            UnaryOperator::Neg => "-",
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::PreInc | UnaryOperator::PostInc => "++",
            UnaryOperator::PreDec | UnaryOperator::PostDec => "--",
        }
    }

    pub fn is_postfix(&self) -> bool {
        matches!(self, UnaryOperator::PostInc | UnaryOperator::PostDec)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    BitXor,
    BitAnd,
    BitOr,
    ShiftLeft,
    ShiftRight,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    And,
    Or,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    BitXor,
    BitAnd,
    BitOr,
    ShiftLeft,
    ShiftRight,
}

impl AssignOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::Add => "+=",
            AssignOperator::Subtract => "-=",
            AssignOperator::Multiply => "*=",
            AssignOperator::Divide => "/=",
            AssignOperator::Modulo => "%=",
            AssignOperator::BitXor => "^=",
            AssignOperator::BitAnd => "&=",
            AssignOperator::BitOr => "|=",
            AssignOperator::ShiftLeft => "<<=",
            AssignOperator::ShiftRight => ">>=",
        }
    }
}

impl fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Identifier

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier {
    pub(crate) name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// Type

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeBase {
    Primitive(PrimitiveType),
    Reference(Identifier),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Type {
    pub(crate) base: TypeBase,
    /// Sizes of the array dimensions. `None` is a scalar type, which is not
    /// the same thing as an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) dims: Option<Vec<Expression>>,
}

impl Type {
    pub fn primitive(kind: PrimitiveType) -> Self {
        Self {
            base: TypeBase::Primitive(kind),
            dims: None,
        }
    }

    pub fn reference(id: Identifier) -> Self {
        Self {
            base: TypeBase::Reference(id),
            dims: None,
        }
    }

    /// Attach the dimension list. Can only happen once per type.
    pub fn set_dims(&mut self, dims: Vec<Expression>) -> AstResult<()> {
        if self.dims.is_some() {
            return Err(AstError::DimsAlreadySet {
                ty: self.to_string(),
            });
        }
        self.dims = Some(dims);
        Ok(())
    }

    pub fn base(&self) -> &TypeBase {
        &self.base
    }

    pub fn dims(&self) -> Option<&[Expression]> {
        self.dims.as_deref()
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.base, TypeBase::Primitive(_))
    }
}

// Expressions

/// Raw literal payload. How it reads is decided by the constant's kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Int(v) => *v == 0,
            Scalar::Float(v) => *v == 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub(crate) kind: PrimitiveType,
    pub(crate) value: Scalar,
}

impl Constant {
    pub fn new(kind: PrimitiveType, value: i64) -> Self {
        Self {
            kind,
            value: Scalar::Int(value),
        }
    }

    pub fn with_float(kind: PrimitiveType, value: f64) -> AstResult<Self> {
        let constant = Self {
            kind,
            value: Scalar::Float(value),
        };
        constant.validate()?;
        Ok(constant)
    }

    /// Check that the kind can read the payload as a decimal literal.
    pub fn validate(&self) -> AstResult<()> {
        let Scalar::Float(value) = self.value else {
            return Ok(());
        };
        if !self.kind.is_floating() {
            return Err(AstError::NotAFloatKind { kind: self.kind });
        }
        let in_range = match self.kind {
            PrimitiveType::Float => value.is_finite() && value.abs() <= f32::MAX as f64,
            _ => value.is_finite(),
        };
        if !in_range {
            return Err(AstError::FloatOutOfRange {
                kind: self.kind,
                value: value.to_string(),
            });
        }
        Ok(())
    }

    pub fn bool(value: bool) -> Self {
        Self::new(PrimitiveType::Bool, value as i64)
    }

    pub fn int(value: i32) -> Self {
        Self::new(PrimitiveType::Int, value as i64)
    }

    pub fn long(value: i64) -> Self {
        Self::new(PrimitiveType::Long, value)
    }

    pub fn float(value: f32) -> Self {
        Self {
            kind: PrimitiveType::Float,
            value: Scalar::Float(value as f64),
        }
    }

    pub fn double(value: f64) -> Self {
        Self {
            kind: PrimitiveType::Double,
            value: Scalar::Float(value),
        }
    }

    pub fn kind(&self) -> PrimitiveType {
        self.kind
    }

    pub fn value(&self) -> Scalar {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub(crate) func: Box<Expression>,
    pub(crate) args: Vec<Expression>,
}

impl FunctionCall {
    pub fn new(func: Expression, args: Vec<Expression>) -> Self {
        Self {
            func: Box::new(func),
            args,
        }
    }

    pub fn func(&self) -> &Expression {
        &self.func
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexOf {
    pub(crate) var: Box<Expression>,
    pub(crate) idx: Box<Expression>,
}

impl IndexOf {
    pub fn new(var: Expression, idx: Expression) -> Self {
        Self {
            var: Box::new(var),
            idx: Box::new(idx),
        }
    }

    pub fn var(&self) -> &Expression {
        &self.var
    }

    pub fn idx(&self) -> &Expression {
        &self.idx
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Access {
    pub(crate) var: Box<Expression>,
    pub(crate) field: Box<Expression>,
}

impl Access {
    pub fn new(var: Expression, field: Expression) -> Self {
        Self {
            var: Box::new(var),
            field: Box::new(field),
        }
    }

    pub fn var(&self) -> &Expression {
        &self.var
    }

    pub fn field(&self) -> &Expression {
        &self.field
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCast {
    #[serde(rename = "type")]
    pub(crate) ty: Type,
    pub(crate) expr: Box<Expression>,
}

impl TypeCast {
    pub fn new(ty: Type, expr: Expression) -> Self {
        Self {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaOp {
    pub(crate) op: UnaryOperator,
    pub(crate) expr: Box<Expression>,
}

impl UnaOp {
    pub fn new(op: UnaryOperator, expr: Expression) -> Self {
        Self {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn op(&self) -> UnaryOperator {
        self.op
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinOp {
    pub(crate) op: BinaryOperator,
    pub(crate) left: Box<Expression>,
    pub(crate) right: Box<Expression>,
}

impl BinOp {
    pub fn new(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn op(&self) -> BinaryOperator {
        self.op
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub(crate) op: AssignOperator,
    pub(crate) lval: Box<Expression>,
    pub(crate) rval: Box<Expression>,
}

impl Assign {
    pub fn new(op: AssignOperator, lval: Expression, rval: Expression) -> Self {
        Self {
            op,
            lval: Box::new(lval),
            rval: Box::new(rval),
        }
    }

    pub fn op(&self) -> AssignOperator {
        self.op
    }

    pub fn lval(&self) -> &Expression {
        &self.lval
    }

    pub fn rval(&self) -> &Expression {
        &self.rval
    }
}

// Statements

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    #[serde(default)]
    pub(crate) value: Option<Expression>,
}

impl Return {
    pub fn new(value: Option<Expression>) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub(crate) stats: Vec<Statement>,
}

impl Block {
    pub fn new(stats: Vec<Statement>) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &[Statement] {
        &self.stats
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpStatement {
    pub(crate) expr: Expression,
}

impl ExpStatement {
    pub fn new(expr: Expression) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declarator {
    pub(crate) id: Identifier,
    #[serde(default)]
    pub(crate) init: Option<Expression>,
}

impl Declarator {
    pub fn new(id: Identifier, init: Option<Expression>) -> Self {
        Self { id, init }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn init(&self) -> Option<&Expression> {
        self.init.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(rename = "type")]
    pub(crate) ty: Type,
    pub(crate) declarators: Vec<Declarator>,
}

impl Declaration {
    pub fn new(ty: Type, declarators: Vec<Declarator>) -> AstResult<Self> {
        if declarators.is_empty() {
            return Err(AstError::EmptyDeclaration {
                ty: ty.to_string(),
            });
        }
        Ok(Self { ty, declarators })
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn declarators(&self) -> &[Declarator] {
        &self.declarators
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub(crate) condition: Expression,
    pub(crate) then_branch: Box<Statement>,
    #[serde(default)]
    pub(crate) else_branch: Option<Box<Statement>>,
}

impl IfStatement {
    pub fn new(condition: Expression, then_branch: Statement, else_branch: Option<Statement>) -> Self {
        Self {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    pub fn then_branch(&self) -> &Statement {
        &self.then_branch
    }

    pub fn else_branch(&self) -> Option<&Statement> {
        self.else_branch.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub(crate) condition: Expression,
    pub(crate) body: Box<Statement>,
}

impl WhileStatement {
    pub fn new(condition: Expression, body: Statement) -> Self {
        Self {
            condition,
            body: Box::new(body),
        }
    }

    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    pub fn body(&self) -> &Statement {
        &self.body
    }
}

// Top-level declarations

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalParameter {
    #[serde(rename = "type")]
    pub(crate) ty: Type,
    pub(crate) id: Identifier,
}

impl FormalParameter {
    pub fn new(ty: Type, id: Identifier) -> Self {
        Self { ty, id }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionHeader {
    #[serde(rename = "type")]
    pub(crate) ty: Type,
    pub(crate) id: Identifier,
    pub(crate) params: Vec<FormalParameter>,
}

impl FunctionHeader {
    pub fn new(ty: Type, id: Identifier, params: Vec<FormalParameter>) -> Self {
        Self { ty, id, params }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn params(&self) -> &[FormalParameter] {
        &self.params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub(crate) header: FunctionHeader,
    pub(crate) body: Block,
}

impl FunctionDeclaration {
    pub fn new(header: FunctionHeader, body: Block) -> Self {
        Self { header, body }
    }

    pub fn header(&self) -> &FunctionHeader {
        &self.header
    }

    pub fn body(&self) -> &Block {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDeclaration {
    pub(crate) id: Identifier,
    pub(crate) fields: Vec<Declaration>,
}

impl StructDeclaration {
    pub fn new(id: Identifier, fields: Vec<Declaration>) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn fields(&self) -> &[Declaration] {
        &self.fields
    }
}

// Categories

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Identifier(Identifier),
    Constant(Constant),
    FunctionCall(FunctionCall),
    IndexOf(IndexOf),
    Access(Access),
    TypeCast(TypeCast),
    UnaOp(UnaOp),
    BinOp(BinOp),
    Assign(Assign),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Break(Break),
    Continue(Continue),
    Return(Return),
    Block(Block),
    ExpStatement(ExpStatement),
    Declaration(Declaration),
    If(IfStatement),
    While(WhileStatement),
}

/// A root of the forest handed over by the parser. Any node kind can be one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ast {
    Expression(Expression),
    Statement(Statement),
    Type(Type),
    Declarator(Declarator),
    FormalParameter(FormalParameter),
    FunctionHeader(FunctionHeader),
    FunctionDeclaration(FunctionDeclaration),
    StructDeclaration(StructDeclaration),
}

macro_rules! impl_from {
    ($category:ident { $($node:ident => $variant:ident),* $(,)? }) => {
        $(
            impl From<$node> for $category {
                fn from(node: $node) -> Self {
                    $category::$variant(node)
                }
            }
        )*
    };
}

impl_from!(Expression {
    Identifier => Identifier,
    Constant => Constant,
    FunctionCall => FunctionCall,
    IndexOf => IndexOf,
    Access => Access,
    TypeCast => TypeCast,
    UnaOp => UnaOp,
    BinOp => BinOp,
    Assign => Assign,
});

impl_from!(Statement {
    Break => Break,
    Continue => Continue,
    Return => Return,
    Block => Block,
    ExpStatement => ExpStatement,
    Declaration => Declaration,
    IfStatement => If,
    WhileStatement => While,
});

impl_from!(Ast {
    Expression => Expression,
    Statement => Statement,
    Type => Type,
    Declarator => Declarator,
    FormalParameter => FormalParameter,
    FunctionHeader => FunctionHeader,
    FunctionDeclaration => FunctionDeclaration,
    StructDeclaration => StructDeclaration,
});

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expression {
        Identifier::new(name).into()
    }

    #[test]
    fn test_set_dims_only_once() {
        let mut ty = Type::primitive(PrimitiveType::Int);
        assert_eq!(ty.dims(), None);

        ty.set_dims(vec![Constant::int(3).into()]).unwrap();
        assert_eq!(ty.dims().map(|d| d.len()), Some(1));

        let result = ty.set_dims(vec![]);
        assert!(matches!(result, Err(AstError::DimsAlreadySet { .. })));
        assert_eq!(ty.dims().map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_absent_dims_differ_from_empty_dims() {
        let scalar = Type::primitive(PrimitiveType::Int);
        let mut empty = Type::primitive(PrimitiveType::Int);
        empty.set_dims(vec![]).unwrap();

        assert_eq!(empty.dims(), Some(&[][..]));
        assert_ne!(scalar, empty);
    }

    #[test]
    fn test_reference_type() {
        let ty = Type::reference(Identifier::new("Point"));
        assert!(!ty.is_primitive());
        assert_eq!(ty.base(), &TypeBase::Reference(Identifier::new("Point")));
    }

    #[test]
    fn test_empty_declaration_rejected() {
        let result = Declaration::new(Type::primitive(PrimitiveType::Int), vec![]);
        assert!(matches!(result, Err(AstError::EmptyDeclaration { .. })));
    }

    #[test]
    fn test_float_payload_needs_float_kind() {
        assert!(Constant::with_float(PrimitiveType::Double, 1.5).is_ok());
        let result = Constant::with_float(PrimitiveType::Int, 1.5);
        assert_eq!(
            result,
            Err(AstError::NotAFloatKind {
                kind: PrimitiveType::Int
            })
        );
    }

    #[test]
    fn test_float_payload_must_fit_its_kind() {
        let result = Constant::with_float(PrimitiveType::Float, 1e40);
        assert!(matches!(
            result,
            Err(AstError::FloatOutOfRange {
                kind: PrimitiveType::Float,
                ..
            })
        ));
        assert!(Constant::with_float(PrimitiveType::Double, 1e40).is_ok());
        assert!(Constant::with_float(PrimitiveType::Float, f32::MAX as f64).is_ok());
        assert!(Constant::with_float(PrimitiveType::Double, f64::NAN).is_err());
        assert!(Constant::with_float(PrimitiveType::Float, f64::NEG_INFINITY).is_err());

        assert!(Constant::double(f64::INFINITY).validate().is_err());
        assert!(Constant::long(i64::MAX).validate().is_ok());
    }

    #[test]
    fn test_constant_kind_governs_payload() {
        let c = Constant::new(PrimitiveType::Double, -3);
        assert_eq!(c.kind(), PrimitiveType::Double);
        assert_eq!(c.value(), Scalar::Int(-3));
        assert!(Constant::bool(false).value().is_zero());
    }

    #[test]
    fn test_nodes_of_different_kinds_are_not_equal() {
        let a: Statement = Break.into();
        let b: Statement = Continue.into();
        assert_ne!(a, b);
        assert_ne!(ident("x"), Expression::from(Constant::int(0)));
        assert_eq!(ident("x"), ident("x"));
    }

    #[test]
    fn test_operator_spelling() {
        assert_eq!(BinaryOperator::ShiftRight.as_str(), ">>");
        assert_eq!(BinaryOperator::Or.as_str(), "||");
        assert_eq!(AssignOperator::ShiftLeft.as_str(), "<<=");
        assert_eq!(AssignOperator::Assign.as_str(), "=");
        assert_eq!(UnaryOperator::PostDec.as_str(), "--");
        assert!(UnaryOperator::PostInc.is_postfix());
        assert!(!UnaryOperator::PreInc.is_postfix());
    }

    #[test]
    fn test_primitive_keywords_and_suffixes() {
        assert_eq!(PrimitiveType::Short.to_string(), "short");
        assert_eq!(PrimitiveType::Long.suffix(), Some("L"));
        assert_eq!(PrimitiveType::Bool.suffix(), None);
    }

    #[test]
    fn test_if_statement_optional_else() {
        let stmt = IfStatement::new(ident("c"), Break.into(), None);
        assert!(stmt.else_branch().is_none());
        assert_eq!(stmt.then_branch(), &Statement::Break(Break));
    }
}
