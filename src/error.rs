use thiserror::Error;

use crate::ast::PrimitiveType;

// Tree construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("dimensions of type '{ty}' are already set")]
    DimsAlreadySet { ty: String },
    #[error("declaration of type '{ty}' has no declarators")]
    EmptyDeclaration { ty: String },
    #[error("'{kind}' constants cannot hold a floating-point value")]
    NotAFloatKind { kind: PrimitiveType },
    #[error("{value} is not a finite '{kind}' value")]
    FloatOutOfRange { kind: PrimitiveType, value: String },
}

// Driver errors
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed forest document: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid tree: {0}")]
    AstError(#[from] AstError),
}

// Result types
pub type AstResult<T> = Result<T, AstError>;
pub type CompileResult<T> = Result<T, CompileError>;
