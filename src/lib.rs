pub mod ast;
pub mod error;
pub mod forest;
pub mod lifecycle;
pub mod printer;
pub mod visitor;

pub use error::{AstError, CompileError};
pub use printer::ToStringVisitor;
pub use visitor::{DefaultVisitor, Node, NodeKind, Visitor};
