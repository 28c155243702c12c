pub mod ast;
pub mod parser;
pub mod tokenizer;


pub use ast::*;
pub use parser::{MAX_NESTING, SyntaxError, SyntaxErrorKind, parse_pattern};
