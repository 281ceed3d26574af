// calc - An interactive arithmetic expression evaluator
//
// One read-lex-parse-evaluate-print cycle per input line. Syntax errors are
// carried as data through the pipeline and rendered as source-pointing
// diagnostics; only a valid tree ever reaches the evaluator.

// Public modules
pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod runner;

// Re-export commonly used items
pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use error::{Diagnostic, EvalError, Span};
pub use evaluator::eval;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

// Re-export main functions
pub use repl::start as start_repl;
pub use runner::run;
