#![doc = include_str!("../README.md")]

use crate::parser::SyntaxResult;
use sprig_ast::Definition;
use tracing::debug;

pub mod lexer;
pub mod parser;

/// Tokenizes and parses source text into its [Definition].
///
/// Lexing errors are reported as [parser::ErrorKind::Lex].
pub fn parse_source(src: &str) -> SyntaxResult<Definition> {
    let tokens = lexer::tokenize(src)?;
    debug!("tokenized source into {} tokens", tokens.len());
    parser::parse(tokens)
}
