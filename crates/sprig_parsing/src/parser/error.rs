use crate::lexer::LexingError;
use sprig_tokens::{Token, TokenKind};
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    /// The grammar rules being parsed when the error occurred, outermost first
    pub non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: impl Into<ErrorKind>, non_terminals: impl Into<Vec<&'static str>>) -> Self {
        Self {
            kind: kind.into(),
            non_terminal_stack: non_terminals.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.kind)?;
        if !self.non_terminal_stack.is_empty() {
            write!(f, "\nnon terminal stack:")?;
            for (idx, non_terminal) in self.non_terminal_stack.iter().enumerate() {
                write!(f, "\n  {}: {}", idx, non_terminal)?;
            }
        }

        Ok(())
    }
}

impl From<ErrorKind> for SyntaxError {
    fn from(value: ErrorKind) -> Self {
        Self::new(value, vec![])
    }
}

impl From<LexingError> for SyntaxError {
    fn from(value: LexingError) -> Self {
        Self::new(value, vec![])
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// `actual` is `None` when the token stream ran out
    #[error("expected {expected}, got {}", describe(.actual.as_ref()))]
    ExpectedToken {
        expected: TokenKind,
        actual: Option<Token>,
    },
    #[error("unexpected {0} after the end of the definition")]
    TrailingToken(Token),
    #[error(transparent)]
    Lex(#[from] LexingError),
}

impl ErrorKind {
    pub fn expected_token(expected: TokenKind, actual: impl Into<Option<Token>>) -> Self {
        Self::ExpectedToken {
            expected,
            actual: actual.into(),
        }
    }
}

fn describe(token: Option<&Token>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

pub type SyntaxResult<T = ()> = std::result::Result<T, SyntaxError>;
