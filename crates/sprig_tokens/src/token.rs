//! A lexical token from a source file, along with streams for said token

use std::fmt::{Debug, Display, Formatter};

/// A lexical token from a source file
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the source text this token was lexed from
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes this token, returning its source text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Integer => {
                write!(f, "{} {:?}", self.kind, self.text)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// The kind for this token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `def`
    Def,
    /// `end`
    End,
    Identifier,
    Integer,
    /// (
    OpenParen,
    /// )
    CloseParen,
    /// ,
    Comma,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenKind::Def => "`def`",
            TokenKind::End => "`end`",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Comma => "`,`",
        };
        f.write_str(s)
    }
}

/// A stream of tokens.
///
/// Tokens are consumed front to back through a cursor, the underlying sequence is never
/// modified.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TokenStream {}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks at the token `offset` places past the cursor without consuming anything
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.cursor + offset)
    }

    /// Gets the kind of the token `offset` places past the cursor
    pub fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.peek(offset).map(Token::kind)
    }

    /// The number of tokens that have not been consumed yet
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.cursor)
    }

    /// Checks if every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
