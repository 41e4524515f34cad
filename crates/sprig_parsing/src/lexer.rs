//! Responsible with converting source text into a token stream

use crate::lexer::token_parsing::{parse_insignificant, parse_token};
use nom::Finish;
use sprig_tokens::Token;
use thiserror::Error;
use tracing::trace;

mod token_parsing;

/// The longest excerpt of unmatched input carried by a [LexingError]
const EXCERPT_LEN: usize = 16;

/// Responsible with converting source text into a token stream.
///
/// Tokens are produced lazily, in source order. Whitespace between tokens is skipped, and
/// once an error has been yielded the lexer is exhausted.
///
/// # Examples
/// ```
/// # use sprig_parsing::lexer::Lexer;
/// # use sprig_tokens::TokenKind;
/// let kinds = Lexer::new("def zero() 0 end")
///     .map(|token| token.map(|token| token.kind()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Def,
///         TokenKind::Identifier,
///         TokenKind::OpenParen,
///         TokenKind::CloseParen,
///         TokenKind::Integer,
///         TokenKind::End
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            offset: 0,
            done: false,
        }
    }

    /// The input that has not been tokenized yet
    fn rest(&self) -> &'a str {
        &self.src[self.offset..]
    }

    fn next_token(&mut self) -> LexResult<Option<Token>> {
        let (rest, skipped) = parse_insignificant(self.rest())
            .finish()
            .map_err(|_| self.no_rule_matches())?;
        self.offset += skipped.len();
        if rest.is_empty() {
            return Ok(None);
        }

        let (_, (text, kind)) = parse_token(rest)
            .finish()
            .map_err(|_| self.no_rule_matches())?;
        self.offset += text.len();
        let token = Token::new(kind, text);
        trace!(offset = self.offset, "lexed token {token:?}");
        Ok(Some(token))
    }

    fn no_rule_matches(&self) -> LexingError {
        LexingError::NoRuleMatches {
            offset: self.offset,
            remaining: self.rest().chars().take(EXCERPT_LEN).collect(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes all of `src` at once
pub fn tokenize(src: &str) -> LexResult<Vec<Token>> {
    Lexer::new(src).collect()
}

pub type LexResult<T> = Result<T, LexingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexingError {
    /// None of the lexical rules match the input at `offset`
    #[error("no rule matches remaining input at byte {offset}: {remaining:?}")]
    NoRuleMatches { offset: usize, remaining: String },
}
