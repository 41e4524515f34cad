use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::{alpha1, char, digit1, satisfy};
use nom::combinator::{consumed, not, peek, value};
use nom::error::{context, VerboseError};
use nom::sequence::terminated;
use nom::IResult;
use sprig_tokens::TokenKind;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parses a single token at the very start of `src`, returning the matched text with its kind.
///
/// Rules are tried in priority order, the first one to match wins.
pub fn parse_token(src: &str) -> Result<(&str, TokenKind)> {
    context(
        "token",
        consumed(alt((
            parse_keyword,
            parse_identifier,
            parse_integer,
            parse_punctuation,
        ))),
    )(src)
}

/// Skips whitespace between tokens
pub fn parse_insignificant(src: &str) -> Result<&str> {
    context("whitespace", take_while(is_insignificant))(src)
}

/// Ascii whitespace, including vertical tab, plus NUL
fn is_insignificant(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b' || c == '\0'
}

/// A word character, matching `\w`
fn word_char(src: &str) -> Result<char> {
    satisfy(|c| c.is_ascii_alphanumeric() || c == '_')(src)
}

/// Ends a word, the next char must not continue it
fn word_boundary(src: &str) -> Result<()> {
    not(peek(word_char))(src)
}

fn parse_keyword(src: &str) -> Result<TokenKind> {
    context(
        "keyword",
        alt((
            value(TokenKind::Def, terminated(tag("def"), word_boundary)),
            value(TokenKind::End, terminated(tag("end"), word_boundary)),
        )),
    )(src)
}

fn parse_identifier(src: &str) -> Result<TokenKind> {
    context(
        "identifier",
        value(TokenKind::Identifier, terminated(alpha1, word_boundary)),
    )(src)
}

fn parse_integer(src: &str) -> Result<TokenKind> {
    context(
        "integer",
        value(TokenKind::Integer, terminated(digit1, word_boundary)),
    )(src)
}

fn parse_punctuation(src: &str) -> Result<TokenKind> {
    context(
        "punctuation",
        alt((
            value(TokenKind::OpenParen, char('(')),
            value(TokenKind::CloseParen, char(')')),
            value(TokenKind::Comma, char(',')),
        )),
    )(src)
}
