//! Recursive descent parser, turning a [TokenStream] into a [Definition].
//!
//! The grammar is
//! ```text
//! definition     := 'def' IDENT parameter_list expression 'end'
//! parameter_list := '(' [ IDENT (',' IDENT)* ] ')'
//! expression     := INTEGER
//!                 | IDENT '(' argument_list ')'
//!                 | IDENT
//! argument_list  := [ expression (',' expression)* ]
//! ```

use sprig_ast::{CallExpr, Definition, Expr, IntegerExpr, VarRefExpr};
use sprig_tokens::{Token, TokenKind, TokenStream};
use tracing::{debug, trace};

pub mod error;

pub use error::*;

/// Parses a single [Definition] out of a token stream.
///
/// The parser owns its tokens and consumes them front to back, looking at most two tokens
/// ahead. The first mismatch aborts parsing, no partial tree is produced.
///
/// # Examples
/// ```
/// # use sprig_parsing::lexer::tokenize;
/// # use sprig_parsing::parser::Parser;
/// # use sprig_ast::Expr;
/// let tokens = tokenize("def add(x,y) x end").unwrap();
/// let definition = Parser::new(tokens).parse().unwrap();
/// assert_eq!(definition.name(), "add");
/// assert_eq!(definition.parameters(), ["x", "y"]);
/// assert_eq!(definition.body(), &Expr::var_ref("x"));
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: TokenStream,
    non_terminals: Vec<&'static str>,
}

impl Parser {
    /// Creates a new parser over the given tokens
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            non_terminals: vec![],
        }
    }

    /// Parses the definition, requiring every token to be consumed
    pub fn parse(mut self) -> SyntaxResult<Definition> {
        let definition = self.parse_definition()?;
        if let Some(token) = self.tokens.next() {
            return Err(self.error(ErrorKind::TrailingToken(token)));
        }
        debug!("parsed definition {definition}");
        Ok(definition)
    }

    /// Runs `f` with `non_terminal` pushed onto the non-terminal stack
    fn non_terminal<T>(
        &mut self,
        non_terminal: &'static str,
        f: impl FnOnce(&mut Self) -> SyntaxResult<T>,
    ) -> SyntaxResult<T> {
        trace!("entering {non_terminal}");
        self.non_terminals.push(non_terminal);
        let result = f(self);
        if result.is_ok() {
            self.non_terminals.pop();
        }
        result
    }

    fn error(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.non_terminals.clone())
    }

    /// Checks the kind of the token `offset` places ahead
    fn peek(&self, kind: TokenKind, offset: usize) -> bool {
        self.tokens.peek_kind(offset) == Some(kind)
    }

    /// Pops the front token, failing if it is not of the `expected` kind
    fn consume(&mut self, expected: TokenKind) -> SyntaxResult<Token> {
        match self.tokens.next() {
            Some(token) if token.kind() == expected => Ok(token),
            actual => Err(self.error(ErrorKind::expected_token(expected, actual))),
        }
    }

    fn parse_definition(&mut self) -> SyntaxResult<Definition> {
        self.non_terminal("definition", |parser| {
            parser.consume(TokenKind::Def)?;
            let name = parser.consume(TokenKind::Identifier)?.into_text();
            let parameters = parser.parse_parameter_list()?;
            let body = parser.parse_expression()?;
            parser.consume(TokenKind::End)?;
            Ok(Definition::new(name, parameters, body))
        })
    }

    fn parse_parameter_list(&mut self) -> SyntaxResult<Vec<String>> {
        self.non_terminal("parameter_list", |parser| {
            let mut parameters = vec![];
            parser.consume(TokenKind::OpenParen)?;
            if parser.peek(TokenKind::Identifier, 0) {
                parameters.push(parser.consume(TokenKind::Identifier)?.into_text());
                while parser.peek(TokenKind::Comma, 0) {
                    parser.consume(TokenKind::Comma)?;
                    parameters.push(parser.consume(TokenKind::Identifier)?.into_text());
                }
            }
            parser.consume(TokenKind::CloseParen)?;
            Ok(parameters)
        })
    }

    fn parse_expression(&mut self) -> SyntaxResult<Expr> {
        self.non_terminal("expression", |parser| {
            if parser.peek(TokenKind::Integer, 0) {
                parser.parse_integer().map(Expr::from)
            } else if parser.peek(TokenKind::Identifier, 0)
                && parser.peek(TokenKind::OpenParen, 1)
            {
                parser.parse_call().map(Expr::from)
            } else {
                parser.parse_var_ref().map(Expr::from)
            }
        })
    }

    fn parse_integer(&mut self) -> SyntaxResult<IntegerExpr> {
        let token = self.consume(TokenKind::Integer)?;
        IntegerExpr::from_digits(token.text())
            .ok_or_else(|| self.error(ErrorKind::expected_token(TokenKind::Integer, token)))
    }

    fn parse_call(&mut self) -> SyntaxResult<CallExpr> {
        let name = self.consume(TokenKind::Identifier)?.into_text();
        let arguments = self.parse_argument_list()?;
        Ok(CallExpr::new(name, arguments))
    }

    fn parse_argument_list(&mut self) -> SyntaxResult<Vec<Expr>> {
        self.non_terminal("argument_list", |parser| {
            let mut arguments = vec![];
            parser.consume(TokenKind::OpenParen)?;
            if !parser.peek(TokenKind::CloseParen, 0) {
                arguments.push(parser.parse_expression()?);
                while parser.peek(TokenKind::Comma, 0) {
                    parser.consume(TokenKind::Comma)?;
                    arguments.push(parser.parse_expression()?);
                }
            }
            parser.consume(TokenKind::CloseParen)?;
            Ok(arguments)
        })
    }

    fn parse_var_ref(&mut self) -> SyntaxResult<VarRefExpr> {
        let name = self.consume(TokenKind::Identifier)?.into_text();
        Ok(VarRefExpr::new(name))
    }
}

/// Parses a definition out of an already tokenized source
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> SyntaxResult<Definition> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use test_log::test;

    fn test_parser(src: &str) -> SyntaxResult<Definition> {
        let tokens = tokenize(src).unwrap_or_else(|e| panic!("could not tokenize {src:?}: {e}"));
        parse(tokens)
    }

    fn expect_error(src: &str) -> SyntaxError {
        match test_parser(src) {
            Ok(definition) => panic!("{src:?} should not parse, got {definition:#?}"),
            Err(error) => error,
        }
    }

    #[test]
    fn test_parse_variable_body() {
        let parsed = test_parser("def add(x,y) x end").unwrap();
        assert_eq!(parsed, Definition::new("add", ["x", "y"], Expr::var_ref("x")));
    }

    #[test]
    fn test_parse_no_parameters() {
        let parsed = test_parser("def zero() 0 end").unwrap();
        assert_eq!(parsed.name(), "zero");
        assert!(parsed.parameters().is_empty());
        assert_eq!(parsed.body(), &Expr::integer(0));
    }

    #[test]
    fn test_parse_call() {
        let parsed = test_parser("def call(x) identity(x) end").unwrap();
        assert_eq!(
            parsed.body(),
            &Expr::call("identity", [Expr::var_ref("x")])
        );
    }

    #[test]
    fn test_parse_nested_call() {
        let parsed = test_parser("def f(a, b) g(h(), 1, a, k(b, 2)) end").unwrap();
        assert_eq!(
            parsed.body(),
            &Expr::call(
                "g",
                [
                    Expr::call("h", []),
                    Expr::integer(1),
                    Expr::var_ref("a"),
                    Expr::call("k", [Expr::var_ref("b"), Expr::integer(2)]),
                ]
            )
        );
    }

    #[test]
    fn test_identifier_followed_by_paren_is_call() {
        let parsed = test_parser("def f(g) g() end").unwrap();
        assert!(matches!(parsed.body(), Expr::Call(call) if call.name() == "g"));
        let parsed = test_parser("def f(g) g end").unwrap();
        assert!(matches!(parsed.body(), Expr::VarRef(var) if var.name() == "g"));
        let parsed = test_parser("def f(g) h(g, 3) end").unwrap();
        let Expr::Call(call) = parsed.body() else {
            panic!("expected a call, got {:?}", parsed.body())
        };
        assert_eq!(call.arguments(), [Expr::var_ref("g"), Expr::integer(3)]);
    }

    #[test]
    fn test_duplicate_parameters_allowed() {
        let parsed = test_parser("def f(x, x) x end").unwrap();
        assert_eq!(parsed.parameters(), ["x", "x"]);
    }

    #[test]
    fn test_missing_close_paren() {
        let error = expect_error("def f(x x end");
        assert_eq!(
            error.kind,
            ErrorKind::expected_token(
                TokenKind::CloseParen,
                Token::new(TokenKind::Identifier, "x")
            )
        );
        assert_eq!(error.non_terminal_stack, ["definition", "parameter_list"]);
    }

    #[test]
    fn test_missing_end() {
        let error = expect_error("def f(x) x");
        assert_eq!(error.kind, ErrorKind::expected_token(TokenKind::End, None));
        assert_eq!(error.non_terminal_stack, ["definition"]);
    }

    #[test]
    fn test_empty_input() {
        let error = expect_error("");
        assert_eq!(error.kind, ErrorKind::expected_token(TokenKind::Def, None));
    }

    #[test]
    fn test_missing_body() {
        let error = expect_error("def f(x) end");
        assert_eq!(
            error.kind,
            ErrorKind::expected_token(TokenKind::Identifier, Token::new(TokenKind::End, "end"))
        );
        assert_eq!(error.non_terminal_stack, ["definition", "expression"]);
    }

    #[test]
    fn test_leading_comma_in_arguments() {
        let error = expect_error("def f(x) g(,x) end");
        assert_eq!(
            error.kind,
            ErrorKind::expected_token(TokenKind::Identifier, Token::new(TokenKind::Comma, ","))
        );
        assert_eq!(
            error.non_terminal_stack,
            ["definition", "expression", "argument_list", "expression"]
        );
    }

    #[test]
    fn test_trailing_comma_in_parameters() {
        let error = expect_error("def f(x,) x end");
        assert_eq!(
            error.kind,
            ErrorKind::expected_token(
                TokenKind::Identifier,
                Token::new(TokenKind::CloseParen, ")")
            )
        );
    }

    #[test]
    fn test_keyword_as_name() {
        let error = expect_error("def end() 0 end");
        assert_eq!(
            error.kind,
            ErrorKind::expected_token(TokenKind::Identifier, Token::new(TokenKind::End, "end"))
        );
    }

    #[test]
    fn test_trailing_tokens() {
        let error = expect_error("def f() 0 end g");
        assert_eq!(
            error.kind,
            ErrorKind::TrailingToken(Token::new(TokenKind::Identifier, "g"))
        );
        assert!(error.non_terminal_stack.is_empty());
    }

    #[test]
    fn test_integer_of_any_size() {
        let parsed = test_parser("def big() 123456789012345678901234567890 end").unwrap();
        let Expr::Integer(integer) = parsed.body() else {
            panic!("expected an integer, got {:?}", parsed.body())
        };
        assert_eq!(integer.digits(), "123456789012345678901234567890");
        let parsed = test_parser("def f() g(18446744073709551616, 007) end").unwrap();
        assert_eq!(parsed.to_string(), "def f() g(18446744073709551616, 7) end");
    }

    #[test]
    fn test_malformed_integer_token() {
        let tokens = [
            Token::new(TokenKind::Def, "def"),
            Token::new(TokenKind::Identifier, "f"),
            Token::new(TokenKind::OpenParen, "("),
            Token::new(TokenKind::CloseParen, ")"),
            Token::new(TokenKind::Integer, "x"),
            Token::new(TokenKind::End, "end"),
        ];
        let error = parse(tokens).unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::expected_token(TokenKind::Integer, Token::new(TokenKind::Integer, "x"))
        );
    }

    #[test]
    fn test_round_trip_through_display() {
        for src in [
            "def add(x,y) x end",
            "def zero() 0 end",
            "def call(x) identity(x) end",
            "def f(a, b, c) g(a, h(b, 10), k(), c) end",
        ] {
            let parsed = test_parser(src).unwrap();
            let reparsed = test_parser(&parsed.to_string()).unwrap();
            assert_eq!(parsed, reparsed, "{src:?} did not survive a round trip");
        }
    }
}
