//! Responsible with compiling sprig source into javascript

use crate::generator::generate;
use sprig_ast::Definition;
use sprig_parsing::parse_source;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, debug_span, info_span};

pub mod error;

pub use error::{SprigCError, SprigCErrorKind, SprigCResult};

/// The runtime placed before every generated definition
pub const DEFAULT_PREAMBLE: &str = "const add = (x,y) => x + y;";
/// The test invocation placed after every generated definition
pub const DEFAULT_TEST_INVOCATION: &str = "console.log(f(1, 2));";

/// Tokenizes and parses sprig source into its definition, without generating anything
pub fn parse(source: &str) -> SprigCResult<Definition> {
    Ok(parse_source(source)?)
}

/// Responsible with compiling sprig source into javascript programs.
///
/// A program is made of three lines: the runtime preamble, the generated definition and the
/// test invocation. Must be configured using a [SprigCBuilder].
#[derive(Debug, Clone)]
pub struct SprigC {
    preamble: String,
    test_invocation: String,
}

impl SprigC {
    /// Creates the default SprigCBuilder
    #[inline]
    pub fn builder() -> SprigCBuilder {
        SprigCBuilder::new()
    }

    /// The line emitted before the generated definition
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The line emitted after the generated definition
    pub fn test_invocation(&self) -> &str {
        &self.test_invocation
    }

    /// Compiles `source` into a full javascript program.
    ///
    /// The returned program has no trailing newline.
    pub fn transpile(&self, source: &str) -> SprigCResult<String> {
        let definition = info_span!("parse").in_scope(|| parse(source))?;
        let generated = debug_span!("generate", name = definition.name())
            .in_scope(|| generate(&definition));
        debug!("generated {generated:?}");
        Ok([
            self.preamble.as_str(),
            generated.as_str(),
            self.test_invocation.as_str(),
        ]
        .join("\n"))
    }

    /// Compiles the source file at `path` into a full javascript program
    pub fn transpile_file(&self, path: &Path) -> SprigCResult<String> {
        let source = std::fs::read_to_string(path).map_err(|source| {
            SprigCErrorKind::ReadSource {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.transpile(&source)
    }

    /// Compiles `source` and writes the program, followed by a newline, to `sink`.
    ///
    /// Nothing is written if compilation fails.
    pub fn transpile_to<W: Write>(&self, source: &str, mut sink: W) -> SprigCResult<()> {
        let program = self.transpile(source)?;
        writeln!(sink, "{program}")?;
        sink.flush()?;
        Ok(())
    }
}

/// Builder for creating a [SprigC] instance.
#[derive(Debug)]
pub struct SprigCBuilder {
    pub preamble: String,
    pub test_invocation: String,
}

impl SprigCBuilder {
    /// Creates a SprigCBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime line placed before the generated definition
    pub fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Sets the line placed after the generated definition
    pub fn test_invocation(mut self, test_invocation: impl Into<String>) -> Self {
        self.test_invocation = test_invocation.into();
        self
    }

    /// Builds a [SprigC] instance from this builder
    pub fn build(self) -> Result<SprigC, BuildSprigCError> {
        if self.preamble.contains(['\n', '\r']) {
            return Err(BuildSprigCError::MultiLinePreamble(self.preamble));
        }
        if self.test_invocation.contains(['\n', '\r']) {
            return Err(BuildSprigCError::MultiLineTestInvocation(
                self.test_invocation,
            ));
        }
        Ok(SprigC {
            preamble: self.preamble,
            test_invocation: self.test_invocation,
        })
    }
}

impl Default for SprigCBuilder {
    fn default() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            test_invocation: DEFAULT_TEST_INVOCATION.to_string(),
        }
    }
}

/// An error occurred while building a [SprigC] instance
#[derive(Debug, Error)]
pub enum BuildSprigCError {
    #[error("the preamble must be a single line, got {0:?}")]
    MultiLinePreamble(String),
    #[error("the test invocation must be a single line, got {0:?}")]
    MultiLineTestInvocation(String),
}
