//! A sprig compilation error

use sprig_parsing::parser::SyntaxError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of error
#[derive(Debug, Error)]
pub enum SprigCErrorKind {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("could not read {path:?}: {source}")]
    ReadSource { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// An error occurred while attempting to compile sprig source
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SprigCError(#[from] SprigCErrorKind);

impl SprigCError {
    /// Gets the kind of this error
    #[inline]
    pub fn kind(&self) -> &SprigCErrorKind {
        &self.0
    }
}

impl From<io::Error> for SprigCError {
    fn from(value: io::Error) -> Self {
        Self(SprigCErrorKind::from(value))
    }
}

impl From<SyntaxError> for SprigCError {
    fn from(value: SyntaxError) -> Self {
        Self(SprigCErrorKind::from(value))
    }
}

/// A type alias for general results in sprigc
pub type SprigCResult<T> = Result<T, SprigCError>;
