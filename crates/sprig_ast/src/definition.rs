//! The top level item of a sprig source file

use crate::expr::Expr;
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};

/// A named function definition: `def name(params...) body end`.
///
/// Parameter names are kept in declaration order and are not checked for duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    name: String,
    parameters: Vec<String>,
    body: Expr,
}

impl Definition {
    /// Creates a new definition
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = S>,
        body: Expr,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The single expression this definition evaluates to
    pub fn body(&self) -> &Expr {
        &self.body
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "def {}({}) {} end",
            self.name,
            self.parameters.iter().join(", "),
            self.body
        )
    }
}
