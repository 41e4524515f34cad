//! sprig expressions

use itertools::Itertools as _;
use std::fmt::{Display, Formatter};

/// An expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Call(CallExpr),
    Integer(IntegerExpr),
    VarRef(VarRefExpr),
}

impl Expr {
    /// Shorthand for creating a [CallExpr]
    pub fn call(name: impl Into<String>, arguments: impl IntoIterator<Item = Expr>) -> Self {
        Self::Call(CallExpr::new(name, arguments))
    }

    /// Shorthand for creating an [IntegerExpr]
    pub fn integer(value: u64) -> Self {
        Self::Integer(IntegerExpr::from(value))
    }

    /// Shorthand for creating a [VarRefExpr]
    pub fn var_ref(name: impl Into<String>) -> Self {
        Self::VarRef(VarRefExpr::new(name))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Call(call) => call.fmt(f),
            Expr::Integer(integer) => integer.fmt(f),
            Expr::VarRef(var_ref) => var_ref.fmt(f),
        }
    }
}

impl From<CallExpr> for Expr {
    fn from(value: CallExpr) -> Self {
        Self::Call(value)
    }
}

impl From<IntegerExpr> for Expr {
    fn from(value: IntegerExpr) -> Self {
        Self::Integer(value)
    }
}

impl From<VarRefExpr> for Expr {
    fn from(value: VarRefExpr) -> Self {
        Self::VarRef(value)
    }
}

/// Call a function by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    name: String,
    arguments: Vec<Expr>,
}

impl CallExpr {
    pub fn new(name: impl Into<String>, arguments: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().collect(),
        }
    }

    /// The name of the called function
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument expressions, in call order
    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments.iter().join(", "))
    }
}

/// A non-negative integer literal of any size, kept as its decimal digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerExpr {
    digits: String,
}

impl IntegerExpr {
    /// Creates an integer literal from its decimal digits, dropping leading zeros.
    ///
    /// Returns `None` if `digits` is empty or contains anything but ascii digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self {
            digits: digits.to_string(),
        })
    }

    /// The canonical decimal digits of this literal
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl From<u64> for IntegerExpr {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

/// A reference to a variable, usually one of the enclosing definition's parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarRefExpr {
    name: String,
}

impl VarRefExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for VarRefExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
