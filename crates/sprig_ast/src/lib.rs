#![doc = include_str!("../README.md")]

pub mod definition;
pub mod expr;

pub use definition::Definition;
pub use expr::{CallExpr, Expr, IntegerExpr, VarRefExpr};
