#![doc = include_str!("../README.md")]

mod compiler;
pub mod generator;

pub use compiler::*;
pub use generator::{generate, Generate};
