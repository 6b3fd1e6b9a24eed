//! Ramus error handling.
//!
//! Evaluation has two surfaces. The strict one (`eval::eval`) reports the
//! conditions below as values of this type; the reference-compatible one
//! (`Expr::evaluate`) collapses them all to the fallback value `0.0`.
//! Arithmetic domain conditions (division by zero, negative square root) are
//! not errors on either surface: they follow IEEE-754 and produce infinity
//! or NaN.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("unknown function '{name}'")]
    #[diagnostic(
        code(ramus::eval::unknown_function),
        help("registered functions: {available:?}")
    )]
    UnknownFunction {
        name: String,
        /// Names registered at the time of the failed lookup, sorted.
        available: Vec<String>,
    },

    #[error("recursion depth limit of {limit} exceeded")]
    #[diagnostic(
        code(ramus::eval::recursion_limit),
        help("raise EvalOptions::max_depth if the tree is legitimately this deep")
    )]
    RecursionLimit { limit: usize },
}
