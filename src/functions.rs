//! # Named Unary Functions
//!
//! This module provides the registry of named unary functions that
//! [`FunctionCall`](crate::ast::FunctionCall) nodes resolve against during
//! evaluation, plus the standard functions themselves.
//!
//! ## Functions Provided
//!
//! - `sqrt`: square root
//! - `abs`: absolute value
//!
//! Registry Invariant: the registry is constructed once (either explicitly or
//! through [`default_registry`]) and passed by reference to evaluation code.
//! Lookup failures are an evaluation-time condition, reported by the strict
//! evaluator and collapsed to the reference fallback by the lenient one.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A pure unary function over `f64`. All registered functions take one
/// argument and have no side effects.
pub type UnaryFn = fn(f64) -> f64;

/// Square root.
///
/// Negative input is not guarded; it follows IEEE-754 and yields NaN.
///
/// Example:
///   sqrt(16.0) ; => 4.0
pub const FN_SQRT: UnaryFn = |x| x.sqrt();

/// Absolute value.
///
/// Example:
///   abs(-5.0) ; => 5.0
pub const FN_ABS: UnaryFn = |x| x.abs();

/// Registry for named unary functions, inspectable at runtime.
#[derive(Debug, Default, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, UnaryFn>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&UnaryFn> {
        self.functions.get(name)
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    // API for extensibility. The reference set is just `sqrt` and `abs`;
    // callers may register additional unary functions.
    pub fn register(&mut self, name: &str, func: UnaryFn) {
        self.functions.insert(name.to_string(), func);
    }
}

/// Builds and returns a registry populated with the standard functions.
///
/// # Example
/// ```
/// use ramus::functions::build_default_function_registry;
/// let registry = build_default_function_registry();
/// assert_eq!(registry.list(), vec!["abs", "sqrt"]);
/// ```
#[inline]
pub fn build_default_function_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry.register("sqrt", FN_SQRT);
    registry.register("abs", FN_ABS);
    registry
}

static DEFAULT_REGISTRY: Lazy<FunctionRegistry> = Lazy::new(build_default_function_registry);

/// Returns the process-wide default registry backing
/// [`Expr::evaluate`](crate::ast::Expr::evaluate).
pub fn default_registry() -> &'static FunctionRegistry {
    &DEFAULT_REGISTRY
}
