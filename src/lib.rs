//! # Ramus
//!
//! A small, immutable arithmetic expression tree. Trees are built bottom-up
//! by direct construction (there is no parser), evaluated recursively to an
//! `f64`, and rebuilt structurally through the [`transform::Transformer`]
//! visitor seam, of which [`transform::CopyTransformer`] (deep copy) is the
//! shipped implementation.

pub use crate::errors::EvalError;

pub mod ast;
pub mod errors;
pub mod eval;
pub mod functions;
pub mod transform;
