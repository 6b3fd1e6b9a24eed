//! # Tree Transformation
//!
//! The transformer side of the double dispatch. A [`Transformer`] exposes one
//! handler per node variant; [`Expr::transform`](crate::ast::Expr::transform)
//! selects the handler for its concrete variant at runtime. New operations
//! over the (closed) variant set are added by implementing this trait, without
//! touching the node types themselves.
//!
//! [`CopyTransformer`] is the one shipped implementation: a structural deep
//! copy.

use crate::ast::{BinaryOperation, Expr, FunctionCall, Number, Variable};

/// One handler per node variant. Each takes a shared reference to the node
/// being visited and returns a newly built tree, ownership to the caller.
///
/// Receivers are `&mut self` so a transformer may carry state (a node
/// counter, an environment, a rewrite budget); the nodes themselves are
/// never mutated.
pub trait Transformer {
    fn transform_number(&mut self, number: &Number) -> Expr;
    fn transform_variable(&mut self, variable: &Variable) -> Expr;
    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Expr;
    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr;
}

/// Rebuilds an isomorphic tree sharing no nodes with the source.
///
/// Stateless structural recursion; terminates because the source tree is
/// finite and acyclic. The result evaluates to the same number as the
/// source.
///
/// # Examples
///
/// ```rust
/// use ramus::ast::{BinaryOp, Expr};
/// use ramus::transform::CopyTransformer;
///
/// let tree = Expr::binary(Expr::number(6.0), BinaryOp::Div, Expr::number(2.0));
/// let copy = tree.transform(&mut CopyTransformer);
/// assert_eq!(copy, tree);
/// assert_eq!(copy.evaluate(), 3.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyTransformer;

impl Transformer for CopyTransformer {
    fn transform_number(&mut self, number: &Number) -> Expr {
        Expr::number(number.value)
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expr {
        Expr::variable(variable.name.clone(), variable.value)
    }

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Expr {
        // Children recurse through `transform`, not through field copies, so
        // the traversal stays generic over whichever transformer drives it.
        let left = binop.left.transform(self);
        let right = binop.right.transform(self);
        Expr::binary(left, binop.op, right)
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr {
        let arg = call.arg.transform(self);
        Expr::call(call.name.clone(), arg)
    }
}
