use ramus::ast::{BinaryOp, BinaryOperation, Expr, FunctionCall, Number, Variable};
use ramus::transform::{CopyTransformer, Transformer};

// ---
// Test Setup
// ---

/// The tree from the reference scenario: abs(var(10.0) * sqrt(32.0 - 16.0)).
fn reference_tree() -> Expr {
    let minus = Expr::binary(Expr::number(32.0), BinaryOp::Sub, Expr::number(16.0));
    let sqrt = Expr::call("sqrt", minus);
    let mult = Expr::binary(Expr::variable("var", 10.0), BinaryOp::Mul, sqrt);
    Expr::call("abs", mult)
}

// ---
// Deep Copy
// ---

#[test]
fn test_copy_preserves_leaf_values() {
    let number = Expr::number(42.5);
    assert_eq!(number.transform(&mut CopyTransformer), number);

    let variable = Expr::variable("x", -3.0);
    assert_eq!(variable.transform(&mut CopyTransformer), variable);
}

#[test]
fn test_copy_preserves_structure() {
    let tree = reference_tree();
    let copy = tree.transform(&mut CopyTransformer);

    // Same variant at each position, same operator tags, same names, same
    // leaf values: structural equality covers all of it.
    assert_eq!(copy, tree);
}

#[test]
fn test_copy_evaluates_to_same_result() {
    let tree = reference_tree();
    let copy = tree.transform(&mut CopyTransformer);
    assert_eq!(copy.evaluate(), tree.evaluate());
    assert_eq!(copy.evaluate(), 40.0);
}

#[test]
fn test_copy_is_independently_owned() {
    let tree = reference_tree();
    let copy = tree.transform(&mut CopyTransformer);

    // The source can be dropped without disturbing the copy; the copy owns
    // its entire subtree.
    drop(tree);
    assert_eq!(copy.evaluate(), 40.0);
}

#[test]
fn test_copy_of_degenerate_trees() {
    // A tree whose evaluation degrades still copies faithfully.
    let unknown = Expr::call("bogus", Expr::number(1.0));
    let copy = unknown.transform(&mut CopyTransformer);
    assert_eq!(copy, unknown);
    assert_eq!(copy.evaluate(), unknown.evaluate());

    let div_zero = Expr::binary(Expr::number(1.0), BinaryOp::Div, Expr::number(0.0));
    let copy = div_zero.transform(&mut CopyTransformer);
    assert_eq!(copy.evaluate(), f64::INFINITY);
}

// ---
// The Visitor Seam Is Open To New Operations
// ---

/// Replaces every variable with a number carrying its bound value, counting
/// replacements along the way. Exists to prove the dispatch mechanism works
/// for transformers other than plain copy, including stateful ones.
struct VariableInliner {
    replaced: usize,
}

impl Transformer for VariableInliner {
    fn transform_number(&mut self, number: &Number) -> Expr {
        Expr::number(number.value)
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expr {
        self.replaced += 1;
        Expr::number(variable.value)
    }

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Expr {
        let left = binop.left.transform(self);
        let right = binop.right.transform(self);
        Expr::binary(left, binop.op, right)
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr {
        let arg = call.arg.transform(self);
        Expr::call(call.name.clone(), arg)
    }
}

#[test]
fn test_custom_transformer_through_same_dispatch() {
    let tree = reference_tree();
    let mut inliner = VariableInliner { replaced: 0 };
    let inlined = tree.transform(&mut inliner);

    assert_eq!(inliner.replaced, 1);
    assert_ne!(inlined, tree);
    assert_eq!(inlined.evaluate(), tree.evaluate());
    assert_eq!(inlined.pretty(), "abs((10 * sqrt((32 - 16))))");
}
