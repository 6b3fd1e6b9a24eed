use crate::transform::Transformer;
use std::fmt;

/// A binary operator tag.
///
/// The set is closed: anything outside these four variants cannot be
/// constructed, so "unknown operator" is not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the conventional infix symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division follows IEEE-754: a zero divisor yields infinity or NaN,
    /// never an error.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }
}

/// A literal numeric leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: f64,
}

/// A named leaf with a value bound at construction.
///
/// Variables are not resolved against any environment; the binding is fixed
/// when the node is built and never rebound.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: f64,
}

/// An operator node owning its two operand subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
}

/// A call to a named unary function, owning its argument subtree.
///
/// The name is looked up in a [`FunctionRegistry`](crate::functions::FunctionRegistry)
/// at evaluation time; an unrecognized name is an evaluation-time condition,
/// never a construction error.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arg: Box<Expr>,
}

/// An arithmetic expression tree.
///
/// Nodes are immutable after construction and ownership is tree-shaped:
/// every composite node exclusively owns its children, so dropping a root
/// drops its whole subtree and no two live trees share a node.
///
/// # Examples
///
/// ```rust
/// use ramus::ast::{BinaryOp, Expr};
/// let expr = Expr::binary(Expr::number(1.0), BinaryOp::Add, Expr::number(2.0));
/// assert_eq!(expr.evaluate(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    Variable(Variable),
    BinaryOperation(BinaryOperation),
    FunctionCall(FunctionCall),
}

impl Expr {
    pub fn number(value: f64) -> Expr {
        Expr::Number(Number { value })
    }

    pub fn variable(name: impl Into<String>, value: f64) -> Expr {
        Expr::Variable(Variable {
            name: name.into(),
            value,
        })
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        Expr::BinaryOperation(BinaryOperation {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn call(name: impl Into<String>, arg: Expr) -> Expr {
        Expr::FunctionCall(FunctionCall {
            name: name.into(),
            arg: Box::new(arg),
        })
    }

    /// Dispatches to the transformer method matching this node's variant and
    /// returns the freshly built tree.
    ///
    /// This is the node side of the double dispatch: the concrete variant
    /// picks the handler, the concrete transformer decides what to build.
    /// The receiver and its subtree are never mutated.
    pub fn transform(&self, tr: &mut dyn Transformer) -> Expr {
        match self {
            Expr::Number(number) => tr.transform_number(number),
            Expr::Variable(variable) => tr.transform_variable(variable),
            Expr::BinaryOperation(binop) => tr.transform_binary_operation(binop),
            Expr::FunctionCall(call) => tr.transform_function_call(call),
        }
    }

    // Utility: pretty printing for diagnostics and test output.
    pub fn pretty(&self) -> String {
        match self {
            Expr::Number(number) => number.value.to_string(),
            Expr::Variable(variable) => variable.name.clone(),
            Expr::BinaryOperation(binop) => format!(
                "({} {} {})",
                binop.left.pretty(),
                binop.op.symbol(),
                binop.right.pretty()
            ),
            Expr::FunctionCall(call) => format!("{}({})", call.name, call.arg.pretty()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
