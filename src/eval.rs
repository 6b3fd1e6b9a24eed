use crate::ast::Expr;
use crate::errors::EvalError;
use crate::functions::{build_default_function_registry, default_registry, FunctionRegistry};

/// The value every reportable evaluation condition collapses to on the
/// reference-compatible surface.
pub const REFERENCE_FALLBACK: f64 = 0.0;

/// Depth bound for the strict evaluator. Generous enough for any tree built
/// by hand; deeply unbalanced machine-built trees can exhaust the call stack
/// well before they exhaust patience.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Options for a single evaluation.
pub struct EvalOptions {
    pub max_depth: usize,
    pub functions: FunctionRegistry,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            functions: build_default_function_registry(),
        }
    }
}

/// Evaluates an expression tree, reporting lookup and depth failures.
///
/// Arithmetic stays IEEE-754 throughout: division by zero and negative
/// square roots produce infinity/NaN values, not errors.
///
/// # Examples
///
/// ```rust
/// use ramus::ast::Expr;
/// use ramus::eval::{eval, EvalOptions};
/// use ramus::EvalError;
///
/// let opts = EvalOptions::default();
/// let known = Expr::call("abs", Expr::number(-3.0));
/// assert_eq!(eval(&known, &opts), Ok(3.0));
///
/// let unknown = Expr::call("bogus", Expr::number(1.0));
/// assert!(matches!(eval(&unknown, &opts), Err(EvalError::UnknownFunction { .. })));
/// ```
pub fn eval(expr: &Expr, opts: &EvalOptions) -> Result<f64, EvalError> {
    eval_expr(expr, &opts.functions, opts.max_depth, 0)
}

fn eval_expr(
    expr: &Expr,
    functions: &FunctionRegistry,
    max_depth: usize,
    depth: usize,
) -> Result<f64, EvalError> {
    if depth > max_depth {
        return Err(EvalError::RecursionLimit { limit: max_depth });
    }

    match expr {
        Expr::Number(number) => Ok(number.value),
        // Variables carry their binding; there is no environment to consult.
        Expr::Variable(variable) => Ok(variable.value),
        Expr::BinaryOperation(binop) => {
            let left = eval_expr(&binop.left, functions, max_depth, depth + 1)?;
            let right = eval_expr(&binop.right, functions, max_depth, depth + 1)?;
            Ok(binop.op.apply(left, right))
        }
        Expr::FunctionCall(call) => {
            let arg = eval_expr(&call.arg, functions, max_depth, depth + 1)?;
            match functions.get(&call.name) {
                Some(func) => Ok(func(arg)),
                None => Err(EvalError::UnknownFunction {
                    name: call.name.clone(),
                    available: functions.list(),
                }),
            }
        }
    }
}

impl Expr {
    /// Evaluates this tree against the default function registry, collapsing
    /// every reportable condition to [`REFERENCE_FALLBACK`].
    ///
    /// This is the reference-compatible surface: an unknown function name
    /// yields `0.0`, while division by zero still yields infinity/NaN per
    /// IEEE-754. Use [`eval`] to observe failures instead.
    pub fn evaluate(&self) -> f64 {
        eval_expr(self, default_registry(), DEFAULT_MAX_DEPTH, 0).unwrap_or(REFERENCE_FALLBACK)
    }
}
