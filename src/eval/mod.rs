//! Arithmetic evaluation
//!
//! Once every dice term has been replaced by its score, the remaining
//! string is plain arithmetic: numbers, `+ - * /`, parentheses and a few
//! functions (`ceil`, `floor`, `round`, `abs`, `sqrt`, `min`, `max`).
//!
//! `max` is only reachable by calling an [`Evaluator`] directly: dice
//! notation containing an `x` is always read as a repetition.

mod error;
mod lexer;
mod parse;

pub use error::EvalError;

/// Evaluates an arithmetic expression to a number
pub trait Evaluator: Send + Sync {
    /// Evaluate `expr`, failing on anything that is not valid arithmetic
    fn evaluate(&self, expr: &str) -> Result<f64, EvalError>;
}

/// Built-in evaluator backed by a small Pratt parser
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl Evaluator for Arithmetic {
    fn evaluate(&self, expr: &str) -> Result<f64, EvalError> {
        let value = parse::Parser::new(expr)?.parse()?.evaluate()?;
        // -0 prints as "-0"
        Ok(if value == 0.0 { 0.0 } else { value })
    }
}
