//! Crate-level errors

use thiserror::Error;

use crate::eval::EvalError;

/// Errors surfaced by rolling and command dispatch
#[derive(Debug, Error)]
pub enum DiceError {
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] EvalError),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
