use thiserror::Error;

/// Errors from evaluating an arithmetic expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("at position {0}: {1}")]
    AtPosition(usize, Box<EvalError>),

    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("invalid number: {0}")]
    Number(String),

    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("parenthesis was not closed")]
    UnclosedParenthesis,

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("function {name} takes {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: &'static str,
        got: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("trailing input: {0}")]
    TrailingInput(String),

    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}

impl EvalError {
    /// The underlying error, without position information
    pub fn err(&self) -> &Self {
        match self {
            EvalError::AtPosition(_, err) => err.as_ref(),
            other => other,
        }
    }

    /// Character offset the error was found at, if known
    pub fn pos(&self) -> Option<usize> {
        match self {
            EvalError::AtPosition(position, _) => Some(*position),
            _ => None,
        }
    }

    pub(crate) fn at_pos(self, position: usize) -> Self {
        match self {
            EvalError::AtPosition(_, _) => self,
            other => EvalError::AtPosition(position, Box::new(other)),
        }
    }
}
