use super::lexer::{Lexer, Token};
use super::EvalError;

/// Deepest nesting of parentheses, calls and unary signs the parser accepts
pub(crate) const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest = 1,
    Sum = 2,
    Product = 3,
    Prefix = 4,
}

impl Precedence {
    fn of_token(token: &Token) -> Self {
        match token {
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Multiply | Token::Divide => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Arithmetic syntax tree
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Literal(f64),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        match self {
            Expr::Literal(value) => Ok(*value),
            Expr::Neg(operand) => Ok(-operand.evaluate()?),
            Expr::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                match op {
                    BinaryOperator::Add => Ok(left + right),
                    BinaryOperator::Sub => Ok(left - right),
                    BinaryOperator::Mul => Ok(left * right),
                    BinaryOperator::Div if right == 0.0 => Err(EvalError::DivisionByZero),
                    BinaryOperator::Div => Ok(left / right),
                }
            }
            Expr::Call { name, args } => {
                let values = args
                    .iter()
                    .map(Expr::evaluate)
                    .collect::<Result<Vec<_>, _>>()?;
                call(name, &values)
            }
        }
    }
}

fn call(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    let unary = |f: fn(f64) -> f64| match args {
        [x] => Ok(f(*x)),
        _ => Err(EvalError::Arity {
            name: name.to_string(),
            expected: "1",
            got: args.len(),
        }),
    };
    let fold = |f: fn(f64, f64) -> f64| {
        args.iter().copied().reduce(f).ok_or_else(|| EvalError::Arity {
            name: name.to_string(),
            expected: "1 or more",
            got: 0,
        })
    };

    match name {
        "ceil" => unary(f64::ceil),
        "floor" => unary(f64::floor),
        "round" => unary(f64::round),
        "abs" => unary(f64::abs),
        "sqrt" => unary(f64::sqrt),
        "min" => fold(f64::min),
        "max" => fold(f64::max),
        other => Err(EvalError::UnknownFunction(other.to_string())),
    }
}

/// Pratt parser over the arithmetic token stream
#[derive(Debug)]
pub(crate) struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    depth: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self, EvalError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token().map_err(|err| err.at_pos(lexer.position))?;

        if current == Token::Eof {
            return Err(EvalError::Empty);
        }

        let peek = lexer.next_token().map_err(|err| err.at_pos(lexer.position))?;
        Ok(Self {
            lexer,
            current,
            peek,
            depth: 0,
        })
    }

    /// Parse the whole input; anything left over is an error
    pub fn parse(&mut self) -> Result<Expr, EvalError> {
        self.parse_all().map_err(|err| err.at_pos(self.lexer.position))
    }

    fn parse_all(&mut self) -> Result<Expr, EvalError> {
        let expr = self.parse_tokens(Precedence::Lowest)?;
        if self.peek != Token::Eof {
            return Err(EvalError::TrailingInput(format!("{:?}", self.peek)));
        }
        Ok(expr)
    }

    fn next_token(&mut self) -> Result<(), EvalError> {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token()?);
        Ok(())
    }

    fn parse_tokens(&mut self, precedence: Precedence) -> Result<Expr, EvalError> {
        let mut expr = self.parse_prefix()?;

        while self.peek != Token::Eof && precedence < Precedence::of_token(&self.peek) {
            self.next_token()?;
            expr = self.parse_binary_op(expr)?;
        }

        Ok(expr)
    }

    fn parse_prefix(&mut self) -> Result<Expr, EvalError> {
        match self.current.clone() {
            Token::Number(value) => Ok(Expr::Literal(value)),

            Token::Minus => self.nested(|parser| {
                parser.next_token()?;
                let operand = parser.parse_tokens(Precedence::Prefix)?;
                Ok(Expr::Neg(Box::new(operand)))
            }),

            Token::Plus => self.nested(|parser| {
                parser.next_token()?;
                parser.parse_tokens(Precedence::Prefix)
            }),

            Token::LeftParenthesis => self.nested(|parser| {
                parser.next_token()?;
                let expr = parser.parse_tokens(Precedence::Lowest)?;
                parser.expect_close()?;
                Ok(expr)
            }),

            Token::Ident(name) => self.nested(|parser| parser.parse_call(name)),

            other => Err(EvalError::UnexpectedToken(format!("{:?}", other))),
        }
    }

    /// Run `parse` one nesting level deeper, refusing to recurse past [`MAX_DEPTH`]
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_call(&mut self, name: String) -> Result<Expr, EvalError> {
        if self.peek != Token::LeftParenthesis {
            return Err(EvalError::UnexpectedToken(name));
        }
        self.next_token()?;

        let mut args = Vec::new();
        if self.peek == Token::RightParenthesis {
            self.next_token()?;
            return Ok(Expr::Call { name, args });
        }

        loop {
            self.next_token()?;
            args.push(self.parse_tokens(Precedence::Lowest)?);
            if self.peek == Token::Comma {
                self.next_token()?;
                continue;
            }
            self.expect_close()?;
            return Ok(Expr::Call { name, args });
        }
    }

    fn expect_close(&mut self) -> Result<(), EvalError> {
        if self.peek != Token::RightParenthesis {
            return Err(EvalError::UnclosedParenthesis);
        }
        self.next_token()
    }

    fn parse_binary_op(&mut self, left: Expr) -> Result<Expr, EvalError> {
        let op = match self.current {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            Token::Multiply => BinaryOperator::Mul,
            Token::Divide => BinaryOperator::Div,
            ref other => return Err(EvalError::UnexpectedToken(format!("{:?}", other))),
        };
        let precedence = Precedence::of_token(&self.current);
        self.next_token()?;

        let right = self.parse_tokens(precedence)?;
        Ok(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
