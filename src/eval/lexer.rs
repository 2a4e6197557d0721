use super::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Multiply,
    Divide,
    Comma,
    LeftParenthesis,
    RightParenthesis,
    Eof,
}

#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    pub position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token, EvalError> {
        self.skip_whitespace();

        let Some(&ch) = self.input.get(self.position) else {
            return Ok(Token::Eof);
        };

        let single = match ch {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Multiply),
            '/' => Some(Token::Divide),
            ',' => Some(Token::Comma),
            '(' => Some(Token::LeftParenthesis),
            ')' => Some(Token::RightParenthesis),
            _ => None,
        };
        if let Some(token) = single {
            self.position += 1;
            return Ok(token);
        }

        match ch {
            '0'..='9' | '.' => self.read_number(),
            c if c.is_ascii_alphabetic() => Ok(self.read_identifier()),
            other => Err(EvalError::UnexpectedChar(other)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.position < self.input.len() && self.input[self.position].is_whitespace() {
            self.position += 1;
        }
    }

    fn read_number(&mut self) -> Result<Token, EvalError> {
        let start = self.position;
        while self.position < self.input.len()
            && (self.input[self.position].is_ascii_digit() || self.input[self.position] == '.')
        {
            self.position += 1;
        }

        let number: String = self.input[start..self.position].iter().collect();
        number
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvalError::Number(number))
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self.position < self.input.len() && self.input[self.position].is_ascii_alphanumeric() {
            self.position += 1;
        }

        Token::Ident(self.input[start..self.position].iter().collect::<String>().to_lowercase())
    }
}
