//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer, reordered by
//! the postfix converter and consumed by the engine's stack machine.

/// Binary operators recognized in expressions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,
    Percent,
}

impl Operator {
    /// Maps a source character to its operator, if it is one.
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Asterisk),
            '/' => Some(Operator::Slash),
            '^' => Some(Operator::Caret),
            '%' => Some(Operator::Percent),
            _ => None,
        }
    }

    /// Binding strength: `^` over `* / %` over `+ -`.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Asterisk | Operator::Slash | Operator::Percent => 2,
            Operator::Caret => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Asterisk => '*',
            Operator::Slash => '/',
            Operator::Caret => '^',
            Operator::Percent => '%',
        }
    }
}

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    // Literals
    Number(f64),

    // Operators
    Operator(Operator),

    // Delimiters
    LParen,
    RParen,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
