//! Formula evaluator for custom financial sections.
//!
//! Formulas are plain arithmetic over numeric literals and `{field}`
//! references:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | primary
//! primary := NUMBER | '{' NAME '}' | '(' expr ')'
//! ```
//!
//! Parsing and evaluation are separate steps so a formula can be checked once
//! and evaluated against many field sets.
//!
//! Formulas come from request bodies, so both their length and their nesting
//! are bounded before any tree is built.

use thiserror::Error;

/// Longest accepted formula, in characters.
pub const MAX_FORMULA_LEN: usize = 1024;

/// Deepest accepted nesting of parentheses and unary signs.
pub const MAX_FORMULA_DEPTH: usize = 64;

/// Why a formula could not produce a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("Formula is empty")]
    EmptyFormula,

    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("Unexpected end of formula")]
    UnexpectedEnd,

    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Unknown field '{name}'")]
    UnknownField { name: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,

    #[error("Formula exceeds {max} characters")]
    TooLong { max: usize },

    #[error("Formula nests deeper than {max} levels")]
    TooDeep { max: usize },
}

impl FormulaError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            FormulaError::EmptyFormula => "EMPTY_FORMULA",
            FormulaError::UnexpectedCharacter { .. } => "UNEXPECTED_CHARACTER",
            FormulaError::UnexpectedToken { .. } => "UNEXPECTED_TOKEN",
            FormulaError::UnexpectedEnd => "UNEXPECTED_END",
            FormulaError::UnbalancedParentheses => "UNBALANCED_PARENTHESES",
            FormulaError::UnknownField { .. } => "UNKNOWN_FIELD",
            FormulaError::DivisionByZero => "DIVISION_BY_ZERO",
            FormulaError::NonFinite => "NON_FINITE",
            FormulaError::TooLong { .. } => "TOO_LONG",
            FormulaError::TooDeep { .. } => "TOO_DEEP",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Number(f64),
    Field(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    position: usize,
    text: String,
}

fn tokenize(source: &str) -> Result<Vec<Token>, FormulaError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let start = i;
        let single = |kind| Token {
            kind,
            position: start,
            text: ch.to_string(),
        };

        match ch {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => tokens.push(single(TokenKind::Plus)),
            '-' => tokens.push(single(TokenKind::Minus)),
            '*' => tokens.push(single(TokenKind::Star)),
            '/' => tokens.push(single(TokenKind::Slash)),
            '(' => tokens.push(single(TokenKind::LParen)),
            ')' => tokens.push(single(TokenKind::RParen)),
            '{' => {
                let close = chars[start + 1..]
                    .iter()
                    .position(|&c| c == '}')
                    .ok_or(FormulaError::UnexpectedEnd)?;
                let text: String = chars[start..=start + 1 + close].iter().collect();
                let name: String = chars[start + 1..start + 1 + close].iter().collect();
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(FormulaError::UnexpectedToken {
                        token: text,
                        position: start,
                    });
                }
                tokens.push(Token {
                    kind: TokenKind::Field(name),
                    position: start,
                    text,
                });
                i = start + close + 2;
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let value = text.parse::<f64>().map_err(|_| FormulaError::UnexpectedToken {
                    token: text.clone(),
                    position: start,
                })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                    text,
                });
                continue;
            }
            other => {
                return Err(FormulaError::UnexpectedCharacter {
                    ch: other,
                    position: start,
                })
            }
        }
        i += 1;
    }

    Ok(tokens)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Number(f64),
    Field(String),
    Negate(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
    nesting: usize,
}

impl Parser {
    fn enter(&mut self) -> Result<(), FormulaError> {
        if self.nesting >= MAX_FORMULA_DEPTH {
            return Err(FormulaError::TooDeep {
                max: MAX_FORMULA_DEPTH,
            });
        }
        self.nesting += 1;
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.term()?;
        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }) {
            self.cursor += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.unary()?;
        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }) {
            self.cursor += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, FormulaError> {
        let next = self.peek().map(|t| t.kind.clone());
        match next {
            Some(TokenKind::Minus) => {
                self.cursor += 1;
                self.enter()?;
                let inner = self.unary()?;
                self.nesting -= 1;
                Ok(Expr::Negate(Box::new(inner)))
            }
            Some(TokenKind::Plus) => {
                self.cursor += 1;
                self.enter()?;
                let inner = self.unary()?;
                self.nesting -= 1;
                Ok(inner)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, FormulaError> {
        let token = match self.advance() {
            Some(token) => token,
            None if self.depth > 0 => return Err(FormulaError::UnbalancedParentheses),
            None => return Err(FormulaError::UnexpectedEnd),
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Field(name) => Ok(Expr::Field(name)),
            TokenKind::LParen => {
                self.enter()?;
                self.depth += 1;
                let inner = self.expression()?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => {
                        self.depth -= 1;
                        self.nesting -= 1;
                        Ok(inner)
                    }
                    Some(other) => Err(FormulaError::UnexpectedToken {
                        token: other.text,
                        position: other.position,
                    }),
                    None => Err(FormulaError::UnbalancedParentheses),
                }
            }
            TokenKind::RParen => Err(FormulaError::UnbalancedParentheses),
            _ => Err(FormulaError::UnexpectedToken {
                token: token.text,
                position: token.position,
            }),
        }
    }
}

/// A parsed formula, ready to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    expr: Expr,
}

impl Formula {
    /// Parses a formula.
    ///
    /// # Errors
    /// Any syntax error; see [`FormulaError`]. Field names are not checked
    /// here, only at evaluation. Formulas longer than [`MAX_FORMULA_LEN`] or
    /// nested deeper than [`MAX_FORMULA_DEPTH`] are rejected.
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        if source.trim().is_empty() {
            return Err(FormulaError::EmptyFormula);
        }
        if source.chars().count() > MAX_FORMULA_LEN {
            return Err(FormulaError::TooLong {
                max: MAX_FORMULA_LEN,
            });
        }

        let mut parser = Parser {
            tokens: tokenize(source)?,
            cursor: 0,
            depth: 0,
            nesting: 0,
        };
        let expr = parser.expression()?;

        if let Some(extra) = parser.advance() {
            return Err(match extra.kind {
                TokenKind::RParen => FormulaError::UnbalancedParentheses,
                _ => FormulaError::UnexpectedToken {
                    token: extra.text,
                    position: extra.position,
                },
            });
        }

        Ok(Self {
            source: source.to_string(),
            expr,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the formula, resolving `{field}` references with `lookup`.
    ///
    /// # Errors
    /// - `UnknownField` when `lookup` returns `None`
    /// - `DivisionByZero` when a divisor evaluates to zero
    /// - `NonFinite` when any intermediate value overflows or is NaN
    pub fn evaluate<F>(&self, lookup: F) -> Result<f64, FormulaError>
    where
        F: Fn(&str) -> Option<f64>,
    {
        eval(&self.expr, &lookup)
    }
}

fn eval<F>(expr: &Expr, lookup: &F) -> Result<f64, FormulaError>
where
    F: Fn(&str) -> Option<f64>,
{
    let value = match expr {
        Expr::Number(value) => *value,
        Expr::Field(name) => lookup(name).ok_or_else(|| FormulaError::UnknownField {
            name: name.clone(),
        })?,
        Expr::Negate(inner) => -eval(inner, lookup)?,
        Expr::Binary(op, lhs, rhs) => {
            let lhs = eval(lhs, lookup)?;
            let rhs = eval(rhs, lookup)?;
            match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => {
                    if rhs == 0.0 {
                        return Err(FormulaError::DivisionByZero);
                    }
                    lhs / rhs
                }
            }
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NonFinite)
    }
}
