use std::{error::Error, fmt::Display};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ParseError {
    /// The line doesn't contain any of the supported operators.
    NoOperator,
    /// The line contains an operator, but it can't be split into exactly
    /// `<operand> <operator> <operand>`, e.g. `1+2+3` or `5+`.
    MalformedExpression,
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PARSE ERROR ({:?})", self)
    }
}
