use std::fmt::Display;

use crate::calc_error::{CalcError, RangeError};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Returns `None` for anything other than a single supported symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Division truncates toward zero.
    pub fn evaluate(&self, left_side: i64, right_side: i64) -> Result<i64, CalcError> {
        let result = match self {
            Operator::Add => left_side.checked_add(right_side),
            Operator::Subtract => left_side.checked_sub(right_side),
            Operator::Multiply => left_side.checked_mul(right_side),
            Operator::Divide => {
                if right_side == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                left_side.checked_div(right_side)
            }
        };
        result.ok_or(RangeError::Result(None).into())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
