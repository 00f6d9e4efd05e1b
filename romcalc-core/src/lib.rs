mod calc_error;
mod calculator;
mod operand;
mod operators;
mod parse_error;
mod roman;
mod tokenizer;

pub use calc_error::{CalcError, RangeError, TracedCalcError};
pub use calculator::{evaluate_line, Evaluation, Expression, MAX_OPERAND, MIN_OPERAND};
pub use operand::{NumeralKind, Operand};
pub use operators::Operator;
pub use parse_error::ParseError;
pub use roman::{int_to_roman, is_roman, roman_to_int, MAX_ROMAN};
pub use tokenizer::{tokenize, Token, TokenizedLine};
