use std::{
    backtrace::{Backtrace, BacktraceStatus},
    error::Error,
    fmt::Display,
    ops::Range,
};

use crate::parse_error::ParseError;

#[derive(Debug)]
pub struct TracedCalcError {
    pub error: CalcError,
    /// Byte range of the part of the input line that caused the error, if known.
    pub span: Option<Range<usize>>,
    backtrace: Backtrace,
}

impl TracedCalcError {
    pub fn with_span(error: CalcError, span: Range<usize>) -> Self {
        TracedCalcError {
            error,
            span: Some(span),
            backtrace: Backtrace::capture(),
        }
    }

    /// If this error points at a part of `line`, returns the line along with a
    /// second line containing carets that, when printed below it in a
    /// monospaced font, "point" at the offending part.
    pub fn get_line_with_pointer_caret<T: AsRef<str>>(&self, line: T) -> Vec<String> {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        let Some(span) = &self.span else {
            return vec![];
        };
        let (Some(before), Some(spanned)) = (line.get(..span.start), line.get(span.clone()))
        else {
            return vec![];
        };
        if spanned.is_empty() {
            return vec![];
        }
        let start = before.chars().count();
        let width = spanned.chars().count();
        vec![
            line.to_owned(),
            format!("{}{}", " ".repeat(start), "^".repeat(width)),
        ]
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum CalcError {
    Parse(ParseError),
    /// The argument is the operand text that is neither a Roman numeral
    /// nor a decimal integer.
    InvalidNumeral(String),
    /// One operand is Roman and the other is decimal.
    FormatMismatch,
    OutOfRange(RangeError),
    DivisionByZero,
    /// Reading from the input stream failed for a reason other than
    /// reaching its end.
    Stream(String),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RangeError {
    /// An operand lies outside of 0 to 10 inclusive.
    Operand(i64),
    /// A result can't be written as a Roman numeral, or the arithmetic
    /// overflowed (in which case there's no value to report).
    Result(Option<i64>),
}

impl Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::Operand(value) => write!(f, "OPERAND {value}"),
            RangeError::Result(Some(value)) => write!(f, "RESULT {value}"),
            RangeError::Result(None) => write!(f, "OVERFLOW"),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        CalcError::Parse(value)
    }
}

impl From<RangeError> for CalcError {
    fn from(value: RangeError) -> Self {
        CalcError::OutOfRange(value)
    }
}

impl From<ParseError> for TracedCalcError {
    fn from(value: ParseError) -> Self {
        TracedCalcError {
            error: value.into(),
            span: None,
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<RangeError> for TracedCalcError {
    fn from(value: RangeError) -> Self {
        TracedCalcError {
            error: value.into(),
            span: None,
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<CalcError> for TracedCalcError {
    fn from(value: CalcError) -> Self {
        TracedCalcError {
            error: value,
            span: None,
            backtrace: Backtrace::capture(),
        }
    }
}

impl Error for TracedCalcError {}

impl Display for TracedCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            CalcError::Parse(err) => {
                write!(f, "{}", err)?;
            }
            CalcError::InvalidNumeral(text) => {
                write!(f, "INVALID NUMERAL ERROR ('{text}')")?;
            }
            CalcError::FormatMismatch => {
                write!(f, "FORMAT MISMATCH ERROR")?;
            }
            CalcError::OutOfRange(err) => {
                write!(f, "RANGE ERROR ({err})")?;
            }
            CalcError::DivisionByZero => {
                write!(f, "DIVISION BY ZERO ERROR")?;
            }
            CalcError::Stream(message) => {
                write!(f, "STREAM ERROR ({message})")?;
            }
        }
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nBacktrace:\n{}", self.backtrace)?;
        }
        Ok(())
    }
}
