use std::ops::Range;

use crate::{
    calc_error::{CalcError, TracedCalcError},
    roman::{is_roman, roman_to_int},
};

/// The numeral system an operand was written in. Results are written in
/// the same system as their operands.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NumeralKind {
    Decimal,
    Roman,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Operand {
    pub value: i64,
    pub kind: NumeralKind,
    /// Byte range of the operand's text in the input line.
    pub span: Range<usize>,
}

impl Operand {
    /// Converts the operand's text (already stripped of surrounding
    /// whitespace) into a value. Upper-case Roman numerals are tried first,
    /// then base-10 integers.
    pub fn parse(text: &str, span: Range<usize>) -> Result<Self, TracedCalcError> {
        let invalid = || {
            TracedCalcError::with_span(CalcError::InvalidNumeral(text.to_string()), span.clone())
        };

        let (value, kind) = if is_roman(text) {
            (roman_to_int(text).ok_or_else(invalid)?, NumeralKind::Roman)
        } else {
            (
                text.parse::<i64>().map_err(|_| invalid())?,
                NumeralKind::Decimal,
            )
        };

        Ok(Operand { value, kind, span })
    }

    pub fn is_roman(&self) -> bool {
        self.kind == NumeralKind::Roman
    }
}
