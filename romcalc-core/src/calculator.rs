use std::fmt::Display;

use tracing::debug;

use crate::{
    calc_error::{CalcError, RangeError, TracedCalcError},
    operand::{NumeralKind, Operand},
    operators::Operator,
    roman::int_to_roman,
    tokenizer::tokenize,
};

/// Operands must lie within this range, whichever numeral system
/// they're written in.
pub const MIN_OPERAND: i64 = 0;
pub const MAX_OPERAND: i64 = 10;

#[derive(Debug, PartialEq, Clone)]
pub struct Expression {
    pub left: Operand,
    pub operator: Operator,
    pub right: Operand,
}

impl Expression {
    /// Tokenizes the line, converts both operands and validates them.
    pub fn parse(line: &str) -> Result<Self, TracedCalcError> {
        let tokenized = tokenize(line)?;
        let left = Operand::parse(tokenized.left.text, tokenized.left.span)?;
        let right = Operand::parse(tokenized.right.text, tokenized.right.span)?;
        let expression = Expression {
            left,
            operator: tokenized.operator,
            right,
        };
        expression.validate()?;
        Ok(expression)
    }

    fn validate(&self) -> Result<(), TracedCalcError> {
        if self.left.is_roman() != self.right.is_roman() {
            // Point at whichever operand is the odd one out, i.e. the
            // one that doesn't match the left side.
            return Err(TracedCalcError::with_span(
                CalcError::FormatMismatch,
                self.right.span.clone(),
            ));
        }

        for operand in [&self.left, &self.right] {
            if !(MIN_OPERAND..=MAX_OPERAND).contains(&operand.value) {
                return Err(TracedCalcError::with_span(
                    RangeError::Operand(operand.value).into(),
                    operand.span.clone(),
                ));
            }
        }

        Ok(())
    }

    pub fn evaluate(&self) -> Result<Evaluation, TracedCalcError> {
        let value = self
            .operator
            .evaluate(self.left.value, self.right.value)
            .map_err(|err| match err {
                CalcError::DivisionByZero => {
                    TracedCalcError::with_span(err, self.right.span.clone())
                }
                _ => err.into(),
            })?;

        // Both sides share a kind once validated.
        let evaluation = Evaluation {
            value,
            kind: self.left.kind,
        };
        debug!(expression = %self, value, "evaluated expression");
        Ok(evaluation)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left.value, self.operator, self.right.value
        )
    }
}

/// The result of evaluating an expression, along with the numeral system it
/// should be written in.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Evaluation {
    pub value: i64,
    pub kind: NumeralKind,
}

impl Evaluation {
    /// Writes the value in its numeral system. Roman results must lie
    /// between 1 and 3999.
    pub fn format(&self) -> Result<String, TracedCalcError> {
        match self.kind {
            NumeralKind::Decimal => Ok(self.value.to_string()),
            NumeralKind::Roman => Ok(int_to_roman(self.value)?),
        }
    }
}

/// Parses, validates, evaluates and formats a single line of input.
pub fn evaluate_line<T: AsRef<str>>(line: T) -> Result<String, TracedCalcError> {
    let expression = Expression::parse(line.as_ref())?;
    expression.evaluate()?.format()
}

#[cfg(test)]
mod tests {
    use super::{Evaluation, Expression};
    use crate::{
        calc_error::{CalcError, RangeError},
        operand::NumeralKind,
        operators::Operator,
    };

    #[test]
    fn parsing_works() {
        let expression = Expression::parse("VIII / II").unwrap();
        assert_eq!(expression.left.value, 8);
        assert_eq!(expression.operator, Operator::Divide);
        assert_eq!(expression.right.value, 2);
        assert_eq!(expression.left.kind, NumeralKind::Roman);
        assert_eq!(expression.to_string(), "8 / 2");
    }

    #[test]
    fn mismatch_points_at_right_operand() {
        let err = Expression::parse("III+4").unwrap_err();
        assert_eq!(err.error, CalcError::FormatMismatch);
        assert_eq!(err.span, Some(4..5));
    }

    #[test]
    fn mismatch_is_reported_whichever_side_is_roman() {
        for line in ["III+4", "4+III", "X/2", "2/X"] {
            let err = Expression::parse(line).unwrap_err();
            assert_eq!(err.error, CalcError::FormatMismatch, "parsing '{line}'");
        }
    }

    #[test]
    fn mismatch_is_reported_before_range() {
        let err = Expression::parse("XI+4").unwrap_err();
        assert_eq!(err.error, CalcError::FormatMismatch);
    }

    #[test]
    fn out_of_range_operands_fail() {
        let err = Expression::parse("2 + 11").unwrap_err();
        assert_eq!(err.error, CalcError::OutOfRange(RangeError::Operand(11)));
        assert_eq!(err.span, Some(4..6));

        let err = Expression::parse("-1+2").unwrap_err();
        assert_eq!(err.error, CalcError::OutOfRange(RangeError::Operand(-1)));
        assert_eq!(err.span, Some(0..2));
    }

    #[test]
    fn division_by_zero_points_at_divisor() {
        let expression = Expression::parse("5/0").unwrap();
        let err = expression.evaluate().unwrap_err();
        assert_eq!(err.error, CalcError::DivisionByZero);
        assert_eq!(err.span, Some(2..3));
    }

    #[test]
    fn formatting_works() {
        let decimal = Evaluation {
            value: -2,
            kind: NumeralKind::Decimal,
        };
        assert_eq!(decimal.format().unwrap(), "-2");

        let roman = Evaluation {
            value: 100,
            kind: NumeralKind::Roman,
        };
        assert_eq!(roman.format().unwrap(), "C");
    }

    #[test]
    fn formatting_unrepresentable_roman_results_fails() {
        for value in [0, -9] {
            let evaluation = Evaluation {
                value,
                kind: NumeralKind::Roman,
            };
            assert_eq!(
                evaluation.format().unwrap_err().error,
                CalcError::OutOfRange(RangeError::Result(Some(value)))
            );
        }
    }
}
