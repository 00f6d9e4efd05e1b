use std::{ops::Range, sync::OnceLock};

use regex::{Captures, Regex};
use tracing::debug;

use crate::{operators::Operator, parse_error::ParseError};

const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];

/// A piece of the input line along with the byte range it came from.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

#[derive(Debug, PartialEq)]
pub struct TokenizedLine<'a> {
    pub left: Token<'a>,
    pub operator: Operator,
    pub right: Token<'a>,
}

fn expression_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // An operand is a run of anything that isn't whitespace or an
        // operator, optionally preceded by a minus sign.
        Regex::new(r"^\s*(-?[^\s+\-*/]+)\s*([+\-*/])\s*(-?[^\s+\-*/]+)\s*$")
            .expect("expression pattern is valid")
    })
}

fn is_operand_char(ch: char) -> bool {
    !ch.is_whitespace() && !OPERATOR_CHARS.contains(&ch)
}

/// Returns whether the line contains an operator other than a minus sign
/// leading an operand.
fn has_operator(line: &str) -> bool {
    let trimmed = line.trim_start();
    let rest = match trimmed.strip_prefix('-') {
        Some(rest) if rest.starts_with(is_operand_char) => rest,
        _ => trimmed,
    };
    rest.contains(OPERATOR_CHARS)
}

fn token_at<'a>(captures: &Captures<'a>, index: usize) -> Result<Token<'a>, ParseError> {
    let capture = captures
        .get(index)
        .ok_or(ParseError::MalformedExpression)?;
    Ok(Token {
        text: capture.as_str(),
        span: capture.range(),
    })
}

/// Splits a line into `<operand> <operator> <operand>`.
pub fn tokenize(line: &str) -> Result<TokenizedLine<'_>, ParseError> {
    let Some(captures) = expression_regex().captures(line) else {
        return Err(if has_operator(line) {
            ParseError::MalformedExpression
        } else {
            ParseError::NoOperator
        });
    };

    let left = token_at(&captures, 1)?;
    let operator = Operator::from_symbol(token_at(&captures, 2)?.text)
        .ok_or(ParseError::MalformedExpression)?;
    let right = token_at(&captures, 3)?;

    debug!(left = left.text, %operator, right = right.text, "tokenized line");

    Ok(TokenizedLine {
        left,
        operator,
        right,
    })
}
