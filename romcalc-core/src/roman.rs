use std::sync::OnceLock;

use regex::Regex;

use crate::calc_error::RangeError;

/// The largest value that standard Roman notation can express.
pub const MAX_ROMAN: i64 = 3999;

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn roman_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
            .expect("Roman numeral pattern is valid")
    })
}

/// Returns whether the string is a well-formed, upper-case Roman numeral.
///
/// Note that the empty string matches the pattern but is not considered
/// a Roman numeral, since there's no Roman way of writing zero.
pub fn is_roman(string: &str) -> bool {
    !string.is_empty() && roman_regex().is_match(string)
}

fn digit_value(ch: char) -> Option<i64> {
    match ch {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Converts a well-formed Roman numeral to its value, returning `None` if
/// the string isn't one.
pub fn roman_to_int(string: &str) -> Option<i64> {
    if !is_roman(string) {
        return None;
    }

    let mut total = 0;
    let mut chars = string.chars().peekable();
    while let Some(ch) = chars.next() {
        let value = digit_value(ch)?;
        match chars.peek().and_then(|&next| digit_value(next)) {
            Some(next_value) if next_value > value => total -= value,
            _ => total += value,
        }
    }

    Some(total)
}

pub fn int_to_roman(value: i64) -> Result<String, RangeError> {
    if !(1..=MAX_ROMAN).contains(&value) {
        return Err(RangeError::Result(Some(value)));
    }

    let mut remaining = value;
    let mut result = String::new();
    for (amount, numeral) in NUMERALS {
        while remaining >= amount {
            result.push_str(numeral);
            remaining -= amount;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{int_to_roman, is_roman, roman_to_int, MAX_ROMAN};
    use crate::calc_error::RangeError;

    #[test]
    fn is_roman_works() {
        for value in ["I", "IV", "IX", "X", "XIV", "MCMXCIV", "MMMCMXCIX"] {
            assert!(is_roman(value), "'{value}' should be Roman");
        }
    }

    #[test]
    fn is_roman_rejects_malformed_numerals() {
        for value in ["", "IIII", "VV", "IL", "IC", "XM", "iv", "MMMM", "1", "I I"] {
            assert!(!is_roman(value), "'{value}' should not be Roman");
        }
    }

    #[test]
    fn roman_to_int_works() {
        assert_eq!(roman_to_int("III"), Some(3));
        assert_eq!(roman_to_int("IV"), Some(4));
        assert_eq!(roman_to_int("IX"), Some(9));
        assert_eq!(roman_to_int("X"), Some(10));
        assert_eq!(roman_to_int("XLII"), Some(42));
        assert_eq!(roman_to_int("MCMXCIV"), Some(1994));
        assert_eq!(roman_to_int("MMMCMXCIX"), Some(3999));
        assert_eq!(roman_to_int("IIII"), None);
        assert_eq!(roman_to_int(""), None);
    }

    #[test]
    fn int_to_roman_works() {
        assert_eq!(int_to_roman(1), Ok("I".to_string()));
        assert_eq!(int_to_roman(7), Ok("VII".to_string()));
        assert_eq!(int_to_roman(40), Ok("XL".to_string()));
        assert_eq!(int_to_roman(100), Ok("C".to_string()));
        assert_eq!(int_to_roman(3999), Ok("MMMCMXCIX".to_string()));
    }

    #[test]
    fn int_to_roman_rejects_unrepresentable_values() {
        for value in [0, -1, MAX_ROMAN + 1] {
            assert_eq!(int_to_roman(value), Err(RangeError::Result(Some(value))));
        }
    }

    #[test]
    fn converting_to_roman_and_back_works() {
        for value in 1..=MAX_ROMAN {
            let roman = int_to_roman(value).unwrap();
            assert_eq!(roman_to_int(&roman), Some(value), "via '{roman}'");
        }
    }
}
