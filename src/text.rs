//! Small parsers for plain text: spaces, digits, numbers and tokens.

use crate::parser::{Outcome, Parser, literal, many_of, one_of};

/// Zero or more spaces. Never fails.
pub fn whitespace<'a>() -> Parser<'a, String> {
    many_of(' ').named("Whitespace")
}

/// `p`, with optional spaces on both sides.
pub fn padded<'a, T: 'a>(p: Parser<'a, T>) -> Parser<'a, T> {
    let name = format!("Padded({})", p.name());
    whitespace()
        .ignore_previous(p)
        .ignore(whitespace())
        .named(name)
}

/// The text `s`, with optional spaces on both sides.
pub fn token(s: &str) -> Parser<'_, &str> {
    padded(literal(s)).named(format!("Token({s:?})"))
}

/// A decimal digit character.
pub fn digit<'a>() -> Parser<'a, char> {
    one_of("0123456789").named("Digit")
}

/// A decimal digit, as its value.
pub fn digit_value<'a>() -> Parser<'a, u32> {
    Parser::from_fn("DigitValue", |input| {
        match input.split_first() {
            Some((c, rest)) => match c.to_digit(10) {
                Some(d) => Outcome::Success(d, rest),
                None => Outcome::Failure,
            },
            None => Outcome::Failure,
        }
    })
}

/// One or more decimal digits. Saturates at `u64::MAX`.
pub fn integer<'a>() -> Parser<'a, u64> {
    digit_value()
        .many1(0u64, |n, d| n.saturating_mul(10).saturating_add(u64::from(d)))
        .named("Integer")
}
