//! Integer arithmetic with `+`, `*` and parentheses.
//!
//! ```text
//! expr   = term ('+' term)*
//! term   = factor ('*' factor)*
//! factor = '(' expr ')' | integer
//! ```
//!
//! The three rules refer to each other, so each one is a function and the
//! cycle goes through [`lazy`]. Spaces are allowed around every factor and
//! operator. Results saturate at the bounds of `i64`.

use crate::Error;
use crate::parser::{Parser, element, lazy, separated_by};
use crate::text::{integer, padded, token};

pub fn expr<'a>() -> Parser<'a, i64> {
    separated_by(term(), token("+"), 0, i64::saturating_add).named("Expr")
}

pub fn term<'a>() -> Parser<'a, i64> {
    separated_by(factor(), token("*"), 1, i64::saturating_mul).named("Term")
}

pub fn factor<'a>() -> Parser<'a, i64> {
    let parenthesized = element('(')
        .ignore_previous(lazy(expr))
        .ignore(element(')'));
    let number = integer().transform(|n| i64::try_from(n).unwrap_or(i64::MAX));
    padded(parenthesized.or_with(number)).named("Factor")
}

/// Evaluate a whole expression. Anything after the expression is an error.
pub fn eval(text: &str) -> Result<i64, Error> {
    let value = expr().parse_complete(text)?;
    tracing::debug!(text, value, "evaluated");
    Ok(value)
}
