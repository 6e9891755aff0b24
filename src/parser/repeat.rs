//! Repetition. Each of these folds the values of a repeated parser into an
//! accumulator, strictly left to right, starting from a seed.
//!
//! The seed is cloned on every run, so the same parser can be used many times.

use super::{Input, Outcome, Parser, combinators::ignore_previous};
use Outcome::{Failure, Success};

/// Run `p` until it fails, folding every value into `acc`.
///
/// A success that consumed nothing ends the loop without being folded;
/// otherwise a parser like `optional(..)` would repeat forever.
fn fold<'s, T, A>(
    p: &Parser<'_, T>,
    mut acc: A,
    reducer: &impl Fn(A, T) -> A,
    mut input: Input<'s>,
) -> (A, Input<'s>) {
    while let Success(value, rest) = p.parse(input) {
        if rest.offset() == input.offset() {
            tracing::debug!(
                parser = p.name(),
                offset = input.offset(),
                "stopping repetition on a zero-width match"
            );
            break;
        }
        acc = reducer(acc, value);
        input = rest;
    }
    (acc, input)
}

/// Zero or more `p`. Never fails.
pub fn many<'a, T: 'a, A>(
    p: Parser<'a, T>,
    seed: A,
    reducer: impl Fn(A, T) -> A + Send + Sync + 'a,
) -> Parser<'a, A>
where
    A: Clone + Send + Sync + 'a,
{
    let name = format!("Many({})", p.name());
    Parser::from_fn(name, move |input| {
        let (acc, rest) = fold(&p, seed.clone(), &reducer, input);
        Success(acc, rest)
    })
}

/// One or more `p`.
pub fn many1<'a, T: 'a, A>(
    p: Parser<'a, T>,
    seed: A,
    reducer: impl Fn(A, T) -> A + Send + Sync + 'a,
) -> Parser<'a, A>
where
    A: Clone + Send + Sync + 'a,
{
    let name = format!("Many1({})", p.name());
    Parser::from_fn(name, move |input| {
        let Success(first, rest) = p.parse(input) else {
            return Failure;
        };
        let (acc, rest) = fold(&p, reducer(seed.clone(), first), &reducer, rest);
        Success(acc, rest)
    })
}

/// Exactly `n` consecutive `p`. Matches beyond the `n`th are left alone.
pub fn exactly_n<'a, T: 'a, A>(
    p: Parser<'a, T>,
    seed: A,
    reducer: impl Fn(A, T) -> A + Send + Sync + 'a,
    n: usize,
) -> Parser<'a, A>
where
    A: Clone + Send + Sync + 'a,
{
    let name = format!("ExactlyN({}, {n})", p.name());
    Parser::from_fn(name, move |mut input| {
        let mut acc = seed.clone();
        for _ in 0..n {
            let Success(value, rest) = p.parse(input) else {
                return Failure;
            };
            acc = reducer(acc, value);
            input = rest;
        }
        Success(acc, input)
    })
}

/// One `p`, followed by any number of `separator p`. All the values of `p`
/// are folded; the values of `separator` are dropped.
///
/// A separator that is not followed by a `p` is not consumed.
pub fn separated_by<'a, T: 'a, S: 'a, A>(
    p: Parser<'a, T>,
    separator: Parser<'a, S>,
    seed: A,
    reducer: impl Fn(A, T) -> A + Send + Sync + 'a,
) -> Parser<'a, A>
where
    A: Clone + Send + Sync + 'a,
{
    let name = format!("SeparatedBy({}, {})", p.name(), separator.name());
    // Separator and item succeed or fail as one unit.
    let next = ignore_previous(separator, p.clone());
    Parser::from_fn(name, move |input| {
        let Success(first, rest) = p.parse(input) else {
            return Failure;
        };
        let (acc, rest) = fold(&next, reducer(seed.clone(), first), &reducer, rest);
        Success(acc, rest)
    })
}
