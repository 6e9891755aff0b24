//! The combinators that build new parsers out of existing ones.
//!
//! Every combinator here runs its sub-parsers in a fixed order, threads the
//! remainder from one to the next, and fails as soon as a sub-parser it
//! depends on fails. Only [`or_with`] and [`optional`] recover from a
//! failure, and both retry from the original input.

use super::{Outcome, Parser};
use Outcome::{Failure, Success};

/// Apply `f` to the value of `p`.
pub fn transform<'a, T: 'a, U: 'a>(
    p: Parser<'a, T>,
    f: impl Fn(T) -> U + Send + Sync + 'a,
) -> Parser<'a, U> {
    let name = format!("Transform({})", p.name());
    Parser::from_fn(name, move |input| p.parse(input).map(&f))
}

/// Ordered choice: the result of `first` if it matches, otherwise the
/// result of `second` on the same input.
pub fn or_with<'a, T: 'a>(first: Parser<'a, T>, second: Parser<'a, T>) -> Parser<'a, T> {
    let name = format!("OrWith({} | {})", first.name(), second.name());
    Parser::from_fn(name, move |input| match first.parse(input) {
        success @ Success(..) => success,
        // Whatever `first` looked at is forgotten, `second` starts over.
        Failure => second.parse(input),
    })
}

/// Run `first`, then `second` on what `first` left, and merge both values
/// with `f`. Once `first` has matched there is no going back: if `second`
/// fails, the whole thing fails.
pub fn combine<'a, A: 'a, B: 'a, C: 'a>(
    first: Parser<'a, A>,
    second: Parser<'a, B>,
    f: impl Fn(A, B) -> C + Send + Sync + 'a,
) -> Parser<'a, C> {
    let name = format!("Combine({}, {})", first.name(), second.name());
    Parser::from_fn(name, move |input| {
        let Success(a, rest) = first.parse(input) else {
            return Failure;
        };
        let Success(b, rest) = second.parse(rest) else {
            return Failure;
        };
        Success(f(a, b), rest)
    })
}

/// Sequence, keeping the value on the right ("snd").
pub fn ignore_previous<'a, A: 'a, B: 'a>(
    first: Parser<'a, A>,
    second: Parser<'a, B>,
) -> Parser<'a, B> {
    let name = format!("IgnorePrevious({}, {})", first.name(), second.name());
    combine(first, second, |_, b| b).named(name)
}

/// Sequence, keeping the value on the left ("fst").
pub fn ignore<'a, A: 'a, B: 'a>(first: Parser<'a, A>, second: Parser<'a, B>) -> Parser<'a, A> {
    let name = format!("Ignore({}, {})", first.name(), second.name());
    combine(first, second, |a, _| a).named(name)
}

/// Match `p` only when its value passes `predicate`.
pub fn if_satisfies<'a, T: 'a>(
    p: Parser<'a, T>,
    predicate: impl Fn(&T) -> bool + Send + Sync + 'a,
) -> Parser<'a, T> {
    let name = format!("IfSatisfies({})", p.name());
    Parser::from_fn(name, move |input| match p.parse(input) {
        Success(value, rest) if predicate(&value) => Success(value, rest),
        _ => Failure,
    })
}

/// Monadic bind: the value of `p` picks the parser that runs next.
pub fn then<'a, T: 'a, U: 'a>(
    p: Parser<'a, T>,
    f: impl Fn(T) -> Parser<'a, U> + Send + Sync + 'a,
) -> Parser<'a, U> {
    let name = format!("Then({})", p.name());
    Parser::from_fn(name, move |input| match p.parse(input) {
        Success(value, rest) => f(value).parse(rest),
        Failure => Failure,
    })
}

/// Run `p` but leave the input where it was.
pub fn lookahead<'a, T: 'a>(p: Parser<'a, T>) -> Parser<'a, T> {
    let name = format!("Lookahead({})", p.name());
    Parser::from_fn(name, move |input| match p.parse(input) {
        Success(value, _) => Success(value, input),
        Failure => Failure,
    })
}

/// `Some` of the value of `p`, or `None` without consuming anything.
pub fn optional<'a, T: 'a>(p: Parser<'a, T>) -> Parser<'a, Option<T>> {
    let name = format!("Optional({})", p.name());
    Parser::from_fn(name, move |input| match p.parse(input) {
        Success(value, rest) => Success(Some(value), rest),
        Failure => Success(None, input),
    })
}
