use super::Input;

/// The result of running a parser. On success, contains the parsed value and
/// the unconsumed rest of the input. A failure carries nothing: there is
/// no remainder to look at, and no reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'s, T> {
    /// The parser matched a prefix of the input.
    Success(T, Input<'s>),
    /// No match at this position.
    Failure,
}

use Outcome::{Failure, Success};

impl<'s, T> Outcome<'s, T> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(..))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<'s, U> {
        match self {
            Success(value, rest) => Success(f(value), rest),
            Failure => Failure,
        }
    }

    pub fn value(self) -> Option<T> {
        self.into_option().map(|(value, _)| value)
    }

    pub fn remainder(&self) -> Option<Input<'s>> {
        match self {
            Success(_, rest) => Some(*rest),
            Failure => None,
        }
    }

    pub fn into_option(self) -> Option<(T, Input<'s>)> {
        match self {
            Success(value, rest) => Some((value, rest)),
            Failure => None,
        }
    }

    /// Like [`Outcome::into_option`], with the remainder as a plain string.
    pub fn into_pair(self) -> Option<(T, &'s str)> {
        self.into_option().map(|(value, rest)| (value, rest.rest()))
    }
}

impl<'s, T> From<Option<(T, Input<'s>)>> for Outcome<'s, T> {
    fn from(option: Option<(T, Input<'s>)>) -> Self {
        match option {
            Some((value, rest)) => Success(value, rest),
            None => Failure,
        }
    }
}

impl<'s, T> From<Outcome<'s, T>> for Option<(T, Input<'s>)> {
    fn from(outcome: Outcome<'s, T>) -> Self {
        outcome.into_option()
    }
}
