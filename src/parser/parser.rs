use super::{Input, Outcome, combinators, recursive, repeat};
use crate::error::Error;

use std::sync::Arc;

type ParseFn<'a, T> = Arc<dyn for<'s> Fn(Input<'s>) -> Outcome<'s, T> + Send + Sync + 'a>;

/// A parser producing values of type `T`.
///
/// `'a` is the lifetime of the parser. Things the parser captures (literals,
/// character sets, functions) need to live at least as long as `'a`. The
/// input is not tied to `'a`, so a parser can be built once and run over
/// any number of inputs.
///
/// Cloning is cheap: clones share the same underlying function.
pub struct Parser<'a, T> {
    name: Arc<str>,
    parse: ParseFn<'a, T>,
}

impl<T> Clone for Parser<'_, T> {
    fn clone(&self) -> Self {
        Parser {
            name: Arc::clone(&self.name),
            parse: Arc::clone(&self.parse),
        }
    }
}

impl<T> std::fmt::Debug for Parser<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Parser").field("name", &self.name).finish()
    }
}

// How a parser is used

impl<T> Parser<'_, T> {
    pub fn parse<'s>(&self, input: Input<'s>) -> Outcome<'s, T> {
        (self.parse)(input)
    }

    /// Parse from the start of `text`, returning the value and the unconsumed
    /// rest of the text.
    pub fn parse_str<'s>(&self, text: &'s str) -> Option<(T, &'s str)> {
        self.parse(Input::new(text)).into_pair()
    }

    /// Parse all of `text`. Succeeding on a proper prefix is an error here.
    pub fn parse_complete(&self, text: &str) -> Result<T, Error> {
        match self.parse(Input::new(text)) {
            Outcome::Success(value, rest) if rest.is_empty() => Ok(value),
            Outcome::Success(_, rest) => Err(Error::Unconsumed {
                remaining: rest.len(),
            }),
            Outcome::Failure => Err(Error::NoMatch),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// Basic constructors

impl<'a, T: 'a> Parser<'a, T> {
    pub fn new<Func>(func: Func) -> Self
    where
        Func: for<'s> Fn(Input<'s>) -> Outcome<'s, T> + Send + Sync + 'a,
    {
        Parser::from_fn("Fn", func)
    }

    /// A parser from a plain function. This is also how a grammar rule
    /// written as an ordinary `fn(Input) -> Outcome` becomes a parser.
    pub fn from_fn<Func>(name: impl Into<Arc<str>>, func: Func) -> Self
    where
        Func: for<'s> Fn(Input<'s>) -> Outcome<'s, T> + Send + Sync + 'a,
    {
        Parser {
            name: name.into(),
            parse: Arc::new(func),
        }
    }

    /// Succeeds with `value` without consuming anything.
    pub fn always(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Parser::from_fn("Always", move |input| {
            Outcome::Success(value.clone(), input)
        })
    }

    /// Never succeeds.
    pub fn fail() -> Self {
        Parser::from_fn("Fail", |_| Outcome::Failure)
    }

    /// The same parser under another name.
    pub fn named(self, name: impl Into<Arc<str>>) -> Self {
        Parser {
            name: name.into(),
            ..self
        }
    }

    /// Emit a `trace` event every time this parser runs.
    pub fn traced(self) -> Self {
        let name = Arc::clone(&self.name);
        Parser::from_fn(Arc::clone(&name), move |input| {
            let outcome = self.parse(input);
            match &outcome {
                Outcome::Success(_, rest) => tracing::trace!(
                    parser = %name,
                    offset = input.offset(),
                    consumed = rest.offset() - input.offset(),
                    "matched"
                ),
                Outcome::Failure => {
                    tracing::trace!(parser = %name, offset = input.offset(), "no match")
                }
            }
            outcome
        })
    }
}

// Combinators as methods, so that chains read left to right

impl<'a, T: 'a> Parser<'a, T> {
    pub fn transform<U: 'a>(self, f: impl Fn(T) -> U + Send + Sync + 'a) -> Parser<'a, U> {
        combinators::transform(self, f)
    }

    pub fn or_with(self, other: Parser<'a, T>) -> Parser<'a, T> {
        combinators::or_with(self, other)
    }

    pub fn combine<U: 'a, V: 'a>(
        self,
        other: Parser<'a, U>,
        f: impl Fn(T, U) -> V + Send + Sync + 'a,
    ) -> Parser<'a, V> {
        combinators::combine(self, other, f)
    }

    /// Parse `self` then `other`, keeping only the value of `other`.
    pub fn ignore_previous<U: 'a>(self, other: Parser<'a, U>) -> Parser<'a, U> {
        combinators::ignore_previous(self, other)
    }

    /// Parse `self` then `other`, keeping only the value of `self`.
    pub fn ignore<U: 'a>(self, other: Parser<'a, U>) -> Parser<'a, T> {
        combinators::ignore(self, other)
    }

    pub fn if_satisfies(self, predicate: impl Fn(&T) -> bool + Send + Sync + 'a) -> Parser<'a, T> {
        combinators::if_satisfies(self, predicate)
    }

    pub fn then<U: 'a>(self, f: impl Fn(T) -> Parser<'a, U> + Send + Sync + 'a) -> Parser<'a, U> {
        combinators::then(self, f)
    }

    pub fn lookahead(self) -> Parser<'a, T> {
        combinators::lookahead(self)
    }

    pub fn optional(self) -> Parser<'a, Option<T>> {
        combinators::optional(self)
    }

    pub fn many<A>(self, seed: A, reducer: impl Fn(A, T) -> A + Send + Sync + 'a) -> Parser<'a, A>
    where
        A: Clone + Send + Sync + 'a,
    {
        repeat::many(self, seed, reducer)
    }

    pub fn many1<A>(self, seed: A, reducer: impl Fn(A, T) -> A + Send + Sync + 'a) -> Parser<'a, A>
    where
        A: Clone + Send + Sync + 'a,
    {
        repeat::many1(self, seed, reducer)
    }

    pub fn exactly_n<A>(
        self,
        seed: A,
        reducer: impl Fn(A, T) -> A + Send + Sync + 'a,
        n: usize,
    ) -> Parser<'a, A>
    where
        A: Clone + Send + Sync + 'a,
    {
        repeat::exactly_n(self, seed, reducer, n)
    }

    pub fn separated_by<S: 'a, A>(
        self,
        separator: Parser<'a, S>,
        seed: A,
        reducer: impl Fn(A, T) -> A + Send + Sync + 'a,
    ) -> Parser<'a, A>
    where
        A: Clone + Send + Sync + 'a,
    {
        repeat::separated_by(self, separator, seed, reducer)
    }

    /// A parser that builds its real parser from `f` every time it runs.
    pub fn lazy(f: impl Fn() -> Parser<'a, T> + Send + Sync + 'a) -> Self {
        recursive::lazy(f)
    }
}
