//! This module is responsible for declaring the parser type, and ways to create
//! and combine parsers. It knows nothing about any particular grammar.
//!
//! A parser is run on an [`Input`] and returns an [`Outcome`]: either a value
//! together with the rest of the input, or a failure. Failures carry no
//! information and are always recoverable; [`or_with`] is how a grammar
//! recovers from one.

mod combinators;
mod input;
mod outcome;
#[allow(clippy::module_inception)]
mod parser;
mod primitives;
mod recursive;
mod repeat;
mod sequence;

pub use combinators::{
    combine, if_satisfies, ignore, ignore_previous, lookahead, optional, or_with, then, transform,
};
pub use input::Input;
pub use outcome::Outcome;
pub use parser::Parser;
pub use primitives::{
    always, any, element, eof, fail, item, literal, many_of, none_of, one_of, satisfy, symbol,
};
pub use recursive::{Forward, lazy, recursive};
pub use repeat::{exactly_n, many, many1, separated_by};
pub use sequence::{Apply, ParserTuple, sequence};
