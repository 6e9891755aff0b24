//! Grammars that refer to themselves.
//!
//! A parser is a value, and a value cannot contain itself. There are two ways
//! around it:
//!
//! - Write each rule as a named function returning a parser, and refer to
//!   other rules through [`lazy`]. The rule is only built when it runs, so
//!   rules can refer to each other in any order.
//! - Declare a [`Forward`] cell, build the grammar with a reference to it,
//!   then fill it in. [`recursive`] does all three steps for a single rule.

use super::{Input, Outcome, Parser};

use std::sync::{Arc, OnceLock};

/// A parser that calls `f` to get the real parser every time it runs.
pub fn lazy<'a, T: 'a>(f: impl Fn() -> Parser<'a, T> + Send + Sync + 'a) -> Parser<'a, T> {
    Parser::from_fn("Lazy", move |input| f().parse(input))
}

/// A parser that is declared now and defined later.
///
/// References handed out by [`Forward::parser`] are weak, so a grammar that
/// contains its own forward reference is not a reference cycle. The parser
/// returned by [`Forward::define`] owns the definition; keep it (or a clone
/// of it) alive for as long as the grammar is used.
pub struct Forward<'a, T> {
    name: Arc<str>,
    cell: Arc<OnceLock<Parser<'a, T>>>,
}

impl<T> std::fmt::Debug for Forward<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Forward")
            .field("name", &self.name)
            .field("defined", &self.cell.get().is_some())
            .finish()
    }
}

impl<'a, T: 'a> Forward<'a, T> {
    pub fn declare(name: impl Into<Arc<str>>) -> Self {
        Forward {
            name: name.into(),
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// A reference to the parser, to be used while building its definition.
    ///
    /// # Panics
    ///
    /// The returned parser panics when run before [`Forward::define`], or after
    /// every copy of the defined parser has been dropped.
    pub fn parser(&self) -> Parser<'a, T> {
        let weak = Arc::downgrade(&self.cell);
        let name = Arc::clone(&self.name);
        Parser::from_fn(Arc::clone(&self.name), move |input| {
            let Some(cell) = weak.upgrade() else {
                panic!("recursive parser `{name}` was used after its definition was dropped");
            };
            match cell.get() {
                Some(parser) => parser.parse(input),
                None => panic!("recursive parser `{name}` was used before it was defined"),
            }
        })
    }

    /// Fill in the definition.
    pub fn define(self, parser: Parser<'a, T>) -> Parser<'a, T> {
        let Forward { name, cell } = self;
        // `self` was the only way to reach the cell mutably, so it is still empty.
        let _ = cell.set(parser.clone());
        let definition = Definition { _cell: cell, parser };
        Parser::from_fn(name, move |input| definition.parse(input))
    }
}

/// A defined parser, together with the cell its forward references point to.
/// The cell lives exactly as long as some copy of the defined parser does.
struct Definition<'a, T> {
    _cell: Arc<OnceLock<Parser<'a, T>>>,
    parser: Parser<'a, T>,
}

impl<T> Definition<'_, T> {
    fn parse<'s>(&self, input: Input<'s>) -> Outcome<'s, T> {
        self.parser.parse(input)
    }
}

/// Build a parser that can refer to itself. `build` gets a reference to the
/// parser being built.
pub fn recursive<'a, T: 'a>(
    name: impl Into<Arc<str>>,
    build: impl FnOnce(Parser<'a, T>) -> Parser<'a, T>,
) -> Parser<'a, T> {
    let forward = Forward::declare(name);
    let parser = build(forward.parser());
    forward.define(parser)
}
