//! Parser combinators: small parsers over text, and the means to combine them
//! into bigger ones.
//!
//! ```
//! use prs::prelude::*;
//!
//! let list = separated_by(integer(), token(","), Vec::new(), |mut v, n| {
//!     v.push(n);
//!     v
//! });
//! assert_eq!(list.parse_str("1, 2 ,3"), Some((vec![1, 2, 3], "")));
//! ```

/// The parser type and the combinator algebra.
pub mod parser;
/// Calling functions left to right.
pub mod pipe;
pub mod text;
/// An arithmetic grammar built from the combinators.
pub mod arith;
pub mod error;
pub mod repl;

pub use error::Error;

// Re-export
pub mod prelude {
    pub use crate::Error;
    pub use crate::parser::*;
    pub use crate::pipe::{Pipe, piped};
    pub use crate::text::{digit, digit_value, integer, padded, token, whitespace};
}
