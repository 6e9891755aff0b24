use thiserror::Error;

/// Why a whole input could not be parsed.
///
/// Inside a grammar, failure is just [`Outcome::Failure`](crate::parser::Outcome::Failure);
/// this type only appears where a parse is finished and reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the input does not match")]
    NoMatch,
    #[error("the input was only partially parsed, {remaining} bytes are left over")]
    Unconsumed { remaining: usize },
}
