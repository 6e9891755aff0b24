//! N-ary sequencing: run a tuple of parsers in order and hand all of their
//! values to one function.

use super::{Outcome, Parser};
use Outcome::{Failure, Success};

/// A tuple of parsers that can run one after another.
pub trait ParserTuple<'a> {
    /// The tuple of values produced.
    type Output;

    fn into_parser(self) -> Parser<'a, Self::Output>;
}

/// A function that can be called with the elements of a tuple as arguments.
pub trait Apply<Args> {
    type Output;

    fn apply(&self, args: Args) -> Self::Output;
}

/// Implement [`ParserTuple`] and [`Apply`] for one tuple size.
macro_rules! sequence_impls {
    ($($ty:ident $p:ident $v:ident),+) => {
        impl<'a, $($ty: 'a),+> ParserTuple<'a> for ($(Parser<'a, $ty>,)+) {
            type Output = ($($ty,)+);

            fn into_parser(self) -> Parser<'a, Self::Output> {
                let ($($p,)+) = self;
                let names = [$($p.name()),+].join(", ");
                Parser::from_fn(format!("Sequence({names})"), move |input| {
                    let rest = input;
                    $(
                        let Success($v, rest) = $p.parse(rest) else {
                            return Failure;
                        };
                    )+
                    Success(($($v,)+), rest)
                })
            }
        }

        impl<Func, $($ty,)+ Ret> Apply<($($ty,)+)> for Func
        where
            Func: Fn($($ty),+) -> Ret,
        {
            type Output = Ret;

            fn apply(&self, ($($v,)+): ($($ty,)+)) -> Ret {
                self($($v),+)
            }
        }
    };
}

sequence_impls!(A pa a);
sequence_impls!(A pa a, B pb b);
sequence_impls!(A pa a, B pb b, C pc c);
sequence_impls!(A pa a, B pb b, C pc c, D pd d);
sequence_impls!(A pa a, B pb b, C pc c, D pd d, E pe e);
sequence_impls!(A pa a, B pb b, C pc c, D pd d, E pe e, F pf f);

/// Run every parser in `parsers` in order and combine their values with `f`.
/// Fails as soon as one of them fails.
pub fn sequence<'a, S, Func>(f: Func, parsers: S) -> Parser<'a, Func::Output>
where
    S: ParserTuple<'a>,
    S::Output: 'a,
    Func: Apply<S::Output> + Send + Sync + 'a,
    Func::Output: 'a,
{
    let parser = parsers.into_parser();
    let name = parser.name().to_owned();
    parser.transform(move |values| f.apply(values)).named(name)
}
