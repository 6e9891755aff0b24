//! Partial application and left-to-right piping.
//!
//! [`piped`] wraps a function whose first parameter is the "subject" (a parser,
//! or any other value). Calling [`Piped::call`] with every argument runs it
//! right away. Calling [`Piped::partial`] with everything but the subject
//! returns a [`Pending`] call, which is completed by piping a subject into it:
//!
//! ```
//! use prs::pipe::{Pipe, piped};
//!
//! let add = piped(|a: i32, b: i32| a + b);
//! assert_eq!(add.call(1, (2,)), 3);
//! assert_eq!(1_i32.pipe(add.partial((2,))), 3);
//! ```
//!
//! Parsers also accept the `|` operator, so a grammar can read as a chain:
//! `digit | to_value.partial(())`.

use crate::parser::Parser;

/// A function that takes a first argument and a tuple of the rest.
pub trait Curried<First, Rest> {
    type Output;

    fn invoke(&self, first: First, rest: Rest) -> Self::Output;
}

/// Implement [`Curried`] for functions with this many trailing arguments.
macro_rules! curried_impl {
    ($($ty:ident $v:ident),*) => {
        impl<Func, First, $($ty,)* Ret> Curried<First, ($($ty,)*)> for Func
        where
            Func: Fn(First, $($ty),*) -> Ret,
        {
            type Output = Ret;

            #[allow(clippy::unused_unit)]
            fn invoke(&self, first: First, ($($v,)*): ($($ty,)*)) -> Ret {
                self(first, $($v),*)
            }
        }
    };
}

curried_impl!();
curried_impl!(B b);
curried_impl!(B b, C c);
curried_impl!(B b, C c, D d);
curried_impl!(B b, C c, D d, E e);

/// A function prepared for partial application.
#[derive(Clone, Copy, Debug)]
pub struct Piped<F> {
    func: F,
}

pub const fn piped<F>(func: F) -> Piped<F> {
    Piped { func }
}

impl<F> Piped<F> {
    /// Call with every argument.
    pub fn call<First, Rest>(&self, first: First, rest: Rest) -> <F as Curried<First, Rest>>::Output
    where
        F: Curried<First, Rest>,
    {
        self.func.invoke(first, rest)
    }

    /// Supply everything but the first argument.
    pub fn partial<Rest>(&self, rest: Rest) -> Pending<F, Rest>
    where
        F: Clone,
    {
        Pending {
            func: self.func.clone(),
            rest,
        }
    }

    pub fn into_inner(self) -> F {
        self.func
    }
}

/// A call that is only missing its first argument.
#[derive(Clone, Copy, Debug)]
pub struct Pending<F, Rest> {
    func: F,
    rest: Rest,
}

/// Something a value can be piped into.
pub trait Stage<Arg> {
    type Output;

    fn run(self, arg: Arg) -> Self::Output;
}

impl<F, Rest, First> Stage<First> for Pending<F, Rest>
where
    F: Curried<First, Rest>,
{
    type Output = F::Output;

    fn run(self, first: First) -> Self::Output {
        self.func.invoke(first, self.rest)
    }
}

/// `value.pipe(stage)` is `stage` applied to `value`.
pub trait Pipe: Sized {
    fn pipe<S: Stage<Self>>(self, stage: S) -> S::Output {
        stage.run(self)
    }
}

impl<T> Pipe for T {}

/// `parser | stage` is `parser.pipe(stage)`.
impl<'a, T: 'a, S> std::ops::BitOr<S> for Parser<'a, T>
where
    S: Stage<Parser<'a, T>>,
{
    type Output = S::Output;

    fn bitor(self, stage: S) -> Self::Output {
        stage.run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{element, ignore, one_of, or_with, transform};
    use pretty_assertions::assert_eq;

    fn add_(a: i32, b: i32) -> i32 {
        a + b
    }

    fn add_1_(a: i32) -> i32 {
        a + 1
    }

    #[test]
    fn one_parameter_missing() {
        let add = piped(add_);
        assert_eq!(1_i32.pipe(add.partial((2,))), 3);
    }

    #[test]
    fn all_parameters_there() {
        let add = piped(add_);
        assert_eq!(add.call(1, (2,)), 3);
    }

    #[test]
    fn zero_parameter_pipe() {
        let add_1 = piped(add_1_);
        assert_eq!(1_i32.pipe(add_1.partial(())), 2);
    }

    #[test]
    fn one_argument_function() {
        let add_1 = piped(add_1_);
        assert_eq!(add_1.call(1, ()), 2);
    }

    #[test]
    fn many_trailing_arguments() {
        let clamp_add = piped(|x: i32, lo: i32, hi: i32, step: i32, times: i32| {
            (x + step * times).clamp(lo, hi)
        });
        assert_eq!(3_i32.pipe(clamp_add.partial((0, 10, 2, 2))), 7);
        assert_eq!(clamp_add.call(3, (0, 10, 5, 5)), 10);
    }

    #[test]
    fn chains_read_left_to_right() {
        let mul = piped(|a: i32, b: i32| a * b);
        let sub = piped(|a: i32, b: i32| a - b);
        let result = 2_i32.pipe(mul.partial((5,))).pipe(sub.partial((3,)));
        assert_eq!(result, 7);
    }

    #[test]
    fn works_with_strings() {
        let surround = piped(|s: &str, left: char, right: char| format!("{left}{s}{right}"));
        assert_eq!("x".pipe(surround.partial(('(', ')'))), "(x)");
    }

    fn to_digit(c: char) -> u32 {
        c as u32 - '0' as u32
    }

    #[test]
    fn parsers_pipe_with_bitor() {
        let to_value = piped(|p: Parser<'static, char>, f: fn(char) -> u32| p.transform(f));
        let digit = one_of("0123456789") | to_value.partial((to_digit as fn(char) -> u32,));
        assert_eq!(digit.parse_str("42"), Some((4, "2")));
    }

    #[test]
    fn piping_a_failing_parser() {
        let dummy = piped(|p: Parser<'static, char>| p.transform(|_| 'c'));
        let p = element('x') | dummy.partial(());
        assert_eq!(p.parse_str("hello"), None);
        assert_eq!(p.parse_str("x"), Some(('c', "")));
    }

    fn digit_or_ten(c: char) -> u32 {
        c.to_digit(10).unwrap_or(10)
    }

    #[test]
    fn library_combinators_as_stages() {
        let or = piped(or_with::<'static, char>);
        let map = piped(transform::<'static, char, u32>);
        let before = piped(ignore::<'static, u32, char>);

        let value = one_of("0123456789")
            | or.partial((element('x'),))
            | map.partial((digit_or_ten as fn(char) -> u32,));
        let statement = value.pipe(before.partial((element(';'),)));

        assert_eq!(statement.parse_str("7;"), Some((7, "")));
        assert_eq!(statement.parse_str("x;rest"), Some((10, "rest")));
        assert_eq!(statement.parse_str("7"), None);
        assert_eq!(statement.parse_str("y;"), None);
    }

    #[test]
    fn parser_combinators_through_pipe() {
        let or = piped(|p: Parser<'static, char>, q: Parser<'static, char>| p.or_with(q));
        let ab = element('a') | or.partial((element('b'),));
        assert_eq!(ab.parse_str("b"), Some(('b', "")));
        let same = element('a').pipe(or.partial((element('b'),)));
        assert_eq!(same.parse_str("a"), Some(('a', "")));
    }
}
