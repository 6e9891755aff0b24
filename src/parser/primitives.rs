use super::{Outcome, Parser, combinators::if_satisfies, repeat::many};
use functionality::Mutate;

/// Any single character. Fails only at the end of the input.
pub fn item<'a>() -> Parser<'a, char> {
    Parser::from_fn("Item", |input| input.split_first().into())
}

/// Same as [`item`].
pub fn any<'a>() -> Parser<'a, char> {
    item()
}

/// A single character that passes `predicate`.
pub fn satisfy<'a>(predicate: impl Fn(char) -> bool + Send + Sync + 'a) -> Parser<'a, char> {
    if_satisfies(item(), move |c| predicate(*c)).named("Satisfy")
}

/// Exactly the character `c`.
pub fn element<'a>(c: char) -> Parser<'a, char> {
    satisfy(move |x| x == c).named(format!("Element({c:?})"))
}

/// Same as [`element`].
pub fn symbol<'a>(c: char) -> Parser<'a, char> {
    element(c)
}

/// A character that appears in `set`.
pub fn one_of(set: &str) -> Parser<'_, char> {
    satisfy(move |c| set.contains(c)).named(format!("OneOf({set:?})"))
}

/// A character that does not appear in `set`. Fails on empty input.
pub fn none_of(set: &str) -> Parser<'_, char> {
    satisfy(move |c| !set.contains(c)).named(format!("NoneOf({set:?})"))
}

/// Exactly the text `text`, case-sensitive. Returns `text` itself.
pub fn literal(text: &str) -> Parser<'_, &str> {
    Parser::from_fn(format!("Literal({text:?})"), move |input| {
        match input.strip_prefix(text) {
            Some(rest) => Outcome::Success(text, rest),
            None => Outcome::Failure,
        }
    })
}

/// A run of zero or more `c`s. Never fails.
pub fn many_of<'a>(c: char) -> Parser<'a, String> {
    many(element(c), String::new(), |run, c| run.mutate(|s| s.push(c))).named(format!("ManyOf({c:?})"))
}

/// Succeeds with `value`, consuming nothing.
pub fn always<'a, T>(value: T) -> Parser<'a, T>
where
    T: Clone + Send + Sync + 'a,
{
    Parser::always(value)
}

/// Fails on every input.
pub fn fail<'a, T: 'a>() -> Parser<'a, T> {
    Parser::fail()
}

/// Only matches the end of the input.
pub fn eof<'a>() -> Parser<'a, ()> {
    Parser::from_fn("Eof", |input| {
        if input.is_empty() {
            Outcome::Success((), input)
        } else {
            Outcome::Failure
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Input;
    use pretty_assertions::assert_eq;

    #[test]
    fn item_takes_one() {
        assert_eq!(item().parse_str("abc"), Some(('a', "bc")));
        assert_eq!(any().parse_str("z"), Some(('z', "")));
    }

    #[test]
    fn item_of_empty() {
        assert_eq!(item().parse_str(""), None);
    }

    #[test]
    fn element_matches_exactly() {
        assert_eq!(element('a').parse_str("abc"), Some(('a', "bc")));
        assert_eq!(element('a').parse_str("Abc"), None);
        assert_eq!(symbol('+').parse_str("+1"), Some(('+', "1")));
        assert_eq!(symbol('+').parse_str(""), None);
    }

    #[test]
    fn one_of_digits() {
        let digit = one_of("0123456789");
        assert_eq!(digit.parse_str("3 6 1"), Some(('3', " 6 1")));
        assert_eq!(digit.parse_str("x"), None);
        assert_eq!(digit.parse_str(""), None);
    }

    #[test]
    fn one_of_empty_set() {
        assert_eq!(one_of("").parse_str("a"), None);
    }

    #[test]
    fn none_of_matches() {
        assert_eq!(none_of("test").parse_str("test"), None);
        assert_eq!(none_of("user").parse_str("test"), Some(('t', "est")));
        assert_eq!(none_of("user").parse_str(""), None);
    }

    #[test]
    fn satisfy_predicate() {
        let is_l = satisfy(|c| c == 'l');
        assert_eq!(is_l.parse_str("lower"), Some(('l', "ower")));
        assert_eq!(is_l.parse_str("ower"), None);
    }

    #[test]
    fn literal_empty_input() {
        assert_eq!(literal("test").parse_str(""), None);
    }

    #[test]
    fn literal_matching() {
        assert_eq!(literal("test").parse_str("tester"), Some(("test", "er")));
        assert_eq!(literal("unit").parse_str("unit test"), Some(("unit", " test")));
    }

    #[test]
    fn literal_not_matching() {
        assert_eq!(literal("test").parse_str("tesla"), None);
        assert_eq!(literal("test").parse_str("te"), None);
        assert_eq!(literal("money").parse_str("test"), None);
        assert_eq!(literal("test").parse_str("Test"), None);
    }

    #[test]
    fn empty_literal_consumes_nothing() {
        let input = Input::new("abc");
        assert_eq!(literal("").parse(input), Outcome::Success("", input));
    }

    #[test]
    fn many_of_runs() {
        let many_c = many_of('c');
        assert_eq!(many_c.parse_str("cccaa"), Some(("ccc".to_string(), "aa")));
        assert_eq!(many_c.parse_str("caa"), Some(("c".to_string(), "aa")));
        assert_eq!(many_c.parse_str("aa"), Some((String::new(), "aa")));
    }

    #[test]
    fn always_and_fail() {
        assert_eq!(always(2).parse_str(""), Some((2, "")));
        assert_eq!(always(2).parse_str("test"), Some((2, "test")));
        assert_eq!(fail::<char>().parse_str("test"), None);
    }

    #[test]
    fn eof_only_at_the_end() {
        assert_eq!(eof().parse_str(""), Some(((), "")));
        assert_eq!(eof().parse_str("x"), None);
        assert_eq!(item().ignore(eof()).parse_str("x"), Some(('x', "")));
    }
}
