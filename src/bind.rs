use crate::cursor::Cursor;
use crate::outcome::{Outcomes, deferred};
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that feeds each value of a parser into a continuation
///
/// For every outcome `(value, rest)` of the first parser, `continuation(value)`
/// builds the next parser, which runs on `rest`. The resulting sequences are
/// concatenated in order. This is the only sequencing primitive; `map`, `and`,
/// `then` and `skip` all have bind-shaped definitions.
///
/// Nothing runs when the sequence is built; the first parser starts when the
/// first outcome is pulled, and each continuation only when its outcomes are.
///
/// Example:
/// ```
/// use lazycomb::bind::BindExt;
/// use lazycomb::item::item;
/// use lazycomb::map::MapExt;
/// use lazycomb::parser::Parser;
///
/// // Read a symbol, then read another and pair them up
/// let pair = item().bind(|first: char| item().map(move |second: char| (first, second)));
/// let outcome = pair.parse_input("ab".chars()).next().unwrap();
/// assert_eq!(*outcome.value(), ('a', 'b'));
/// ```
pub struct Bind<P, F> {
    parser: Arc<P>,
    continuation: Arc<F>,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser: Arc::new(parser),
            continuation: Arc::new(continuation),
        }
    }
}

impl<'code, S, P, F, Q> Parser<'code, S> for Bind<P, F>
where
    S: 'code,
    P: Parser<'code, S> + 'code,
    F: Fn(P::Output) -> Q + 'code,
    Q: Parser<'code, S>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let parser = Arc::clone(&self.parser);
        let continuation = Arc::clone(&self.continuation);
        deferred(move || {
            Box::new(parser.parse(cursor).flat_map(move |outcome| {
                let (value, rest) = outcome.into_parts();
                continuation(value).parse(rest)
            }))
        })
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, S, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    S: 'code,
    P: Parser<'code, S>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, S>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code, S: 'code>: Parser<'code, S> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, S>,
    {
        Bind::new(self, continuation)
    }
}

/// Implement BindExt for all parsers
impl<'code, S: 'code, P> BindExt<'code, S> for P where P: Parser<'code, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::item::{item, symbol};
    use crate::or::OrExt;
    use crate::unit::{fail, unit};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_bind_sequences_two_items() {
        let parser = item().bind(|a: char| item().bind(move |b: char| unit(format!("{a}{b}"))));
        let outcomes: Vec<_> = parser.parse_input("xyz".chars()).collect();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].value(), "xy");
        assert_eq!(outcomes[0].cursor().value(), Some('z'));
    }

    #[test]
    fn test_bind_value_chooses_next_parser() {
        // A leading digit says how many more symbols to read
        let parser = item().bind(|n: char| {
            let count = n.to_digit(10).unwrap_or(0);
            let start: BoxedParser<'static, char, usize> = unit(0).boxed();
            (0..count).fold(start, |acc, _| {
                acc.bind(|seen: usize| item().bind(move |_: char| unit(seen + 1))).boxed()
            })
        });

        let outcome = parser.parse_input("2abc".chars()).next().unwrap();
        assert_eq!(*outcome.value(), 2);
        assert_eq!(outcome.cursor().value(), Some('c'));
    }

    #[test]
    fn test_bind_first_fails() {
        let parser = fail::<_, char>().bind(|_| item());
        assert_eq!(parser.parse_input("ab".chars()).count(), 0);
    }

    #[test]
    fn test_bind_continuation_fails() {
        let parser = item().bind(|_: char| symbol('!'));
        assert_eq!(parser.parse_input("ab".chars()).count(), 0);
    }

    #[test]
    fn test_bind_preserves_grouping_order() {
        let parser = unit(1)
            .or(unit(2))
            .bind(|x: i32| unit(x * 10).or(unit(x * 10 + 1)));
        let values: Vec<i32> = parser
            .parse_input("".chars())
            .map(|o| o.into_value())
            .collect();

        assert_eq!(values, vec![10, 11, 20, 21]);
    }

    #[test]
    fn test_bind_continuation_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let probe = Arc::clone(&calls);
        let parser = unit(1).or(unit(2)).bind(move |x: i32| {
            probe.fetch_add(1, Ordering::SeqCst);
            unit(x)
        });

        let mut outcomes = parser.parse_input("".chars());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        outcomes.next();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        outcomes.next();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_function_syntax() {
        let parser = bind(item(), |c: char| unit(c.to_ascii_uppercase()));
        let outcome = parser.parse_input("q".chars()).next().unwrap();
        assert_eq!(*outcome.value(), 'Q');
    }
}
