use crate::cursor::Cursor;
use crate::outcome::{Outcomes, deferred};
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Equivalent to `p1.bind(|a| p2.map(|b| (a, b)))`. Every outcome of `p1` is
/// paired with every outcome of `p2` that follows it, so the first value is
/// cloned once per second-stage outcome.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// Example:
/// ```
/// use lazycomb::and::AndExt;
/// use lazycomb::item::symbol;
/// use lazycomb::parser::Parser;
///
/// let parser = symbol('1').and(symbol('+')).and(symbol('2'));
/// let outcome = parser.parse_input("1+2".chars()).next().unwrap();
/// assert_eq!(*outcome.value(), (('1', '+'), '2'));
/// ```
pub struct And<P1, P2> {
    parser1: Arc<P1>,
    parser2: Arc<P2>,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And {
            parser1: Arc::new(parser1),
            parser2: Arc::new(parser2),
        }
    }
}

impl<'code, S, P1, P2> Parser<'code, S> for And<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S> + 'code,
    P1::Output: Clone,
    P2: Parser<'code, S> + 'code,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let parser1 = Arc::clone(&self.parser1);
        let parser2 = Arc::clone(&self.parser2);
        deferred(move || {
            Box::new(parser1.parse(cursor).flat_map(move |first| {
                let (a, rest) = first.into_parts();
                parser2
                    .parse(rest)
                    .map(move |second| second.map_value(|b| (a.clone(), b)))
            }))
        })
    }
}

/// Convenience function to create an And parser
pub fn and<'code, S, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S>,
    P2: Parser<'code, S>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code, S: 'code>: Parser<'code, S> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, S>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, S: 'code, P> AndExt<'code, S> for P where P: Parser<'code, S> {}

/// Parser combinator that runs two parsers in sequence and keeps the second value
pub struct Then<P1, P2> {
    parser1: Arc<P1>,
    parser2: Arc<P2>,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then {
            parser1: Arc::new(parser1),
            parser2: Arc::new(parser2),
        }
    }
}

impl<'code, S, P1, P2> Parser<'code, S> for Then<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S> + 'code,
    P2: Parser<'code, S> + 'code,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let parser1 = Arc::clone(&self.parser1);
        let parser2 = Arc::clone(&self.parser2);
        deferred(move || {
            Box::new(
                parser1
                    .parse(cursor)
                    .flat_map(move |first| parser2.parse(first.into_cursor())),
            )
        })
    }
}

/// Parser combinator that runs two parsers in sequence and keeps the first value
pub struct Skip<P1, P2> {
    parser1: Arc<P1>,
    parser2: Arc<P2>,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Skip {
            parser1: Arc::new(parser1),
            parser2: Arc::new(parser2),
        }
    }
}

impl<'code, S, P1, P2> Parser<'code, S> for Skip<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S> + 'code,
    P1::Output: Clone,
    P2: Parser<'code, S> + 'code,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let parser1 = Arc::clone(&self.parser1);
        let parser2 = Arc::clone(&self.parser2);
        deferred(move || {
            Box::new(parser1.parse(cursor).flat_map(move |first| {
                let (a, rest) = first.into_parts();
                parser2
                    .parse(rest)
                    .map(move |second| second.map_value(|_| a.clone()))
            }))
        })
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, S, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S>,
    P2: Parser<'code, S>,
{
    Then::new(parser1, parser2)
}

/// Convenience function to create a Skip parser
pub fn skip<'code, S, P1, P2>(parser1: P1, parser2: P2) -> Skip<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S>,
    P2: Parser<'code, S>,
{
    Skip::new(parser1, parser2)
}

/// Extension trait for .then() and .skip()
pub trait SequenceExt<'code, S: 'code>: Parser<'code, S> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code, S>,
    {
        Then::new(self, other)
    }

    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code, S>,
    {
        Skip::new(self, other)
    }
}

impl<'code, S: 'code, P> SequenceExt<'code, S> for P where P: Parser<'code, S> {}
