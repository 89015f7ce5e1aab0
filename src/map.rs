use crate::cursor::Cursor;
use crate::outcome::Outcomes;
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Behaves as `bind(parser, |x| unit(mapper(x)))`: one output outcome per input
/// outcome, cursors untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: Arc<F>,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map {
            parser,
            mapper: Arc::new(mapper),
        }
    }
}

impl<'code, S, P, F, U> Parser<'code, S> for Map<P, F>
where
    S: 'code,
    P: Parser<'code, S>,
    F: Fn(P::Output) -> U + 'code,
    U: 'code,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let mapper = Arc::clone(&self.mapper);
        Box::new(
            self.parser
                .parse(cursor)
                .map(move |outcome| outcome.map_value(|value| mapper(value))),
        )
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, S, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    S: 'code,
    P: Parser<'code, S>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code, S: 'code>: Parser<'code, S> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, S: 'code, P> MapExt<'code, S> for P where P: Parser<'code, S> {}
