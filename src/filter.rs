use crate::cursor::Cursor;
use crate::outcome::Outcomes;
use crate::parser::Parser;
use std::sync::Arc;

/// Parser that applies a predicate function to filter the output of another parser
///
/// Outcomes whose value fails the predicate are dropped; the rest keep their
/// relative order. Filtering everything away is how a grammar says "no parse".
pub struct FilterParser<P, F> {
    parser: P,
    predicate: Arc<F>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self {
            parser,
            predicate: Arc::new(predicate),
        }
    }
}

impl<'code, S, P, F> Parser<'code, S> for FilterParser<P, F>
where
    S: 'code,
    P: Parser<'code, S>,
    F: Fn(&P::Output) -> bool + 'code,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let predicate = Arc::clone(&self.predicate);
        Box::new(
            self.parser
                .parse(cursor)
                .filter(move |outcome| predicate(outcome.value())),
        )
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code, S: 'code>: Parser<'code, S> {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<'code, S: 'code, P: Parser<'code, S>> FilterExt<'code, S> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, S, P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    S: 'code,
    P: Parser<'code, S>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}
