use crate::cursor::Cursor;
use crate::outcome::{Outcomes, deferred};
use crate::parser::Parser;
use std::iter;
use std::sync::Arc;

/// Parser combinator for ordered alternation
///
/// Yields every outcome of the first parser, then every outcome of the second
/// parser run on the same starting cursor. Both branches always contribute; a
/// caller that only wants the first parse takes the head of the sequence.
/// Neither branch runs before an outcome is requested, and the second waits
/// until the first is drained.
pub struct Or<P1, P2> {
    parser1: Arc<P1>,
    parser2: Arc<P2>,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or {
            parser1: Arc::new(parser1),
            parser2: Arc::new(parser2),
        }
    }
}

impl<'code, S, P1, P2, O> Parser<'code, S> for Or<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S, Output = O> + 'code,
    P2: Parser<'code, S, Output = O> + 'code,
    O: 'code,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let parser1 = Arc::clone(&self.parser1);
        let parser2 = Arc::clone(&self.parser2);
        let start = cursor.clone();
        let first = deferred(move || parser1.parse(cursor));
        let second = iter::once_with(move || parser2.parse(start)).flatten();
        Box::new(first.chain(second))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code, S: 'code>: Parser<'code, S> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, S, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, S: 'code, P> OrExt<'code, S> for P where P: Parser<'code, S> {}

/// Convenience function to create an Or parser
pub fn or<'code, S, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    S: 'code,
    P1: Parser<'code, S, Output = O>,
    P2: Parser<'code, S, Output = O>,
{
    Or::new(parser1, parser2)
}
