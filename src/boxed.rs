use crate::cursor::Cursor;
use crate::outcome::Outcomes;
use crate::parser::Parser;
use std::sync::Arc;

/// Type-erased, shareable parser
///
/// Needed wherever a grammar refers to itself, since a recursive combinator
/// type would otherwise be infinite. Clones share the same underlying parser.
pub struct BoxedParser<'code, S, T>
where
    S: 'code,
    T: 'code,
{
    inner: Arc<dyn Parser<'code, S, Output = T> + 'code>,
}

impl<'code, S: 'code, T: 'code> BoxedParser<'code, S, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, S, Output = T> + 'code,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<S, T> Clone for BoxedParser<'_, S, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'code, S: 'code, T: 'code> Parser<'code, S> for BoxedParser<'code, S, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code, S: 'code>: Parser<'code, S> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, S, Self::Output> {
        BoxedParser::new(self)
    }
}

impl<'code, S: 'code, P> BoxedExt<'code, S> for P where P: Parser<'code, S> + 'code {}
