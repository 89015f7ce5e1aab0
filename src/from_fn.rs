use crate::cursor::Cursor;
use crate::outcome::Outcomes;
use crate::parser::Parser;

/// Parser built from a closure over the starting cursor
///
/// For primitives the combinators do not cover. The closure must follow the
/// same contract as [`Parser::parse`]: no panics, failure as an empty sequence.
pub struct FromFn<F> {
    f: F,
}

impl<F> FromFn<F> {
    pub fn new(f: F) -> Self {
        FromFn { f }
    }
}

impl<'code, S, T, F> Parser<'code, S> for FromFn<F>
where
    S: 'code,
    T: 'code,
    F: Fn(Cursor<'code, S>) -> Outcomes<'code, S, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        (self.f)(cursor)
    }
}

/// Convenience function to create a FromFn parser
pub fn from_fn<'code, S, T, F>(f: F) -> FromFn<F>
where
    S: 'code,
    T: 'code,
    F: Fn(Cursor<'code, S>) -> Outcomes<'code, S, T>,
{
    FromFn::new(f)
}
