use crate::cursor::Cursor;
use crate::outcome::Outcomes;
use crate::parser::Parser;

/// Half-open range of cursor positions consumed by a parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A parser combinator that captures the position span of each successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, S, P> Parser<'code, S> for Spanned<P>
where
    S: 'code,
    P: Parser<'code, S>,
{
    type Output = (P::Output, Span);

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let start = cursor.position();
        Box::new(self.parser.parse(cursor).map(move |outcome| {
            let span = Span::new(start, outcome.cursor().position());
            outcome.map_value(|value| (value, span))
        }))
    }
}

/// Extension trait to add position tracking to any parser
pub trait SpannedExt<'code, S: 'code>: Parser<'code, S> + Sized {
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, S: 'code, P> SpannedExt<'code, S> for P where P: Parser<'code, S> {}

/// Convenience function to create a Spanned parser
pub fn spanned<'code, S, P>(parser: P) -> Spanned<P>
where
    S: 'code,
    P: Parser<'code, S>,
{
    Spanned::new(parser)
}
