use crate::cursor::Cursor;
use crate::outcome::Outcomes;

/// Core parser trait for parser combinators
///
/// A parser maps a starting cursor to the lazy sequence of every way it can
/// succeed from there. Parsers hold no parse state and can be run any number
/// of times, from any cursor.
pub trait Parser<'code, S: 'code> {
    type Output: 'code;

    /// Enumerate the parses starting at `cursor`
    ///
    /// Failure is an empty sequence. The returned iterator owns everything it
    /// needs, so it may outlive the borrow of `self`.
    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output>;

    /// Parse a fresh input from its first symbol
    fn parse_input<I>(&self, input: I) -> Outcomes<'code, S, Self::Output>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        I::IntoIter: 'code,
    {
        self.parse(Cursor::new(input))
    }
}
