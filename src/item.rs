use crate::cursor::Cursor;
use crate::outcome::{Outcome, Outcomes};
use crate::parser::Parser;
use std::iter;
use std::marker::PhantomData;
use std::sync::Arc;

/// Step past the current symbol once the outcome is pulled
fn take_one<'code, S>(cursor: Cursor<'code, S>) -> Outcomes<'code, S, S>
where
    S: Clone + 'code,
{
    Box::new(
        iter::once_with(move || {
            let symbol = cursor.value()?;
            let rest = cursor.advance()?;
            Some(Outcome::new(symbol, rest))
        })
        .flatten(),
    )
}

/// Parser that consumes and returns a single symbol
pub struct Item<S> {
    _symbol: PhantomData<fn() -> S>,
}

impl<S> Item<S> {
    pub fn new() -> Self {
        Item {
            _symbol: PhantomData,
        }
    }
}

impl<S> Default for Item<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, S> Parser<'code, S> for Item<S>
where
    S: Clone + 'code,
{
    type Output = S;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        take_one(cursor)
    }
}

/// Convenience function to create an Item parser
pub fn item<S>() -> Item<S> {
    Item::new()
}

/// Parser that consumes one symbol satisfying a predicate
///
/// Equivalent to `item().filter(predicate)`, but the predicate runs on the
/// current symbol before the cursor is advanced.
pub struct Satisfy<S, F> {
    predicate: Arc<F>,
    _symbol: PhantomData<fn() -> S>,
}

impl<S, F> Satisfy<S, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate: Arc::new(predicate),
            _symbol: PhantomData,
        }
    }
}

impl<'code, S, F> Parser<'code, S> for Satisfy<S, F>
where
    S: Clone + 'code,
    F: Fn(&S) -> bool + 'code,
{
    type Output = S;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        if cursor.current().is_some_and(|symbol| (self.predicate)(symbol)) {
            take_one(cursor)
        } else {
            Box::new(iter::empty())
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<S, F>(predicate: F) -> Satisfy<S, F>
where
    F: Fn(&S) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that matches one specific symbol
pub struct Symbol<S> {
    expected: S,
}

impl<S> Symbol<S> {
    pub fn new(expected: S) -> Self {
        Symbol { expected }
    }
}

impl<'code, S> Parser<'code, S> for Symbol<S>
where
    S: Clone + PartialEq + 'code,
{
    type Output = S;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        if cursor.current() == Some(&self.expected) {
            take_one(cursor)
        } else {
            Box::new(iter::empty())
        }
    }
}

/// Convenience function to create a Symbol parser
pub fn symbol<S: PartialEq>(expected: S) -> Symbol<S> {
    Symbol::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_item_consumes_one_symbol() {
        let cursor = Cursor::new("abc".chars());
        let outcomes: Vec<_> = item().parse(cursor.clone()).collect();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(*outcomes[0].value(), 'a');
        assert!(Cursor::ptr_eq(
            outcomes[0].cursor(),
            &cursor.advance().unwrap()
        ));
    }

    #[test]
    fn test_item_last_symbol_leaves_exhausted_cursor() {
        let outcome = item().parse_input("z".chars()).next().unwrap();

        assert_eq!(*outcome.value(), 'z');
        assert!(outcome.cursor().is_exhausted());
    }

    #[test]
    fn test_item_on_exhausted_cursor() {
        let cursor = Cursor::new(Vec::<u8>::new());
        assert_eq!(item().parse(cursor).count(), 0);
    }

    #[test]
    fn test_item_works_over_tokens() {
        #[derive(Debug, Clone, PartialEq)]
        enum Token {
            Number(i64),
            Plus,
        }

        let tokens = vec![Token::Number(4), Token::Plus];
        let outcome = item().parse_input(tokens).next().unwrap();

        assert_eq!(*outcome.value(), Token::Number(4));
        assert_eq!(outcome.cursor().value(), Some(Token::Plus));
    }

    #[test]
    fn test_item_reads_nothing_until_pulled() {
        let reads = Cell::new(0);
        let source = "ab".chars().inspect(|_| reads.set(reads.get() + 1));
        let cursor = Cursor::new(source);
        assert_eq!(reads.get(), 1);

        let mut outcomes = item().parse(cursor.clone());
        let mut matched = symbol('a').parse(cursor.clone());
        assert_eq!(reads.get(), 1);

        assert_eq!(outcomes.next().unwrap().into_value(), 'a');
        assert_eq!(reads.get(), 2);
        assert!(matched.next().is_some());
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_satisfy() {
        let digit = satisfy(|c: &char| c.is_ascii_digit());

        assert_eq!(digit.parse_input("7".chars()).count(), 1);
        assert_eq!(digit.parse_input("x".chars()).count(), 0);
        assert_eq!(digit.parse_input("".chars()).count(), 0);
    }

    #[test]
    fn test_symbol() {
        let plus = symbol(b'+');

        let outcome = plus.parse_input(b"+1".to_vec()).next().unwrap();
        assert_eq!(*outcome.value(), b'+');
        assert_eq!(outcome.cursor().value(), Some(b'1'));

        assert_eq!(plus.parse_input(b"-1".to_vec()).count(), 0);
    }
}
