use crate::cursor::Cursor;
use crate::outcome::{Outcome, Outcomes};
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that succeeds with `T::default()` only at end of input
///
/// Consumes nothing. An exhausted cursor is exactly one with no successor, so
/// checking it never reads from the source.
pub struct End<S, T> {
    _phantom: PhantomData<fn() -> (S, T)>,
}

impl<S, T> End<S, T> {
    pub fn new() -> Self {
        End {
            _phantom: PhantomData,
        }
    }
}

impl<S, T> Default for End<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, S, T> Parser<'code, S> for End<S, T>
where
    S: 'code,
    T: Default + 'code,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let outcome = cursor
            .is_exhausted()
            .then(|| Outcome::new(T::default(), cursor));
        Box::new(outcome.into_iter())
    }
}

/// Convenience function to create an End parser
pub fn end<S, T: Default>() -> End<S, T> {
    End::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_on_empty_input() {
        let cursor = Cursor::new("".chars());
        let outcomes: Vec<_> = end::<_, ()>().parse(cursor.clone()).collect();

        assert_eq!(outcomes.len(), 1);
        assert!(Cursor::ptr_eq(outcomes[0].cursor(), &cursor));
    }

    #[test]
    fn test_end_with_remaining_input() {
        let cursor = Cursor::new("a".chars());
        assert_eq!(end::<_, ()>().parse(cursor).count(), 0);
    }

    #[test]
    fn test_end_after_last_symbol() {
        let cursor = Cursor::new("a".chars()).advance().unwrap();
        let outcomes: Vec<_> = end::<_, i32>().parse(cursor).collect();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(*outcomes[0].value(), 0);
    }

    #[test]
    fn test_end_default_value() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let outcome = end::<_, String>().parse(cursor).next().unwrap();
        assert_eq!(outcome.into_value(), String::default());
    }
}
