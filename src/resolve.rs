//! Collapsing an outcome sequence into the parse a caller wants
//!
//! A parser answers with every interpretation of the input. These helpers
//! implement the usual caller policies on top of that: take the first, require
//! exactly one, or require that the whole input was consumed.

use crate::error::ResolveError;
use crate::outcome::Outcome;
use tracing::debug;

/// How many outcomes [`ResolveExt::unique`] inspects before giving up counting
pub const AMBIGUITY_PROBE: usize = 16;

/// Resolution policies for any sequence of outcomes
pub trait ResolveExt<'code, S, T>: Iterator<Item = Outcome<'code, S, T>> + Sized {
    /// The first outcome, or [`ResolveError::NoParse`]
    fn first(mut self) -> Result<Outcome<'code, S, T>, ResolveError> {
        self.next().ok_or(ResolveError::NoParse)
    }

    /// The only outcome
    ///
    /// Pulls at most [`AMBIGUITY_PROBE`] outcomes to report how ambiguous the
    /// input is.
    fn unique(mut self) -> Result<Outcome<'code, S, T>, ResolveError> {
        let first = self.next().ok_or(ResolveError::NoParse)?;
        if self.next().is_none() {
            return Ok(first);
        }

        let at_least = 2 + self.take(AMBIGUITY_PROBE - 2).count();
        debug!(at_least, "ambiguous parse");
        Err(ResolveError::Ambiguous { at_least })
    }

    /// Only the outcomes that consumed the whole input
    fn complete(self) -> impl Iterator<Item = Outcome<'code, S, T>> {
        self.filter(|outcome| outcome.cursor().is_exhausted())
    }

    /// The first outcome that consumed the whole input
    ///
    /// Walks the whole sequence when no outcome is complete, so the error can
    /// report the furthest position reached.
    fn first_complete(self) -> Result<Outcome<'code, S, T>, ResolveError> {
        let mut furthest: Option<usize> = None;
        for outcome in self {
            if outcome.cursor().is_exhausted() {
                return Ok(outcome);
            }
            let position = outcome.cursor().position();
            furthest = Some(furthest.map_or(position, |f| f.max(position)));
        }

        Err(furthest.map_or(ResolveError::NoParse, |position| {
            ResolveError::Incomplete { position }
        }))
    }
}

impl<'code, S, T, I> ResolveExt<'code, S, T> for I where I: Iterator<Item = Outcome<'code, S, T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::item::{item, symbol};
    use crate::many::many;
    use crate::or::OrExt;
    use crate::parser::Parser;
    use crate::unit::{fail, unit};

    #[test]
    fn test_first() {
        let outcome = unit(1).or(unit(2)).parse_input("".chars()).first().unwrap();
        assert_eq!(*outcome.value(), 1);

        let error = fail::<_, i32>().parse_input("".chars()).first().unwrap_err();
        assert_eq!(error, ResolveError::NoParse);
    }

    #[test]
    fn test_unique() {
        let outcome = symbol('a').parse_input("a".chars()).unique().unwrap();
        assert_eq!(*outcome.value(), 'a');

        let error = unit(1).or(unit(2)).or(unit(3)).parse_input("".chars()).unique();
        assert_eq!(error.unwrap_err(), ResolveError::Ambiguous { at_least: 3 });

        let error = symbol('a').parse_input("b".chars()).unique();
        assert_eq!(error.unwrap_err(), ResolveError::NoParse);
    }

    #[test]
    fn test_unique_stops_counting() {
        let cursor = Cursor::new("".chars());
        let outcomes = std::iter::repeat(1).map(move |x| Outcome::new(x, cursor.clone()));

        let error = outcomes.unique().unwrap_err();
        assert_eq!(
            error,
            ResolveError::Ambiguous {
                at_least: AMBIGUITY_PROBE
            }
        );
    }

    #[test]
    fn test_complete() {
        let lengths: Vec<usize> = many(item())
            .parse_input("abc".chars())
            .complete()
            .map(|o| o.value().len())
            .collect();
        assert_eq!(lengths, vec![3]);
    }

    #[test]
    fn test_first_complete() {
        let outcome = many(symbol('a'))
            .parse_input("aa".chars())
            .first_complete()
            .unwrap();
        assert_eq!(outcome.value().len(), 2);

        let error = many(symbol('a'))
            .parse_input("aab".chars())
            .first_complete()
            .unwrap_err();
        assert_eq!(error, ResolveError::Incomplete { position: 2 });

        let error = symbol('a')
            .parse_input("b".chars())
            .first_complete()
            .unwrap_err();
        assert_eq!(error, ResolveError::NoParse);
    }
}
