use crate::cursor::Cursor;
use crate::outcome::Outcomes;
use crate::parser::Parser;

/// Parser built by a factory each time it runs
///
/// A grammar rule that mentions itself, directly or through other rules, cannot
/// hold itself by value. Naming the rule's constructor instead closes the loop:
/// the factory is called when a cursor arrives, one level at a time, so
/// recursion only goes as deep as the input does.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, S, F, P> Parser<'code, S> for Lazy<F>
where
    S: 'code,
    F: Fn() -> P,
    P: Parser<'code, S>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Convenience function to create a Lazy parser
pub fn lazy<'code, S, F, P>(factory: F) -> Lazy<F>
where
    S: 'code,
    F: Fn() -> P,
    P: Parser<'code, S>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::SequenceExt;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::item::symbol;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::unit::unit;
    use std::cell::Cell;

    // nested := '(' nested ')' | ''  (counts the nesting depth)
    fn nested() -> BoxedParser<'static, char, usize> {
        symbol('(')
            .then(lazy(nested))
            .skip(symbol(')'))
            .map(|depth: usize| depth + 1)
            .or(unit(0))
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| symbol('a'));
        let outcome = parser.parse_input("aaaa".chars()).next().unwrap();

        assert_eq!(*outcome.value(), 'a');
        assert_eq!(outcome.cursor().position(), 1);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let outcome = nested().parse_input("((()))".chars()).next().unwrap();

        assert_eq!(*outcome.value(), 3);
        assert!(outcome.cursor().is_exhausted());
    }

    #[test]
    fn test_lazy_unbalanced_falls_back() {
        let outcome = nested().parse_input("(()".chars()).next().unwrap();

        // Only the empty alternative matches at the start
        assert_eq!(*outcome.value(), 0);
        assert_eq!(outcome.cursor().position(), 0);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = Cell::new(0);
        let parser = lazy(|| {
            built.set(built.get() + 1);
            symbol('x')
        });
        assert_eq!(built.get(), 0);

        assert_eq!(parser.parse_input("xyz".chars()).count(), 1);
        assert_eq!(built.get(), 1);
    }
}
