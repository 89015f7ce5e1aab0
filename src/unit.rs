use crate::cursor::Cursor;
use crate::outcome::{Outcome, Outcomes};
use crate::parser::Parser;
use std::iter;
use std::marker::PhantomData;

/// Parser that always succeeds once with a fixed value, consuming nothing
pub struct Unit<S, T> {
    value: T,
    _symbol: PhantomData<fn() -> S>,
}

impl<S, T> Unit<S, T> {
    pub fn new(value: T) -> Self {
        Unit {
            value,
            _symbol: PhantomData,
        }
    }
}

impl<'code, S, T> Parser<'code, S> for Unit<S, T>
where
    S: 'code,
    T: Clone + 'code,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        Box::new(iter::once(Outcome::new(self.value.clone(), cursor)))
    }
}

/// Convenience function to create a Unit parser
pub fn unit<S, T: Clone>(value: T) -> Unit<S, T> {
    Unit::new(value)
}

/// Parser that never succeeds
pub struct Fail<S, T> {
    _phantom: PhantomData<fn() -> (S, T)>,
}

impl<S, T> Fail<S, T> {
    pub fn new() -> Self {
        Fail {
            _phantom: PhantomData,
        }
    }
}

impl<S, T> Default for Fail<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, S, T> Parser<'code, S> for Fail<S, T>
where
    S: 'code,
    T: 'code,
{
    type Output = T;

    fn parse(&self, _cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        Box::new(iter::empty())
    }
}

/// Convenience function to create a Fail parser
pub fn fail<S, T>() -> Fail<S, T> {
    Fail::new()
}
