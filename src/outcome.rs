use crate::cursor::Cursor;
use std::iter;

/// Lazy sequence of candidate parses
///
/// Empty means no parse; more than one element means the input is ambiguous
/// under the parser that produced it. Nothing is computed until pulled.
pub type Outcomes<'code, S, T> = Box<dyn Iterator<Item = Outcome<'code, S, T>> + 'code>;

/// Postpone building a sequence until its first element is requested
///
/// Combinators wrap their first stage in this so that constructing an outcome
/// sequence reads nothing from the source.
pub(crate) fn deferred<'code, S, T, F>(build: F) -> Outcomes<'code, S, T>
where
    S: 'code,
    T: 'code,
    F: FnOnce() -> Outcomes<'code, S, T> + 'code,
{
    Box::new(iter::once_with(build).flatten())
}

/// One successful parse: a value and the cursor left after producing it
#[derive(Debug)]
pub struct Outcome<'code, S, T> {
    value: T,
    cursor: Cursor<'code, S>,
}

impl<'code, S, T> Outcome<'code, S, T> {
    pub fn new(value: T, cursor: Cursor<'code, S>) -> Self {
        Outcome { value, cursor }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Remaining input after this parse
    pub fn cursor(&self) -> &Cursor<'code, S> {
        &self.cursor
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_cursor(self) -> Cursor<'code, S> {
        self.cursor
    }

    pub fn into_parts(self) -> (T, Cursor<'code, S>) {
        (self.value, self.cursor)
    }

    /// Transform the value, keeping the cursor
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Outcome<'code, S, U> {
        Outcome {
            value: f(self.value),
            cursor: self.cursor,
        }
    }
}

impl<S, T: Clone> Clone for Outcome<'_, S, T> {
    fn clone(&self) -> Self {
        Outcome {
            value: self.value.clone(),
            cursor: self.cursor.clone(),
        }
    }
}

impl<S, T: PartialEq> PartialEq for Outcome<'_, S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.cursor == other.cursor
    }
}

impl<S, T: Eq> Eq for Outcome<'_, S, T> {}
