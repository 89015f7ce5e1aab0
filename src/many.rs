use crate::cursor::Cursor;
use crate::outcome::{Outcome, Outcomes};
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Enumerates every repetition count the input allows, longest first, ending
/// with the empty match. An occurrence that consumed no input ends the
/// repetition there, so a parser that can succeed without consuming (such as
/// `unit`) yields a finite sequence.
///
/// The walk keeps its own stack, so long runs do not grow the call stack.
pub struct Many<P> {
    parser: Arc<P>,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many {
            parser: Arc::new(parser),
        }
    }
}

impl<'code, S, P> Parser<'code, S> for Many<P>
where
    S: 'code,
    P: Parser<'code, S> + 'code,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        Box::new(Repetitions::new(Arc::clone(&self.parser), cursor, 0))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Same enumeration as [`Many`] without the trailing empty match.
pub struct Many1<P> {
    parser: Arc<P>,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 {
            parser: Arc::new(parser),
        }
    }
}

impl<'code, S, P> Parser<'code, S> for Many1<P>
where
    S: 'code,
    P: Parser<'code, S> + 'code,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code, S>) -> Outcomes<'code, S, Self::Output> {
        Box::new(Repetitions::new(Arc::clone(&self.parser), cursor, 1))
    }
}

/// One level of the repetition walk: the alternatives still to try from
/// `cursor`, and the value that led here (absent at the root)
struct Frame<'code, S, T> {
    alternatives: Outcomes<'code, S, T>,
    cursor: Cursor<'code, S>,
    value: Option<T>,
}

/// Depth-first enumeration of repetitions
///
/// Descends while the parser keeps matching and consuming. A level is emitted
/// as the prefix ending at its cursor once all of its alternatives are spent,
/// which yields longer prefixes before shorter ones.
struct Repetitions<'code, S, P>
where
    P: Parser<'code, S>,
    S: 'code,
{
    parser: Arc<P>,
    start: Option<Cursor<'code, S>>,
    frames: Vec<Frame<'code, S, P::Output>>,
    minimum: usize,
}

impl<'code, S, P> Repetitions<'code, S, P>
where
    S: 'code,
    P: Parser<'code, S>,
    P::Output: Clone,
{
    fn new(parser: Arc<P>, start: Cursor<'code, S>, minimum: usize) -> Self {
        Repetitions {
            parser,
            start: Some(start),
            frames: Vec::new(),
            minimum,
        }
    }

    fn descend(&mut self, cursor: Cursor<'code, S>, value: Option<P::Output>) {
        let alternatives = self.parser.parse(cursor.clone());
        self.frames.push(Frame {
            alternatives,
            cursor,
            value,
        });
    }

    fn prefix(&self) -> Vec<P::Output> {
        self.frames
            .iter()
            .filter_map(|frame| frame.value.clone())
            .collect()
    }
}

impl<'code, S, P> Iterator for Repetitions<'code, S, P>
where
    S: 'code,
    P: Parser<'code, S>,
    P::Output: Clone,
{
    type Item = Outcome<'code, S, Vec<P::Output>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.descend(start, None);
        }

        loop {
            let frame = self.frames.last_mut()?;
            match frame.alternatives.next() {
                Some(outcome) => {
                    let (value, after) = outcome.into_parts();
                    if after.position() == frame.cursor.position() {
                        // No progress: this occurrence ends the repetition
                        let mut items = self.prefix();
                        items.push(value);
                        return Some(Outcome::new(items, after));
                    }
                    self.descend(after, Some(value));
                }
                None => {
                    let items = self.prefix();
                    let frame = self.frames.pop()?;
                    if items.len() >= self.minimum {
                        return Some(Outcome::new(items, frame.cursor));
                    }
                }
            }
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, S, P>(parser: P) -> Many<P>
where
    S: 'code,
    P: Parser<'code, S>,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn some<'code, S, P>(parser: P) -> Many1<P>
where
    S: 'code,
    P: Parser<'code, S>,
{
    Many1::new(parser)
}
