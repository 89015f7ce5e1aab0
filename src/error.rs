use thiserror::Error;

/// Why a set of outcomes could not be resolved to the single parse a caller asked for
///
/// The combinator core never produces these; they only arise when a caller
/// collapses an outcome sequence through [`crate::resolve::ResolveExt`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The parser produced no outcomes
    #[error("input did not match")]
    NoParse,

    /// More than one outcome where exactly one was required
    ///
    /// Counting stops after a fixed number of outcomes so an unbounded
    /// sequence still resolves.
    #[error("ambiguous parse: at least {at_least} outcomes")]
    Ambiguous { at_least: usize },

    /// Outcomes exist but none consumed the whole input
    #[error("unexpected input at position {position}")]
    Incomplete {
        /// Furthest position any outcome reached
        position: usize,
    },
}
