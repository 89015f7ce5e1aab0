//! # LazyComb - Lazy Backtracking Parser Combinators
//!
//! A parser here answers with every way it can match, not just one. Parsing
//! yields a lazy sequence of outcomes, each a value plus the cursor left after
//! it, and combinators build larger parsers from smaller ones by composing
//! those sequences. Backtracking needs no explicit support: alternation
//! concatenates the outcomes of both branches, and sequencing runs the next
//! parser once per outcome of the previous one.
//!
//! The library emphasizes:
//!
//! - **No panics, no error plumbing**: a failed parse is an empty sequence
//! - **Laziness**: outcomes are computed only when pulled, so taking the first
//!   parse of an ambiguous grammar only pays for that parse
//! - **Shared input**: cursors are immutable and memoize their successor, so
//!   any number of branches can read a single-pass source, each symbol read once
//! - **Composability**: `unit`, `item`, `bind`, `filter` and `or` form a
//!   monad with choice; everything else is built from the same pieces
//!
//! ```
//! use lazycomb::{BindExt, FilterExt, MapExt, Parser, ResolveExt, item};
//!
//! let digit = item()
//!     .filter(|c: &char| c.is_ascii_digit())
//!     .map(|c: char| c.to_digit(10).unwrap_or_default());
//! let sum = digit.bind(|a: u32| {
//!     item()
//!         .filter(|c: &char| *c == '+')
//!         .bind(move |_: char| {
//!             item()
//!                 .filter(|c: &char| c.is_ascii_digit())
//!                 .map(move |c: char| a + c.to_digit(10).unwrap_or_default())
//!         })
//! });
//!
//! let outcome = sum.parse_input("1+2".chars()).unique().unwrap();
//! assert_eq!(*outcome.value(), 3);
//! ```

pub mod and;
pub mod bind;
pub mod boxed;
pub mod cursor;
pub mod end;
pub mod error;
pub mod filter;
pub mod from_fn;
pub mod item;
pub mod lazy;
pub mod many;
pub mod map;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod resolve;
pub mod unit;

pub use and::{AndExt, SequenceExt, and, skip, then};
pub use bind::{BindExt, bind};
pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::Cursor;
pub use end::end;
pub use error::ResolveError;
pub use filter::{FilterExt, filter};
pub use from_fn::from_fn;
pub use item::{item, satisfy, symbol};
pub use lazy::lazy;
pub use many::{many, some};
pub use map::{MapExt, map};
pub use or::{OrExt, or};
pub use outcome::{Outcome, Outcomes};
pub use parser::Parser;
pub use position::{Span, SpannedExt, spanned};
pub use resolve::ResolveExt;
pub use unit::{fail, unit};
