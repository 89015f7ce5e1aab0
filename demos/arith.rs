//! Evaluate integer arithmetic with `+`, `*` and parentheses.
//!
//! Usage: `cargo run --example arith -- "2+3*4" "(2+3)*4"`
//! Set `RUST_LOG=lazycomb=trace` to watch the cursor pull symbols.

use lazycomb::{
    AndExt, BoxedExt, BoxedParser, MapExt, OrExt, Parser, ResolveExt, SequenceExt, lazy, many,
    satisfy, some, symbol,
};
use tracing_subscriber::EnvFilter;

type Expr = BoxedParser<'static, char, i64>;

fn number() -> Expr {
    some(satisfy(|c: &char| c.is_ascii_digit()))
        .map(|digits: Vec<char>| {
            digits.iter().fold(0i64, |acc, d| {
                acc.saturating_mul(10)
                    .saturating_add(i64::from(d.to_digit(10).unwrap_or_default()))
            })
        })
        .boxed()
}

/// operand (op operand)*, folded left to right
fn chain_left(operand: Expr, op: char, combine: fn(i64, i64) -> i64) -> Expr {
    let rest = many(symbol(op).then(operand.clone()));
    operand
        .and(rest)
        .map(move |(first, rest): (i64, Vec<i64>)| rest.into_iter().fold(first, combine))
        .boxed()
}

fn factor() -> Expr {
    let parenthesized = symbol('(').then(lazy(expr)).skip(symbol(')'));
    number().or(parenthesized).boxed()
}

fn term() -> Expr {
    chain_left(factor(), '*', i64::saturating_mul)
}

fn expr() -> Expr {
    chain_left(term(), '+', i64::saturating_add)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["1+2", "2*3", "2-3", "2+3*4", "(2+3)*4"]
            .map(String::from)
            .to_vec();
    }

    let parser = expr();
    for input in &inputs {
        let symbols: Vec<char> = input.chars().collect();
        match parser.parse_input(symbols).first_complete() {
            Ok(outcome) => println!("{input} = {}", outcome.value()),
            Err(error) => println!("{input}: {error}"),
        }
    }
}
