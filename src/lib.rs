#![deny(rust_2018_idioms)]

//! Grammar-driven recursive-descent parsing with explicit backtracking.
//!
//! A grammar is an ordered set of named productions, each pairing a pattern —
//! a tree of combinator nodes built with the constructors in [`combinator`] —
//! with an optional action that reshapes the production's raw output. The
//! first declared production is the start rule. [`parse`] interprets the
//! pattern tree directly against a character input and produces a [`Value`]:
//! by default a nested list of matched fragments.
//!
//! Failures come in two kinds. A literal mismatch is *recoverable*: ordered
//! choice and repetition catch it, restore the saved cursor (including line
//! and column), and move on to the next alternative or stop collecting. A
//! regex terminal mismatch, an undefined rule reference, or an exceeded
//! recursion ceiling is *fatal* and aborts the whole parse, passing through
//! every enclosing choice and repetition.
//!
//! ```
//! use pegtree::combinator::{alt, literal, many0, regex, rule, seq};
//! use pegtree::{Grammar, Value};
//!
//! let grammar = Grammar::new()
//!     .rule("sum", seq([
//!         rule("num"),
//!         many0(seq([alt([literal("+"), literal("-")]), rule("num")])),
//!     ]))
//!     .rule("num", regex("[0-9]+"));
//!
//! let value = pegtree::parse(&grammar, "3+4").unwrap();
//! assert_eq!(
//!     value,
//!     Value::List(vec![
//!         Value::Str("3".into()),
//!         Value::List(vec![Value::List(vec![
//!             Value::Str("+".into()),
//!             Value::Str("4".into()),
//!         ])]),
//!     ]),
//! );
//! ```
//!
//! The engine does not require the whole input to be consumed; append
//! [`combinator::eoi`] to a grammar that must match to the end. It also does
//! not detect left recursion — a rule that refers back to itself without
//! consuming input is a caller error, bounded only by
//! [`Options::max_depth`].

mod error;
mod grammar;
mod parser;
mod position;
mod state;
mod value;

pub mod combinator;

pub use self::{
    error::{Error, ErrorKind},
    grammar::{Action, Expr, Grammar, Pattern, Production},
    parser::{parse, parse_with, Options},
    position::Position,
    state::State,
    value::Value,
};

pub type ParseResult = std::result::Result<Value, Error>;
