//! Normalizing context-free grammars to Chomsky Normal Form, and recognizing
//! strings against the result with CYK.
//!
//! The pipeline is `remove_epsilon`, `remove_units`, `remove_useless`,
//! `to_cnf`, in that order; each stage expects the output of the one before
//! it. Every stage borrows its input and returns a fresh grammar.

#[macro_use] extern crate lalrpop_util;

use std::collections::BTreeSet;

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

// `nbg!(e)` is `e`, or `dbg!(e)` when built with the `trace` feature.
#[cfg(feature = "trace")]
macro_rules! nbg {
    ($($e:tt)*) => { dbg!($($e)*) }
}
#[cfg(not(feature = "trace"))]
macro_rules! nbg {
    ($e:expr) => { $e }
}

mod util;
pub mod grammar;
mod display;
pub mod nullable;
pub mod unit;
pub mod useless;
pub mod cnf;
pub mod node;
pub mod cyk;
pub mod rendering;
pub mod luthor;
pub mod toyman;
pub mod load;

lalrpop_mod!(#[allow(clippy::all, unused)] rules);

pub use grammar::{Grammar, GrammarError, Production, Symbol};
pub use nullable::{find_nullable, remove_epsilon};
pub use unit::{remove_units, unit_pairs};
pub use useless::remove_useless;
pub use cnf::{is_cnf, to_cnf};
pub use node::Derivation;
pub use cyk::{parse, Parse, Table};
pub use load::LoadError;
pub use luthor::LexicalError;
pub use rendering::Rendered;

/// Every intermediate grammar of one run of the pipeline.
#[derive(Clone, Debug)]
pub struct Normalization {
    pub original: Grammar,
    pub nullable: BTreeSet<Symbol>,
    pub without_epsilon: Grammar,
    pub without_units: Grammar,
    pub useful: Grammar,
    pub cnf: Grammar,
}

impl Normalization {
    pub fn run(g: &Grammar) -> Self {
        let nullable = find_nullable(g);
        let without_epsilon = remove_epsilon(g);
        let without_units = remove_units(&without_epsilon);
        let useful = remove_useless(&without_units);
        let cnf = to_cnf(&useful);
        Normalization { original: g.clone(), nullable, without_epsilon, without_units, useful, cnf }
    }

    pub fn parse(&self, text: &str) -> Parse {
        parse(&self.cnf, text)
    }
}

pub fn normalize(g: &Grammar) -> Grammar {
    to_cnf(&remove_useless(&remove_units(&remove_epsilon(g))))
}
