//! Maps raw luthor tokens onto the handful of tokens the rule grammar in
//! `rules.lalrpop` understands.

use crate::luthor::{self, LexicalError, TokKind as K};
use crate::grammar::EPSILON;
use crate::Spanned;

use derive_more::Display;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum Tok<'input> {
    #[display(fmt = "->")]
    Arrow,
    #[display(fmt = "|")]
    Bar,
    #[display(fmt = "ε")]
    Epsilon,
    #[display(fmt = "{}", _0)]
    Symbol(&'input str),
}

pub struct Lexer<'a>(luthor::Lexer<'a>);

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer(luthor::Lexer::new(input))
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Tok<'input>, usize, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, x, j) = match self.0.next()? {
                Ok(x) => x,
                Err(e) => return Some(Err(e)),
            };
            let tok = match (x.data(), x.kind()) {
                (_, K::Space) => continue,
                ("->", K::Operative) | ("→", K::Operative) => Tok::Arrow,
                (_, K::Bar) => Tok::Bar,
                (EPSILON, K::Word) | ("", K::Quote) => Tok::Epsilon,
                (s, _) => Tok::Symbol(s),
            };
            return Some(Ok(nbg!((i, tok, j))));
        }
    }
}
