//! CYK recognition and parsing over a grammar in Chomsky Normal Form.
//!
//! The table is triangular: row `i` holds one cell per start offset `j` for
//! the spans `tokens[j..=j+i]`, i.e. spans of length `i+1`. A cell maps each
//! nonterminal proven for its span to *every* derivation found for it, so an
//! ambiguous grammar keeps all of its parses. Cells preserve insertion order,
//! which makes "the first derivation" of a cell well defined.
//!
//! Input is split on whitespace and lowercased; terminals are matched
//! exactly, so a grammar's terminals are expected to be lowercase.

use crate::grammar::{Grammar, Symbol};
use crate::node::Derivation;

use linear_map::LinearMap;

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

type CellMap<K, V> = LinearMap<K, V>;

pub type Cell = CellMap<Symbol, Vec<Derivation>>;

pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(|word| word.to_lowercase()).collect()
}

/// The `A -> a` and `A -> B C` productions of a grammar, indexed once per
/// recognition. Other productions play no part in CYK.
#[derive(Clone, Debug)]
pub struct Lexicon {
    lexical: BTreeMap<Symbol, Vec<Symbol>>,
    binary: Vec<(Symbol, Symbol, Symbol)>,
}

impl Lexicon {
    pub fn new(g: &Grammar) -> Self {
        let mut lexical: BTreeMap<Symbol, Vec<Symbol>> = BTreeMap::new();
        let mut binary = Vec::new();
        for (head, prods) in g.rules() {
            for p in prods {
                if p.is_lexical() {
                    lexical.entry(p[0].clone()).or_default().push(head.clone());
                } else if p.is_binary() {
                    binary.push((head.clone(), p[0].clone(), p[1].clone()));
                }
            }
        }
        Lexicon { lexical, binary }
    }

    /// The nonterminals `A` with a production `A -> token`.
    pub fn categories(&self, token: &str) -> &[Symbol] {
        self.lexical.get(token).map(|heads| &heads[..]).unwrap_or(&[])
    }

    pub fn binary(&self) -> &[(Symbol, Symbol, Symbol)] {
        &self.binary
    }
}

#[derive(Clone, Debug)]
pub struct Table {
    tokens: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Fills the whole table for a non-empty token sequence.
    pub fn build(lexicon: &Lexicon, tokens: Vec<String>) -> Table {
        let n = tokens.len();
        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(n);

        let base = tokens.iter()
            .map(|token| {
                let mut cell = Cell::new();
                for a in lexicon.categories(token) {
                    let leaf = Derivation::leaf(a.clone(), Symbol::from(token.as_str()));
                    cell.entry(a.clone()).or_insert(Vec::new()).push(leaf);
                }
                cell
            })
            .collect();
        rows.push(base);

        for i in 1..n {
            let mut row = Vec::with_capacity(n - i);
            for j in 0..(n - i) {
                let mut cell = Cell::new();
                for k in 0..i {
                    let left = &rows[k][j];
                    let right = &rows[i - k - 1][j + k + 1];
                    for (a, b, c) in lexicon.binary() {
                        if let (Some(lefts), Some(rights)) = (left.get(b), right.get(c)) {
                            let derivations = cell.entry(a.clone()).or_insert(Vec::new());
                            for l in lefts {
                                for r in rights {
                                    derivations.push(Derivation::node(a.clone(), l.clone(), r.clone()));
                                }
                            }
                        }
                    }
                }
                row.push(cell);
            }
            rows.push(row);
        }

        Table { tokens, rows }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens, which is also the length of the longest span.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The cell for the `len` tokens beginning at `start`.
    pub fn cell(&self, len: usize, start: usize) -> Option<&Cell> {
        self.rows.get(len.checked_sub(1)?)?.get(start)
    }

    pub fn symbols(&self, len: usize, start: usize) -> Vec<&Symbol> {
        self.cell(len, start).map_or(vec![], |cell| cell.keys().collect())
    }

    pub fn derivations(&self, len: usize, start: usize, nonterm: &str) -> &[Derivation] {
        self.cell(len, start)
            .and_then(|cell| cell.get(nonterm))
            .map(|ds| &ds[..])
            .unwrap_or(&[])
    }
}

/// Outcome of running CYK on one input.
#[derive(Clone, Debug)]
pub struct Parse {
    pub accepted: bool,
    /// The first derivation of the start symbol over the whole input.
    pub tree: Option<Derivation>,
    /// Absent only when the input had no tokens at all.
    pub table: Option<Table>,
    pub elapsed: Duration,
    start: Option<Symbol>,
}

impl Parse {
    /// Every derivation of the start symbol over the whole input; more than
    /// one means the input is ambiguous under the grammar.
    pub fn derivations(&self) -> &[Derivation] {
        match (&self.table, &self.start) {
            (Some(table), Some(start)) => table.derivations(table.len(), 0, start.as_str()),
            _ => &[],
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.derivations().len() > 1
    }
}

pub fn parse(g: &Grammar, text: &str) -> Parse {
    let began = Instant::now();
    let tokens = tokenize(text);
    let start = g.start().cloned();
    if tokens.is_empty() {
        return Parse { accepted: false, tree: None, table: None, elapsed: began.elapsed(), start };
    }

    let table = Table::build(&Lexicon::new(g), tokens);
    let tree = start.as_ref()
        .and_then(|s| table.derivations(table.len(), 0, s.as_str()).first())
        .cloned();
    let accepted = nbg!(tree.is_some());
    Parse { accepted, tree, table: Some(table), elapsed: began.elapsed(), start }
}

#[cfg(test)]
#[path = "tests/cyk.rs"]
mod tests_for_cyk;
