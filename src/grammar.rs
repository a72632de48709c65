use derive_more::{Deref, Display, From};
use regex::Regex;
use thiserror::Error;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

// A grammar G is a tuple (NT, T, S, P), where
//   NT is a finite set of nonterminals,
//   T is a finite set of terminals, disjoint from NT,
//   S in NT is the start symbol, and
//   P maps each nonterminal to a set of productions.
//
// Every symbol is a plain string; whether it is a nonterminal or a terminal is
// decided purely by its spelling (see `is_nonterminal`).

/// Marks an empty alternative while a grammar is being built. It never
/// survives into a production body.
pub const EPSILON: &str = "ε";

fn nonterminal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9_]*$").unwrap())
}

/// `[A-Z][A-Za-z0-9_]*` is a nonterminal; anything else is a terminal.
pub fn is_nonterminal(s: &str) -> bool {
    nonterminal_pattern().is_match(s)
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Display, From)]
pub struct Symbol(String);

impl From<&str> for Symbol { fn from(s: &str) -> Self { Symbol(s.to_string()) } }

impl std::borrow::Borrow<str> for Symbol {
    fn borrow(&self) -> &str { &self.0 }
}

impl Symbol {
    pub fn epsilon() -> Self { Symbol(EPSILON.to_string()) }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn is_nonterminal(&self) -> bool { is_nonterminal(&self.0) }

    pub fn is_terminal(&self) -> bool { !self.is_nonterminal() }

    pub fn is_epsilon(&self) -> bool { self.0 == EPSILON }

    // Empty text and anything with whitespace or control characters can never
    // be told apart from the separators around it.
    fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && !self.0.chars().any(|c| c.is_whitespace() || c.is_control())
    }
}

/// The right-hand side of a rule. The empty sequence is an epsilon production.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Default, Deref, From)]
pub struct Production(Vec<Symbol>);

impl Production {
    pub fn epsilon() -> Self { Production(vec![]) }

    pub fn symbols(&self) -> &[Symbol] { &self.0 }

    pub fn is_epsilon(&self) -> bool { self.0.is_empty() }

    /// `A -> B`
    pub fn is_unit(&self) -> bool {
        matches!(&self.0[..], [s] if s.is_nonterminal())
    }

    /// `A -> a`
    pub fn is_lexical(&self) -> bool {
        matches!(&self.0[..], [s] if s.is_terminal())
    }

    /// `A -> B C`
    pub fn is_binary(&self) -> bool {
        matches!(&self.0[..], [b, c] if b.is_nonterminal() && c.is_nonterminal())
    }
}

impl FromIterator<Symbol> for Production {
    fn from_iter<I: IntoIterator<Item=Symbol>>(iter: I) -> Self {
        Production(iter.into_iter().collect())
    }
}

impl From<&[&str]> for Production {
    fn from(symbols: &[&str]) -> Self {
        symbols.iter().map(|s| Symbol::from(*s)).collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GrammarError {
    #[error("`{0}` is neither a terminal nor a nonterminal")]
    InvalidSymbol(String),
    #[error("`{0}` is not a nonterminal; nonterminals match [A-Z][A-Za-z0-9_]*")]
    NotANonterminal(String),
    #[error("`{0}` is not a terminal")]
    NotATerminal(String),
}

pub(crate) type Rules = BTreeMap<Symbol, BTreeSet<Production>>;

/// Invariant: `rules` has an entry (possibly empty) for every member of
/// `nonterms`, and every symbol of every production is in `nonterms` or
/// `terms`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Grammar {
    pub(crate) nonterms: BTreeSet<Symbol>,
    pub(crate) terms: BTreeSet<Symbol>,
    pub(crate) start: Option<Symbol>,
    pub(crate) rules: Rules,
}

impl Grammar {
    pub fn empty() -> Self { Grammar::default() }

    pub fn nonterms(&self) -> &BTreeSet<Symbol> { &self.nonterms }

    pub fn terms(&self) -> &BTreeSet<Symbol> { &self.terms }

    pub fn start(&self) -> Option<&Symbol> { self.start.as_ref() }

    pub fn rules(&self) -> impl Iterator<Item=(&Symbol, &BTreeSet<Production>)> {
        self.rules.iter()
    }

    pub fn productions<'a>(&'a self, head: &str) -> impl Iterator<Item=&'a Production> + 'a {
        self.rules.get(head).into_iter().flatten()
    }

    pub fn has_production(&self, head: &str, body: &[&str]) -> bool {
        self.rules.get(head).map_or(false, |prods| prods.contains(&Production::from(body)))
    }

    pub fn production_count(&self) -> usize {
        self.rules.values().map(|prods| prods.len()).sum()
    }
}

impl Grammar {
    pub fn add_nonterminal(&mut self, symbol: impl Into<Symbol>) -> Result<(), GrammarError> {
        let symbol = symbol.into();
        if !symbol.is_well_formed() || symbol.is_epsilon() {
            return Err(GrammarError::InvalidSymbol(symbol.0));
        }
        if !symbol.is_nonterminal() {
            return Err(GrammarError::NotANonterminal(symbol.0));
        }
        self.register(symbol);
        Ok(())
    }

    pub fn add_terminal(&mut self, symbol: impl Into<Symbol>) -> Result<(), GrammarError> {
        let symbol = symbol.into();
        if !symbol.is_well_formed() || symbol.is_epsilon() {
            return Err(GrammarError::InvalidSymbol(symbol.0));
        }
        if symbol.is_nonterminal() {
            return Err(GrammarError::NotATerminal(symbol.0));
        }
        self.terms.insert(symbol);
        Ok(())
    }

    /// Makes `symbol` the start symbol, registering it as a nonterminal.
    pub fn set_start(&mut self, symbol: impl Into<Symbol>) -> Result<(), GrammarError> {
        let symbol = symbol.into();
        self.add_nonterminal(symbol.clone())?;
        self.start = Some(symbol);
        Ok(())
    }

    /// Adds `head -> body`. The head becomes a nonterminal if it was not one
    /// already; body symbols are classified into `NT` or `T`, and epsilon
    /// markers are dropped. Nothing is changed when an error is returned.
    pub fn add_production<S: Into<Symbol>>(
        &mut self,
        head: impl Into<Symbol>,
        body: impl IntoIterator<Item=S>,
    ) -> Result<(), GrammarError> {
        let head = head.into();
        if !head.is_well_formed() || head.is_epsilon() {
            return Err(GrammarError::InvalidSymbol(head.0));
        }
        if !head.is_nonterminal() {
            return Err(GrammarError::NotANonterminal(head.0));
        }
        let mut symbols = Vec::new();
        for symbol in body.into_iter().map(Into::into) {
            if symbol.is_epsilon() {
                continue;
            }
            if !symbol.is_well_formed() {
                return Err(GrammarError::InvalidSymbol(symbol.0));
            }
            symbols.push(symbol);
        }
        self.push_production(head, Production(symbols));
        Ok(())
    }
}

// Unchecked plumbing for the transformation stages, whose inputs are already
// classified.
impl Grammar {
    /// Same symbols and start symbol, no productions.
    pub(crate) fn with_no_rules(&self) -> Grammar {
        let mut g = Grammar {
            nonterms: self.nonterms.clone(),
            terms: self.terms.clone(),
            start: self.start.clone(),
            rules: Rules::new(),
        };
        g.ensure_entries();
        g
    }

    fn register(&mut self, nonterm: Symbol) {
        self.rules.entry(nonterm.clone()).or_default();
        self.nonterms.insert(nonterm);
    }

    pub(crate) fn push_production(&mut self, head: Symbol, production: Production) {
        for symbol in production.iter() {
            if symbol.is_nonterminal() {
                if !self.nonterms.contains(symbol) {
                    self.register(symbol.clone());
                }
            } else {
                self.terms.insert(symbol.clone());
            }
        }
        self.nonterms.insert(head.clone());
        self.rules.entry(head).or_default().insert(production);
    }

    pub(crate) fn ensure_entries(&mut self) {
        for nonterm in &self.nonterms {
            if !self.rules.contains_key(nonterm) {
                self.rules.insert(nonterm.clone(), BTreeSet::new());
            }
        }
    }

    /// `T` becomes exactly the terminals still mentioned by some production.
    pub(crate) fn recompute_terms(&mut self) {
        self.terms = self.rules.values()
            .flatten()
            .flat_map(|p| p.iter())
            .filter(|s| s.is_terminal())
            .cloned()
            .collect();
    }

    /// Every name in use: `NT`, `T` and the keys of `P`.
    pub(crate) fn symbols(&self) -> impl Iterator<Item=&Symbol> {
        self.nonterms.iter().chain(self.terms.iter()).chain(self.rules.keys())
    }
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
