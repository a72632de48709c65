use crate::grammar::{is_nonterminal, Grammar, Symbol};

use std::collections::BTreeSet;

/// Hands out new nonterminal names for a single transformation call. Names
/// never collide with anything in the grammar it was created from, nor with
/// each other.
pub(crate) struct FreshNames {
    used: BTreeSet<Symbol>,
}

impl FreshNames {
    pub(crate) fn new(g: &Grammar) -> Self {
        FreshNames { used: g.symbols().cloned().collect() }
    }

    /// `base` itself when it is free, otherwise the first free one of
    /// `base_2`, `base_3`, ...
    pub(crate) fn fresh(&mut self, base: &str) -> Symbol {
        let base = if is_nonterminal(base) { base.to_string() } else { format!("X_{}", base) };
        let mut candidate = Symbol::from(base.as_str());
        let mut k = 1;
        while self.used.contains(&candidate) {
            k += 1;
            candidate = Symbol::from(format!("{}_{}", base, k));
        }
        self.used.insert(candidate.clone());
        nbg!(candidate)
    }
}
