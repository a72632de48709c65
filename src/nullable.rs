//! Nullable nonterminals, and the rewrite that gets rid of epsilon
//! productions.
//!
//! A nonterminal is nullable when it can derive the empty string: it has an
//! epsilon production, or a production made up entirely of nullable
//! nonterminals. Removing epsilon productions replaces every production with
//! all of its variants obtained by deleting some subset of its nullable
//! occurrences, skipping variants that would end up empty.
//!
//! If the start symbol is nullable, the empty string must stay in the
//! language, so a fresh start symbol `S0` takes over with `S0 -> S | ε`. That
//! is the only epsilon production that survives.

use crate::grammar::{Grammar, Production, Symbol};
use crate::util::FreshNames;

use std::collections::BTreeSet;

pub(crate) const START_BASE: &str = "S0";

pub fn find_nullable(g: &Grammar) -> BTreeSet<Symbol> {
    let mut nullable = BTreeSet::new();
    loop {
        let mut changed = false;
        for (head, prods) in g.rules() {
            if nullable.contains(head) {
                continue;
            }
            // `A -> ε` passes vacuously.
            let derives_empty = prods.iter().any(|p| {
                p.iter().all(|s| s.is_nonterminal() && nullable.contains(s))
            });
            if derives_empty {
                nullable.insert(head.clone());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    nbg!(nullable)
}

pub fn remove_epsilon(g: &Grammar) -> Grammar {
    let nullable = find_nullable(g);
    let mut out = g.with_no_rules();

    if let Some(start) = g.start().filter(|s| nullable.contains(*s)) {
        let s0 = FreshNames::new(g).fresh(START_BASE);
        out.push_production(s0.clone(), Production::from(vec![start.clone()]));
        out.push_production(s0.clone(), Production::epsilon());
        out.start = Some(s0);
    }

    for (head, prods) in g.rules() {
        for p in prods {
            for variant in without_nullable_occurrences(p, &nullable) {
                out.push_production(head.clone(), variant);
            }
        }
    }
    out
}

/// Every way of deleting a subset of the nullable occurrences in `p`
/// (including deleting none), minus the empty result.
fn without_nullable_occurrences(p: &Production, nullable: &BTreeSet<Symbol>) -> BTreeSet<Production> {
    let mut variants: Vec<Vec<Symbol>> = vec![vec![]];
    for symbol in p.iter() {
        let optional = symbol.is_nonterminal() && nullable.contains(symbol);
        let mut next = Vec::with_capacity(if optional { variants.len() * 2 } else { variants.len() });
        for mut variant in variants {
            if optional {
                next.push(variant.clone());
            }
            variant.push(symbol.clone());
            next.push(variant);
        }
        variants = next;
    }
    variants.into_iter()
        .filter(|v| !v.is_empty())
        .map(Production::from)
        .collect()
}

#[cfg(test)]
#[path = "tests/nullable.rs"]
mod tests_for_nullable;
