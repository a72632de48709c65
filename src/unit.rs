//! Unit productions (`A -> B`) and their removal.

use crate::grammar::{Grammar, Symbol};

use std::collections::BTreeSet;

/// Reflexive-transitive closure of the unit-production relation: `(A, C)` is
/// in the result when `A =>* C` using unit productions only.
pub fn unit_pairs(g: &Grammar) -> BTreeSet<(Symbol, Symbol)> {
    let mut pairs: BTreeSet<(Symbol, Symbol)> = g.nonterms().iter()
        .map(|a| (a.clone(), a.clone()))
        .collect();
    let mut work: Vec<(Symbol, Symbol)> = pairs.iter().cloned().collect();
    while let Some((a, b)) = work.pop() {
        for p in g.productions(b.as_str()).filter(|p| p.is_unit()) {
            let pair = (a.clone(), p[0].clone());
            if pairs.insert(pair.clone()) {
                work.push(pair);
            }
        }
    }
    nbg!(pairs)
}

/// Each `A` gets the non-unit productions of every `B` with `(A, B)` in the
/// closure, which also flattens chains and cycles like `A -> A`.
pub fn remove_units(g: &Grammar) -> Grammar {
    let mut out = g.with_no_rules();
    for (a, b) in unit_pairs(g) {
        for p in g.productions(b.as_str()).filter(|p| !p.is_unit()) {
            out.push_production(a.clone(), p.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/unit.rs"]
mod tests_for_unit;
