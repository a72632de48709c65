//! Useless symbols: nonterminals that derive no terminal string at all
//! (non-productive), and nonterminals the start symbol never reaches.
//!
//! Productive pruning has to come first; reachability is computed on the
//! grammar that is left afterwards.

use crate::grammar::{Grammar, Symbol};

use std::collections::{BTreeSet, VecDeque};

pub fn productive(g: &Grammar) -> BTreeSet<Symbol> {
    let mut productive = BTreeSet::new();
    loop {
        let mut changed = false;
        for (head, prods) in g.rules() {
            if productive.contains(head) {
                continue;
            }
            let grounded = prods.iter().any(|p| {
                p.iter().all(|s| s.is_terminal() || productive.contains(s))
            });
            if grounded {
                productive.insert(head.clone());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    nbg!(productive)
}

pub fn reachable(g: &Grammar) -> BTreeSet<Symbol> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    if let Some(start) = g.start() {
        seen.insert(start.clone());
        queue.push_back(start.clone());
    }
    while let Some(a) = queue.pop_front() {
        for p in g.productions(a.as_str()) {
            for s in p.iter().filter(|s| s.is_nonterminal()) {
                if seen.insert(s.clone()) {
                    queue.push_back(s.clone());
                }
            }
        }
    }
    nbg!(seen)
}

pub fn remove_nonproductive(g: &Grammar) -> Grammar {
    retain_nonterms(g, &productive(g))
}

pub fn remove_unreachable(g: &Grammar) -> Grammar {
    retain_nonterms(g, &reachable(g))
}

pub fn remove_useless(g: &Grammar) -> Grammar {
    remove_unreachable(&remove_nonproductive(g))
}

/// Keeps the nonterminals in `keep` and the productions that mention nothing
/// else. The start symbol always stays defined, with no productions if it had
/// to go; its language is then empty.
fn retain_nonterms(g: &Grammar, keep: &BTreeSet<Symbol>) -> Grammar {
    let mut out = Grammar::empty();
    out.start = g.start().cloned();
    out.nonterms = g.nonterms().iter().filter(|a| keep.contains(*a)).cloned().collect();
    if let Some(start) = g.start() {
        out.nonterms.insert(start.clone());
    }
    for (head, prods) in g.rules().filter(|(head, _)| out.nonterms.contains(*head)) {
        let kept = prods.iter()
            .filter(|p| p.iter().all(|s| s.is_terminal() || keep.contains(s)))
            .cloned()
            .collect();
        out.rules.insert(head.clone(), kept);
    }
    out.ensure_entries();
    out.recompute_terms();
    out
}

#[cfg(test)]
#[path = "tests/useless.rs"]
mod tests_for_useless;
