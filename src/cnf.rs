//! Chomsky Normal Form: every production is `A -> a` or `A -> B C`, plus at
//! most `S0 -> ε` on the start symbol.
//!
//! The input must already be free of epsilon productions (other than the one
//! on the start symbol) and of unit productions; that is not re-checked.
//! A unit production that slips through is passed along untouched.

use crate::grammar::{Grammar, Production, Symbol};
use crate::nullable::START_BASE;
use crate::util::FreshNames;

use regex::Regex;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Base name for the nonterminals introduced while splitting long
/// productions into chains of binary ones.
const CHAIN_BASE: &str = "X";

const MNEMONICS: &[(&str, &str)] = &[
    ("+", "plus"), ("-", "minus"), ("*", "mul"), ("/", "div"),
    ("(", "lpar"), (")", "rpar"), ("[", "lbrack"), ("]", "rbrack"),
    ("{", "lbrace"), ("}", "rbrace"), ("=", "eq"), ("<", "lt"), (">", "gt"),
    ("|", "bar"), ("&", "and"), ("^", "xor"), ("%", "mod"), ("!", "bang"),
    ("?", "q"), (":", "colon"), (";", "semi"), (",", "comma"), (".", "dot"),
    ("'", "apos"), ("\"", "quot"), ("\\", "bslash"), ("#", "hash"), ("@", "at"),
    ("$", "dollar"), ("~", "tilde"),
];

fn non_identifier_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").unwrap())
}

/// A readable identifier fragment for a terminal, used to name its helper
/// nonterminal `T_<mnemonic>`.
pub fn terminal_mnemonic(t: &str) -> String {
    if let Some((_, name)) = MNEMONICS.iter().find(|(punct, _)| *punct == t) {
        return name.to_string();
    }
    let s = non_identifier_chars().replace_all(t, "_").into_owned();
    if s.is_empty() {
        "tok".to_string()
    } else if s.starts_with(|c: char| c.is_ascii_digit()) {
        format!("tok_{}", s)
    } else {
        s
    }
}

/// The new start symbol receives copies of the old start symbol's
/// alternatives, rather than a unit production `S0 -> S` which would not be
/// in normal form. An epsilon production moves over to the new start symbol.
pub fn to_cnf(g: &Grammar) -> Grammar {
    let mut names = FreshNames::new(g);
    let mut out = g.with_no_rules();
    let mut rules = g.rules.clone();

    if let Some(old) = g.start().cloned() {
        let s0 = names.fresh(START_BASE);
        let (epsilon, mut carried): (BTreeSet<Production>, BTreeSet<Production>) = rules
            .remove(&old)
            .unwrap_or_default()
            .into_iter()
            .partition(|p| p.is_epsilon());
        rules.insert(old, carried.clone());
        carried.extend(epsilon);
        rules.insert(s0.clone(), carried);
        out.nonterms.insert(s0.clone());
        out.start = Some(s0);
    }

    let mut helpers = BTreeMap::new();
    for (head, prods) in rules {
        out.rules.entry(head.clone()).or_default();
        for p in prods {
            if p.len() < 2 {
                out.push_production(head.clone(), p);
                continue;
            }
            let isolated: Vec<Symbol> = p.iter()
                .map(|s| if s.is_nonterminal() {
                    s.clone()
                } else {
                    terminal_helper(s, &mut helpers, &mut names, &mut out)
                })
                .collect();
            binarize(head.clone(), isolated, &mut names, &mut out);
        }
    }
    out.ensure_entries();
    out
}

/// `T_x -> x`, created on first use and shared by every later occurrence of
/// `x` in the same conversion.
fn terminal_helper(
    t: &Symbol,
    helpers: &mut BTreeMap<Symbol, Symbol>,
    names: &mut FreshNames,
    out: &mut Grammar,
) -> Symbol {
    if let Some(helper) = helpers.get(t) {
        return helper.clone();
    }
    let helper = names.fresh(&format!("T_{}", terminal_mnemonic(t.as_str())));
    out.push_production(helper.clone(), Production::from(vec![t.clone()]));
    helpers.insert(t.clone(), helper.clone());
    helper
}

/// `A -> X1 X2 ... Xn` becomes `A -> X1 Z1`, `Z1 -> X2 Z2`, ...,
/// `Z(n-2) -> X(n-1) Xn`.
fn binarize(head: Symbol, symbols: Vec<Symbol>, names: &mut FreshNames, out: &mut Grammar) {
    let n = symbols.len();
    let mut lhs = head;
    let mut symbols = symbols.into_iter();
    for _ in 0..n.saturating_sub(2) {
        let link = names.fresh(CHAIN_BASE);
        let first = symbols.next().into_iter().chain(Some(link.clone()));
        out.push_production(lhs, first.collect());
        lhs = link;
    }
    out.push_production(lhs, symbols.collect());
}

/// Whether every production is `A -> a` or `A -> B C`, except for an epsilon
/// production on a start symbol that no production body mentions.
pub fn is_cnf(g: &Grammar) -> bool {
    let mut start_is_nullable = false;
    for (head, prods) in g.rules() {
        for p in prods {
            if p.is_epsilon() {
                if Some(head) != g.start() {
                    return false;
                }
                start_is_nullable = true;
            } else if !(p.is_lexical() || p.is_binary()) {
                return false;
            }
        }
    }
    match g.start() {
        Some(start) if start_is_nullable => {
            !g.rules.values().flatten().any(|p| p.contains(start))
        }
        _ => true,
    }
}

#[cfg(test)]
#[path = "tests/cnf.rs"]
mod tests_for_cnf;
