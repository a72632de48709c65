// This is actually defined at `crate::cyk::tests_for_cyk`

use crate::cyk::*;
use crate::tests::grammar;
use crate::{normalize, Derivation, Symbol};

fn names(symbols: Vec<&Symbol>) -> Vec<&str> {
    symbols.into_iter().map(Symbol::as_str).collect()
}

const AB: &str = "
S -> A B
A -> a
B -> b
";

#[test]
fn tokenizing() {
    assert_eq!(tokenize("  The  cat\tSAT\n"), ["the", "cat", "sat"]);
    assert!(tokenize(" \t ").is_empty());
}

#[test]
fn lexicon() {
    let g = grammar("
S -> A B | a
A -> a
B -> b
");
    let lexicon = Lexicon::new(&g);
    assert_eq!(names(lexicon.categories("a").iter().collect()), ["A", "S"]);
    assert_eq!(names(lexicon.categories("b").iter().collect()), ["B"]);
    assert!(lexicon.categories("c").is_empty());
    assert_eq!(lexicon.binary().len(), 1);
}

#[test]
fn table_cells() {
    let p = parse(&grammar(AB), "a b");
    let table = p.table.as_ref().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.tokens(), ["a", "b"]);
    assert_eq!(names(table.symbols(1, 0)), ["A"]);
    assert_eq!(names(table.symbols(1, 1)), ["B"]);
    assert_eq!(names(table.symbols(2, 0)), ["S"]);
    assert_eq!(table.derivations(2, 0, "S").len(), 1);
    assert!(table.derivations(2, 0, "A").is_empty());
    // out of range
    assert!(table.cell(0, 0).is_none());
    assert!(table.cell(2, 1).is_none());
    assert!(table.cell(3, 0).is_none());
}

#[test]
fn tree() {
    let p = parse(&grammar(AB), "a b");
    let expected = Derivation::node(
        "S".into(),
        Derivation::leaf("A".into(), "a".into()),
        Derivation::leaf("B".into(), "b".into()),
    );
    assert_eq!(p.tree, Some(expected));
    assert_eq!(p.derivations().len(), 1);
}

#[test]
fn rejection_keeps_table() {
    let p = parse(&grammar(AB), "b a");
    assert!(!p.accepted);
    assert!(p.tree.is_none());
    assert!(p.derivations().is_empty());
    let table = p.table.unwrap();
    assert_eq!(names(table.symbols(1, 0)), ["B"]);
    assert!(table.symbols(2, 0).is_empty());
}

#[test]
fn unknown_tokens() {
    let p = parse(&grammar(AB), "a z");
    assert!(!p.accepted);
    assert!(p.table.unwrap().symbols(1, 1).is_empty());
}

#[test]
fn empty_input() {
    let p = parse(&grammar(AB), "   ");
    assert!(!p.accepted);
    assert!(p.tree.is_none());
    assert!(p.table.is_none());
    assert!(p.derivations().is_empty());
}

#[test]
fn no_start_symbol() {
    let p = parse(&crate::Grammar::empty(), "a");
    assert!(!p.accepted);
    assert!(p.table.is_some());
}

#[test]
fn every_derivation_is_kept() {
    // S -> S S | a, which is ambiguous from three tokens on: the number of
    // trees over n leaves is the Catalan number C(n-1).
    let g = normalize(&grammar("S -> S S | a"));
    let catalan = [0, 1, 1, 2, 5, 14];
    for (n, expected) in catalan.iter().enumerate().skip(1) {
        let text = vec!["a"; n].join(" ");
        let p = parse(&g, &text);
        assert!(p.accepted);
        assert_eq!(p.derivations().len(), *expected, "{} tokens", n);
        for d in p.derivations() {
            assert_eq!(d.leaves().len(), n);
            assert_eq!(d.size(), 2 * n - 1);
        }
    }
}

#[test]
fn first_derivation_is_deterministic() {
    let g = normalize(&grammar("S -> S S | a"));
    let first = parse(&g, "a a a").tree;
    for _ in 0..3 {
        assert_eq!(parse(&g, "a a a").tree, first);
    }
}
