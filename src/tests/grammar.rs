// This is actually defined at `crate::grammar::tests_for_grammar`

use crate::grammar::*;
use crate::tests::grammar;

#[test]
fn classification() {
    assert!(is_nonterminal("S"));
    assert!(is_nonterminal("S0"));
    assert!(is_nonterminal("T_plus"));
    assert!(!is_nonterminal("s"));
    assert!(!is_nonterminal("_S"));
    assert!(!is_nonterminal("+"));
    assert!(!is_nonterminal("S-1"));
    assert!(Symbol::from("id").is_terminal());
    assert!(Symbol::epsilon().is_epsilon());
}

#[test]
fn production_shapes() {
    assert!(Production::epsilon().is_epsilon());
    assert!(Production::from(&["A"][..]).is_unit());
    assert!(Production::from(&["a"][..]).is_lexical());
    assert!(Production::from(&["A", "B"][..]).is_binary());
    assert!(!Production::from(&["A", "b"][..]).is_binary());
    assert!(!Production::from(&["a"][..]).is_unit());
}

#[test]
fn building() -> Result<(), GrammarError> {
    let mut g = Grammar::empty();
    g.set_start("S")?;
    g.add_production("S", ["A", "b"])?;
    g.add_production("A", ["a"])?;
    g.add_production("A", ["ε"])?;

    assert_eq!(g.start().map(Symbol::as_str), Some("S"));
    assert_eq!(g.nonterms().iter().map(Symbol::as_str).collect::<Vec<_>>(), ["A", "S"]);
    assert_eq!(g.terms().iter().map(Symbol::as_str).collect::<Vec<_>>(), ["a", "b"]);
    assert!(g.has_production("S", &["A", "b"]));
    assert!(g.has_production("A", &[]));
    assert_eq!(g.production_count(), 3);

    // sets, so adding twice changes nothing
    g.add_production("A", ["a"])?;
    assert_eq!(g.production_count(), 3);
    Ok(())
}

#[test]
fn body_nonterminals_get_entries() -> Result<(), GrammarError> {
    let mut g = Grammar::empty();
    g.add_production("S", ["B"])?;
    assert!(g.nonterms().contains("B"));
    assert_eq!(g.productions("B").count(), 0);
    assert!(g.rules().any(|(head, _)| head.as_str() == "B"));
    Ok(())
}

#[test]
fn rejects_bad_symbols() {
    let mut g = Grammar::empty();
    assert_eq!(g.add_production("s", ["a"]), Err(GrammarError::NotANonterminal("s".into())));
    assert_eq!(g.add_production("S", ["a b"]), Err(GrammarError::InvalidSymbol("a b".into())));
    assert_eq!(g.add_production("S", ["a", ""]), Err(GrammarError::InvalidSymbol("".into())));
    assert_eq!(g.add_production("ε", ["a"]), Err(GrammarError::InvalidSymbol("ε".into())));
    assert_eq!(g.add_terminal("A"), Err(GrammarError::NotATerminal("A".into())));
    assert_eq!(g.add_nonterminal("a"), Err(GrammarError::NotANonterminal("a".into())));
    assert_eq!(g.set_start("tab\t"), Err(GrammarError::InvalidSymbol("tab\t".into())));
    // failed additions leave nothing behind
    assert_eq!(g, Grammar::empty());
}

#[test]
fn display() {
    let g = grammar("
S -> A b | ε
A -> a
Z -> Y
");
    assert_eq!(g.to_string(), "\
Nonterminals: A, S, Y, Z
Terminals: a, b
Start: S
Productions:
  A -> a
  S -> ε | A b
  Y -> ∅
  Z -> Y");
    assert_eq!(Grammar::empty().to_string(), "Nonterminals: \nTerminals: \nStart: (none)\nProductions:");
}
