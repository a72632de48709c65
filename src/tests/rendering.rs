// This is actually defined at `crate::rendering::tests_for_rendering`

use crate::rendering::Rendered;
use crate::tests::grammar;
use crate::{parse, Normalization};

use expect_test::expect;

const ABC: &str = "
S -> X C
X -> A B
A -> a
B -> b
C -> c
";

#[test]
fn tree() {
    let p = parse(&grammar(ABC), "a b c");
    expect![[r#"
        S
        ├── X
        │   ├── A → 'a'
        │   └── B → 'b'
        └── C → 'c'"#]].assert_eq(&p.tree.unwrap().rendered());
}

#[test]
fn right_leaning_tree() {
    let g = grammar("
S -> A T
T -> B U
U -> C D
A -> a
B -> b
C -> c
D -> d
");
    let p = parse(&g, "a b c d");
    expect![[r#"
        S
        ├── A → 'a'
        └── T
            ├── B → 'b'
            └── U
                ├── C → 'c'
                └── D → 'd'"#]].assert_eq(&p.tree.unwrap().rendered());
}

#[test]
fn single_leaf() {
    let p = parse(&grammar("S -> a"), "a");
    expect!["S → 'a'"].assert_eq(&p.tree.unwrap().rendered());
}

#[test]
fn compact() {
    let p = parse(&grammar(ABC), "a b c");
    expect!["S(X(A(a), B(b)), C(c))"].assert_eq(&p.tree.unwrap().to_string());
}

#[test]
fn table() {
    let p = parse(&grammar(ABC), "a b c");
    expect![[r#"
        length 3:
          [0:3] 'a b c': {S}
        length 2:
          [0:2] 'a b': {X}
        length 1:
          [0:1] 'a': {A}
          [1:2] 'b': {B}
          [2:3] 'c': {C}"#]].assert_eq(&p.table.unwrap().rendered());
}

#[test]
fn table_of_rejection() {
    let p = parse(&grammar(ABC), "c b a");
    expect![[r#"
        length 3:
        length 2:
        length 1:
          [0:1] 'c': {C}
          [1:2] 'b': {B}
          [2:3] 'a': {A}"#]].assert_eq(&p.table.unwrap().rendered());
}

#[test]
fn verdicts() {
    let g = grammar(ABC);
    expect![[r#"
        accepted
        S
        ├── X
        │   ├── A → 'a'
        │   └── B → 'b'
        └── C → 'c'"#]].assert_eq(&parse(&g, "a b c").rendered());
    expect!["rejected"].assert_eq(&parse(&g, "a b").rendered());
}

#[test]
fn stage_report() {
    let n = Normalization::run(&grammar("S -> a S | ε"));
    expect![[r#"
        == original ==
        Nonterminals: S
        Terminals: a
        Start: S
        Productions:
          S -> ε | a S

        == nullable ==
        {S}

        == without epsilon productions ==
        Nonterminals: S, S0
        Terminals: a
        Start: S0
        Productions:
          S -> a | a S
          S0 -> ε | S

        == without unit productions ==
        Nonterminals: S, S0
        Terminals: a
        Start: S0
        Productions:
          S -> a | a S
          S0 -> ε | a | a S

        == without useless symbols ==
        Nonterminals: S, S0
        Terminals: a
        Start: S0
        Productions:
          S -> a | a S
          S0 -> ε | a | a S

        == chomsky normal form ==
        Nonterminals: S, S0, S0_2, T_a
        Terminals: a
        Start: S0_2
        Productions:
          S -> T_a S | a
          S0 -> T_a S | a
          S0_2 -> ε | T_a S | a
          T_a -> a"#]].assert_eq(&n.rendered());
}
