use crate::grammar::Symbol;

/// A parse tree over a CNF grammar, as built by the CYK table. Each node owns
/// its children outright; nothing is shared between trees.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Derivation {
    /// `A -> a`
    Leaf { nonterm: Symbol, term: Symbol },
    /// `A -> B C`
    Node { nonterm: Symbol, children: Box<(Derivation, Derivation)> },
}

impl Derivation {
    pub fn leaf(nonterm: Symbol, term: Symbol) -> Self {
        Derivation::Leaf { nonterm, term }
    }

    pub fn node(nonterm: Symbol, left: Derivation, right: Derivation) -> Self {
        Derivation::Node { nonterm, children: Box::new((left, right)) }
    }

    pub fn nonterm(&self) -> &Symbol {
        match self {
            Derivation::Leaf { nonterm, .. } |
            Derivation::Node { nonterm, .. } => nonterm,
        }
    }

    pub fn children(&self) -> Option<(&Derivation, &Derivation)> {
        match self {
            Derivation::Leaf { .. } => None,
            Derivation::Node { children, .. } => Some((&children.0, &children.1)),
        }
    }

    /// The terminals along the fringe, left to right.
    pub fn leaves(&self) -> Vec<&Symbol> {
        let mut accum = Vec::new();
        let mut pending = vec![self];
        while let Some(d) = pending.pop() {
            match d {
                Derivation::Leaf { term, .. } => accum.push(term),
                Derivation::Node { children, .. } => {
                    pending.push(&children.1);
                    pending.push(&children.0);
                }
            }
        }
        accum
    }

    pub fn size(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => 1 + left.size() + right.size(),
        }
    }
}

// `S(A(a), B(b))`
impl std::fmt::Display for Derivation {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Derivation::Leaf { nonterm, term } => write!(w, "{}({})", nonterm, term),
            Derivation::Node { nonterm, children } => {
                write!(w, "{}({}, {})", nonterm, children.0, children.1)
            }
        }
    }
}
