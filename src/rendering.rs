use crate::cyk::{Parse, Table};
use crate::node::Derivation;
use crate::Normalization;

pub trait Rendered {
    fn rendered(&self) -> String;
}

// S
// ├── A → 'a'
// └── B → 'b'
impl Rendered for Derivation {
    fn rendered(&self) -> String {
        let mut lines = Vec::new();
        let mut pending: Vec<(&Derivation, String, &str)> = vec![(self, String::new(), "")];
        while let Some((d, indent, connector)) = pending.pop() {
            lines.push(format!("{}{}{}", indent, connector, label(d)));
            if let Some((left, right)) = d.children() {
                let indent = match connector {
                    "├── " => format!("{}│   ", indent),
                    "└── " => format!("{}    ", indent),
                    _ => indent,
                };
                pending.push((right, indent.clone(), "└── "));
                pending.push((left, indent, "├── "));
            }
        }
        lines.join("\n")
    }
}

fn label(d: &Derivation) -> String {
    match d {
        Derivation::Leaf { nonterm, term } => format!("{} → '{}'", nonterm, term),
        Derivation::Node { nonterm, .. } => nonterm.to_string(),
    }
}

// length 2:
//   [0:2] 'a b': {S}
// length 1:
//   [0:1] 'a': {A}
//   [1:2] 'b': {B}
impl Rendered for Table {
    fn rendered(&self) -> String {
        let mut lines = Vec::new();
        for len in (1..=self.len()).rev() {
            lines.push(format!("length {}:", len));
            for start in 0..=(self.len() - len) {
                let mut symbols = self.symbols(len, start);
                if symbols.is_empty() {
                    continue;
                }
                symbols.sort();
                let words = self.tokens()[start..start + len].join(" ");
                let symbols = symbols.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ");
                lines.push(format!("  [{}:{}] '{}': {{{}}}", start, start + len, words, symbols));
            }
        }
        lines.join("\n")
    }
}

impl Rendered for Parse {
    fn rendered(&self) -> String {
        let verdict = if self.accepted { "accepted" } else { "rejected" };
        let mut out = verdict.to_string();
        if let Some(tree) = &self.tree {
            out.push('\n');
            out.push_str(&tree.rendered());
        }
        out
    }
}

// One section per stage, in pipeline order.
impl Rendered for Normalization {
    fn rendered(&self) -> String {
        let nullable = self.nullable.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ");
        [
            format!("== original ==\n{}", self.original),
            format!("== nullable ==\n{{{}}}", nullable),
            format!("== without epsilon productions ==\n{}", self.without_epsilon),
            format!("== without unit productions ==\n{}", self.without_units),
            format!("== without useless symbols ==\n{}", self.useful),
            format!("== chomsky normal form ==\n{}", self.cnf),
        ].join("\n\n")
    }
}

#[cfg(test)]
#[path = "tests/rendering.rs"]
mod tests_for_rendering;
