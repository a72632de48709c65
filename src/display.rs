use crate::grammar::{Grammar, Production, EPSILON};

impl std::fmt::Display for Production {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_epsilon() {
            return write!(w, "{}", EPSILON);
        }
        let mut symbols = self.iter();
        if let Some(first) = symbols.next() {
            write!(w, "{}", first)?;
        }
        for symbol in symbols {
            write!(w, " {}", symbol)?;
        }
        Ok(())
    }
}

fn joined<T: std::fmt::Display>(items: impl Iterator<Item=T>, sep: &str) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(sep)
}

// Diagnostic listing: sorted nonterminals, sorted terminals, the start symbol,
// then each head with its sorted alternatives. A head with no alternatives at
// all is shown deriving the empty language.
impl std::fmt::Display for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(w, "Nonterminals: {}", joined(self.nonterms().iter(), ", "))?;
        writeln!(w, "Terminals: {}", joined(self.terms().iter(), ", "))?;
        match self.start() {
            Some(start) => writeln!(w, "Start: {}", start)?,
            None => writeln!(w, "Start: (none)")?,
        }
        write!(w, "Productions:")?;
        for (head, prods) in self.rules() {
            if prods.is_empty() {
                write!(w, "\n  {} -> ∅", head)?;
            } else {
                write!(w, "\n  {} -> {}", head, joined(prods.iter(), " | "))?;
            }
        }
        Ok(())
    }
}
