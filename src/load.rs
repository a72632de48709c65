//! Reading grammars from text, one rule per line:
//!
//! ```text
//! # balanced parentheses
//! S -> ( S ) S
//!    | ε
//! ```
//!
//! Blank lines and lines starting with `#` are ignored; a line starting with
//! `|` adds alternatives to the rule before it. The head of the first rule is
//! the start symbol.

use crate::grammar::{Grammar, GrammarError};
use crate::rules;
use crate::toyman;

use thiserror::Error;

use std::path::Path;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("line {line}: {source}")]
    Grammar { line: usize, #[source] source: GrammarError },
    #[error("no rules found")]
    Empty,
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Grammar, LoadError> {
    let text = fs_err::read_to_string(path.as_ref())?;
    from_str(&text)
}

pub fn from_str(text: &str) -> Result<Grammar, LoadError> {
    let mut g = Grammar::empty();
    for (line, rule) in logical_lines(text)? {
        let (head, alts) = rules::RuleParser::new()
            .parse(&rule, toyman::Lexer::new(&rule))
            .map_err(|e| LoadError::Syntax { line, message: e.to_string() })?;
        let grammar_error = |source| LoadError::Grammar { line, source };
        for alt in alts {
            g.add_production(head.as_str(), alt).map_err(grammar_error)?;
        }
        if g.start().is_none() {
            g.set_start(head).map_err(grammar_error)?;
        }
    }
    if g.start().is_none() {
        return Err(LoadError::Empty);
    }
    Ok(g)
}

/// Rules with their continuation lines folded in, each tagged with the line
/// number it starts on.
fn logical_lines(text: &str) -> Result<Vec<(usize, String)>, LoadError> {
    let mut rules: Vec<(usize, String)> = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('|') {
            match rules.last_mut() {
                Some((_, rule)) => {
                    rule.push(' ');
                    rule.push_str(line);
                }
                None => {
                    return Err(LoadError::Syntax {
                        line: i + 1,
                        message: "`|` continues no rule".to_string(),
                    });
                }
            }
            continue;
        }
        rules.push((i + 1, line.to_string()));
    }
    Ok(rules)
}

impl std::str::FromStr for Grammar {
    type Err = LoadError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}

#[cfg(test)]
#[path = "tests/load.rs"]
mod tests_for_load;
