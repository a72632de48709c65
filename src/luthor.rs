//! The Luthor lexer is very simple-minded. There are six categories of
//! "tokens":
//!
//! 1. whitespace: a string made up solely of whitespace characters
//!
//! 2. word: a string made up solely of alphanumeric or underscore characters
//!
//! 3. operative: a string made up solely of characters that fall into none
//! of the other categories, e.g. `->`, `+=`, `→`
//!
//! 4. bracket: a single open or close bracket character; sequences of
//! brackets are never merged into one token
//!
//! 5. bar: a single `|`
//!
//! 6. quotation: arbitrary content between a pair of `'` or a pair of `"`.
//! There is no escaping; the content ends at the first matching delimiter.
//!
//! Words and operatives split wherever their categories change, so `x+y` is
//! three tokens. Anything meant to be read as one symbol despite that has to
//! be quoted.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::Spanned;
use thiserror::Error;
use unicode_brackets::UnicodeBrackets;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokKind {
    Word,
    Operative,
    Bracket,
    Bar,
    Quote,
    Space,
}

/// For quotations `data` is the content without its delimiters.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tok<'input> {
    kind: TokKind,
    data: &'input str,
}

impl<'input> Tok<'input> {
    pub fn kind(&self) -> TokKind { self.kind }
    pub fn data(&self) -> &'input str { self.data }
}

impl<'input> From<Tok<'input>> for String {
    fn from(tok: Tok<'input>) -> String { tok.data.to_string() }
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum LexicalError {
    #[error("unterminated quotation starting at byte {start}")]
    UnterminatedQuote { start: usize },
}

pub struct Lexer<'input> {
    input: &'input str,
    chars: Peekable<CharIndices<'input>>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer { input, chars: input.char_indices().peekable() }
    }
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Very regular token matching (no extra context needed)
#[derive(Copy, Clone, PartialEq, Eq)]
enum R {
    Word,
    Operative,
    Bracket,
    Bar,
    Space,
}

enum RegAction { Complete, Continue, }

impl R {
    fn from_start_char(c: char) -> Self {
        if c.is_whitespace() { R::Space }
        else if c == '|' { R::Bar }
        else if c.is_open_bracket() || c.is_close_bracket() { R::Bracket }
        else if c.is_alphanumeric() || c == '_' { R::Word }
        else { R::Operative }
    }

    fn action(&self, p: char) -> RegAction {
        match self {
            // brackets and bars are always tokens of their own.
            R::Bracket | R::Bar => RegAction::Complete,
            R::Word | R::Operative | R::Space => {
                if !is_quote(p) && R::from_start_char(p) == *self {
                    RegAction::Continue
                } else {
                    RegAction::Complete
                }
            }
        }
    }

    fn kind(&self) -> TokKind {
        match self {
            R::Word => TokKind::Word,
            R::Operative => TokKind::Operative,
            R::Bracket => TokKind::Bracket,
            R::Bar => TokKind::Bar,
            R::Space => TokKind::Space,
        }
    }
}

impl<'input> Lexer<'input> {
    fn read_regular(&mut self, (start, c): (usize, char)) -> <Self as Iterator>::Item {
        let r = R::from_start_char(c);
        let mut end = start + c.len_utf8();
        while let Some(&(i, p)) = self.chars.peek() {
            match r.action(p) {
                RegAction::Continue => {
                    self.chars.next();
                    end = i + p.len_utf8();
                }
                RegAction::Complete => break,
            }
        }
        Ok((start, Tok { kind: r.kind(), data: &self.input[start..end] }, end))
    }

    fn read_quotation(&mut self, (start, delim): (usize, char)) -> <Self as Iterator>::Item {
        let content_start = start + delim.len_utf8();
        for (i, c) in self.chars.by_ref() {
            if c == delim {
                let tok = Tok { kind: TokKind::Quote, data: &self.input[content_start..i] };
                return Ok((start, tok, i + c.len_utf8()));
            }
        }
        Err(LexicalError::UnterminatedQuote { start })
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Tok<'input>, usize, LexicalError>;
    fn next(&mut self) -> Option<Self::Item> {
        let ic = self.chars.next()?;
        if is_quote(ic.1) {
            Some(self.read_quotation(ic))
        } else {
            Some(self.read_regular(ic))
        }
    }
}

#[cfg(test)]
#[path = "tests/luthor.rs"]
mod tests_for_luthor;
