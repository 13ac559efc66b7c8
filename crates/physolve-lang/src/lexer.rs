//! Tokenizer: turns a free-text line into ordered identifier/value assignments.
//!
//! A number written against an identifier, in either order (`3x`, `x3`, `-4y`),
//! assigns that number to the identifier. An identifier with no adjacent number
//! (`hyp`) is emitted without a value and means "solve for this".

use log::debug;
use ordered_float::OrderedFloat;
use std::str::FromStr;

/// One identifier and the number written next to it, if any.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub key: String,
    pub value: Option<OrderedFloat<f64>>,
}

impl Assignment {
    pub fn value(&self) -> Option<f64> {
        self.value.map(|v| v.0)
    }
}

/// Ordered identifier → value mapping produced by [tokenize].
///
/// Assigning a key twice keeps its first position and the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignments {
    entries: Vec<Assignment>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<f64>) {
        let key = key.into();
        let value = value.map(OrderedFloat::from);
        match self.entries.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Assignment { key, value }),
        }
    }

    /// `None` if the key never appeared; `Some(None)` for a bare identifier.
    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|a| a.key == key)
            .map(Assignment::value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.entries.iter()
    }
}

impl IntoIterator for Assignments {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Key,
    Value,
}

/// Character scanner behind [tokenize].
pub struct Lexer<'input> {
    input: &'input str,
    state: State,
    current: String,
    /// Identifier closed by a following digit; receives the literal being read.
    pending_key: Option<String>,
    /// Literal closed by a following letter; goes to the identifier being read.
    pending_value: Option<f64>,
    out: Assignments,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

fn is_num_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer {
            input,
            state: State::Idle,
            current: String::new(),
            pending_key: None,
            pending_value: None,
            out: Assignments::new(),
        }
    }

    /// Scan the whole input and return the assignments in order of appearance.
    pub fn run(mut self) -> Assignments {
        for c in self.input.chars() {
            self.feed(c.to_ascii_lowercase());
        }
        self.commit();
        self.out
    }

    fn feed(&mut self, c: char) {
        if c.is_whitespace() {
            self.commit();
            return;
        }
        match self.state {
            State::Idle if is_num_char(c) => {
                self.state = State::Value;
                self.current.push(c);
            }
            State::Idle if is_ident_char(c) => {
                self.state = State::Key;
                self.current.push(c);
            }
            State::Value if is_ident_char(c) => {
                let literal = std::mem::take(&mut self.current);
                self.pending_value = parse_literal(&literal);
                self.state = State::Key;
                self.current.push(c);
            }
            State::Key if is_num_char(c) => {
                self.pending_key = Some(std::mem::take(&mut self.current));
                self.state = State::Value;
                self.current.push(c);
            }
            State::Key if is_ident_char(c) => self.current.push(c),
            State::Value if is_num_char(c) => self.current.push(c),
            _ => {}
        }
    }

    /// Flush the pending pair, if complete, and return to idle.
    fn commit(&mut self) {
        let current = std::mem::take(&mut self.current);
        match self.state {
            State::Value => match (self.pending_key.take(), parse_literal(&current)) {
                (Some(key), Some(value)) => self.out.insert(key, Some(value)),
                (key, _) => debug!("discarding incomplete fragment {key:?} {current:?}"),
            },
            State::Key => self.out.insert(current, self.pending_value),
            State::Idle => {}
        }
        self.state = State::Idle;
        self.pending_key = None;
        self.pending_value = None;
    }
}

fn parse_literal(literal: &str) -> Option<f64> {
    match f64::from_str(literal) {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("invalid numeric literal: {literal:?}");
            None
        }
    }
}

/// Tokenize one line of free text (case-insensitive).
pub fn tokenize(input: &str) -> Assignments {
    Lexer::new(input).run()
}
