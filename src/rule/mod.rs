//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single non-terminal on its left-hand side and a non-empty
//! array of symbols on its right-hand side. A rule deriving the empty string
//! has the epsilon symbol as its only right-hand symbol.

pub mod builder;

use std::iter::FromIterator;
use std::slice;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

pub use self::builder::RuleBuilder;

/// Typical grammar rule representation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rule {
    /// The rule's left-hand side.
    pub lhs: Symbol,
    /// The rule's right-hand side.
    pub rhs: Vec<Symbol>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Rule { lhs, rhs }
    }

    /// Returns the last symbol of the right-hand side.
    pub fn last(&self) -> Option<Symbol> {
        self.rhs.last().copied()
    }
}

/// An ordered list of rules. Every solver iterates it in insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. The caller guarantees that `lhs` is a non-terminal.
    pub fn add_rule(&mut self, lhs: Symbol, rhs: Vec<Symbol>) {
        debug_assert!(!rhs.is_empty(), "a rule needs at least one RHS symbol");
        self.rules.push(Rule::new(lhs, rhs));
    }

    /// Iterates over rules in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleSet {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
