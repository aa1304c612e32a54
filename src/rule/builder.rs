//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use crate::rule::RuleSet;
use crate::symbol::Symbol;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Symbol,
    epsilon: Symbol,
    rules: &'a mut RuleSet,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder. Empty alternatives are stored as `lhs -> epsilon`.
    pub fn new(rules: &'a mut RuleSet, lhs: Symbol, epsilon: Symbol) -> Self {
        RuleBuilder {
            lhs,
            epsilon,
            rules,
        }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar.
    pub fn rhs<Sr>(self, syms: Sr) -> Self
    where
        Sr: AsRef<[Symbol]>,
    {
        let rhs = if syms.as_ref().is_empty() {
            vec![self.epsilon]
        } else {
            syms.as_ref().to_vec()
        };
        self.rules.add_rule(self.lhs, rhs);
        self
    }
}
