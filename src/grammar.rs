//! Definitions of the grammar type: a symbol table together with a list of rules.

use std::fmt;

use itertools::Itertools;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::rule::{RuleBuilder, RuleSet};
use crate::symbol::{SetAlgebra, Symbol, SymbolError, SymbolTable};

/// Context-free grammar type.
///
/// Built once, by the loader or through `rule`, and read-only to every solver afterwards.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Grammar {
    symbols: SymbolTable,
    rules: RuleSet,
}

impl Grammar {
    /// Creates an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the same symbols with a different rule list.
    pub fn with_rules(&self, rules: RuleSet) -> Self {
        Grammar {
            symbols: self.symbols.clone(),
            rules,
        }
    }

    /// Declares a non-terminal. Fails once any rule exists, since rules hold the epsilon ID.
    pub fn nonterminal(&mut self, name: &str) -> Result<Symbol, SymbolError> {
        if !self.rules.is_empty() {
            return Err(SymbolError::LayoutSealed(name.to_string()));
        }
        self.symbols.insert_nonterminal(name)
    }

    /// Declares several non-terminals at once.
    pub fn nonterminals<const N: usize>(
        &mut self,
        names: [&str; N],
    ) -> Result<[Symbol; N], SymbolError> {
        let mut result = [Symbol::default(); N];
        for (dest, name) in result.iter_mut().zip(names) {
            *dest = self.nonterminal(name)?;
        }
        Ok(result)
    }

    /// Registers a terminal.
    pub fn terminal(&mut self, name: &str) -> Result<Symbol, SymbolError> {
        self.symbols.insert_terminal(name)
    }

    /// Registers several terminals at once.
    pub fn terminals<const N: usize>(
        &mut self,
        names: [&str; N],
    ) -> Result<[Symbol; N], SymbolError> {
        let mut result = [Symbol::default(); N];
        for (dest, name) in result.iter_mut().zip(names) {
            *dest = self.terminal(name)?;
        }
        Ok(result)
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        let epsilon = self.symbols.epsilon();
        RuleBuilder::new(&mut self.rules, lhs, epsilon)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub(crate) fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    pub fn start(&self) -> Option<Symbol> {
        self.symbols.start()
    }

    pub fn epsilon(&self) -> Symbol {
        self.symbols.epsilon()
    }

    pub fn eof(&self) -> Symbol {
        self.symbols.eof()
    }

    pub fn num_syms(&self) -> usize {
        self.symbols.num_syms()
    }

    /// Returns set primitives bound to this grammar's epsilon.
    pub fn set_algebra(&self) -> SetAlgebra {
        SetAlgebra::new(self.epsilon())
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = |syms: &mut dyn Iterator<Item = Symbol>| {
            syms.map(|sym| self.symbols.name(sym)).join(" ")
        };
        writeln!(f, "Non-terminals: {}", names(&mut self.symbols.nonterminals()))?;
        writeln!(f, "Terminals: {}", names(&mut self.symbols.terminals()))?;
        for rule in &self.rules {
            writeln!(
                f,
                "{} -> {}",
                self.symbols.name(rule.lhs),
                names(&mut rule.rhs.iter().copied())
            )?;
        }
        Ok(())
    }
}
