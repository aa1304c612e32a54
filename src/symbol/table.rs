//! The ordered universe of grammar symbols.
//!
//! The layout is fixed:
//!
//! ```text
//!  ________________________________________________
//! | N0 | N1 | ... | Nk-1 | # | $ | T0 | ... | Tm-1 |
//!  ------------------------------------------------
//! ```
//!
//! Non-terminals come first, in declaration order. Epsilon sits at `k`, the end of input at
//! `k + 1`, and terminals follow in the order they were first encountered.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use super::{Symbol, SymbolKind};

/// The name of the epsilon symbol.
pub const EPSILON_NAME: &str = "#";
/// The name of the end of input symbol.
pub const EOF_NAME: &str = "$";

/// Failure to register a symbol.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SymbolError {
    /// The name is already taken by a symbol of any category.
    Duplicate(String),
    /// A non-terminal was declared after the first terminal or rule.
    LayoutSealed(String),
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolError::Duplicate(name) => write!(f, "symbol `{}` is already defined", name),
            SymbolError::LayoutSealed(name) => write!(
                f,
                "non-terminal `{}` declared after terminals or rules were added",
                name
            ),
        }
    }
}

impl Error for SymbolError {}

/// Owns symbol names and categories. Append-only.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SymbolTable {
    nonterminals: Vec<String>,
    terminals: Vec<String>,
    by_name: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates a table holding only epsilon and the end of input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a symbol by name.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        match name {
            EPSILON_NAME => Some(self.epsilon()),
            EOF_NAME => Some(self.eof()),
            _ => self.by_name.get(name).copied(),
        }
    }

    /// Registers the next non-terminal.
    pub fn insert_nonterminal(&mut self, name: &str) -> Result<Symbol, SymbolError> {
        if self.lookup(name).is_some() {
            return Err(SymbolError::Duplicate(name.to_string()));
        }
        if !self.terminals.is_empty() {
            return Err(SymbolError::LayoutSealed(name.to_string()));
        }
        let sym = Symbol::from(self.nonterminals.len());
        self.nonterminals.push(name.to_string());
        self.by_name.insert(name.to_string(), sym);
        Ok(sym)
    }

    /// Registers the next terminal.
    pub fn insert_terminal(&mut self, name: &str) -> Result<Symbol, SymbolError> {
        if self.lookup(name).is_some() {
            return Err(SymbolError::Duplicate(name.to_string()));
        }
        let sym = Symbol::from(self.num_nonterminals() + 2 + self.terminals.len());
        self.terminals.push(name.to_string());
        self.by_name.insert(name.to_string(), sym);
        Ok(sym)
    }

    /// Returns the symbol's category.
    pub fn kind(&self, sym: Symbol) -> SymbolKind {
        let k = self.num_nonterminals();
        let id = sym.usize();
        debug_assert!(id < self.num_syms(), "symbol {} out of range", id);
        if id < k {
            SymbolKind::Nonterminal
        } else if id == k {
            SymbolKind::Epsilon
        } else if id == k + 1 {
            SymbolKind::Eof
        } else {
            SymbolKind::Terminal
        }
    }

    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.kind(sym) == SymbolKind::Nonterminal
    }

    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.kind(sym) == SymbolKind::Terminal
    }

    /// Returns the symbol's name.
    pub fn name(&self, sym: Symbol) -> &str {
        let k = self.num_nonterminals();
        match self.kind(sym) {
            SymbolKind::Nonterminal => &self.nonterminals[sym.usize()],
            SymbolKind::Epsilon => EPSILON_NAME,
            SymbolKind::Eof => EOF_NAME,
            SymbolKind::Terminal => &self.terminals[sym.usize() - k - 2],
        }
    }

    pub fn epsilon(&self) -> Symbol {
        Symbol::from(self.num_nonterminals())
    }

    pub fn eof(&self) -> Symbol {
        Symbol::from(self.num_nonterminals() + 1)
    }

    /// The start symbol is the first declared non-terminal.
    pub fn start(&self) -> Option<Symbol> {
        if self.nonterminals.is_empty() {
            None
        } else {
            Some(Symbol::from(0usize))
        }
    }

    pub fn num_nonterminals(&self) -> usize {
        self.nonterminals.len()
    }

    pub fn num_terminals(&self) -> usize {
        self.terminals.len()
    }

    /// Returns the number of symbols in use, including epsilon and the end of input.
    pub fn num_syms(&self) -> usize {
        self.nonterminals.len() + 2 + self.terminals.len()
    }

    /// Iterates over non-terminals in declaration order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> {
        (0..self.num_nonterminals()).map(Symbol::from)
    }

    /// Iterates over terminals in order of appearance.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> {
        let first = self.num_nonterminals() + 2;
        (first..first + self.num_terminals()).map(Symbol::from)
    }

    /// Iterates over every symbol in layout order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> {
        (0..self.num_syms()).map(Symbol::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let mut table = SymbolTable::new();
        let s = table.insert_nonterminal("S").unwrap();
        let a = table.insert_nonterminal("A").unwrap();
        let x = table.insert_terminal("x").unwrap();
        let y = table.insert_terminal("y").unwrap();

        assert_eq!(s.usize(), 0);
        assert_eq!(a.usize(), 1);
        assert_eq!(table.epsilon().usize(), 2);
        assert_eq!(table.eof().usize(), 3);
        assert_eq!(x.usize(), 4);
        assert_eq!(y.usize(), 5);
        assert_eq!(table.num_syms(), 6);

        assert_eq!(table.kind(a), SymbolKind::Nonterminal);
        assert_eq!(table.kind(table.epsilon()), SymbolKind::Epsilon);
        assert_eq!(table.kind(table.eof()), SymbolKind::Eof);
        assert_eq!(table.kind(y), SymbolKind::Terminal);
        assert_eq!(table.name(y), "y");
        assert_eq!(table.name(table.epsilon()), "#");
        assert_eq!(table.start(), Some(s));
    }

    #[test]
    fn test_lookup() {
        let mut table = SymbolTable::new();
        let s = table.insert_nonterminal("S").unwrap();
        let x = table.insert_terminal("x").unwrap();

        assert_eq!(table.lookup("S"), Some(s));
        assert_eq!(table.lookup("x"), Some(x));
        assert_eq!(table.lookup("#"), Some(table.epsilon()));
        assert_eq!(table.lookup("$"), Some(table.eof()));
        assert_eq!(table.lookup("z"), None);
    }

    #[test]
    fn test_duplicates() {
        let mut table = SymbolTable::new();
        table.insert_nonterminal("S").unwrap();
        assert_eq!(
            table.insert_nonterminal("S"),
            Err(SymbolError::Duplicate("S".to_string()))
        );
        assert_eq!(
            table.insert_terminal("S"),
            Err(SymbolError::Duplicate("S".to_string()))
        );
        assert_eq!(
            table.insert_terminal("#"),
            Err(SymbolError::Duplicate("#".to_string()))
        );
    }

    #[test]
    fn test_sealed_after_terminal() {
        let mut table = SymbolTable::new();
        table.insert_nonterminal("S").unwrap();
        table.insert_terminal("x").unwrap();
        assert_eq!(
            table.insert_nonterminal("A"),
            Err(SymbolError::LayoutSealed("A".to_string()))
        );
        assert_eq!(table.lookup("x").map(Symbol::usize), Some(3));
    }
}
