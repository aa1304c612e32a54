//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs, which index a single ordered universe: non-terminals, epsilon, end of input, terminals.

pub mod set;
pub mod table;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

pub use self::set::{SetAlgebra, SymbolBitSet, SymbolSet};
pub use self::table::{SymbolError, SymbolTable};

type SymbolRepr = u32;

/// A grammar symbol, identified by its position in the `SymbolTable`.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Symbol(SymbolRepr);

/// The category of a symbol. Determined by its position in the layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SymbolKind {
    /// Expanded during derivation. Declared before any rule.
    Nonterminal,
    /// The empty string.
    Epsilon,
    /// The end of an input string. Appears only in FOLLOW sets.
    Eof,
    /// Registered the first time it is seen on a right-hand side.
    Terminal,
}

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}

impl From<SymbolRepr> for Symbol {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        Symbol(id)
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> usize {
        sym.0 as usize
    }
}
