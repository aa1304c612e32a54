//! Analysis of symbol usefulness. Useful non-terminals are both reachable from the start symbol
//! and productive. Useless ones are only reported; every solver handles them as-is.

use bit_matrix::BitMatrix;
use bit_vec::BitVec;
use log::debug;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// Contains the information about usefulness of the grammar's non-terminals.
pub struct Usefulness {
    reachability: BitMatrix,
    reachable_syms: BitVec,
    productivity: BitVec,
    num_nonterminals: usize,
}

/// A useless non-terminal, together with the reason for its uselessness.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UselessSymbol {
    pub sym: Symbol,
    /// Indicates whether the symbol is unreachable from the start symbol.
    pub unreachable: bool,
    /// Indicates whether the symbol derives no string of terminals.
    pub unproductive: bool,
}

/// Returns the set of productive symbols. Terminals and epsilon are productive.
fn productive_syms(grammar: &Grammar) -> BitVec {
    let symbols = grammar.symbols();
    let mut productivity = BitVec::from_elem(grammar.num_syms(), false);
    productivity.set(grammar.epsilon().usize(), true);
    for terminal in symbols.terminals() {
        productivity.set(terminal.usize(), true);
    }

    let mut changed = true;
    while changed {
        changed = false;
        for rule in grammar.rules() {
            if !productivity[rule.lhs.usize()]
                && rule.rhs.iter().all(|sym| productivity[sym.usize()])
            {
                productivity.set(rule.lhs.usize(), true);
                changed = true;
            }
        }
    }
    productivity
}

/// Returns the reachability matrix.
fn reachability(grammar: &Grammar) -> BitMatrix {
    let num_syms = grammar.num_syms();
    let mut reachability = BitMatrix::new(num_syms, num_syms);

    for rule in grammar.rules() {
        reachability.set(rule.lhs.usize(), rule.lhs.usize(), true);
        for &sym in &rule.rhs {
            reachability.set(rule.lhs.usize(), sym.usize(), true);
        }
    }

    reachability.transitive_closure();

    reachability
}

impl Usefulness {
    /// Analyzes usefulness of the grammar's non-terminals.
    pub fn new(grammar: &Grammar) -> Self {
        let productivity = productive_syms(grammar);
        let reachability = reachability(grammar);
        let mut reachable_syms = BitVec::from_elem(grammar.num_syms(), false);
        if let Some(start) = grammar.start() {
            reachable_syms.set(start.usize(), true);
            for sym in grammar.symbols().symbols() {
                if reachability[(start.usize(), sym.usize())] {
                    reachable_syms.set(sym.usize(), true);
                }
            }
        }

        let usefulness = Usefulness {
            reachability,
            reachable_syms,
            productivity,
            num_nonterminals: grammar.symbols().num_nonterminals(),
        };
        debug!(
            "{} of {} non-terminals are useless",
            usefulness.useless_symbols().len(),
            usefulness.num_nonterminals
        );
        usefulness
    }

    /// Checks whether a symbol is productive.
    pub fn is_productive(&self, sym: Symbol) -> bool {
        self.productivity[sym.usize()]
    }

    /// Checks whether a symbol is reachable from the start symbol.
    pub fn is_reachable(&self, sym: Symbol) -> bool {
        self.reachable_syms[sym.usize()]
    }

    /// Checks whether `to` appears in some derivation from `from`.
    pub fn reaches(&self, from: Symbol, to: Symbol) -> bool {
        self.reachability[(from.usize(), to.usize())]
    }

    /// Returns useless non-terminals in declaration order.
    pub fn useless_symbols(&self) -> Vec<UselessSymbol> {
        (0..self.num_nonterminals)
            .map(Symbol::from)
            .filter_map(|sym| {
                let unreachable = !self.is_reachable(sym);
                let unproductive = !self.is_productive(sym);
                if unreachable || unproductive {
                    Some(UselessSymbol {
                        sym,
                        unreachable,
                        unproductive,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Checks whether all non-terminals are useful.
    pub fn all_useful(&self) -> bool {
        self.useless_symbols().is_empty()
    }
}
