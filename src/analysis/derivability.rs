//! Which symbols derive the empty string, and which derive a string of exactly one terminal.

use bit_vec::BitVec;
use log::{debug, trace};

use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolTable};

/// Derivability facts for every symbol.
#[derive(Clone, Debug)]
pub struct Derivability {
    derives_empty: BitVec,
    derives_one_token: BitVec,
    empty_passes: usize,
    one_token_passes: usize,
}

impl Derivability {
    /// Runs both fixed points. One-token derivability relies on the finished nullable set.
    pub fn new(grammar: &Grammar) -> Self {
        let num_syms = grammar.num_syms();
        let mut derives_empty = BitVec::from_elem(num_syms, false);
        derives_empty.set(grammar.epsilon().usize(), true);
        let mut derives_one_token = BitVec::from_elem(num_syms, false);

        let empty_passes = nullable_fixpoint(grammar, &mut derives_empty);
        let one_token_passes = one_token_fixpoint(grammar, &derives_empty, &mut derives_one_token);

        Derivability {
            derives_empty,
            derives_one_token,
            empty_passes,
            one_token_passes,
        }
    }

    /// Checks whether a symbol derives the empty string. True for epsilon itself.
    pub fn derives_empty(&self, sym: Symbol) -> bool {
        self.derives_empty[sym.usize()]
    }

    /// Checks whether a non-terminal derives some string of exactly one terminal.
    /// Always false for symbols other than non-terminals.
    pub fn derives_one_token(&self, sym: Symbol) -> bool {
        self.derives_one_token[sym.usize()]
    }

    /// Number of passes taken by the nullable fixed point, including the final one.
    pub fn empty_passes(&self) -> usize {
        self.empty_passes
    }

    /// Number of passes taken by the one-token fixed point, including the final one.
    pub fn one_token_passes(&self) -> usize {
        self.one_token_passes
    }
}

fn nullable_fixpoint(grammar: &Grammar, derives_empty: &mut BitVec) -> usize {
    let epsilon = grammar.epsilon();
    let mut passes = 0;
    let mut changed = true;
    while changed {
        changed = false;
        passes += 1;
        for rule in grammar.rules() {
            if derives_empty[rule.lhs.usize()] {
                continue;
            }
            let nullable = rule.rhs[..] == [epsilon]
                || rule.rhs.iter().all(|sym| derives_empty[sym.usize()]);
            if nullable {
                trace!(
                    "pass {}: {} derives the empty string",
                    passes,
                    grammar.symbols().name(rule.lhs)
                );
                derives_empty.set(rule.lhs.usize(), true);
                changed = true;
            }
        }
    }
    debug!("nullable symbols settled after {} passes", passes);
    passes
}

fn one_token_fixpoint(
    grammar: &Grammar,
    derives_empty: &BitVec,
    derives_one_token: &mut BitVec,
) -> usize {
    let symbols = grammar.symbols();
    let mut passes = 0;
    let mut changed = true;
    while changed {
        changed = false;
        passes += 1;
        for rule in grammar.rules() {
            if derives_one_token[rule.lhs.usize()] {
                continue;
            }
            if yields_one_token(symbols, rule, derives_empty, derives_one_token) {
                trace!("pass {}: {} derives one token", passes, symbols.name(rule.lhs));
                derives_one_token.set(rule.lhs.usize(), true);
                changed = true;
            }
        }
    }
    debug!("one-token symbols settled after {} passes", passes);
    passes
}

/// A rule yields one token if some position contributes exactly one token while
/// every other position can vanish. Positions are tried left to right.
fn yields_one_token(
    symbols: &SymbolTable,
    rule: &Rule,
    derives_empty: &BitVec,
    derives_one_token: &BitVec,
) -> bool {
    let contributes = |sym: Symbol| {
        symbols.is_terminal(sym)
            || (symbols.is_nonterminal(sym) && derives_one_token[sym.usize()])
    };
    if let [sym] = rule.rhs.as_slice() {
        return contributes(*sym);
    }
    (0..rule.rhs.len()).any(|j| {
        contributes(rule.rhs[j])
            && rule
                .rhs
                .iter()
                .enumerate()
                .all(|(i, sym)| i == j || derives_empty[sym.usize()])
    })
}
