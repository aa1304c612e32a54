//! FIRST sets.

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::symbol::set::pair_mut;
use crate::symbol::{SetAlgebra, Symbol, SymbolBitSet, SymbolSet};

/// FIRST sets of every symbol, indexed by symbol ID.
#[derive(Clone, Debug)]
pub struct FirstSets<S = SymbolBitSet> {
    sets: Vec<S>,
    algebra: SetAlgebra,
    passes: usize,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar as bit sets.
    pub fn new(grammar: &Grammar) -> Self {
        Self::compute(grammar)
    }
}

impl<S> FirstSets<S>
where
    S: SymbolSet,
{
    /// Compute all FIRST sets of the grammar.
    ///
    /// FIRST of a terminal is the terminal itself and FIRST of epsilon is epsilon. For a rule
    /// `A ⸬= s1 ... sn`, FIRST(A) gains FIRST(sj) without epsilon for every `sj` up to and
    /// including the first one that is not nullable, and gains epsilon if all of `s1 ... sn`
    /// are nullable. Rules are processed until a pass changes nothing.
    pub fn compute(grammar: &Grammar) -> Self {
        let symbols = grammar.symbols();
        let num_syms = grammar.num_syms();
        let mut this = FirstSets {
            sets: vec![S::empty(num_syms); num_syms],
            algebra: grammar.set_algebra(),
            passes: 0,
        };

        let epsilon = grammar.epsilon();
        this.sets[epsilon.usize()].insert(epsilon);
        for terminal in symbols.terminals() {
            this.sets[terminal.usize()].insert(terminal);
        }

        let mut changed = true;
        while changed {
            changed = false;
            this.passes += 1;
            for rule in grammar.rules() {
                let rule_changed = this.process_rule(rule.lhs, &rule.rhs[..]);
                if rule_changed {
                    trace!(
                        "pass {}: FIRST({}) grew",
                        this.passes,
                        symbols.name(rule.lhs)
                    );
                }
                changed |= rule_changed;
            }
        }
        debug!("FIRST sets settled after {} passes", this.passes);

        this
    }

    fn process_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) -> bool {
        let algebra = self.algebra;
        let mut changed = false;
        for &sym in rhs {
            if let Some((first_lhs, first_sym)) = pair_mut(&mut self.sets, lhs.usize(), sym.usize())
            {
                changed |= algebra.union_minus_epsilon(first_lhs, first_sym);
            }
            if !algebra.has_epsilon(&self.sets[sym.usize()]) {
                break;
            }
        }
        let all_nullable = rhs
            .iter()
            .all(|sym| algebra.has_epsilon(&self.sets[sym.usize()]));
        if all_nullable {
            changed |= algebra.add_epsilon(&mut self.sets[lhs.usize()]);
        }
        changed
    }

    /// Returns the FIRST set of a symbol.
    pub fn first(&self, sym: Symbol) -> &S {
        &self.sets[sym.usize()]
    }

    /// Calculates a FIRST set for a string of symbols. The empty string yields `{epsilon}`.
    pub fn first_of_string(&self, string: &[Symbol]) -> S {
        let mut result = S::empty(self.sets.len());
        for &sym in string {
            self.algebra
                .union_minus_epsilon(&mut result, &self.sets[sym.usize()]);
            if !self.algebra.has_epsilon(&self.sets[sym.usize()]) {
                return result;
            }
        }
        self.algebra.add_epsilon(&mut result);
        result
    }

    /// Checks whether epsilon belongs to FIRST(sym).
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.algebra.has_epsilon(&self.sets[sym.usize()])
    }

    /// Returns all FIRST sets, indexed by symbol ID.
    pub fn sets(&self) -> &[S] {
        &self.sets
    }

    pub fn algebra(&self) -> SetAlgebra {
        self.algebra
    }

    /// Number of passes taken, including the final one that changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }
}
