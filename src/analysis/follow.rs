//! FOLLOW sets.

use log::{debug, trace};

use crate::analysis::first::FirstSets;
use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::set::pair_mut;
use crate::symbol::{Symbol, SymbolBitSet, SymbolSet, SymbolTable};

/// FOLLOW sets of every non-terminal, indexed by symbol ID.
#[derive(Clone, Debug)]
pub struct FollowSets<S = SymbolBitSet> {
    sets: Vec<S>,
    passes: usize,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar as bit sets.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        Self::compute(grammar, first_sets)
    }
}

impl<S> FollowSets<S>
where
    S: SymbolSet,
{
    /// Compute all FOLLOW sets of the grammar. Requires finished FIRST sets.
    ///
    /// FOLLOW of the start symbol is seeded with the end of input. Then, for every rule
    /// `A ⸬= s1 ... sn`, until a pass changes nothing:
    ///
    /// * if `sn` is a non-terminal, FOLLOW(A) flows into FOLLOW(sn);
    /// * for every adjacent pair where `s(j-1)` is a non-terminal, FIRST(sj) without epsilon
    ///   flows into FOLLOW(s(j-1));
    /// * for every interior non-terminal `si`, `1 < i < n`, whose suffix `s(i+1) ... sn` is
    ///   nullable, FOLLOW(A) flows into FOLLOW(si), and so does FIRST(sj) without epsilon for
    ///   every `j` in `i+2 ..= n`.
    pub fn compute(grammar: &Grammar, first_sets: &FirstSets<S>) -> Self {
        let symbols = grammar.symbols();
        let num_syms = grammar.num_syms();
        let mut this = FollowSets {
            sets: vec![S::empty(num_syms); symbols.num_nonterminals()],
            passes: 0,
        };

        if let Some(start) = grammar.start() {
            this.sets[start.usize()].insert(grammar.eof());
        }

        let mut changed = true;
        while changed {
            changed = false;
            this.passes += 1;
            for rule in grammar.rules() {
                let rule_changed = this.process_rule(symbols, first_sets, rule);
                if rule_changed {
                    trace!(
                        "pass {}: FOLLOW sets grew from a rule of {}",
                        this.passes,
                        symbols.name(rule.lhs)
                    );
                }
                changed |= rule_changed;
            }
        }
        debug!("FOLLOW sets settled after {} passes", this.passes);

        this
    }

    fn process_rule(
        &mut self,
        symbols: &SymbolTable,
        first_sets: &FirstSets<S>,
        rule: &Rule,
    ) -> bool {
        let algebra = first_sets.algebra();
        let (lhs, rhs) = (rule.lhs, &rule.rhs[..]);
        let n = rhs.len();
        let mut changed = false;

        // End of the production.
        if let Some(last) = rule.last() {
            if symbols.is_nonterminal(last) {
                changed |= self.union_follow(last, lhs);
            }
        }

        // Adjacent pairs.
        for j in 1..n {
            if symbols.is_nonterminal(rhs[j - 1]) {
                changed |= algebra.union_minus_epsilon(
                    &mut self.sets[rhs[j - 1].usize()],
                    first_sets.first(rhs[j]),
                );
            }
        }

        // Interior symbols followed by a nullable suffix.
        for i in 1..n.saturating_sub(1) {
            let sym = rhs[i];
            if !symbols.is_nonterminal(sym) {
                continue;
            }
            let nullable_suffix = rhs[i + 1..].iter().all(|&s| first_sets.is_nullable(s));
            if nullable_suffix {
                changed |= self.union_follow(sym, lhs);
                for &later in &rhs[i + 2..] {
                    changed |= algebra
                        .union_minus_epsilon(&mut self.sets[sym.usize()], first_sets.first(later));
                }
            }
        }

        changed
    }

    /// `FOLLOW(dst) <- FOLLOW(dst) ∪ FOLLOW(src)`
    fn union_follow(&mut self, dst: Symbol, src: Symbol) -> bool {
        match pair_mut(&mut self.sets, dst.usize(), src.usize()) {
            Some((follow_dst, follow_src)) => follow_dst.union(follow_src),
            None => false,
        }
    }

    /// Returns the FOLLOW set of a non-terminal.
    ///
    /// # Panics
    ///
    /// Panics if `sym` is not a non-terminal.
    pub fn follow(&self, sym: Symbol) -> &S {
        &self.sets[sym.usize()]
    }

    /// Returns all FOLLOW sets, indexed by non-terminal ID.
    pub fn sets(&self) -> &[S] {
        &self.sets
    }

    /// Number of passes taken, including the final one that changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }
}
