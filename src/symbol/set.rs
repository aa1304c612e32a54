//! Sets of symbols and the set algebra shared by the solvers.
//!
//! Sets are indexed by absolute symbol IDs, so a FIRST set and a FOLLOW set over the same
//! grammar have the same shape. FIRST sets hold epsilon and terminals; FOLLOW sets hold the end
//! of input and terminals.

use std::collections::BTreeSet;
use std::{fmt, iter, ops};

use bit_vec::BitVec;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use super::Symbol;

/// Operations a set representation must support. Every mutating operation reports whether
/// the set gained a member.
pub trait SymbolSet: Clone + fmt::Debug {
    /// Creates an empty set over a universe of `num_syms` symbols.
    fn empty(num_syms: usize) -> Self;
    /// Checks whether a given symbol is in this set.
    fn contains(&self, sym: Symbol) -> bool;
    /// Adds a symbol.
    fn insert(&mut self, sym: Symbol) -> bool;
    /// `self <- self ∪ other`
    fn union(&mut self, other: &Self) -> bool;
    /// `self <- self ∪ (other - {excluded})`
    fn union_without(&mut self, other: &Self, excluded: Symbol) -> bool;
    /// Returns members in ascending ID order.
    fn symbols(&self) -> Vec<Symbol>;
    /// Returns the number of members.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs a `SymbolBitSet` with every entry set to `elem`.
    pub fn from_elem(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Set the entry for a symbol.
    pub fn set(&mut self, sym: Symbol, value: bool) {
        self.bit_vec.set(sym.usize(), value);
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl SymbolSet for SymbolBitSet {
    fn empty(num_syms: usize) -> Self {
        SymbolBitSet::from_elem(num_syms, false)
    }

    fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec[sym.usize()]
    }

    fn insert(&mut self, sym: Symbol) -> bool {
        if self.contains(sym) {
            false
        } else {
            self.set(sym, true);
            true
        }
    }

    fn union(&mut self, other: &Self) -> bool {
        self.bit_vec.or(&other.bit_vec)
    }

    fn union_without(&mut self, other: &Self, excluded: Symbol) -> bool {
        let mut changed = false;
        for sym in other.iter() {
            if sym != excluded {
                changed |= self.insert(sym);
            }
        }
        changed
    }

    fn symbols(&self) -> Vec<Symbol> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        self.bit_vec.iter().filter(|&bit| bit).count()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.bit_vec[index.usize()] {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl SymbolSet for BTreeSet<Symbol> {
    fn empty(_num_syms: usize) -> Self {
        BTreeSet::new()
    }

    fn contains(&self, sym: Symbol) -> bool {
        BTreeSet::contains(self, &sym)
    }

    fn insert(&mut self, sym: Symbol) -> bool {
        BTreeSet::insert(self, sym)
    }

    fn union(&mut self, other: &Self) -> bool {
        let prev_cardinality = BTreeSet::len(self);
        self.extend(other.iter().copied());
        prev_cardinality != BTreeSet::len(self)
    }

    fn union_without(&mut self, other: &Self, excluded: Symbol) -> bool {
        let prev_cardinality = BTreeSet::len(self);
        self.extend(other.iter().copied().filter(|&sym| sym != excluded));
        prev_cardinality != BTreeSet::len(self)
    }

    fn symbols(&self) -> Vec<Symbol> {
        self.iter().copied().collect()
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

/// Set primitives that depend on where epsilon lives in the symbol layout.
#[derive(Clone, Copy, Debug)]
pub struct SetAlgebra {
    epsilon: Symbol,
}

impl SetAlgebra {
    pub fn new(epsilon: Symbol) -> Self {
        SetAlgebra { epsilon }
    }

    pub fn epsilon(&self) -> Symbol {
        self.epsilon
    }

    /// `dst <- dst ∪ src`
    pub fn union<S: SymbolSet>(&self, dst: &mut S, src: &S) -> bool {
        dst.union(src)
    }

    /// `dst <- dst ∪ (src - {epsilon})`
    pub fn union_minus_epsilon<S: SymbolSet>(&self, dst: &mut S, src: &S) -> bool {
        dst.union_without(src, self.epsilon)
    }

    pub fn has_epsilon<S: SymbolSet>(&self, set: &S) -> bool {
        set.contains(self.epsilon)
    }

    /// `set <- set ∪ {epsilon}`
    pub fn add_epsilon<S: SymbolSet>(&self, set: &mut S) -> bool {
        set.insert(self.epsilon)
    }
}

/// Borrows `sets[dst]` mutably and `sets[src]` immutably. Returns `None` when they coincide,
/// since a set unioned with itself never changes.
pub fn pair_mut<S>(sets: &mut [S], dst: usize, src: usize) -> Option<(&mut S, &S)> {
    if dst < src {
        let (head, tail) = sets.split_at_mut(src);
        Some((&mut head[dst], &tail[0]))
    } else if dst > src {
        let (head, tail) = sets.split_at_mut(dst);
        Some((&mut tail[0], &head[src]))
    } else {
        None
    }
}
