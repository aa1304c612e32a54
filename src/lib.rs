//! Static analysis of context-free grammars written in simplified BNF: which non-terminals
//! derive the empty string or exactly one token, and the FIRST and FOLLOW sets used to build
//! predictive parsers.
//!
//! ```
//! use cfg_sets::{FirstSets, FollowSets, Grammar, SymbolSet};
//!
//! let grammar = Grammar::load("S A #  S -> A b #  A -> a #  A -> #  ##").unwrap();
//! let first_sets = FirstSets::new(&grammar);
//! let follow_sets = FollowSets::new(&grammar, &first_sets);
//!
//! let a = grammar.symbols().lookup("A").unwrap();
//! assert_eq!(first_sets.first(a).len(), 2);
//! assert!(follow_sets.follow(a).contains(grammar.symbols().lookup("b").unwrap()));
//! ```

#![deny(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

pub mod analysis;
mod grammar;
pub mod load;
pub mod report;
pub mod rule;
pub mod symbol;

pub use crate::analysis::{Derivability, FirstSets, FollowSets, Usefulness, UselessSymbol};
pub use crate::grammar::Grammar;
pub use crate::load::{load_grammar, LoadError, LoadErrorKind};
pub use crate::rule::{Rule, RuleSet};
pub use crate::symbol::{Symbol, SymbolBitSet, SymbolKind, SymbolSet, SymbolTable};
