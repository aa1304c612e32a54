#![allow(dead_code)]

use cfg_sets::{Grammar, Symbol, SymbolSet};

/// `S -> A B`, `A -> a | epsilon`, `B -> b`.
pub const SIMPLE: &str = "
S A B #
S -> A B #
A -> a #
A -> #
B -> b #
##
";

/// Indirect left recursion through a nullable non-terminal.
pub const LEFT_RECURSIVE: &str = "
A B #
A -> B a #
B -> A b #
B -> #
##
";

/// Arithmetic expressions without left recursion.
pub const EXPRESSION: &str = "
E Ep T Tp F #
E -> T Ep #
Ep -> plus T Ep #
Ep -> #
T -> F Tp #
Tp -> star F Tp #
Tp -> #
F -> lparen E rparen #
F -> id #
##
";

/// A non-terminal followed by a run of nullable non-terminals.
pub const NULLABLE_TAIL: &str = "
S A B C #
S -> x A B C #
A -> a #
B -> b #
B -> #
C -> c #
C -> #
##
";

/// Cycles of nullable non-terminals and a useless non-terminal.
pub const NULLABLE_CYCLE: &str = "
S A B U #
S -> A B #
A -> B #
A -> #
B -> A #
B -> b A #
U -> U u #
##
";

pub const ALL: [&str; 5] = [SIMPLE, LEFT_RECURSIVE, EXPRESSION, NULLABLE_TAIL, NULLABLE_CYCLE];

pub fn load(text: &str) -> Grammar {
    Grammar::load(text).expect("test grammar should load")
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .symbols()
        .lookup(name)
        .unwrap_or_else(|| panic!("no symbol named {}", name))
}

/// Names of the set's members, sorted.
pub fn names<S: SymbolSet>(grammar: &Grammar, set: &S) -> Vec<String> {
    let mut names: Vec<String> = set
        .symbols()
        .into_iter()
        .map(|sym| grammar.symbols().name(sym).to_string())
        .collect();
    names.sort();
    names
}

/// The same grammar with its rules in reverse order.
pub fn reversed(grammar: &Grammar) -> Grammar {
    grammar.with_rules(grammar.rules().iter().rev().cloned().collect())
}

/// The same grammar with its rules rotated left by `n`.
pub fn rotated(grammar: &Grammar, n: usize) -> Grammar {
    let mut rules: Vec<_> = grammar.rules().iter().cloned().collect();
    if !rules.is_empty() {
        let len = rules.len();
        rules.rotate_left(n % len);
    }
    grammar.with_rules(rules.into_iter().collect())
}
