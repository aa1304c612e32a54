//! Presentation of analysis results. Set members are sorted by name here and nowhere else.

use itertools::Itertools;

use crate::analysis::{Derivability, FirstSets, FollowSets, UselessSymbol};
use crate::grammar::Grammar;
use crate::symbol::{SymbolSet, SymbolTable};

/// Formats a set as `{ a, b, c }` with members sorted lexicographically by name.
pub fn format_set<S: SymbolSet>(symbols: &SymbolTable, set: &S) -> String {
    let members = set
        .symbols()
        .into_iter()
        .map(|sym| symbols.name(sym))
        .sorted()
        .join(", ");
    format!("{{ {} }}", members)
}

/// Joins report lines, each terminated by a newline.
fn lines<I>(lines: I) -> String
where
    I: Iterator<Item = String>,
{
    lines.map(|line| line + "\n").collect()
}

/// `NAME: YES` or `NAME: NO` for every non-terminal, in declaration order.
pub fn one_token_report(grammar: &Grammar, derivability: &Derivability) -> String {
    let symbols = grammar.symbols();
    lines(symbols.nonterminals().map(|nt| {
        let answer = if derivability.derives_one_token(nt) {
            "YES"
        } else {
            "NO"
        };
        format!("{}: {}", symbols.name(nt), answer)
    }))
}

/// `FIRST(NAME) = { ... }` for every non-terminal, in declaration order.
pub fn first_report<S: SymbolSet>(grammar: &Grammar, first_sets: &FirstSets<S>) -> String {
    let symbols = grammar.symbols();
    lines(symbols.nonterminals().map(|nt| {
        format!(
            "FIRST({}) = {}",
            symbols.name(nt),
            format_set(symbols, first_sets.first(nt))
        )
    }))
}

/// `FOLLOW(NAME) = { ... }` for every non-terminal, in declaration order.
pub fn follow_report<S: SymbolSet>(grammar: &Grammar, follow_sets: &FollowSets<S>) -> String {
    let symbols = grammar.symbols();
    lines(symbols.nonterminals().map(|nt| {
        format!(
            "FOLLOW({}) = {}",
            symbols.name(nt),
            format_set(symbols, follow_sets.follow(nt))
        )
    }))
}

/// One line per useless non-terminal, naming the reasons.
pub fn useless_report(grammar: &Grammar, useless: &[UselessSymbol]) -> String {
    let symbols = grammar.symbols();
    lines(useless.iter().map(|entry| {
        let reasons = [
            (entry.unreachable, "unreachable"),
            (entry.unproductive, "unproductive"),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, reason)| reason)
        .join(", ");
        format!("{}: {}", symbols.name(entry.sym), reasons)
    }))
}
