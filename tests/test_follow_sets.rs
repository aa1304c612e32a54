mod support;

use std::collections::BTreeSet;

use cfg_sets::{FirstSets, FollowSets, Grammar, Symbol, SymbolSet};
use test_case::test_case;

fn follow_sets(grammar: &Grammar) -> FollowSets {
    let first_sets = FirstSets::new(grammar);
    FollowSets::new(grammar, &first_sets)
}

fn follow_names(grammar: &Grammar, follow_sets: &FollowSets, name: &str) -> Vec<String> {
    support::names(grammar, follow_sets.follow(support::sym(grammar, name)))
}

#[test]
fn test_simple_follow_sets() {
    let grammar = support::load(support::SIMPLE);
    let follow_sets = follow_sets(&grammar);

    assert_eq!(follow_names(&grammar, &follow_sets, "S"), vec!["$"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "A"), vec!["b"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "B"), vec!["$"]);
}

#[test]
fn test_expression_follow_sets() {
    let grammar = support::load(support::EXPRESSION);
    let follow_sets = follow_sets(&grammar);

    for name in ["E", "Ep"] {
        assert_eq!(follow_names(&grammar, &follow_sets, name), vec!["$", "rparen"]);
    }
    for name in ["T", "Tp"] {
        assert_eq!(
            follow_names(&grammar, &follow_sets, name),
            vec!["$", "plus", "rparen"]
        );
    }
    assert_eq!(
        follow_names(&grammar, &follow_sets, "F"),
        vec!["$", "plus", "rparen", "star"]
    );
}

#[test]
fn test_left_recursive_follow_sets() {
    let grammar = support::load(support::LEFT_RECURSIVE);
    let follow_sets = follow_sets(&grammar);

    assert_eq!(follow_names(&grammar, &follow_sets, "A"), vec!["$", "b"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "B"), vec!["a"]);
}

#[test]
fn test_nullable_suffix_propagation() {
    let grammar = support::load(support::NULLABLE_TAIL);
    let follow_sets = follow_sets(&grammar);

    assert_eq!(follow_names(&grammar, &follow_sets, "S"), vec!["$"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "A"), vec!["$", "b", "c"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "B"), vec!["$", "c"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "C"), vec!["$"]);
}

#[test]
fn test_nullable_cycle_follow_sets() {
    let grammar = support::load(support::NULLABLE_CYCLE);
    let follow_sets = follow_sets(&grammar);

    assert_eq!(follow_names(&grammar, &follow_sets, "S"), vec!["$"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "A"), vec!["$", "b"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "B"), vec!["$", "b"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "U"), vec!["u"]);
}

#[test]
fn test_leading_symbol_gets_only_its_neighbour() {
    // The suffix rule covers interior positions only. The leading `A` learns FIRST(B)
    // from the adjacent pair but not FOLLOW(S).
    let grammar = support::load("S A B #  S -> A B #  A -> a #  B -> b #  B -> #  ##");
    let follow_sets = follow_sets(&grammar);

    assert_eq!(follow_names(&grammar, &follow_sets, "A"), vec!["b"]);
    assert_eq!(follow_names(&grammar, &follow_sets, "B"), vec!["$"]);
}

#[test]
fn test_nullable_middle_skipped() {
    let grammar = support::load("S A B C #  S -> y A B C #  A -> a #  B -> #  C -> c #  C -> #  ##");
    let follow_sets = follow_sets(&grammar);

    assert_eq!(follow_names(&grammar, &follow_sets, "A"), vec!["$", "c"]);
}

#[test_case(support::SIMPLE ; "simple")]
#[test_case(support::LEFT_RECURSIVE ; "left recursive")]
#[test_case(support::EXPRESSION ; "expression")]
#[test_case(support::NULLABLE_TAIL ; "nullable tail")]
#[test_case(support::NULLABLE_CYCLE ; "nullable cycle")]
fn test_follow_closure_laws(text: &str) {
    let grammar = support::load(text);
    let follow_sets = follow_sets(&grammar);

    assert_eq!(follow_sets.sets().len(), grammar.symbols().num_nonterminals());
    for set in follow_sets.sets() {
        assert!(!set.contains(grammar.epsilon()));
        for sym in set.symbols() {
            assert!(sym == grammar.eof() || grammar.symbols().is_terminal(sym));
        }
    }
    let start = grammar.start().expect("test grammars are not empty");
    assert!(follow_sets.follow(start).contains(grammar.eof()));
}

#[test_case(support::SIMPLE ; "simple")]
#[test_case(support::EXPRESSION ; "expression")]
#[test_case(support::NULLABLE_TAIL ; "nullable tail")]
#[test_case(support::NULLABLE_CYCLE ; "nullable cycle")]
fn test_set_representations_agree(text: &str) {
    let grammar = support::load(text);
    let bit_sets = follow_sets(&grammar);
    let tree_first = FirstSets::<BTreeSet<Symbol>>::compute(&grammar);
    let tree_sets = FollowSets::compute(&grammar, &tree_first);
    for nt in grammar.symbols().nonterminals() {
        assert_eq!(bit_sets.follow(nt).symbols(), tree_sets.follow(nt).symbols());
    }
}

#[test]
fn test_empty_grammar() {
    let grammar = support::load("##");
    let follow_sets = follow_sets(&grammar);
    assert!(follow_sets.sets().is_empty());
}
