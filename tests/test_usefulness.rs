mod support;

use cfg_sets::{Usefulness, UselessSymbol};

#[test]
fn test_all_useful() {
    for text in [support::SIMPLE, support::LEFT_RECURSIVE, support::EXPRESSION] {
        let grammar = support::load(text);
        let usefulness = Usefulness::new(&grammar);
        assert!(usefulness.all_useful());
        assert!(usefulness.useless_symbols().is_empty());
    }
}

#[test]
fn test_unreachable_and_unproductive() {
    let grammar = support::load(support::NULLABLE_CYCLE);
    let usefulness = Usefulness::new(&grammar);
    let [s, b, u] = ["S", "b", "U"].map(|name| support::sym(&grammar, name));

    assert!(!usefulness.all_useful());
    assert_eq!(
        usefulness.useless_symbols(),
        vec![UselessSymbol {
            sym: u,
            unreachable: true,
            unproductive: true,
        }]
    );
    assert!(usefulness.reaches(s, b));
    assert!(!usefulness.reaches(s, u));
    assert!(usefulness.reaches(u, u));
}

#[test]
fn test_reachable_but_unproductive() {
    let grammar = support::load("S A #  S -> a #  S -> A #  A -> A a #  ##");
    let usefulness = Usefulness::new(&grammar);
    let a = support::sym(&grammar, "A");

    assert!(usefulness.is_reachable(a));
    assert!(!usefulness.is_productive(a));
    assert!(usefulness.is_productive(support::sym(&grammar, "S")));
    assert_eq!(
        usefulness.useless_symbols(),
        vec![UselessSymbol {
            sym: a,
            unreachable: false,
            unproductive: true,
        }]
    );
}

#[test]
fn test_unreachable_but_productive() {
    let grammar = support::load("S A B #  S -> a #  A -> A b #  B -> b #  ##");
    let usefulness = Usefulness::new(&grammar);
    let [a, b] = ["A", "B"].map(|name| support::sym(&grammar, name));

    assert_eq!(
        usefulness.useless_symbols(),
        vec![
            UselessSymbol {
                sym: a,
                unreachable: true,
                unproductive: true,
            },
            UselessSymbol {
                sym: b,
                unreachable: true,
                unproductive: false,
            },
        ]
    );
}

#[test]
fn test_epsilon_rules_are_productive() {
    let grammar = support::load("S A #  S -> A A #  A -> #  ##");
    let usefulness = Usefulness::new(&grammar);
    assert!(usefulness.all_useful());
}
