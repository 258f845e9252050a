use super::*;

use proptest::prelude::*;
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn token(item: usize) -> String {
    format!("i{item}")
}

fn to_db(raw: &[HashSet<usize>]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|tx| tx.iter().map(|&item| token(item)).collect())
        .collect()
}

fn brute_support(db: &[Vec<String>], query: &[String]) -> usize {
    db.iter()
        .filter(|tx| query.iter().all(|q| tx.contains(q)))
        .count()
}

fn db_strategy() -> impl Strategy<Value = Vec<HashSet<usize>>> {
    prop::collection::vec(prop::collection::hash_set(0usize..8, 0..6), 1..40)
}

fn order_strategy() -> impl Strategy<Value = ItemOrder> {
    prop_oneof![
        Just(ItemOrder::Frequency),
        Just(ItemOrder::Lexicographic)
    ]
}

proptest! {
    #[test]
    fn header_supports_match_brute_force(
        raw in db_strategy(),
        order in order_strategy(),
        min_support in 1usize..5,
    ) {
        init_logging();
        let db = to_db(&raw);
        let mut tree = FpTree::new(min_support, order);
        tree.grow(&db).unwrap();

        prop_assert_eq!(tree.node_count(tree.root()), db.len());
        for item in 0..8 {
            let expected = brute_support(&db, &[token(item)]);
            prop_assert_eq!(tree.support(&token(item)).unwrap_or(0), expected);
            prop_assert_eq!(
                tree.is_frequent(&[token(item)]).unwrap(),
                expected >= min_support
            );
        }
    }

    #[test]
    fn checker_matches_brute_force(
        raw in db_strategy(),
        query in prop::collection::hash_set(0usize..8, 1..4),
        order in order_strategy(),
        min_support in 1usize..5,
    ) {
        init_logging();
        let db = to_db(&raw);
        let mut tree = FpTree::new(min_support, order);
        tree.grow(&db).unwrap();

        let query: Vec<String> = query.into_iter().map(token).collect();
        let expected = brute_support(&db, &query);

        let check = tree.check_support(&query).unwrap();
        match check {
            SupportCheck::Missing { .. } => prop_assert_eq!(expected, 0),
            _ => {
                // Fail-fast on a rare single item reports that item's
                // support, which still decides frequency correctly.
                prop_assert_eq!(
                    check.is_frequent(),
                    expected >= min_support
                );
                if check.is_frequent() {
                    prop_assert_eq!(check.support(), Some(expected));
                }
            }
        }
    }

    #[test]
    fn order_mode_never_changes_answers(
        raw in db_strategy(),
        query in prop::collection::hash_set(0usize..8, 1..4),
        min_support in 1usize..5,
    ) {
        init_logging();
        let db = to_db(&raw);
        let mut by_freq = FpTree::new(min_support, ItemOrder::Frequency);
        by_freq.grow(&db).unwrap();
        let mut by_lex = FpTree::new(min_support, ItemOrder::Lexicographic);
        by_lex.grow(&db).unwrap();

        prop_assert_eq!(by_freq.header_snapshot(), by_lex.header_snapshot());

        let query: Vec<String> = query.into_iter().map(token).collect();
        prop_assert_eq!(
            by_freq.is_frequent(&query).unwrap(),
            by_lex.is_frequent(&query).unwrap()
        );
    }

    #[test]
    fn rebuilds_are_idempotent(
        raw in db_strategy(),
        order in order_strategy(),
        min_support in 0usize..5,
    ) {
        init_logging();
        let db = to_db(&raw);
        let mut first = FpTree::new(min_support, order);
        first.grow(&db).unwrap();
        let mut second = FpTree::new(min_support, order);
        second.grow(&db).unwrap();

        prop_assert_eq!(&first.nodes, &second.nodes);
        prop_assert_eq!(&first.header, &second.header);
    }
}
