//! Property checks of the mining engine against brute-force references.

use std::collections::BTreeMap;

use clospan::seq::{calculate_support, candidate_extension_items, is_subsequence};
use clospan::{clospan_algorithm, SequenceDatabase};
use proptest::prelude::*;

type Rows = Vec<Vec<u8>>;

const ALPHABET: u8 = 5;

fn label(item: u8) -> String {
    format!("i{}", item)
}

fn build(rows: &Rows) -> SequenceDatabase {
    SequenceDatabase::from_sequences(rows.iter().map(|row| row.iter().map(|&item| [label(item)])))
}

/// Whether some embedding of `pattern` into `row` exists, tried exhaustively.
fn embeds(row: &[u8], pattern: &[u8]) -> bool {
    match pattern.split_first() {
        None => true,
        Some((head, rest)) => row
            .iter()
            .enumerate()
            .any(|(pos, item)| item == head && embeds(&row[pos + 1..], rest)),
    }
}

fn reference_support(rows: &Rows, pattern: &[u8]) -> usize {
    rows.iter().filter(|row| embeds(row, pattern)).count()
}

/// Every frequent pattern of distinct items with no equal-support extension.
fn reference_closed(rows: &Rows, min_support: usize) -> BTreeMap<Vec<String>, usize> {
    fn walk(
        rows: &Rows,
        pattern: &mut Vec<u8>,
        min_support: usize,
        out: &mut BTreeMap<Vec<String>, usize>,
    ) {
        let support = reference_support(rows, pattern);
        if support < min_support {
            return;
        }
        let unused: Vec<u8> = (0..ALPHABET).filter(|i| !pattern.contains(i)).collect();
        if !pattern.is_empty() {
            let closed = unused.iter().all(|&item| {
                let mut extended = pattern.clone();
                extended.push(item);
                reference_support(rows, &extended) != support
            });
            if closed {
                out.insert(pattern.iter().map(|&i| label(i)).collect(), support);
            }
        }
        for item in unused {
            pattern.push(item);
            walk(rows, pattern, min_support, out);
            pattern.pop();
        }
    }

    let mut out = BTreeMap::new();
    walk(rows, &mut Vec::new(), min_support, &mut out);
    out
}

fn rows_strategy() -> impl Strategy<Value = Rows> {
    prop::collection::vec(prop::collection::vec(0..ALPHABET, 0..6), 0..6)
}

fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0..ALPHABET, 0..4)
}

proptest! {
    #[test]
    fn matcher_agrees_with_exhaustive_embedding(rows in rows_strategy(), pattern in pattern_strategy()) {
        let db = build(&rows);
        let labels: Vec<String> = pattern.iter().map(|&i| label(i)).collect();
        match db.encode_pattern(&labels) {
            Some(ids) => {
                for (idx, row) in rows.iter().enumerate() {
                    prop_assert_eq!(is_subsequence(db.sequence(idx), &ids), embeds(row, &pattern));
                }
            }
            // An unknown item cannot embed anywhere
            None => {
                prop_assert_eq!(reference_support(&rows, &pattern), 0);
            }
        }
    }

    #[test]
    fn support_matches_reference_count(rows in rows_strategy(), pattern in pattern_strategy()) {
        let db = build(&rows);
        let labels: Vec<String> = pattern.iter().map(|&i| label(i)).collect();
        if let Some(ids) = db.encode_pattern(&labels) {
            prop_assert_eq!(calculate_support(&db, &ids), reference_support(&rows, &pattern));
            prop_assert!(calculate_support(&db, &ids) <= db.len());
        }
    }

    #[test]
    fn extension_never_raises_support(rows in rows_strategy(), pattern in pattern_strategy()) {
        let db = build(&rows);
        let labels: Vec<String> = pattern.iter().map(|&i| label(i)).collect();
        if let Some(ids) = db.encode_pattern(&labels) {
            let base = calculate_support(&db, &ids);
            for item in candidate_extension_items(&db, &ids) {
                let mut extended = ids.clone();
                extended.push(item);
                prop_assert!(calculate_support(&db, &extended) <= base);
            }
        }
    }

    #[test]
    fn mining_matches_brute_force(rows in rows_strategy(), min_support in 1usize..4) {
        let db = build(&rows);
        let mined: BTreeMap<Vec<String>, usize> = clospan_algorithm(&db, min_support)
            .to_records(&db)
            .into_iter()
            .map(|r| (r.pattern, r.support))
            .collect();
        prop_assert_eq!(mined, reference_closed(&rows, min_support));
    }

    #[test]
    fn mining_is_idempotent_and_duplicate_free(rows in rows_strategy(), min_support in 1usize..4) {
        let db = build(&rows);
        let first = clospan_algorithm(&db, min_support);
        let second = clospan_algorithm(&db, min_support);
        prop_assert_eq!(&first, &second);

        let records = first.to_records(&db);
        let unique: BTreeMap<_, _> = records.iter().map(|r| (r.pattern.clone(), r.support)).collect();
        prop_assert_eq!(unique.len(), records.len());
    }
}
