use std::collections::BTreeSet;

use super::matcher::is_subsequence;
use super::storage::SequenceDatabase;

/// Items that may extend `pattern`: every item, at any position, of every
/// sequence that contains `pattern`, minus the items already in `pattern`.
///
/// This single rule feeds both the closure check and the search expansion.
pub fn candidate_extension_items(database: &SequenceDatabase, pattern: &[usize]) -> BTreeSet<usize> {
    let mut candidates = BTreeSet::new();

    for sequence in database.iter_sequences() {
        if !is_subsequence(sequence, pattern) {
            continue;
        }
        for itemset in sequence.iter_itemsets() {
            candidates.extend(itemset.iter().copied().filter(|item| !pattern.contains(item)));
        }
    }
    candidates
}

/// `pattern` with one candidate item appended, for each candidate.
pub fn get_extensions(database: &SequenceDatabase, pattern: &[usize]) -> Vec<Vec<usize>> {
    candidate_extension_items(database, pattern)
        .into_iter()
        .map(|item| extend_pattern(pattern, item))
        .collect()
}

pub fn extend_pattern(pattern: &[usize], item: usize) -> Vec<usize> {
    let mut extended = Vec::with_capacity(pattern.len() + 1);
    extended.extend_from_slice(pattern);
    extended.push(item);
    extended
}
