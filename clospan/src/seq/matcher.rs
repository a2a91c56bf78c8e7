use super::storage::SequenceView;

/// True if the items of `pattern` occur in `sequence` in order, each in a
/// strictly later itemset than the previous one.
pub fn is_subsequence(sequence: SequenceView<'_>, pattern: &[usize]) -> bool {
    let mut position = 0;

    for item in pattern {
        let mut found = false;
        while position < sequence.len() {
            let itemset = sequence.itemset(position);
            position += 1;
            if itemset.binary_search(item).is_ok() {
                found = true;
                break;
            }
        }
        if !found {
            return false;
        }
    }
    true
}
