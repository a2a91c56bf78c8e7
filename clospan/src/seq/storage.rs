use std::collections::HashMap;

/// Interned sequence database stored as flat arrays.
///
/// Items are mapped to dense ids in order of first appearance. Each itemset
/// is kept sorted and deduplicated so membership tests are a binary search.
#[derive(Debug, Clone, Default)]
pub struct SequenceDatabase {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    items: Vec<usize>,
    itemsets: Vec<(usize, usize)>,
    sequences: Vec<(usize, usize)>,
}

/// Borrowed view of one sequence in a [`SequenceDatabase`].
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a> {
    items: &'a [usize],
    itemsets: &'a [(usize, usize)],
}

impl<'a> SequenceView<'a> {
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn itemset(&self, position: usize) -> &'a [usize] {
        let items = self.items;
        let (start, len) = self.itemsets[position];
        &items[start..start + len]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &'a [usize]> + 'a {
        let (items, itemsets) = (self.items, self.itemsets);
        itemsets
            .iter()
            .map(move |&(start, len)| &items[start..start + len])
    }
}

impl SequenceDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from nested label lists: sequences of itemsets of items.
    pub fn from_sequences<Q, I, S>(sequences: Q) -> Self
    where
        Q: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut db = Self::new();
        for sequence in sequences {
            db.push_sequence(sequence);
        }
        db
    }

    /// Append one sequence and return its index. Empty itemsets are dropped.
    pub fn push_sequence<I, S>(&mut self, itemsets: I) -> usize
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = self.itemsets.len();
        for itemset in itemsets {
            let mut ids: Vec<usize> = itemset
                .into_iter()
                .map(|label| self.intern(label.as_ref()))
                .collect();
            if ids.is_empty() {
                continue;
            }
            ids.sort_unstable();
            ids.dedup();

            let item_start = self.items.len();
            self.items.extend_from_slice(&ids);
            self.itemsets.push((item_start, ids.len()));
        }
        self.sequences.push((start, self.itemsets.len() - start));
        self.sequences.len() - 1
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        id
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Number of distinct items.
    pub fn num_items(&self) -> usize {
        self.labels.len()
    }

    pub fn sequence(&self, idx: usize) -> SequenceView<'_> {
        let (start, len) = self.sequences[idx];
        SequenceView {
            items: &self.items,
            itemsets: &self.itemsets[start..start + len],
        }
    }

    pub fn iter_sequences(&self) -> impl Iterator<Item = SequenceView<'_>> {
        (0..self.len()).map(move |idx| self.sequence(idx))
    }

    pub fn item_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: usize) -> &str {
        &self.labels[id]
    }

    /// Map a pattern of labels to ids. `None` if any label is unknown.
    pub fn encode_pattern<S: AsRef<str>>(&self, labels: &[S]) -> Option<Vec<usize>> {
        labels.iter().map(|l| self.item_id(l.as_ref())).collect()
    }

    pub fn decode_pattern(&self, pattern: &[usize]) -> Vec<String> {
        pattern.iter().map(|&id| self.labels[id].clone()).collect()
    }

    /// Number of sequences each item occurs in, indexed by item id.
    pub fn item_sequence_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.num_items()];
        let mut last_seen = vec![usize::MAX; self.num_items()];

        for (seq_idx, sequence) in self.iter_sequences().enumerate() {
            for itemset in sequence.iter_itemsets() {
                for &item in itemset {
                    if last_seen[item] != seq_idx {
                        last_seen[item] = seq_idx;
                        counts[item] += 1;
                    }
                }
            }
        }
        counts
    }
}

/// Flat storage for patterns and their supports. Pattern order is preserved.
#[derive(Debug, Clone, Default)]
pub struct PatternStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

impl PatternStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pattern(&mut self, pattern: &[usize], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(pattern);
        self.offsets.push((start, pattern.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_pattern(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    /// Linear scan by value.
    pub fn contains(&self, pattern: &[usize]) -> bool {
        self.iter_patterns().any(|(existing, _)| existing == pattern)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter_patterns(&self) -> impl Iterator<Item = (&[usize], usize)> {
        (0..self.len()).map(move |idx| (self.get_pattern(idx), self.supports[idx]))
    }
}
