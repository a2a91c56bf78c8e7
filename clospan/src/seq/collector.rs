use std::collections::HashSet;

use serde::Serialize;

use super::storage::{PatternStorage, SequenceDatabase};

/// A closed pattern as item ids, with its support.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClosedPattern {
    pub items: Vec<usize>,
    pub support: usize,
}

/// A closed pattern resolved back to item labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRecord {
    pub pattern: Vec<String>,
    pub support: usize,
}

/// Final answer of one mining run. Patterns are unique by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosedPatternSet {
    patterns: Vec<ClosedPattern>,
}

/// Drop repeated patterns, keeping the first occurrence of each.
pub fn finalize(raw: &PatternStorage) -> ClosedPatternSet {
    let mut seen: HashSet<&[usize]> = HashSet::with_capacity(raw.len());
    let patterns = raw
        .iter_patterns()
        .filter(|&(pattern, _)| seen.insert(pattern))
        .map(|(pattern, support)| ClosedPattern {
            items: pattern.to_vec(),
            support,
        })
        .collect();
    ClosedPatternSet { patterns }
}

impl ClosedPatternSet {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClosedPattern> {
        self.patterns.iter()
    }

    /// Support of `pattern` if it is in the set.
    pub fn support_of(&self, pattern: &[usize]) -> Option<usize> {
        self.patterns
            .iter()
            .find(|p| p.items == pattern)
            .map(|p| p.support)
    }

    pub fn to_records(&self, database: &SequenceDatabase) -> Vec<PatternRecord> {
        self.patterns
            .iter()
            .map(|p| PatternRecord {
                pattern: database.decode_pattern(&p.items),
                support: p.support,
            })
            .collect()
    }

    /// Records ordered by length ascending, support descending, then labels.
    pub fn sorted_for_display(&self, database: &SequenceDatabase) -> Vec<PatternRecord> {
        let mut records = self.to_records(database);
        records.sort_by(|a, b| {
            a.pattern
                .len()
                .cmp(&b.pattern.len())
                .then(b.support.cmp(&a.support))
                .then_with(|| a.pattern.cmp(&b.pattern))
        });
        records
    }
}

impl IntoIterator for ClosedPatternSet {
    type Item = ClosedPattern;
    type IntoIter = std::vec::IntoIter<ClosedPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}
