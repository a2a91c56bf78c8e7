use std::collections::HashMap;

use rayon::prelude::*;

use super::matcher::is_subsequence;
use super::storage::SequenceDatabase;

/// Number of sequences in `database` containing `pattern` as a subsequence.
pub fn calculate_support(database: &SequenceDatabase, pattern: &[usize]) -> usize {
    database
        .iter_sequences()
        .filter(|&sequence| is_subsequence(sequence, pattern))
        .count()
}

/// Same count as [`calculate_support`], split across the rayon pool.
pub fn calculate_support_parallel(database: &SequenceDatabase, pattern: &[usize]) -> usize {
    (0..database.len())
        .into_par_iter()
        .filter(|&idx| is_subsequence(database.sequence(idx), pattern))
        .count()
}

/// Source of pattern supports for the closure check and the search.
pub trait SupportOracle {
    fn database(&self) -> &SequenceDatabase;
    fn support(&mut self, pattern: &[usize]) -> usize;
}

/// Support counter over one immutable database, for the duration of one run.
#[derive(Debug)]
pub struct SupportCounter<'a> {
    database: &'a SequenceDatabase,
    parallel: bool,
    cache: Option<HashMap<Vec<usize>, usize>>,
    evaluations: usize,
}

impl<'a> SupportCounter<'a> {
    pub fn new(database: &'a SequenceDatabase) -> Self {
        Self {
            database,
            parallel: false,
            cache: None,
            evaluations: 0,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Cache supports by pattern value. Valid only while the database is unchanged,
    /// which the shared borrow guarantees.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.cache = memoize.then(HashMap::new);
        self
    }

    /// Number of full database scans performed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn count(&mut self, pattern: &[usize]) -> usize {
        self.evaluations += 1;
        if self.parallel {
            calculate_support_parallel(self.database, pattern)
        } else {
            calculate_support(self.database, pattern)
        }
    }
}

impl SupportOracle for SupportCounter<'_> {
    fn database(&self) -> &SequenceDatabase {
        self.database
    }

    fn support(&mut self, pattern: &[usize]) -> usize {
        if let Some(&cached) = self.cache.as_ref().and_then(|c| c.get(pattern)) {
            return cached;
        }
        let support = self.count(pattern);
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(pattern.to_vec(), support);
        }
        support
    }
}
