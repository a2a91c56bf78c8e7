use tracing::{debug, info, trace};

use super::closure::is_closed;
use super::collector::{finalize, ClosedPatternSet};
use super::extensions::{candidate_extension_items, extend_pattern};
use super::storage::{PatternStorage, SequenceDatabase};
use super::support::{SupportCounter, SupportOracle};
use crate::config::MinerConfig;

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningStats {
    pub seeds: usize,
    pub nodes_visited: usize,
    pub closed_recorded: usize,
    pub duplicates_skipped: usize,
    pub extensions_pruned: usize,
    pub support_evaluations: usize,
}

#[derive(Debug, Clone)]
pub struct MiningOutcome {
    pub patterns: ClosedPatternSet,
    pub stats: MiningStats,
}

/// Mine closed sequential patterns with default settings.
///
/// `min_support` is an absolute sequence count and is not validated here.
pub fn clospan_algorithm(database: &SequenceDatabase, min_support: usize) -> ClosedPatternSet {
    mine(database, &MinerConfig::new(min_support)).patterns
}

pub fn mine(database: &SequenceDatabase, config: &MinerConfig) -> MiningOutcome {
    let min_support = config.min_support;
    info!(
        sequences = database.len(),
        items = database.num_items(),
        min_support,
        parallel = config.parallel,
        memoize = config.memoize,
        "starting closed pattern mining"
    );

    let mut oracle = SupportCounter::new(database)
        .with_parallel(config.parallel)
        .with_memoize(config.memoize);
    let mut stats = MiningStats::default();
    let mut closed = PatternStorage::new();

    for (item, &count) in database.item_sequence_counts().iter().enumerate() {
        if count < min_support {
            continue;
        }
        stats.seeds += 1;
        debug!(item = database.label(item), support = count, "seed");
        recursive_clospan(&mut oracle, &[item], min_support, &mut closed, &mut stats);
    }

    stats.support_evaluations = oracle.evaluations();
    let patterns = finalize(&closed);

    info!(
        closed_patterns = patterns.len(),
        nodes_visited = stats.nodes_visited,
        support_evaluations = stats.support_evaluations,
        "mining finished"
    );
    MiningOutcome { patterns, stats }
}

fn recursive_clospan<O: SupportOracle>(
    oracle: &mut O,
    pattern: &[usize],
    min_support: usize,
    closed: &mut PatternStorage,
    stats: &mut MiningStats,
) {
    let support = oracle.support(pattern);
    if support < min_support {
        return;
    }
    stats.nodes_visited += 1;
    trace!(?pattern, support, "visit");

    if is_closed(oracle, pattern, support) {
        if closed.contains(pattern) {
            stats.duplicates_skipped += 1;
        } else {
            closed.add_pattern(pattern, support);
            stats.closed_recorded += 1;
            debug!(
                pattern = %oracle.database().decode_pattern(pattern).join(", "),
                support,
                "closed pattern"
            );
        }
    }

    let candidates = candidate_extension_items(oracle.database(), pattern);
    for item in candidates {
        let extended = extend_pattern(pattern, item);
        if oracle.support(&extended) >= min_support {
            recursive_clospan(oracle, &extended, min_support, closed, stats);
        } else {
            stats.extensions_pruned += 1;
        }
    }
}
