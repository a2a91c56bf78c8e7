use super::extensions::{candidate_extension_items, extend_pattern};
use super::support::SupportOracle;

/// A pattern is closed when no single-item extension keeps its support.
pub fn is_closed<O: SupportOracle>(oracle: &mut O, pattern: &[usize], pattern_support: usize) -> bool {
    let candidates = candidate_extension_items(oracle.database(), pattern);

    for item in candidates {
        let extended = extend_pattern(pattern, item);
        if oracle.support(&extended) == pattern_support {
            return false;
        }
    }
    true
}
