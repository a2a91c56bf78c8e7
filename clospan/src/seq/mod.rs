pub mod closure;
pub mod collector;
pub mod extensions;
pub mod matcher;
pub mod mining;
pub mod storage;
pub mod support;


pub use closure::is_closed;
pub use collector::{finalize, ClosedPattern, ClosedPatternSet, PatternRecord};
pub use extensions::{candidate_extension_items, extend_pattern, get_extensions};
pub use matcher::is_subsequence;
pub use mining::{clospan_algorithm, mine, MiningOutcome, MiningStats};
pub use storage::{PatternStorage, SequenceDatabase, SequenceView};
pub use support::{calculate_support, calculate_support_parallel, SupportCounter, SupportOracle};
