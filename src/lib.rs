pub mod config;
pub mod coordinator;
pub mod error;
pub mod matcher;
pub mod ranker;
pub mod usage;
pub mod walker;

pub use crate::config::{MatchTuning, QuickfindConfig, RankTuning};
pub use crate::coordinator::{SearchCoordinator, SearchKind};
pub use crate::error::{QuickfindError, Result};
pub use crate::ranker::ScoredCandidate;
pub use crate::usage::{JsonUsageStore, MemoryUsageStore, NoUsage, UsageStore};
pub use crate::walker::{Candidate, CandidateKind, WalkOptions};
