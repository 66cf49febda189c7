//! # Leaderboard Engine
//!
//! Ranking core for prediction-pool leaderboards:
//! - Standard competition ranking (ties share a rank, gaps follow: 1, 1, 3)
//! - Rank-by selector: a numeric field name or a scoring function
//! - Medal glyphs for the podium
//! - Case-insensitive username search
//! - Current viewer's row split out for sticky display
//!
//! Every operation is a pure function over an in-memory row slice. Nothing
//! is fetched or persisted.
//!
//! ## Example Usage
//!
//! ```rust
//! use leaderboard_engine::{
//!     compute_ranks, filter_by_username, partition_current_user, rank_to_display,
//!     ResultRow, ScoreSelector,
//! };
//!
//! let rows = vec![
//!     ResultRow::new("a").with_field("score", 30),
//!     ResultRow::new("b").with_field("score", 30),
//!     ResultRow::new("c").with_field("score", 10),
//! ];
//!
//! let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
//! assert_eq!(ranks.as_slice(), &[1, 1, 3]);
//! assert_eq!(rank_to_display(ranks.as_slice()[0]).to_string(), "🥇");
//!
//! assert_eq!(filter_by_username(&rows, "C").len(), 1);
//!
//! let partition = partition_current_user(&rows, "b");
//! assert_eq!(partition.current.map(|r| r.username.as_str()), Some("b"));
//! assert_eq!(partition.others.len(), 2);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod view;

// Re-export primary types
pub use crate::core::{load_rows, load_rows_from_path, FieldValue, LeaderboardRow, ResultRow};
pub use config::LeaderboardConfig;
pub use engine::{CacheStats, LeaderboardEngine};
pub use error::{LeaderboardError, Result};
pub use ranking::{compute_ranks, compute_ranks_with, RankMap, ScoreExtractor, ScoreSelector};
pub use view::{
    build_view, filter_by_username, is_search_active, partition_current_user, rank_to_display,
    LeaderboardEntry, LeaderboardView, Medal, Partition, RankDisplay, ViewMode,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_core_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RankMap>();
        assert_send_sync::<ScoreSelector<ResultRow>>();
        assert_send_sync::<LeaderboardEngine<ResultRow>>();
    }
}
