pub mod filter;
pub mod medal;
pub mod model;
pub mod partition;

pub use filter::{filter_by_username, filter_positions, is_search_active};
pub use medal::{rank_to_display, Medal, RankDisplay};
pub use model::{build_view, LeaderboardEntry, LeaderboardView, ViewMode};
pub use partition::{current_user_position, partition_current_user, Partition};
