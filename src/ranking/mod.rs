pub mod competition;
pub mod selector;

pub use competition::{compute_ranks, compute_ranks_with, RankMap};
pub use selector::{ScoreExtractor, ScoreFn, ScoreSelector};
