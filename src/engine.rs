use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use crate::config::LeaderboardConfig;
use crate::core::LeaderboardRow;
use crate::error::Result;
use crate::ranking::{compute_ranks, RankMap, ScoreSelector};
use crate::view::{build_view, LeaderboardView};

/// Leaderboard state holder with a memoized rank map.
///
/// Ranks depend only on the rows and the selector, so replacing either one
/// drops the cached [`RankMap`]. Typing a search query or switching the
/// viewer reuses it.
pub struct LeaderboardEngine<T> {
    rows: Vec<T>,
    selector: ScoreSelector<T>,
    query: String,
    current_username: String,
    show_medals: bool,
    ranks: OnceLock<RankMap>,
    revision: u64,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Rank cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    /// Number of rank recomputations
    pub misses: u64,
    /// Bumped on every rows/selector change
    pub revision: u64,
}

impl<T: LeaderboardRow> LeaderboardEngine<T> {
    /// Create an empty engine ranking by `selector`
    pub fn new(selector: ScoreSelector<T>) -> Self {
        Self {
            rows: Vec::new(),
            selector,
            query: String::new(),
            current_username: String::new(),
            show_medals: true,
            ranks: OnceLock::new(),
            revision: 0,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create an engine from configuration, ranking by `config.rank_by`
    pub fn from_config(config: &LeaderboardConfig) -> Self {
        let mut engine = Self::new(ScoreSelector::field(config.rank_by.clone()));
        engine.query = config.query.clone();
        engine.current_username = config.current_username.clone();
        engine.show_medals = config.show_medals;
        engine
    }

    /// Builder-style row setter
    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Replace the row snapshot
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.invalidate();
    }

    /// Replace the rank-by selector
    pub fn set_selector(&mut self, selector: ScoreSelector<T>) {
        self.selector = selector;
        self.invalidate();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_current_username(&mut self, username: impl Into<String>) {
        self.current_username = username.into();
    }

    pub fn set_show_medals(&mut self, show_medals: bool) {
        self.show_medals = show_medals;
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn selector(&self) -> &ScoreSelector<T> {
        &self.selector
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_username(&self) -> &str {
        &self.current_username
    }

    /// Ranks of the current rows, computed at most once per revision
    pub fn ranks(&self) -> &RankMap {
        let mut computed = false;
        let ranks = self.ranks.get_or_init(|| {
            computed = true;
            compute_ranks(&self.rows, &self.selector)
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Rank cache miss at revision {}", self.revision);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        ranks
    }

    /// Rank of the row at `index`
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.ranks().get(index)
    }

    /// Build the view for the current query and viewer
    pub fn view(&self) -> Result<LeaderboardView<'_, T>> {
        build_view(
            &self.rows,
            self.ranks(),
            &self.query,
            &self.current_username,
            self.show_medals,
        )
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            revision: self.revision,
        }
    }

    fn invalidate(&mut self) {
        self.ranks = OnceLock::new();
        self.revision += 1;
        tracing::debug!("Rank cache invalidated, revision {}", self.revision);
    }
}
