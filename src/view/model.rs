use serde::{Deserialize, Serialize};

use crate::core::LeaderboardRow;
use crate::error::{LeaderboardError, Result};
use crate::ranking::RankMap;
use crate::view::{
    current_user_position, filter_positions, is_search_active, rank_to_display, RankDisplay,
};

/// Which list the leaderboard is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Full standings with the viewer's row pinned
    Standings,
    /// Username search results
    Search,
}

/// One rendered leaderboard line
#[derive(Debug)]
pub struct LeaderboardEntry<'a, T> {
    pub row: &'a T,
    /// Position of the row in the input slice
    pub index: usize,
    pub rank: usize,
    pub display: RankDisplay,
}

impl<T> Clone for LeaderboardEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LeaderboardEntry<'_, T> {}

/// Render-ready leaderboard: an optional sticky row plus the listed entries
#[derive(Debug, Clone)]
pub struct LeaderboardView<'a, T> {
    pub mode: ViewMode,
    pub sticky: Option<LeaderboardEntry<'a, T>>,
    pub entries: Vec<LeaderboardEntry<'a, T>>,
}

impl<T> LeaderboardView<'_, T> {
    pub fn is_search(&self) -> bool {
        self.mode == ViewMode::Search
    }

    /// Number of lines including the sticky row
    pub fn len(&self) -> usize {
        self.entries.len() + usize::from(self.sticky.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compose ranks, search and the viewer's row into a view.
///
/// With an active query the sticky row and medals are suppressed and the
/// filtered rows are listed with numeric ranks. Otherwise the viewer's row
/// (if any) is pinned and every other row is listed, with medals for the
/// podium when `show_medals` is set.
///
/// `ranks` must have been computed from `rows`. A rank map of a different
/// length is rejected with [`LeaderboardError::RankMismatch`] rather than
/// producing standings with rows missing.
pub fn build_view<'a, T: LeaderboardRow>(
    rows: &'a [T],
    ranks: &RankMap,
    query: &str,
    current_username: &str,
    show_medals: bool,
) -> Result<LeaderboardView<'a, T>> {
    if rows.len() != ranks.len() {
        return Err(LeaderboardError::RankMismatch {
            rows: rows.len(),
            ranks: ranks.len(),
        });
    }

    let ranks = ranks.as_slice();
    let entry = move |index: usize, medals: bool| {
        let rank = ranks[index];
        let display = if medals {
            rank_to_display(rank)
        } else {
            RankDisplay::Rank(rank)
        };
        LeaderboardEntry {
            row: &rows[index],
            index,
            rank,
            display,
        }
    };

    if is_search_active(query) {
        let entries: Vec<_> = filter_positions(rows, query)
            .into_iter()
            .map(|index| entry(index, false))
            .collect();
        tracing::debug!(
            "Search '{}' matched {} of {} rows",
            query.trim(),
            entries.len(),
            rows.len()
        );

        return Ok(LeaderboardView {
            mode: ViewMode::Search,
            sticky: None,
            entries,
        });
    }

    let pinned = current_user_position(rows, current_username);
    let entries = (0..rows.len())
        .filter(|index| Some(*index) != pinned)
        .map(|index| entry(index, show_medals))
        .collect();

    Ok(LeaderboardView {
        mode: ViewMode::Standings,
        sticky: pinned.map(|index| entry(index, show_medals)),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResultRow;
    use crate::ranking::{compute_ranks, ScoreSelector};
    use crate::view::Medal;

    fn sample() -> Vec<ResultRow> {
        vec![
            ResultRow::new("a").with_field("score", 30),
            ResultRow::new("b").with_field("score", 30),
            ResultRow::new("c").with_field("score", 10),
        ]
    }

    #[test]
    fn test_standings_pin_current_user() {
        let rows = sample();
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        let view = build_view(&rows, &ranks, "", "b", true).unwrap();

        assert_eq!(view.mode, ViewMode::Standings);
        let sticky = view.sticky.unwrap();
        assert_eq!(sticky.row.username, "b");
        assert_eq!(sticky.display, RankDisplay::Medal(Medal::Gold));

        let listed: Vec<(&str, usize)> = view
            .entries
            .iter()
            .map(|e| (e.row.username.as_str(), e.rank))
            .collect();
        assert_eq!(listed, vec![("a", 1), ("c", 3)]);
        assert_eq!(view.entries[1].display, RankDisplay::Medal(Medal::Bronze));
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_search_suppresses_sticky_and_medals() {
        let rows = sample();
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        let view = build_view(&rows, &ranks, " A ", "b", true).unwrap();

        assert!(view.is_search());
        assert!(view.sticky.is_none());
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].row.username, "a");
        assert_eq!(view.entries[0].display, RankDisplay::Rank(1));
    }

    #[test]
    fn test_search_can_list_current_user() {
        let rows = sample();
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        let view = build_view(&rows, &ranks, "b", "b", true).unwrap();
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].index, 1);
    }

    #[test]
    fn test_medals_disabled() {
        let rows = sample();
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        let view = build_view(&rows, &ranks, "", "", false).unwrap();
        assert!(view.sticky.is_none());
        assert!(view.entries.iter().all(|e| !e.display.is_medal()));
        assert_eq!(view.entries.len(), 3);
    }

    #[test]
    fn test_stale_rank_map_rejected() {
        let rows = sample();
        let ranks = compute_ranks(&rows[..1], &ScoreSelector::field("score"));

        let err = build_view(&rows, &ranks, "", "", true).unwrap_err();
        assert!(matches!(err, LeaderboardError::RankMismatch { rows: 3, ranks: 1 }));
        assert!(build_view(&rows, &ranks, "a", "", true).is_err());
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<ResultRow> = Vec::new();
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        let view = build_view(&rows, &ranks, "", "a", true).unwrap();
        assert!(view.is_empty());
    }
}
