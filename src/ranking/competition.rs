use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::core::LeaderboardRow;
use crate::ranking::ScoreSelector;

/// Competition ranks of a row slice, keyed by input position.
///
/// `get(i)` is the rank of `rows[i]` in the slice the map was computed from.
/// Rows are identified by position rather than by value, so a clone of a row
/// must be looked up through its position (or through [`RankMap::keyed_by`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankMap {
    ranks: Vec<usize>,
}

impl RankMap {
    /// Rank of the row at `index`
    pub fn get(&self, index: usize) -> Option<usize> {
        self.ranks.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Ranks in input order
    pub fn as_slice(&self) -> &[usize] {
        &self.ranks
    }

    /// `(index, rank)` pairs in input order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ranks.iter().copied().enumerate()
    }

    /// Best rank present; always `Some(1)` for a non-empty map
    pub fn min_rank(&self) -> Option<usize> {
        self.ranks.iter().copied().min()
    }

    /// Re-key the ranks by a stable identifier of each row.
    ///
    /// `rows` must be the slice the map was computed from. Identifiers are
    /// expected to be unique; on a collision the first row keeps the entry.
    pub fn keyed_by<'a, T, K, F>(&self, rows: &'a [T], key: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        F: Fn(&'a T) -> K,
    {
        debug_assert_eq!(rows.len(), self.ranks.len());

        let mut keyed = HashMap::with_capacity(self.ranks.len());
        for (index, (row, &rank)) in rows.iter().zip(&self.ranks).enumerate() {
            match keyed.entry(key(row)) {
                Entry::Vacant(slot) => {
                    slot.insert(rank);
                }
                Entry::Occupied(_) => {
                    tracing::warn!("Duplicate rank key at row {}, keeping first occurrence", index);
                }
            }
        }
        keyed
    }

    /// Ranks keyed by username
    pub fn by_username<'a, T: LeaderboardRow>(&self, rows: &'a [T]) -> HashMap<&'a str, usize> {
        self.keyed_by(rows, |row| row.username())
    }
}

/// Rank rows by a selector using standard competition ranking.
///
/// Scores are sorted descending with ties broken by input position, then
/// each row takes `sorted position + 1`, except that a row whose score was
/// already seen reuses the rank of that score's first occurrence. So scores
/// `[10, 10, 5]` rank `[1, 1, 3]`.
pub fn compute_ranks<T: LeaderboardRow>(rows: &[T], selector: &ScoreSelector<T>) -> RankMap {
    let extractor = selector.extractor();
    tracing::debug!("Ranking {} rows by {}", rows.len(), selector);
    compute_ranks_with(rows, |row| extractor.extract(row))
}

/// Rank rows by an arbitrary score function.
///
/// Scores are compared with [`f64::total_cmp`], so NaN and `-0.0` are not
/// normalized here; [`compute_ranks`] does that through its extractor.
pub fn compute_ranks_with<T, F>(rows: &[T], score: F) -> RankMap
where
    F: Fn(&T) -> f64,
{
    let mut scored: Vec<(usize, f64)> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| (index, score(row)))
        .collect();

    // Positions are unique, so the order is total and an unstable sort is deterministic
    scored.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut ranks = vec![0; rows.len()];
    let mut previous: Option<(f64, usize)> = None;

    for (position, &(index, value)) in scored.iter().enumerate() {
        // Equal scores are adjacent after the sort, so the last seen score is enough
        let rank = match previous {
            Some((seen, rank)) if seen.total_cmp(&value).is_eq() => rank,
            _ => position + 1,
        };
        previous = Some((value, rank));
        ranks[index] = rank;
    }

    RankMap { ranks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResultRow;

    fn rows(scores: &[(&str, i64)]) -> Vec<ResultRow> {
        scores
            .iter()
            .map(|(name, score)| ResultRow::new(*name).with_field("score", *score))
            .collect()
    }

    #[test]
    fn test_competition_ranking() {
        let rows = rows(&[("a", 10), ("b", 10), ("c", 5)]);
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.as_slice(), &[1, 1, 3]);
    }

    #[test]
    fn test_unsorted_input() {
        let rows = rows(&[("c", 5), ("a", 20), ("d", 1), ("b", 20)]);
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.as_slice(), &[3, 1, 4, 1]);
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<ResultRow> = Vec::new();
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert!(ranks.is_empty());
        assert_eq!(ranks.min_rank(), None);
    }

    #[test]
    fn test_single_row() {
        let rows = rows(&[("solo", -4)]);
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.get(0), Some(1));
    }

    #[test]
    fn test_all_tied() {
        let rows = rows(&[("a", 7), ("b", 7), ("c", 7), ("d", 7)]);
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert!(ranks.iter().all(|(_, rank)| rank == 1));
    }

    #[test]
    fn test_three_way_tie_skips_to_four() {
        let rows = rows(&[("a", 9), ("b", 9), ("c", 9), ("d", 2), ("e", 2), ("f", 1)]);
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.as_slice(), &[1, 1, 1, 4, 4, 6]);
    }

    #[test]
    fn test_non_numeric_scores_rank_as_zero() {
        let rows = vec![
            ResultRow::new("a").with_field("score", "n/a"),
            ResultRow::new("b").with_field("score", 3),
            ResultRow::new("c").with_field("score", 0),
            ResultRow::new("d"),
        ];
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.as_slice(), &[2, 1, 2, 2]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let rows = vec![
            ResultRow::new("a").with_field("score", -0.0),
            ResultRow::new("b").with_field("score", 0.0),
        ];
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.as_slice(), &[1, 1]);
    }

    #[test]
    fn test_fractional_scores() {
        let rows = vec![
            ResultRow::new("a").with_field("score", 1.5),
            ResultRow::new("b").with_field("score", 1.25),
            ResultRow::new("c").with_field("score", 1.5),
        ];
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.as_slice(), &[1, 3, 1]);
    }

    #[test]
    fn test_compute_ranks_with_closure() {
        let scores = [3.0, 8.0, 3.0];
        let ranks = compute_ranks_with(&scores, |s| *s);
        assert_eq!(ranks.as_slice(), &[2, 1, 2]);
    }

    #[test]
    fn test_keyed_by_username() {
        let rows = rows(&[("a", 30), ("b", 30), ("c", 10)]);
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        let by_name = ranks.by_username(&rows);
        assert_eq!(by_name["a"], 1);
        assert_eq!(by_name["b"], 1);
        assert_eq!(by_name["c"], 3);
    }

    #[test]
    fn test_keyed_by_duplicate_keeps_first() {
        let rows = rows(&[("dup", 1), ("x", 5), ("dup", 9)]);
        let ranks = compute_ranks(&rows, &ScoreSelector::field("score"));
        assert_eq!(ranks.as_slice(), &[3, 2, 1]);
        let by_name = ranks.by_username(&rows);
        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name["dup"], 3);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let rows = rows(&[("a", 4), ("b", 4), ("c", 6), ("d", 0)]);
        let selector = ScoreSelector::field("score");
        assert_eq!(compute_ranks(&rows, &selector), compute_ranks(&rows, &selector));
    }
}
