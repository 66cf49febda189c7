use crate::core::LeaderboardRow;

/// True when the query has content after trimming
pub fn is_search_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Input positions of rows whose username contains `query`, case-insensitively.
///
/// The query is trimmed first; an empty query keeps every row.
pub fn filter_positions<T: LeaderboardRow>(rows: &[T], query: &str) -> Vec<usize> {
    let query_lower = query.trim().to_lowercase();

    if query_lower.is_empty() {
        return (0..rows.len()).collect();
    }

    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.username().to_lowercase().contains(&query_lower))
        .map(|(index, _)| index)
        .collect()
}

/// Rows whose username contains `query`, case-insensitively, in input order
pub fn filter_by_username<'a, T: LeaderboardRow>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    filter_positions(rows, query)
        .into_iter()
        .map(|index| &rows[index])
        .collect()
}
