use crate::core::LeaderboardRow;

/// Rows split into the viewer's own row and everyone else
#[derive(Debug)]
pub struct Partition<'a, T> {
    /// The viewer's row, borrowed from the input
    pub current: Option<&'a T>,
    /// All other rows in input order
    pub others: Vec<&'a T>,
}

// Derive would require `T: Clone`
impl<T> Clone for Partition<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            others: self.others.clone(),
        }
    }
}

/// Input position of the first row whose username equals `current_username`.
///
/// Usernames are assumed unique per leaderboard. If they are not, the first
/// match wins and the duplicates are reported at `warn`.
pub fn current_user_position<T: LeaderboardRow>(
    rows: &[T],
    current_username: &str,
) -> Option<usize> {
    if current_username.is_empty() {
        return None;
    }

    let mut matches = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.username() == current_username)
        .map(|(index, _)| index);

    let first = matches.next()?;
    let duplicates = matches.count();
    if duplicates > 0 {
        tracing::warn!(
            "⚠️ {} extra rows share username '{}', pinning the first one",
            duplicates,
            current_username
        );
    }
    Some(first)
}

/// Split rows into the current viewer's row (first exact username match) and the rest
pub fn partition_current_user<'a, T: LeaderboardRow>(
    rows: &'a [T],
    current_username: &str,
) -> Partition<'a, T> {
    let position = current_user_position(rows, current_username);

    let others = rows
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != position)
        .map(|(_, row)| row)
        .collect();

    Partition {
        current: position.map(|index| &rows[index]),
        others,
    }
}
