use std::fmt;
use std::sync::Arc;

use crate::core::{FieldValue, LeaderboardRow};

/// Scoring function used by [`ScoreSelector::ByFunction`]
pub type ScoreFn<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;

/// Rule that turns a row into the number it is ranked by
pub enum ScoreSelector<T> {
    /// Read a numeric field by name
    ByField(String),
    /// Call a scoring function
    ByFunction(ScoreFn<T>),
}

impl<T> ScoreSelector<T> {
    /// Rank by a named field
    pub fn field(name: impl Into<String>) -> Self {
        ScoreSelector::ByField(name.into())
    }

    /// Rank by a scoring function
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        ScoreSelector::ByFunction(Arc::new(f))
    }

    /// Resolve the selector into an extractor
    pub fn extractor(&self) -> ScoreExtractor<'_, T> {
        ScoreExtractor { selector: self }
    }
}

impl<T> Clone for ScoreSelector<T> {
    fn clone(&self) -> Self {
        match self {
            ScoreSelector::ByField(name) => ScoreSelector::ByField(name.clone()),
            ScoreSelector::ByFunction(f) => ScoreSelector::ByFunction(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for ScoreSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSelector::ByField(name) => f.debug_tuple("ByField").field(name).finish(),
            ScoreSelector::ByFunction(_) => f.write_str("ByFunction(..)"),
        }
    }
}

impl<T> fmt::Display for ScoreSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSelector::ByField(name) => write!(f, "field '{}'", name),
            ScoreSelector::ByFunction(_) => f.write_str("function"),
        }
    }
}

impl<T> From<&str> for ScoreSelector<T> {
    fn from(name: &str) -> Self {
        ScoreSelector::field(name)
    }
}

/// A selector resolved into a plain `row -> score` function.
///
/// Extraction never fails. A missing field, a non-numeric field or a NaN
/// from a scoring function all score `0`, and each such fallback is logged
/// at `warn` so it stays distinguishable from a genuine zero in the logs.
/// `-0.0` is folded into `0.0` so both land on the same rank.
pub struct ScoreExtractor<'a, T> {
    selector: &'a ScoreSelector<T>,
}

impl<T: LeaderboardRow> ScoreExtractor<'_, T> {
    pub fn extract(&self, row: &T) -> f64 {
        match self.selector {
            ScoreSelector::ByFunction(f) => {
                let score = f(row);
                if score.is_nan() {
                    tracing::warn!(
                        "Scoring function returned NaN for '{}', using 0",
                        row.username()
                    );
                    return 0.0;
                }
                fold_zero(score)
            }
            ScoreSelector::ByField(name) => match row.field(name) {
                Some(FieldValue::Number(n)) if !n.is_nan() => fold_zero(n),
                Some(other) => {
                    tracing::warn!(
                        "Field '{}' of '{}' is {}, not a number; score normalized to 0",
                        name,
                        row.username(),
                        other.kind()
                    );
                    0.0
                }
                None => {
                    tracing::warn!(
                        "Row '{}' has no field '{}'; score normalized to 0",
                        row.username(),
                        name
                    );
                    0.0
                }
            },
        }
    }
}

fn fold_zero(score: f64) -> f64 {
    if score == 0.0 {
        0.0
    } else {
        score
    }
}
