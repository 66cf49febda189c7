/// A field value read off a row, as seen by score extraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
    Bool(bool),
    Null,
    /// Arrays, objects and anything else without a scalar reading
    Other,
}

impl FieldValue<'_> {
    /// Numeric reading of the value, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short type name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
            FieldValue::Bool(_) => "bool",
            FieldValue::Null => "null",
            FieldValue::Other => "other",
        }
    }
}

/// A leaderboard result row.
///
/// The engine only requires a non-empty username. Everything else is reached
/// through [`LeaderboardRow::field`] when ranking by field name.
pub trait LeaderboardRow {
    /// Participant username (non-empty)
    fn username(&self) -> &str;

    /// Look up a named field. `None` means the row has no such field.
    fn field(&self, _name: &str) -> Option<FieldValue<'_>> {
        None
    }
}

impl<R: LeaderboardRow + ?Sized> LeaderboardRow for &R {
    fn username(&self) -> &str {
        (**self).username()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}
