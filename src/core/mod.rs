pub mod result_row;
pub mod row;

pub use result_row::{load_rows, load_rows_from_path, ResultRow};
pub use row::{FieldValue, LeaderboardRow};
