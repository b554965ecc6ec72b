pub mod moods;
pub mod periods;

use chrono::{NaiveDate, Utc};

// Insights are computed against the server's UTC calendar day.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
