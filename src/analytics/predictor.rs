use chrono::{Duration, NaiveDate};

use crate::analytics::stats::Averages;
use crate::models::NextPeriodPrediction;

/// Projects the next period from the latest start date.
///
/// Returns `None` without an average cycle length to project with. The end is
/// always `avg_period_length - 1` days after the start, even when no end dates
/// were logged and that average is 0.
pub fn predict_next(last_start: NaiveDate, averages: &Averages) -> Option<NextPeriodPrediction> {
    if averages.cycle_length <= 0 {
        return None;
    }

    let predicted_start_date = last_start + Duration::days(averages.cycle_length);
    let predicted_end_date = predicted_start_date + Duration::days(averages.period_length - 1);

    Some(NextPeriodPrediction {
        predicted_start_date,
        predicted_end_date,
    })
}
