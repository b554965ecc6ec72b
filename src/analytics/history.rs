use crate::analytics::AnalyticsError;
use crate::models::{validate_period_dates, PeriodRecord};

/// Validates a user's period records and returns them ascending by start date.
///
/// The sort is stable, so records sharing a start date keep the order the
/// caller supplied them in.
pub fn sort_ascending(records: &[PeriodRecord]) -> Result<Vec<&PeriodRecord>, AnalyticsError> {
    for record in records {
        validate_period_dates(record.start_date, record.end_date).map_err(|e| match e {
            AnalyticsError::Validation(msg) => {
                AnalyticsError::Validation(format!("period {}: {msg}", record.id))
            }
            other => other,
        })?;
    }

    let mut ordered: Vec<&PeriodRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.start_date);
    Ok(ordered)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub fn period(start: &str, end: Option<&str>) -> PeriodRecord {
        PeriodRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            start_date: date(start),
            end_date: end.map(date),
            symptoms: Vec::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }
}
