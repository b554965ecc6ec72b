//! Cycle and mood analytics.
//!
//! Pure functions over one user's records, already loaded by the caller.
//! Nothing in here touches storage or the clock: "today" is always passed in.

pub mod classifier;
pub mod deriver;
mod error;
pub mod history;
pub mod mood;
pub mod predictor;
pub mod stats;

use chrono::NaiveDate;

use crate::models::{CurrentCycleStatus, CycleStats, MoodMessage, MoodRecord, PeriodRecord};
use classifier::{CycleDayClassifier, MidCycleClassifier};
use stats::Averages;

pub use error::AnalyticsError;
pub use mood::MonthlyMoodStats;

struct Analysis<'a> {
    history: Vec<&'a PeriodRecord>,
    derived: deriver::DerivedLengths,
    averages: Averages,
}

fn analyze(records: &[PeriodRecord]) -> Result<Analysis<'_>, AnalyticsError> {
    let history = history::sort_ascending(records)?;
    stats::ensure_enough_data(history.len())?;
    let derived = deriver::derive(&history);
    let averages = stats::averages(&derived);
    Ok(Analysis {
        history,
        derived,
        averages,
    })
}

/// Cycle and period lengths, their averages and the next-period prediction.
pub fn compute_cycle_stats(records: &[PeriodRecord]) -> Result<CycleStats, AnalyticsError> {
    let Analysis {
        history,
        derived,
        averages,
    } = analyze(records)?;

    let next_period = history
        .last()
        .and_then(|last| predictor::predict_next(last.start_date, &averages));

    tracing::debug!(
        records = history.len(),
        avg_cycle = averages.cycle_length,
        avg_period = averages.period_length,
        "computed cycle stats"
    );

    Ok(CycleStats {
        cycles: derived.cycles,
        period_lengths: derived.period_lengths,
        avg_cycle_length: averages.cycle_length,
        avg_period_length: averages.period_length,
        next_period,
    })
}

/// Classifies `today` with the default mid-cycle heuristic.
pub fn classify_today(
    records: &[PeriodRecord],
    today: NaiveDate,
) -> Result<Option<CurrentCycleStatus>, AnalyticsError> {
    classify_today_with(&MidCycleClassifier, records, today)
}

/// Too little history degrades to `Ok(None)`; malformed records still fail.
pub fn classify_today_with<C: CycleDayClassifier + ?Sized>(
    classifier: &C,
    records: &[PeriodRecord],
    today: NaiveDate,
) -> Result<Option<CurrentCycleStatus>, AnalyticsError> {
    let analysis = match analyze(records) {
        Ok(analysis) => analysis,
        Err(AnalyticsError::NotEnoughData { .. }) => return Ok(None),
        Err(e) => return Err(e),
    };

    Ok(analysis
        .history
        .last()
        .and_then(|last| classifier.classify(last.start_date, today, &analysis.averages)))
}

pub fn aggregate_moods_by_month(records: &[MoodRecord]) -> MonthlyMoodStats {
    mood::aggregate_by_month(records)
}

pub fn today_mood_message(records: &[MoodRecord], today: NaiveDate) -> Option<MoodMessage> {
    mood::message_for_day(records, today)
}
