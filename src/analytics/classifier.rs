//! Where "today" falls in the current cycle.
//!
//! The fertile window here is a fixed-offset approximation around the midpoint
//! of the average cycle. It is not a medical model and makes no accuracy claim.

use chrono::NaiveDate;

use crate::analytics::stats::Averages;
use crate::models::{CurrentCycleStatus, CycleStatus};

/// Days before the estimated ovulation day that still count as fertile.
pub const FERTILE_DAYS_BEFORE_OVULATION: i64 = 5;

pub trait CycleDayClassifier {
    /// Classifies `today` against the latest period start, or `None` when the
    /// inputs cannot support an answer.
    fn classify(
        &self,
        last_start: NaiveDate,
        today: NaiveDate,
        averages: &Averages,
    ) -> Option<CurrentCycleStatus>;
}

/// Ovulation at the floor of half the average cycle; fertile for the
/// five days before it and the day itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidCycleClassifier;

impl CycleDayClassifier for MidCycleClassifier {
    fn classify(
        &self,
        last_start: NaiveDate,
        today: NaiveDate,
        averages: &Averages,
    ) -> Option<CurrentCycleStatus> {
        if averages.cycle_length <= 0 {
            return None;
        }

        let days_since_start = (today - last_start).num_days();
        if days_since_start < 0 {
            return None;
        }

        if days_since_start < averages.period_length {
            return Some(status(CycleStatus::Period, days_since_start + 1));
        }

        let cycle_day = days_since_start % averages.cycle_length + 1;
        let ovulation_day = averages.cycle_length / 2;
        let fertile = (ovulation_day - FERTILE_DAYS_BEFORE_OVULATION..=ovulation_day)
            .contains(&cycle_day);

        let kind = if fertile {
            CycleStatus::Fertile
        } else {
            CycleStatus::Regular
        };
        Some(status(kind, cycle_day))
    }
}

fn status(kind: CycleStatus, day_in_cycle: i64) -> CurrentCycleStatus {
    let message = match kind {
        CycleStatus::Period => "You are on your period.",
        CycleStatus::Fertile => "Higher chance to get pregnant",
        CycleStatus::Regular => "Low chance to get pregnant",
    };
    CurrentCycleStatus {
        day_in_cycle,
        status: kind,
        message: message.to_string(),
    }
}
