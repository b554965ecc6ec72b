use crate::models::PeriodRecord;

/// Per-cycle and per-period lengths, in whole calendar days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedLengths {
    pub cycles: Vec<i64>,
    pub period_lengths: Vec<i64>,
}

/// Expects `history` ascending by start date.
pub fn derive(history: &[&PeriodRecord]) -> DerivedLengths {
    let cycles = history
        .windows(2)
        .map(|w| (w[1].start_date - w[0].start_date).num_days())
        .collect();

    // Inclusive span; open-ended periods only feed cycle lengths.
    let period_lengths = history
        .iter()
        .filter_map(|r| r.end_date.map(|end| (end - r.start_date).num_days() + 1))
        .collect();

    DerivedLengths {
        cycles,
        period_lengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::history::{fixtures::period, sort_ascending};

    #[test]
    fn three_regular_periods() {
        let records = vec![
            period("2024-01-01", Some("2024-01-05")),
            period("2024-01-29", Some("2024-02-02")),
            period("2024-02-26", Some("2024-03-02")),
        ];
        let history = sort_ascending(&records).unwrap();
        let derived = derive(&history);
        assert_eq!(derived.cycles, vec![28, 28]);
        // 2024 is a leap year: Feb 26 through Mar 2 spans six days
        assert_eq!(derived.period_lengths, vec![5, 5, 6]);
    }

    #[test]
    fn missing_end_dates_skip_period_length_only() {
        let records = vec![
            period("2024-01-01", None),
            period("2024-01-30", Some("2024-02-03")),
            period("2024-02-27", None),
            period("2024-03-25", Some("2024-03-25")),
        ];
        let history = sort_ascending(&records).unwrap();
        let derived = derive(&history);
        assert_eq!(derived.cycles.len(), records.len() - 1);
        assert_eq!(derived.cycles, vec![29, 28, 27]);
        assert_eq!(derived.period_lengths, vec![5, 1]);
    }

    #[test]
    fn singleton_and_empty_yield_no_cycles() {
        assert_eq!(derive(&[]), DerivedLengths::default());

        let records = vec![period("2024-01-01", Some("2024-01-04"))];
        let history = sort_ascending(&records).unwrap();
        let derived = derive(&history);
        assert!(derived.cycles.is_empty());
        assert_eq!(derived.period_lengths, vec![4]);
    }

    #[test]
    fn cycle_across_leap_day() {
        let records = vec![period("2024-02-20", None), period("2024-03-19", None)];
        let history = sort_ascending(&records).unwrap();
        assert_eq!(derive(&history).cycles, vec![28]);
    }
}
