use crate::analytics::deriver::DerivedLengths;
use crate::analytics::AnalyticsError;

/// Fewest period records that yield a cycle length.
pub const MIN_PERIODS_FOR_STATS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Averages {
    pub cycle_length: i64,
    pub period_length: i64,
}

pub fn ensure_enough_data(found: usize) -> Result<(), AnalyticsError> {
    if found < MIN_PERIODS_FOR_STATS {
        return Err(AnalyticsError::NotEnoughData {
            required: MIN_PERIODS_FOR_STATS,
            found,
        });
    }
    Ok(())
}

/// Arithmetic mean rounded half away from zero; 0 for an empty slice.
pub fn rounded_mean(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sum: i64 = values.iter().sum();
    (sum as f64 / values.len() as f64).round() as i64
}

pub fn averages(derived: &DerivedLengths) -> Averages {
    Averages {
        cycle_length: rounded_mean(&derived.cycles),
        period_length: rounded_mean(&derived.period_lengths),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rounds_half_away_from_zero() {
        assert_eq!(rounded_mean(&[28, 29]), 29);
        assert_eq!(rounded_mean(&[27, 28, 28]), 28);
        assert_eq!(rounded_mean(&[4, 5, 5, 5]), 5);
        assert_eq!(rounded_mean(&[3, 4]), 4);
    }

    #[test]
    fn empty_sequence_averages_to_zero() {
        let derived = DerivedLengths {
            cycles: vec![30],
            period_lengths: vec![],
        };
        assert_eq!(
            averages(&derived),
            Averages {
                cycle_length: 30,
                period_length: 0
            }
        );
    }

    #[test]
    fn fewer_than_two_records_is_not_enough() {
        assert_eq!(
            ensure_enough_data(0),
            Err(AnalyticsError::NotEnoughData { required: 2, found: 0 })
        );
        assert_eq!(
            ensure_enough_data(1),
            Err(AnalyticsError::NotEnoughData { required: 2, found: 1 })
        );
        assert!(ensure_enough_data(2).is_ok());
    }

    #[test]
    fn averages_are_deterministic() {
        let derived = DerivedLengths {
            cycles: vec![26, 31, 29],
            period_lengths: vec![4, 6],
        };
        assert_eq!(averages(&derived), averages(&derived));
        assert_eq!(averages(&derived).cycle_length, 29);
        assert_eq!(averages(&derived).period_length, 5);
    }
}
