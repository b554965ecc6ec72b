use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Mood, MoodMessage, MoodRecord, MonthMoodSummary};

/// Calendar month bucket. Orders chronologically; renders as `M-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.year)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub type MonthlyMoodStats = BTreeMap<MonthKey, MonthMoodSummary>;

#[derive(Default)]
struct MonthAccumulator {
    summary: MonthMoodSummary,
    intensity_sum: u32,
    intensity_count: u32,
}

pub fn aggregate_by_month(records: &[MoodRecord]) -> MonthlyMoodStats {
    let mut months: BTreeMap<MonthKey, MonthAccumulator> = BTreeMap::new();

    for record in records {
        let acc = months.entry(MonthKey::of(record.date)).or_default();
        *acc.summary.mood_counts.entry(record.mood).or_insert(0) += 1;
        acc.summary.total_entries += 1;

        if let Some(intensity) = record.intensity {
            acc.intensity_sum += u32::from(intensity);
            acc.intensity_count += 1;
        }
    }

    months
        .into_iter()
        .map(|(key, mut acc)| {
            if acc.intensity_count > 0 {
                acc.summary.avg_intensity =
                    f64::from(acc.intensity_sum) / f64::from(acc.intensity_count);
            }
            (key, acc.summary)
        })
        .collect()
}

pub fn encouragement(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "Your happiness lights up the room! Keep that positive energy flowing!",
        Mood::Sad => "It's okay to feel down sometimes. Be gentle with yourself today.",
        Mood::Angry => "Take a deep breath. Tomorrow is a new day with fresh opportunities.",
        Mood::Anxious => "Remember to breathe deeply. This feeling will pass, and you've got this!",
        Mood::Calm => "Your peaceful energy is your superpower. Enjoy this tranquil state.",
        Mood::Energetic => "Channel that amazing energy into something you love today!",
        Mood::Tired => "Rest is important! Give yourself permission to recharge.",
        Mood::Irritable => "It's a tough day. Try a short walk or some music to reset.",
    }
}

/// Message for the mood logged most often on `today`. Ties go to the mood
/// that was logged first.
pub fn message_for_day(records: &[MoodRecord], today: NaiveDate) -> Option<MoodMessage> {
    let mut counts: Vec<(Mood, u32)> = Vec::new();
    for record in records.iter().filter(|r| r.date == today) {
        match counts.iter_mut().find(|(m, _)| *m == record.mood) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.mood, 1)),
        }
    }

    let mut best: Option<(Mood, u32)> = None;
    for (mood, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((mood, n));
        }
    }

    best.map(|(mood, _)| MoodMessage {
        mood,
        message: encouragement(mood),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::history::fixtures::date;
    use uuid::Uuid;

    fn mood(day: &str, mood: Mood, intensity: Option<u8>) -> MoodRecord {
        MoodRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: date(day),
            mood,
            intensity,
            notes: None,
        }
    }

    fn january() -> MonthKey {
        MonthKey { year: 2024, month: 1 }
    }

    #[test]
    fn counts_and_averages_one_month() {
        let records = vec![
            mood("2024-01-03", Mood::Happy, Some(5)),
            mood("2024-01-09", Mood::Happy, Some(6)),
            mood("2024-01-15", Mood::Happy, Some(7)),
            mood("2024-01-31", Mood::Sad, Some(4)),
        ];
        let stats = aggregate_by_month(&records);
        assert_eq!(stats.len(), 1);

        let jan = &stats[&january()];
        assert_eq!(jan.mood_counts[&Mood::Happy], 3);
        assert_eq!(jan.mood_counts[&Mood::Sad], 1);
        assert_eq!(jan.total_entries, 4);
        assert_eq!(jan.mood_counts.values().sum::<u32>(), jan.total_entries);
        assert!((jan.avg_intensity - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_intensity_is_counted_but_not_averaged() {
        let records = vec![
            mood("2024-01-03", Mood::Happy, Some(5)),
            mood("2024-01-09", Mood::Happy, Some(6)),
            mood("2024-01-15", Mood::Happy, Some(7)),
            mood("2024-01-20", Mood::Happy, None),
            mood("2024-01-31", Mood::Sad, Some(4)),
        ];
        let jan = &aggregate_by_month(&records)[&january()];
        assert_eq!(jan.total_entries, 5);
        assert_eq!(jan.mood_counts[&Mood::Happy], 4);
        assert!((jan.avg_intensity - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn month_without_intensity_averages_zero() {
        let records = vec![mood("2024-05-01", Mood::Calm, None)];
        let stats = aggregate_by_month(&records);
        assert_eq!(stats[&MonthKey { year: 2024, month: 5 }].avg_intensity, 0.0);
    }

    #[test]
    fn buckets_split_on_month_and_year() {
        let records = vec![
            mood("2023-12-31", Mood::Tired, Some(3)),
            mood("2024-01-01", Mood::Energetic, Some(8)),
            mood("2024-12-01", Mood::Angry, Some(9)),
        ];
        let keys: Vec<String> = aggregate_by_month(&records)
            .keys()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys, vec!["12-2023", "1-2024", "12-2024"]);
    }

    #[test]
    fn serializes_with_month_keys() {
        let records = vec![mood("2024-01-03", Mood::Happy, Some(5))];
        let json = serde_json::to_value(aggregate_by_month(&records)).unwrap();
        assert_eq!(json["1-2024"]["mood_counts"]["happy"], 1);
        assert_eq!(json["1-2024"]["total_entries"], 1);
        assert_eq!(json["1-2024"]["avg_intensity"], 5.0);
    }

    #[test]
    fn empty_input_has_no_months() {
        assert!(aggregate_by_month(&[]).is_empty());
    }

    #[test]
    fn message_uses_most_frequent_mood_today() {
        let records = vec![
            mood("2024-01-10", Mood::Tired, None),
            mood("2024-01-10", Mood::Calm, None),
            mood("2024-01-10", Mood::Calm, None),
            mood("2024-01-09", Mood::Tired, None),
            mood("2024-01-09", Mood::Tired, None),
        ];
        let msg = message_for_day(&records, date("2024-01-10")).unwrap();
        assert_eq!(msg.mood, Mood::Calm);
        assert_eq!(msg.message, encouragement(Mood::Calm));
    }

    #[test]
    fn message_tie_goes_to_first_logged() {
        let records = vec![
            mood("2024-01-10", Mood::Anxious, None),
            mood("2024-01-10", Mood::Happy, None),
        ];
        let msg = message_for_day(&records, date("2024-01-10")).unwrap();
        assert_eq!(msg.mood, Mood::Anxious);
    }

    #[test]
    fn no_message_without_entries_today() {
        let records = vec![mood("2024-01-09", Mood::Happy, None)];
        assert!(message_for_day(&records, date("2024-01-10")).is_none());
    }
}
