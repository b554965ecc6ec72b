use serde::{ Serialize, Deserialize };
use uuid::Uuid;
use chrono::{NaiveDate, DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::analytics::AnalyticsError;

#[derive(Debug, Clone, Serialize)]
pub struct PeriodRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub mood: Mood,
    pub intensity: Option<u8>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    Energetic,
    Tired,
    Irritable,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Calm,
        Mood::Energetic,
        Mood::Tired,
        Mood::Irritable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Tired => "tired",
            Mood::Irritable => "irritable",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| AnalyticsError::Validation(format!("unknown mood '{s}'")))
    }
}

// Intensity is optional, but when present must sit in 1..=10.
pub fn validate_intensity(intensity: Option<u8>) -> Result<(), AnalyticsError> {
    match intensity {
        Some(i) if !(1..=10).contains(&i) => Err(AnalyticsError::Validation(format!(
            "intensity must be between 1 and 10, got {i}"
        ))),
        _ => Ok(()),
    }
}

pub fn validate_period_dates(
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Result<(), AnalyticsError> {
    match end_date {
        Some(end) if end < start_date => Err(AnalyticsError::Validation(format!(
            "end_date {end} is before start_date {start_date}"
        ))),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NextPeriodPrediction {
    pub predicted_start_date: NaiveDate,
    pub predicted_end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CycleStats {
    pub cycles: Vec<i64>,
    pub period_lengths: Vec<i64>,
    pub avg_cycle_length: i64,
    pub avg_period_length: i64,
    pub next_period: Option<NextPeriodPrediction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CycleStatus {
    Period,
    Fertile,
    Regular,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrentCycleStatus {
    pub day_in_cycle: i64,
    pub status: CycleStatus,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MonthMoodSummary {
    pub mood_counts: std::collections::BTreeMap<Mood, u32>,
    pub total_entries: u32,
    pub avg_intensity: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodMessage {
    pub mood: Mood,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct NewPeriod {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PeriodUpdate {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub symptoms: Option<Vec<String>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewMood {
    pub date: Option<NaiveDate>,
    pub mood: Mood,
    pub intensity: Option<u8>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MoodUpdate {
    pub date: Option<NaiveDate>,
    pub mood: Option<Mood>,
    pub intensity: Option<u8>,
    pub notes: Option<String>,
}
