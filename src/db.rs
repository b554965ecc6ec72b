//! Postgres access for period and mood records.
//!
//! Every query is scoped by `user_id`; a record owned by someone else reads
//! the same as a missing one.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::analytics::AnalyticsError;
use crate::error::AppError;
use crate::models::{MoodRecord, PeriodRecord};

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[derive(FromRow)]
struct PeriodRow {
    id: Uuid,
    user_id: Uuid,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    symptoms: Vec<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl PeriodRow {
    fn into_domain(self) -> PeriodRecord {
        PeriodRecord {
            id: self.id,
            user_id: self.user_id,
            start_date: self.start_date,
            end_date: self.end_date,
            symptoms: self.symptoms,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

#[derive(FromRow)]
struct MoodRow {
    id: Uuid,
    user_id: Uuid,
    date: NaiveDate,
    mood: String,
    intensity: Option<i16>,
    notes: Option<String>,
}

impl MoodRow {
    fn into_domain(self) -> Result<MoodRecord, AnalyticsError> {
        let intensity = self
            .intensity
            .map(|i| {
                u8::try_from(i).map_err(|_| {
                    AnalyticsError::Validation(format!("mood {}: bad intensity {i}", self.id))
                })
            })
            .transpose()?;

        Ok(MoodRecord {
            id: self.id,
            user_id: self.user_id,
            date: self.date,
            mood: self.mood.parse()?,
            intensity,
            notes: self.notes,
        })
    }
}

const PERIOD_COLUMNS: &str = "id, user_id, start_date, end_date, symptoms, notes, created_at";
const MOOD_COLUMNS: &str = "id, user_id, date, mood, intensity, notes";

pub async fn insert_period(pool: &PgPool, record: &PeriodRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO periods (id, user_id, start_date, end_date, symptoms, notes, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(record.id)
    .bind(record.user_id)
    .bind(record.start_date)
    .bind(record.end_date)
    .bind(&record.symptoms)
    .bind(&record.notes)
    .bind(record.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Newest start date first, as the period list is shown.
pub async fn list_periods(pool: &PgPool, user_id: Uuid) -> Result<Vec<PeriodRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PeriodRow>(&format!(
        "SELECT {PERIOD_COLUMNS} FROM periods WHERE user_id = $1 ORDER BY start_date DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(PeriodRow::into_domain).collect())
}

pub async fn get_period(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<PeriodRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, PeriodRow>(&format!(
        "SELECT {PERIOD_COLUMNS} FROM periods WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(PeriodRow::into_domain))
}

pub async fn update_period(pool: &PgPool, record: &PeriodRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE periods SET start_date = $3, end_date = $4, symptoms = $5, notes = $6
         WHERE id = $1 AND user_id = $2",
    )
    .bind(record.id)
    .bind(record.user_id)
    .bind(record.start_date)
    .bind(record.end_date)
    .bind(&record.symptoms)
    .bind(&record.notes)
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns whether a row was removed.
pub async fn delete_period(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM periods WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn insert_mood(pool: &PgPool, record: &MoodRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO moods (id, user_id, date, mood, intensity, notes)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(record.id)
    .bind(record.user_id)
    .bind(record.date)
    .bind(record.mood.as_str())
    .bind(record.intensity.map(i16::from))
    .bind(&record.notes)
    .execute(pool)
    .await?;
    Ok(())
}

/// Newest first; entries on the same day keep the order they were logged in.
pub async fn list_moods(pool: &PgPool, user_id: Uuid) -> Result<Vec<MoodRecord>, AppError> {
    let rows = sqlx::query_as::<_, MoodRow>(&format!(
        "SELECT {MOOD_COLUMNS} FROM moods WHERE user_id = $1 ORDER BY date DESC, created_at ASC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let records = rows
        .into_iter()
        .map(MoodRow::into_domain)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

pub async fn get_mood(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<MoodRecord>, AppError> {
    let row = sqlx::query_as::<_, MoodRow>(&format!(
        "SELECT {MOOD_COLUMNS} FROM moods WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(MoodRow::into_domain).transpose()?)
}

pub async fn update_mood(pool: &PgPool, record: &MoodRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE moods SET date = $3, mood = $4, intensity = $5, notes = $6
         WHERE id = $1 AND user_id = $2",
    )
    .bind(record.id)
    .bind(record.user_id)
    .bind(record.date)
    .bind(record.mood.as_str())
    .bind(record.intensity.map(i16::from))
    .bind(&record.notes)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_mood(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM moods WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
