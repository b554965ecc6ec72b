use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::analytics::{self, MonthlyMoodStats};
use crate::db;
use crate::error::AppError;
use crate::models::{validate_intensity, MoodMessage, MoodRecord, MoodUpdate, NewMood, UserQuery};

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/api/moods", get(list_moods).post(create_mood))
        .route("/api/moods/stats/monthly", get(get_monthly_stats))
        .route("/api/moods/message/today", get(get_today_message))
        .route(
            "/api/moods/:id",
            get(get_mood).put(update_mood).delete(delete_mood),
        )
        .with_state(pool)
}

async fn create_mood(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Json(body): Json<NewMood>,
) -> Result<(StatusCode, Json<MoodRecord>), AppError> {
    validate_intensity(body.intensity)?;

    let record = MoodRecord {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        date: body.date.unwrap_or_else(super::today),
        mood: body.mood,
        intensity: body.intensity,
        notes: body.notes,
    };
    db::insert_mood(&pool, &record).await?;
    tracing::info!(user_id = %user.user_id, mood = %record.mood, "🙂 mood logged");

    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_moods(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
) -> Result<Json<Vec<MoodRecord>>, AppError> {
    Ok(Json(db::list_moods(&pool, user.user_id).await?))
}

async fn get_mood(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Path(id): Path<Uuid>,
) -> Result<Json<MoodRecord>, AppError> {
    db::get_mood(&pool, user.user_id, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Mood entry"))
}

async fn update_mood(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Path(id): Path<Uuid>,
    Json(changes): Json<MoodUpdate>,
) -> Result<Json<MoodRecord>, AppError> {
    let Some(mut record) = db::get_mood(&pool, user.user_id, id).await? else {
        return Err(AppError::NotFound("Mood entry"));
    };

    validate_intensity(changes.intensity)?;
    apply_update(&mut record, changes);
    db::update_mood(&pool, &record).await?;

    Ok(Json(record))
}

fn apply_update(record: &mut MoodRecord, changes: MoodUpdate) {
    if let Some(date) = changes.date {
        record.date = date;
    }
    if let Some(mood) = changes.mood {
        record.mood = mood;
    }
    if let Some(intensity) = changes.intensity {
        record.intensity = Some(intensity);
    }
    if let Some(notes) = changes.notes {
        record.notes = Some(notes);
    }
}

async fn delete_mood(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !db::delete_mood(&pool, user.user_id, id).await? {
        return Err(AppError::NotFound("Mood entry"));
    }
    Ok(Json(json!({ "msg": "Mood entry removed" })))
}

async fn get_monthly_stats(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
) -> Result<Json<MonthlyMoodStats>, AppError> {
    let moods = db::list_moods(&pool, user.user_id).await?;
    Ok(Json(analytics::aggregate_moods_by_month(&moods)))
}

async fn get_today_message(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
) -> Result<Json<Option<MoodMessage>>, AppError> {
    let moods = db::list_moods(&pool, user.user_id).await?;
    Ok(Json(analytics::today_mood_message(&moods, super::today())))
}
