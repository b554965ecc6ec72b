use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::analytics;
use crate::db;
use crate::error::AppError;
use crate::models::{
    validate_period_dates, CurrentCycleStatus, CycleStats, NewPeriod, PeriodRecord, PeriodUpdate,
    UserQuery,
};

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/api/periods", get(list_periods).post(create_period))
        .route("/api/periods/stats/cycle", get(get_cycle_stats))
        .route("/api/periods/status/today", get(get_today_status))
        .route(
            "/api/periods/:id",
            get(get_period).put(update_period).delete(delete_period),
        )
        .with_state(pool)
}

async fn create_period(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Json(body): Json<NewPeriod>,
) -> Result<(StatusCode, Json<PeriodRecord>), AppError> {
    validate_period_dates(body.start_date, body.end_date)?;

    let record = PeriodRecord {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        start_date: body.start_date,
        end_date: body.end_date,
        symptoms: body.symptoms,
        notes: body.notes,
        created_at: Utc::now(),
    };
    db::insert_period(&pool, &record).await?;
    tracing::info!(user_id = %user.user_id, period_id = %record.id, "🩸 period logged");

    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_periods(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
) -> Result<Json<Vec<PeriodRecord>>, AppError> {
    Ok(Json(db::list_periods(&pool, user.user_id).await?))
}

async fn get_period(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Path(id): Path<Uuid>,
) -> Result<Json<PeriodRecord>, AppError> {
    db::get_period(&pool, user.user_id, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Period"))
}

async fn update_period(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Path(id): Path<Uuid>,
    Json(changes): Json<PeriodUpdate>,
) -> Result<Json<PeriodRecord>, AppError> {
    let Some(mut record) = db::get_period(&pool, user.user_id, id).await? else {
        return Err(AppError::NotFound("Period"));
    };

    apply_update(&mut record, changes);
    validate_period_dates(record.start_date, record.end_date)?;
    db::update_period(&pool, &record).await?;

    Ok(Json(record))
}

// Fields left out of the request keep their stored value.
fn apply_update(record: &mut PeriodRecord, changes: PeriodUpdate) {
    if let Some(start_date) = changes.start_date {
        record.start_date = start_date;
    }
    if let Some(end_date) = changes.end_date {
        record.end_date = Some(end_date);
    }
    if let Some(symptoms) = changes.symptoms {
        record.symptoms = symptoms;
    }
    if let Some(notes) = changes.notes {
        record.notes = Some(notes);
    }
}

async fn delete_period(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !db::delete_period(&pool, user.user_id, id).await? {
        return Err(AppError::NotFound("Period"));
    }
    Ok(Json(json!({ "msg": "Period removed" })))
}

async fn get_cycle_stats(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
) -> Result<Json<CycleStats>, AppError> {
    let periods = db::list_periods(&pool, user.user_id).await?;
    let stats = analytics::compute_cycle_stats(&periods)?;
    Ok(Json(stats))
}

async fn get_today_status(
    State(pool): State<PgPool>,
    Query(user): Query<UserQuery>,
) -> Result<Json<Option<CurrentCycleStatus>>, AppError> {
    let periods = db::list_periods(&pool, user.user_id).await?;
    let status = analytics::classify_today(&periods, super::today())?;
    Ok(Json(status))
}
