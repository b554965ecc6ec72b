use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use anyhow::Result;

mod analytics;
mod config;
mod db;
mod error;
mod models;
mod routes;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    db::run_migrations(&pool).await?;
    tracing::info!("📦 Database ready");

    let app = Router::new()
        .merge(routes::periods::routes(pool.clone()))
        .merge(routes::moods::routes(pool.clone()))
        .route("/health", get(|| async { "✅ Insights up" }));

    tracing::info!("🧠 Server running at {}", config.bind_address);

    axum::serve(
        tokio::net::TcpListener::bind(config.bind_address).await?,
        app.into_make_service(),
    )
    .await?;

    Ok(())
}
