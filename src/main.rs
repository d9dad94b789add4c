use axum::{routing::get, Router};
use dotenvy::dotenv;
use std::{env, net::SocketAddr};
use anyhow::Result;

use moodmate_backend::routes;
use moodmate_backend::store::{self, JournalStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let data_dir = env::var("JOURNAL_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let store = store::shared(JournalStore::open(&data_dir));
    tracing::info!("📔 journal snapshots in {}", data_dir);

    let app = Router::new()
        .merge(routes::moods::routes(store.clone()))
        .merge(routes::symptoms::routes(store.clone()))
        .merge(routes::insights::routes(store.clone()))
        .merge(routes::data::routes(store.clone()))
        .merge(routes::suggestions::routes())
        .route("/health", get(|| async { "✅ Backend up" }));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3050);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🧠 Server running at {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;

    Ok(())
}
