use std::net::SocketAddr;
use std::sync::Arc;
use std::time::SystemTime;

use axum::{routing::get, Router};

use crate::service::RecordService;
use crate::types::{Record, Skill, Topic};

mod handlers;
pub mod models;

use handlers::{create, delete, get_by_id, health, index, list, not_found, update};

#[derive(Clone)]
pub struct AppState {
    pub topics: Arc<RecordService<Topic>>,
    pub skills: Arc<RecordService<Skill>>,
    pub started_at: SystemTime,
}

impl AppState {
    pub fn new(topics: RecordService<Topic>, skills: RecordService<Skill>) -> Self {
        Self {
            topics: Arc::new(topics),
            skills: Arc::new(skills),
            started_at: SystemTime::now(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(state.started_at)
        .merge(record_routes("/topics", state.topics))
        .merge(record_routes("/skills", state.skills))
        .fallback(not_found)
}

fn record_routes<R: Record>(base: &str, service: Arc<RecordService<R>>) -> Router {
    Router::new()
        .route(base, get(list::<R>).post(create::<R>))
        .route(
            &format!("{base}/:id"),
            get(get_by_id::<R>).put(update::<R>).delete(delete::<R>),
        )
        .with_state(service)
}

pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    log::info!("🌐 REST service on http://{}", addr);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
