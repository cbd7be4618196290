use std::{sync::Arc, time::SystemTime};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    service::{RecordService, ServiceError},
    types::Record,
};

use super::models::{ErrorResponse, HealthResponse};

const GREETING: &str = "Hello from Topic and Skill Service!";

pub async fn index() -> &'static str {
    GREETING
}

pub async fn health(State(started_at): State<SystemTime>) -> impl IntoResponse {
    let uptime_secs = started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }),
    )
}

pub async fn list<R: Record>(State(service): State<Arc<RecordService<R>>>) -> Response {
    match service.list() {
        Ok(records) => Json(records).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn get_by_id<R: Record>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<String>,
) -> Response {
    match service.get_by_id(&id) {
        Ok(record) => Json(record).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create<R: Record>(
    State(service): State<Arc<RecordService<R>>>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_body::<R>(rejection),
    };
    match service.create(input) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn update<R: Record>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<String>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_body::<R>(rejection),
    };
    match service.update(&id, input) {
        Ok(record) => Json(record).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn delete<R: Record>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<String>,
) -> Response {
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("endpoint not found")),
    )
}

fn bad_body<R: Record>(rejection: JsonRejection) -> Response {
    log::warn!("Rejected {} body: {}", R::KIND, rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(format!(
            "invalid JSON body: {}",
            rejection.body_text()
        ))),
    )
        .into_response()
}

fn error_response(err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(err) => {
            log::warn!("Validation failed: {}", err);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string()))).into_response()
        }
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
        ServiceError::Storage(err) => {
            log::error!("Storage failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("storage failure")),
            )
                .into_response()
        }
    }
}
