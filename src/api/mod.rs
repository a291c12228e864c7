mod atividades;
mod gerenciamento;
mod reservas;

use axum::extract::{FromRequest, FromRequestParts};
use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::config::Service;
use crate::error::AppError;
use crate::state::AppState;

/// `axum::Json` whose rejections become a 400 `AppError` instead of a 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejections become a JSON 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

pub fn router(service: Service, state: AppState) -> Router {
    match service {
        Service::Gerenciamento => gerenciamento_router(state),
        Service::Atividades => atividades_router(state),
        Service::Reservas => reservas_router(state),
    }
}

pub fn gerenciamento_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(gerenciamento::routes())
        .with_state(state)
}

pub fn atividades_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(atividades::routes())
        .with_state(state)
}

pub fn reservas_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(reservas::routes())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_some_text(field: &str, value: Option<&String>) -> Result<(), AppError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}
