use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router, http::StatusCode};
use tracing::info;

use super::{ApiJson, ApiPath};
use crate::db::reservas as repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/reservas", get(list_reservas).post(create_reserva))
        .route(
            "/reservas/{id}",
            get(get_reserva).put(update_reserva).delete(delete_reserva),
        )
}

/// Asks Gerenciamento whether the turma exists; runs before any write.
async fn ensure_turma(state: &AppState, turma_id: i64) -> Result<(), AppError> {
    if state.gerenciamento.exists("turmas", turma_id).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Turma {} não existe no serviço de gerenciamento",
            turma_id
        )))
    }
}

async fn list_reservas(State(state): State<AppState>) -> Result<Json<Vec<Reserva>>, AppError> {
    let reservas = repository::fetch_reservas(&state.db).await?;
    Ok(Json(reservas))
}

async fn get_reserva(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Reserva>, AppError> {
    let reserva = repository::find_reserva_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Reserva", id))?;
    Ok(Json(reserva))
}

async fn create_reserva(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewReservaRequest>,
) -> Result<(StatusCode, Json<Reserva>), AppError> {
    ensure_turma(&state, req.turma_id).await?;

    let reserva = repository::insert_reserva(&state.db, req).await?;
    info!("created reserva {} for turma {}", reserva.id, reserva.turma_id);
    Ok((StatusCode::CREATED, Json(reserva)))
}

async fn update_reserva(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateReservaRequest>,
) -> Result<Json<Reserva>, AppError> {
    if repository::find_reserva_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::not_found("Reserva", id));
    }
    if let Some(turma_id) = req.turma_id {
        ensure_turma(&state, turma_id).await?;
    }

    let reserva = repository::update_reserva(&state.db, id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Reserva", id))?;
    Ok(Json(reserva))
}

async fn delete_reserva(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repository::delete_reserva(&state.db, id).await? {
        return Err(AppError::not_found("Reserva", id));
    }
    info!("deleted reserva {}", id);
    Ok(Json(MessageResponse::new("Reserva removida com sucesso")))
}
