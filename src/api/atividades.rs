use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router, http::StatusCode};
use tracing::info;

use super::{ApiJson, ApiPath, require_some_text, require_text};
use crate::db::atividades as repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/atividades", get(list_atividades).post(create_atividade))
        .route(
            "/atividades/{id}",
            get(get_atividade).put(update_atividade).delete(delete_atividade),
        )
        .route("/notas", get(list_notas).post(create_nota))
        .route(
            "/notas/{id}",
            get(get_nota).put(update_nota).delete(delete_nota),
        )
}

async fn ensure_atividade(state: &AppState, id: i64) -> Result<(), AppError> {
    match repository::find_atividade_by_id(&state.db, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!("Atividade {} não existe", id))),
    }
}

async fn list_atividades(State(state): State<AppState>) -> Result<Json<Vec<Atividade>>, AppError> {
    let atividades = repository::fetch_atividades(&state.db).await?;
    Ok(Json(atividades))
}

async fn get_atividade(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Atividade>, AppError> {
    let atividade = repository::find_atividade_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Atividade", id))?;
    Ok(Json(atividade))
}

async fn create_atividade(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewAtividadeRequest>,
) -> Result<(StatusCode, Json<Atividade>), AppError> {
    require_text("nome_atividade", &req.nome_atividade)?;
    require_text("descricao", &req.descricao)?;

    let atividade = repository::insert_atividade(&state.db, req).await?;
    info!("created atividade {}", atividade.id);
    Ok((StatusCode::CREATED, Json(atividade)))
}

async fn update_atividade(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateAtividadeRequest>,
) -> Result<Json<Atividade>, AppError> {
    require_some_text("nome_atividade", req.nome_atividade.as_ref())?;
    require_some_text("descricao", req.descricao.as_ref())?;

    let atividade = repository::update_atividade(&state.db, id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Atividade", id))?;
    Ok(Json(atividade))
}

async fn delete_atividade(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repository::delete_atividade(&state.db, id).await? {
        return Err(AppError::not_found("Atividade", id));
    }
    info!("deleted atividade {}", id);
    Ok(Json(MessageResponse::new("Atividade deletada")))
}

async fn list_notas(State(state): State<AppState>) -> Result<Json<Vec<Nota>>, AppError> {
    let notas = repository::fetch_notas(&state.db).await?;
    Ok(Json(notas))
}

async fn get_nota(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Nota>, AppError> {
    let nota = repository::find_nota_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Nota", id))?;
    Ok(Json(nota))
}

async fn create_nota(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewNotaRequest>,
) -> Result<(StatusCode, Json<Nota>), AppError> {
    ensure_atividade(&state, req.atividade_id).await?;

    let nota = repository::insert_nota(&state.db, req).await?;
    info!("created nota {}", nota.id);
    Ok((StatusCode::CREATED, Json(nota)))
}

async fn update_nota(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateNotaRequest>,
) -> Result<Json<Nota>, AppError> {
    if repository::find_nota_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::not_found("Nota", id));
    }
    if let Some(atividade_id) = req.atividade_id {
        ensure_atividade(&state, atividade_id).await?;
    }

    let nota = repository::update_nota(&state.db, id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Nota", id))?;
    Ok(Json(nota))
}

async fn delete_nota(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repository::delete_nota(&state.db, id).await? {
        return Err(AppError::not_found("Nota", id));
    }
    info!("deleted nota {}", id);
    Ok(Json(MessageResponse::new("Nota deletada")))
}
