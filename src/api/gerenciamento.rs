use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router, http::StatusCode};
use tracing::info;

use super::{ApiJson, ApiPath, require_some_text, require_text};
use crate::db::gerenciamento as repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/professores", get(list_professores).post(create_professor))
        .route(
            "/professores/{id}",
            get(get_professor).put(update_professor).delete(delete_professor),
        )
        .route("/turmas", get(list_turmas).post(create_turma))
        .route(
            "/turmas/{id}",
            get(get_turma).put(update_turma).delete(delete_turma),
        )
        .route("/alunos", get(list_alunos).post(create_aluno))
        .route(
            "/alunos/{id}",
            get(get_aluno).put(update_aluno).delete(delete_aluno),
        )
}

async fn ensure_professor(state: &AppState, id: i64) -> Result<(), AppError> {
    match repository::find_professor_by_id(&state.db, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!("Professor {} não existe", id))),
    }
}

async fn ensure_turma(state: &AppState, id: i64) -> Result<(), AppError> {
    match repository::find_turma_by_id(&state.db, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!("Turma {} não existe", id))),
    }
}

// ----- professores -----

async fn list_professores(State(state): State<AppState>) -> Result<Json<Vec<Professor>>, AppError> {
    let professores = repository::fetch_professores(&state.db).await?;
    Ok(Json(professores))
}

async fn get_professor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Professor>, AppError> {
    let professor = repository::find_professor_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Professor", id))?;
    Ok(Json(professor))
}

async fn create_professor(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewProfessorRequest>,
) -> Result<(StatusCode, Json<Professor>), AppError> {
    require_text("nome", &req.nome)?;
    require_text("materia", &req.materia)?;

    let professor = repository::insert_professor(&state.db, req).await?;
    info!("created professor {}", professor.id);
    Ok((StatusCode::CREATED, Json(professor)))
}

async fn update_professor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateProfessorRequest>,
) -> Result<Json<Professor>, AppError> {
    require_some_text("nome", req.nome.as_ref())?;
    require_some_text("materia", req.materia.as_ref())?;

    let professor = repository::update_professor(&state.db, id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Professor", id))?;
    Ok(Json(professor))
}

async fn delete_professor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repository::delete_professor(&state.db, id).await? {
        return Err(AppError::not_found("Professor", id));
    }
    info!("deleted professor {}", id);
    Ok(Json(MessageResponse::new("Professor deletado")))
}

// ----- turmas -----

async fn list_turmas(State(state): State<AppState>) -> Result<Json<Vec<Turma>>, AppError> {
    let turmas = repository::fetch_turmas(&state.db).await?;
    Ok(Json(turmas))
}

async fn get_turma(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Turma>, AppError> {
    let turma = repository::find_turma_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Turma", id))?;
    Ok(Json(turma))
}

async fn create_turma(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewTurmaRequest>,
) -> Result<(StatusCode, Json<Turma>), AppError> {
    require_text("descricao", &req.descricao)?;
    ensure_professor(&state, req.professor_id).await?;

    let turma = repository::insert_turma(&state.db, req).await?;
    info!("created turma {}", turma.id);
    Ok((StatusCode::CREATED, Json(turma)))
}

async fn update_turma(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateTurmaRequest>,
) -> Result<Json<Turma>, AppError> {
    require_some_text("descricao", req.descricao.as_ref())?;
    if repository::find_turma_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::not_found("Turma", id));
    }
    if let Some(professor_id) = req.professor_id {
        ensure_professor(&state, professor_id).await?;
    }

    let turma = repository::update_turma(&state.db, id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Turma", id))?;
    Ok(Json(turma))
}

async fn delete_turma(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repository::delete_turma(&state.db, id).await? {
        return Err(AppError::not_found("Turma", id));
    }
    info!("deleted turma {}", id);
    Ok(Json(MessageResponse::new("Turma deletada")))
}

// ----- alunos -----

async fn list_alunos(State(state): State<AppState>) -> Result<Json<Vec<Aluno>>, AppError> {
    let alunos = repository::fetch_alunos(&state.db).await?;
    Ok(Json(alunos))
}

async fn get_aluno(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Aluno>, AppError> {
    let aluno = repository::find_aluno_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Aluno", id))?;
    Ok(Json(aluno))
}

async fn create_aluno(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewAlunoRequest>,
) -> Result<(StatusCode, Json<Aluno>), AppError> {
    require_text("nome", &req.nome)?;
    ensure_turma(&state, req.turma_id).await?;

    let aluno = repository::insert_aluno(&state.db, req).await?;
    info!("created aluno {}", aluno.id);
    Ok((StatusCode::CREATED, Json(aluno)))
}

async fn update_aluno(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateAlunoRequest>,
) -> Result<Json<Aluno>, AppError> {
    require_some_text("nome", req.nome.as_ref())?;
    if repository::find_aluno_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::not_found("Aluno", id));
    }
    if let Some(turma_id) = req.turma_id {
        ensure_turma(&state, turma_id).await?;
    }

    let aluno = repository::update_aluno(&state.db, id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Aluno", id))?;
    Ok(Json(aluno))
}

async fn delete_aluno(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repository::delete_aluno(&state.db, id).await? {
        return Err(AppError::not_found("Aluno", id));
    }
    info!("deleted aluno {}", id);
    Ok(Json(MessageResponse::new("Aluno deletado")))
}
