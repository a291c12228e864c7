mod common;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get as get_route;
use escola::api::{gerenciamento_router, reservas_router};
use escola::db::gerenciamento::{insert_professor, insert_turma};
use escola::db::{GERENCIAMENTO_MIGRATIONS, RESERVAS_MIGRATIONS, connect_in_memory};
use escola::error::AppError;
use escola::gerenciamento::{GerenciamentoClient, GerenciamentoHttpClient};
use escola::models::{NewProfessorRequest, NewTurmaRequest};
use escola::state::AppState;
use serde_json::{Value, json};

use common::{closed_url, get, post, put, spawn};

/// Runs a real gerenciamento service holding one turma and returns
/// its base URL and the turma id.
async fn spawn_gerenciamento() -> (String, i64) {
    let pool = connect_in_memory(&GERENCIAMENTO_MIGRATIONS)
        .await
        .expect("Failed to create gerenciamento database");

    let professor = insert_professor(
        &pool,
        NewProfessorRequest {
            nome: "Paula Reis".to_string(),
            idade: 38,
            materia: "Química".to_string(),
            observacoes: None,
        },
    )
    .await
    .expect("Failed to insert professor");

    let turma = insert_turma(
        &pool,
        NewTurmaRequest {
            descricao: "Laboratório 1".to_string(),
            professor_id: professor.id,
            ativo: true,
        },
    )
    .await
    .expect("Failed to insert turma");

    let base_url = spawn(gerenciamento_router(AppState::local(pool))).await;
    (base_url, turma.id)
}

async fn reservas_app(gerenciamento: Arc<dyn GerenciamentoClient>) -> Router {
    let db = connect_in_memory(&RESERVAS_MIGRATIONS)
        .await
        .expect("Failed to create reservas database");
    reservas_router(AppState { db, gerenciamento })
}

async fn reservas_against(base_url: &str) -> Router {
    let client = GerenciamentoHttpClient::new(base_url).expect("Failed to build client");
    reservas_app(Arc::new(client)).await
}

fn reserva(turma_id: i64) -> Value {
    json!({
        "num_sala": 204,
        "lab": true,
        "data": "2025-11-20",
        "turma_id": turma_id
    })
}

#[tokio::test]
async fn test_reserva_for_existing_turma_is_created() {
    let (base_url, turma_id) = spawn_gerenciamento().await;
    let app = reservas_against(&base_url).await;

    let (status, created) = post(&app, "/reservas", reserva(turma_id)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id missing");

    let (status, fetched) = get(&app, &format!("/reservas/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched,
        json!({
            "id": id,
            "num_sala": 204,
            "lab": true,
            "data": "2025-11-20",
            "turma_id": turma_id
        })
    );
}

#[tokio::test]
async fn test_reserva_for_missing_turma_is_bad_request() {
    let (base_url, turma_id) = spawn_gerenciamento().await;
    let app = reservas_against(&base_url).await;
    let missing = turma_id + 100;

    let (status, body) = post(&app, "/reservas", reserva(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains(&missing.to_string())
    );

    let (_, list) = get(&app, "/reservas").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_unreachable_gerenciamento_is_bad_gateway() {
    let app = reservas_against(&closed_url().await).await;

    let (status, body) = post(&app, "/reservas", reserva(1)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "502 Bad Gateway");

    let (_, list) = get(&app, "/reservas").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_gerenciamento_server_error_is_bad_gateway() {
    let broken = Router::new().route(
        "/turmas/{id}",
        get_route(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn(broken).await;
    let app = reservas_against(&base_url).await;

    let (status, _) = post(&app, "/reservas", reserva(1)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, list) = get(&app, "/reservas").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_update_checks_turma_only_when_supplied() {
    let (base_url, turma_id) = spawn_gerenciamento().await;
    let app = reservas_against(&base_url).await;

    let (_, created) = post(&app, "/reservas", reserva(turma_id)).await;
    let id = created["id"].as_i64().expect("id missing");

    let (status, _) = put(
        &app,
        &format!("/reservas/{}", id),
        json!({ "turma_id": turma_id + 100 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = put(
        &app,
        &format!("/reservas/{}", id),
        json!({ "lab": false, "data": "2025-12-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["turma_id"], turma_id);
    assert_eq!(updated["lab"], false);
    assert_eq!(updated["num_sala"], 204);

    let (status, _) = put(&app, "/reservas/999", json!({ "lab": true })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_date_is_rejected_before_remote_check() {
    let app = reservas_against(&closed_url().await).await;

    let mut body = reserva(1);
    body["data"] = json!("20/11/2025");
    let (status, _) = post(&app, "/reservas", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

struct KnownTurmas(HashSet<i64>);

#[async_trait]
impl GerenciamentoClient for KnownTurmas {
    async fn exists(&self, collection: &str, id: i64) -> Result<bool, AppError> {
        assert_eq!(collection, "turmas");
        Ok(self.0.contains(&id))
    }
}

#[tokio::test]
async fn test_stub_client_and_delete() {
    let app = reservas_app(Arc::new(KnownTurmas(HashSet::from([7])))).await;

    let (status, _) = post(&app, "/reservas", reserva(8)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = post(
        &app,
        "/reservas",
        json!({ "data": "2025-11-21", "turma_id": "7" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["lab"], false);
    assert_eq!(created["num_sala"], Value::Null);

    let id = created["id"].as_i64().expect("id missing");
    let (status, body) = common::delete(&app, &format!("/reservas/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Reserva removida com sucesso");

    let (status, _) = get(&app, &format!("/reservas/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_null_num_sala_clears_the_room() {
    let app = reservas_app(Arc::new(KnownTurmas(HashSet::from([7])))).await;

    let (status, created) = post(&app, "/reservas", reserva(7)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["num_sala"], 204);
    let uri = format!("/reservas/{}", created["id"].as_i64().expect("id missing"));

    let (status, updated) = put(&app, &uri, json!({ "num_sala": null })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["num_sala"], Value::Null);
    assert_eq!(updated["lab"], true);

    let (_, stored) = get(&app, &uri).await;
    assert_eq!(stored["num_sala"], Value::Null);

    let (status, updated) = put(&app, &uri, json!({ "num_sala": "12" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["num_sala"], 12);
}

#[tokio::test]
async fn test_non_numeric_id_is_json_bad_request() {
    let app = reservas_app(Arc::new(KnownTurmas(HashSet::new()))).await;

    for (status, body) in [
        get(&app, "/reservas/abc").await,
        put(&app, "/reservas/abc", json!({ "lab": true })).await,
        common::delete(&app, "/reservas/abc").await,
    ] {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "400 Bad Request");
        assert!(body["message"].is_string(), "unexpected body: {}", body);
    }
}
