use sqlx::SqlitePool;

use crate::models::{NewReservaRequest, Reserva, UpdateReservaRequest};

pub async fn fetch_reservas(db: &SqlitePool) -> Result<Vec<Reserva>, sqlx::Error> {
    sqlx::query_as::<_, Reserva>(
        "SELECT id, num_sala, lab, data, turma_id FROM reservas ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_reserva_by_id(db: &SqlitePool, id: i64) -> Result<Option<Reserva>, sqlx::Error> {
    sqlx::query_as::<_, Reserva>(
        "SELECT id, num_sala, lab, data, turma_id FROM reservas WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert_reserva(
    db: &SqlitePool,
    req: NewReservaRequest,
) -> Result<Reserva, sqlx::Error> {
    let id = sqlx::query(
        "INSERT INTO reservas (num_sala, lab, data, turma_id) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(req.num_sala)
    .bind(req.lab)
    .bind(req.data)
    .bind(req.turma_id)
    .execute(db)
    .await?
    .last_insert_rowid();

    Ok(Reserva {
        id,
        num_sala: req.num_sala,
        lab: req.lab,
        data: req.data,
        turma_id: req.turma_id,
    })
}

pub async fn update_reserva(
    db: &SqlitePool,
    id: i64,
    req: UpdateReservaRequest,
) -> Result<Option<Reserva>, sqlx::Error> {
    let mut current = match find_reserva_by_id(db, id).await? {
        Some(r) => r,
        None => return Ok(None),
    };

    if let Some(num_sala) = req.num_sala {
        current.num_sala = num_sala;
    }
    if let Some(lab) = req.lab {
        current.lab = lab;
    }
    if let Some(data) = req.data {
        current.data = data;
    }
    if let Some(turma_id) = req.turma_id {
        current.turma_id = turma_id;
    }

    sqlx::query(
        r#"
        UPDATE reservas
        SET num_sala = ?1,
            lab = ?2,
            data = ?3,
            turma_id = ?4
        WHERE id = ?5
        "#,
    )
    .bind(current.num_sala)
    .bind(current.lab)
    .bind(current.data)
    .bind(current.turma_id)
    .bind(id)
    .execute(db)
    .await?;

    Ok(Some(current))
}

pub async fn delete_reserva(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reservas WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
