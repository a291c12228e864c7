use sqlx::SqlitePool;

use crate::models::{
    Atividade, NewAtividadeRequest, NewNotaRequest, Nota, UpdateAtividadeRequest,
    UpdateNotaRequest,
};

pub async fn fetch_atividades(db: &SqlitePool) -> Result<Vec<Atividade>, sqlx::Error> {
    sqlx::query_as::<_, Atividade>(
        r#"
        SELECT id, nome_atividade, descricao, peso_porcento, data_entrega, turma_id, professor_id
        FROM atividades
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_atividade_by_id(
    db: &SqlitePool,
    id: i64,
) -> Result<Option<Atividade>, sqlx::Error> {
    sqlx::query_as::<_, Atividade>(
        r#"
        SELECT id, nome_atividade, descricao, peso_porcento, data_entrega, turma_id, professor_id
        FROM atividades
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert_atividade(
    db: &SqlitePool,
    req: NewAtividadeRequest,
) -> Result<Atividade, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO atividades
            (nome_atividade, descricao, peso_porcento, data_entrega, turma_id, professor_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&req.nome_atividade)
    .bind(&req.descricao)
    .bind(req.peso_porcento)
    .bind(req.data_entrega)
    .bind(req.turma_id)
    .bind(req.professor_id)
    .execute(db)
    .await?
    .last_insert_rowid();

    Ok(Atividade {
        id,
        nome_atividade: req.nome_atividade,
        descricao: req.descricao,
        peso_porcento: req.peso_porcento,
        data_entrega: req.data_entrega,
        turma_id: req.turma_id,
        professor_id: req.professor_id,
    })
}

pub async fn update_atividade(
    db: &SqlitePool,
    id: i64,
    req: UpdateAtividadeRequest,
) -> Result<Option<Atividade>, sqlx::Error> {
    let mut current = match find_atividade_by_id(db, id).await? {
        Some(a) => a,
        None => return Ok(None),
    };

    if let Some(nome_atividade) = req.nome_atividade {
        current.nome_atividade = nome_atividade;
    }
    if let Some(descricao) = req.descricao {
        current.descricao = descricao;
    }
    if let Some(peso_porcento) = req.peso_porcento {
        current.peso_porcento = peso_porcento;
    }
    if let Some(data_entrega) = req.data_entrega {
        current.data_entrega = data_entrega;
    }
    if let Some(turma_id) = req.turma_id {
        current.turma_id = turma_id;
    }
    if let Some(professor_id) = req.professor_id {
        current.professor_id = professor_id;
    }

    sqlx::query(
        r#"
        UPDATE atividades
        SET nome_atividade = ?1,
            descricao = ?2,
            peso_porcento = ?3,
            data_entrega = ?4,
            turma_id = ?5,
            professor_id = ?6
        WHERE id = ?7
        "#,
    )
    .bind(&current.nome_atividade)
    .bind(&current.descricao)
    .bind(current.peso_porcento)
    .bind(current.data_entrega)
    .bind(current.turma_id)
    .bind(current.professor_id)
    .bind(id)
    .execute(db)
    .await?;

    Ok(Some(current))
}

pub async fn delete_atividade(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM atividades WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

pub async fn fetch_notas(db: &SqlitePool) -> Result<Vec<Nota>, sqlx::Error> {
    sqlx::query_as::<_, Nota>("SELECT id, nota, aluno_id, atividade_id FROM notas ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_nota_by_id(db: &SqlitePool, id: i64) -> Result<Option<Nota>, sqlx::Error> {
    sqlx::query_as::<_, Nota>("SELECT id, nota, aluno_id, atividade_id FROM notas WHERE id = ?1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn insert_nota(db: &SqlitePool, req: NewNotaRequest) -> Result<Nota, sqlx::Error> {
    let id = sqlx::query("INSERT INTO notas (nota, aluno_id, atividade_id) VALUES (?1, ?2, ?3)")
        .bind(req.nota)
        .bind(req.aluno_id)
        .bind(req.atividade_id)
        .execute(db)
        .await?
        .last_insert_rowid();

    Ok(Nota {
        id,
        nota: req.nota,
        aluno_id: req.aluno_id,
        atividade_id: req.atividade_id,
    })
}

pub async fn update_nota(
    db: &SqlitePool,
    id: i64,
    req: UpdateNotaRequest,
) -> Result<Option<Nota>, sqlx::Error> {
    let mut current = match find_nota_by_id(db, id).await? {
        Some(n) => n,
        None => return Ok(None),
    };

    if let Some(nota) = req.nota {
        current.nota = nota;
    }
    if let Some(aluno_id) = req.aluno_id {
        current.aluno_id = aluno_id;
    }
    if let Some(atividade_id) = req.atividade_id {
        current.atividade_id = atividade_id;
    }

    sqlx::query("UPDATE notas SET nota = ?1, aluno_id = ?2, atividade_id = ?3 WHERE id = ?4")
        .bind(current.nota)
        .bind(current.aluno_id)
        .bind(current.atividade_id)
        .bind(id)
        .execute(db)
        .await?;

    Ok(Some(current))
}

pub async fn delete_nota(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notas WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
