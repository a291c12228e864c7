use sqlx::SqlitePool;

use crate::models::aluno::media;
use crate::models::{
    Aluno, NewAlunoRequest, NewProfessorRequest, NewTurmaRequest, Professor, Turma,
    UpdateAlunoRequest, UpdateProfessorRequest, UpdateTurmaRequest,
};

// ----- professores -----

pub async fn fetch_professores(db: &SqlitePool) -> Result<Vec<Professor>, sqlx::Error> {
    sqlx::query_as::<_, Professor>(
        "SELECT id, nome, idade, materia, observacoes FROM professores ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_professor_by_id(
    db: &SqlitePool,
    id: i64,
) -> Result<Option<Professor>, sqlx::Error> {
    sqlx::query_as::<_, Professor>(
        "SELECT id, nome, idade, materia, observacoes FROM professores WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert_professor(
    db: &SqlitePool,
    req: NewProfessorRequest,
) -> Result<Professor, sqlx::Error> {
    let id = sqlx::query(
        "INSERT INTO professores (nome, idade, materia, observacoes) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&req.nome)
    .bind(req.idade)
    .bind(&req.materia)
    .bind(&req.observacoes)
    .execute(db)
    .await?
    .last_insert_rowid();

    Ok(Professor {
        id,
        nome: req.nome,
        idade: req.idade,
        materia: req.materia,
        observacoes: req.observacoes,
    })
}

pub async fn update_professor(
    db: &SqlitePool,
    id: i64,
    req: UpdateProfessorRequest,
) -> Result<Option<Professor>, sqlx::Error> {
    let mut current = match find_professor_by_id(db, id).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    if let Some(nome) = req.nome {
        current.nome = nome;
    }
    if let Some(idade) = req.idade {
        current.idade = idade;
    }
    if let Some(materia) = req.materia {
        current.materia = materia;
    }
    if let Some(observacoes) = req.observacoes {
        current.observacoes = observacoes;
    }

    sqlx::query(
        r#"
        UPDATE professores
        SET nome = ?1,
            idade = ?2,
            materia = ?3,
            observacoes = ?4
        WHERE id = ?5
        "#,
    )
    .bind(&current.nome)
    .bind(current.idade)
    .bind(&current.materia)
    .bind(&current.observacoes)
    .bind(id)
    .execute(db)
    .await?;

    Ok(Some(current))
}

pub async fn delete_professor(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM professores WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

// ----- turmas -----

pub async fn fetch_turmas(db: &SqlitePool) -> Result<Vec<Turma>, sqlx::Error> {
    sqlx::query_as::<_, Turma>("SELECT id, descricao, professor_id, ativo FROM turmas ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_turma_by_id(db: &SqlitePool, id: i64) -> Result<Option<Turma>, sqlx::Error> {
    sqlx::query_as::<_, Turma>("SELECT id, descricao, professor_id, ativo FROM turmas WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn insert_turma(db: &SqlitePool, req: NewTurmaRequest) -> Result<Turma, sqlx::Error> {
    let id = sqlx::query("INSERT INTO turmas (descricao, professor_id, ativo) VALUES (?1, ?2, ?3)")
        .bind(&req.descricao)
        .bind(req.professor_id)
        .bind(req.ativo)
        .execute(db)
        .await?
        .last_insert_rowid();

    Ok(Turma {
        id,
        descricao: req.descricao,
        professor_id: req.professor_id,
        ativo: req.ativo,
    })
}

pub async fn update_turma(
    db: &SqlitePool,
    id: i64,
    req: UpdateTurmaRequest,
) -> Result<Option<Turma>, sqlx::Error> {
    let mut current = match find_turma_by_id(db, id).await? {
        Some(t) => t,
        None => return Ok(None),
    };

    if let Some(descricao) = req.descricao {
        current.descricao = descricao;
    }
    if let Some(professor_id) = req.professor_id {
        current.professor_id = professor_id;
    }
    if let Some(ativo) = req.ativo {
        current.ativo = ativo;
    }

    sqlx::query("UPDATE turmas SET descricao = ?1, professor_id = ?2, ativo = ?3 WHERE id = ?4")
        .bind(&current.descricao)
        .bind(current.professor_id)
        .bind(current.ativo)
        .bind(id)
        .execute(db)
        .await?;

    Ok(Some(current))
}

pub async fn delete_turma(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM turmas WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

// ----- alunos -----

pub async fn fetch_alunos(db: &SqlitePool) -> Result<Vec<Aluno>, sqlx::Error> {
    sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id, nome, idade, turma_id, data_nascimento,
            nota_primeiro_semestre, nota_segundo_semestre, media_final
        FROM alunos
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_aluno_by_id(db: &SqlitePool, id: i64) -> Result<Option<Aluno>, sqlx::Error> {
    sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id, nome, idade, turma_id, data_nascimento,
            nota_primeiro_semestre, nota_segundo_semestre, media_final
        FROM alunos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert_aluno(db: &SqlitePool, req: NewAlunoRequest) -> Result<Aluno, sqlx::Error> {
    let media_final = req
        .media_final
        .or_else(|| media(req.nota_primeiro_semestre, req.nota_segundo_semestre));

    let id = sqlx::query(
        r#"
        INSERT INTO alunos
            (nome, idade, turma_id, data_nascimento,
            nota_primeiro_semestre, nota_segundo_semestre, media_final)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(&req.nome)
    .bind(req.idade)
    .bind(req.turma_id)
    .bind(req.data_nascimento)
    .bind(req.nota_primeiro_semestre)
    .bind(req.nota_segundo_semestre)
    .bind(media_final)
    .execute(db)
    .await?
    .last_insert_rowid();

    Ok(Aluno {
        id,
        nome: req.nome,
        idade: req.idade,
        turma_id: req.turma_id,
        data_nascimento: req.data_nascimento,
        nota_primeiro_semestre: req.nota_primeiro_semestre,
        nota_segundo_semestre: req.nota_segundo_semestre,
        media_final,
    })
}

pub async fn update_aluno(
    db: &SqlitePool,
    id: i64,
    req: UpdateAlunoRequest,
) -> Result<Option<Aluno>, sqlx::Error> {
    let mut current = match find_aluno_by_id(db, id).await? {
        Some(a) => a,
        None => return Ok(None),
    };

    let grades_changed =
        req.nota_primeiro_semestre.is_some() || req.nota_segundo_semestre.is_some();

    if let Some(nome) = req.nome {
        current.nome = nome;
    }
    if let Some(idade) = req.idade {
        current.idade = idade;
    }
    if let Some(turma_id) = req.turma_id {
        current.turma_id = turma_id;
    }
    if let Some(data_nascimento) = req.data_nascimento {
        current.data_nascimento = data_nascimento;
    }
    if let Some(nota) = req.nota_primeiro_semestre {
        current.nota_primeiro_semestre = nota;
    }
    if let Some(nota) = req.nota_segundo_semestre {
        current.nota_segundo_semestre = nota;
    }
    // an explicit media_final (even null) wins; otherwise it follows the grades
    match req.media_final {
        Some(media_final) => current.media_final = media_final,
        None if grades_changed => current.media_final = current.computed_media(),
        None => {}
    }

    sqlx::query(
        r#"
        UPDATE alunos
        SET nome = ?1,
            idade = ?2,
            turma_id = ?3,
            data_nascimento = ?4,
            nota_primeiro_semestre = ?5,
            nota_segundo_semestre = ?6,
            media_final = ?7
        WHERE id = ?8
        "#,
    )
    .bind(&current.nome)
    .bind(current.idade)
    .bind(current.turma_id)
    .bind(current.data_nascimento)
    .bind(current.nota_primeiro_semestre)
    .bind(current.nota_segundo_semestre)
    .bind(current.media_final)
    .bind(id)
    .execute(db)
    .await?;

    Ok(Some(current))
}

pub async fn delete_aluno(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM alunos WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
