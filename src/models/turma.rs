use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::coerce;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Turma {
    pub id: i64,
    pub descricao: String,
    pub professor_id: i64,
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTurmaRequest {
    pub descricao: String,
    #[serde(deserialize_with = "coerce::int")]
    pub professor_id: i64,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTurmaRequest {
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub professor_id: Option<i64>,
    pub ativo: Option<bool>,
}
