use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::coerce;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Nota {
    pub id: i64,
    pub nota: f64,
    pub aluno_id: i64,
    pub atividade_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewNotaRequest {
    #[serde(deserialize_with = "coerce::float")]
    pub nota: f64,
    #[serde(deserialize_with = "coerce::int")]
    pub aluno_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub atividade_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNotaRequest {
    #[serde(default, deserialize_with = "coerce::opt_float")]
    pub nota: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub aluno_id: Option<i64>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub atividade_id: Option<i64>,
}
