use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::coerce;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Atividade {
    pub id: i64,
    pub nome_atividade: String,
    pub descricao: String,
    pub peso_porcento: f64,
    pub data_entrega: NaiveDate,
    pub turma_id: i64,
    pub professor_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAtividadeRequest {
    pub nome_atividade: String,
    pub descricao: String,
    #[serde(deserialize_with = "coerce::float")]
    pub peso_porcento: f64,
    #[serde(deserialize_with = "coerce::date")]
    pub data_entrega: NaiveDate,
    #[serde(deserialize_with = "coerce::int")]
    pub turma_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub professor_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAtividadeRequest {
    pub nome_atividade: Option<String>,
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_float")]
    pub peso_porcento: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_date")]
    pub data_entrega: Option<NaiveDate>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub turma_id: Option<i64>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub professor_id: Option<i64>,
}
