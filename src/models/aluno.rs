use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::coerce;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Aluno {
    pub id: i64,
    pub nome: String,
    pub idade: i64,
    pub turma_id: i64,
    pub data_nascimento: NaiveDate,
    pub nota_primeiro_semestre: Option<f64>,
    pub nota_segundo_semestre: Option<f64>,
    pub media_final: Option<f64>,
}

impl Aluno {
    /// Mean of both term grades, if both are known.
    pub fn computed_media(&self) -> Option<f64> {
        media(self.nota_primeiro_semestre, self.nota_segundo_semestre)
    }
}

pub(crate) fn media(primeiro: Option<f64>, segundo: Option<f64>) -> Option<f64> {
    match (primeiro, segundo) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        _ => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAlunoRequest {
    pub nome: String,
    #[serde(deserialize_with = "coerce::int")]
    pub idade: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub turma_id: i64,
    #[serde(deserialize_with = "coerce::date")]
    pub data_nascimento: NaiveDate,
    #[serde(default, deserialize_with = "coerce::opt_float")]
    pub nota_primeiro_semestre: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_float")]
    pub nota_segundo_semestre: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_float")]
    pub media_final: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlunoRequest {
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub idade: Option<i64>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub turma_id: Option<i64>,
    #[serde(default, deserialize_with = "coerce::opt_date")]
    pub data_nascimento: Option<NaiveDate>,
    #[serde(default, deserialize_with = "coerce::nullable_float")]
    pub nota_primeiro_semestre: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::nullable_float")]
    pub nota_segundo_semestre: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::nullable_float")]
    pub media_final: Option<Option<f64>>,
}
