use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::coerce;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Reserva {
    pub id: i64,
    pub num_sala: Option<i64>,
    pub lab: bool,
    pub data: NaiveDate,
    pub turma_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReservaRequest {
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub num_sala: Option<i64>,
    #[serde(default)]
    pub lab: bool,
    #[serde(deserialize_with = "coerce::date")]
    pub data: NaiveDate,
    #[serde(deserialize_with = "coerce::int")]
    pub turma_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReservaRequest {
    #[serde(default, deserialize_with = "coerce::nullable_int")]
    pub num_sala: Option<Option<i64>>,
    pub lab: Option<bool>,
    #[serde(default, deserialize_with = "coerce::opt_date")]
    pub data: Option<NaiveDate>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub turma_id: Option<i64>,
}
