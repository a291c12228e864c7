use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::coerce;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Professor {
    pub id: i64,
    pub nome: String,
    pub idade: i64,
    pub materia: String,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProfessorRequest {
    pub nome: String,
    #[serde(deserialize_with = "coerce::int")]
    pub idade: i64,
    pub materia: String,
    #[serde(default)]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfessorRequest {
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub idade: Option<i64>,
    pub materia: Option<String>,
    #[serde(default, deserialize_with = "coerce::nullable")]
    pub observacoes: Option<Option<String>>,
}
