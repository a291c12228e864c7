pub mod aluno;
pub mod atividade;
pub mod nota;
pub mod professor;
pub mod reserva;
pub mod turma;

pub use aluno::{Aluno, NewAlunoRequest, UpdateAlunoRequest};
pub use atividade::{Atividade, NewAtividadeRequest, UpdateAtividadeRequest};
pub use nota::{NewNotaRequest, Nota, UpdateNotaRequest};
pub use professor::{NewProfessorRequest, Professor, UpdateProfessorRequest};
pub use reserva::{NewReservaRequest, Reserva, UpdateReservaRequest};
pub use turma::{NewTurmaRequest, Turma, UpdateTurmaRequest};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
