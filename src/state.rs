use std::sync::Arc;

use sqlx::SqlitePool;

use crate::gerenciamento::{GerenciamentoClient, NoopGerenciamentoClient};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub gerenciamento: Arc<dyn GerenciamentoClient>,
}

impl AppState {
    /// State for services that never look anything up remotely.
    pub fn local(db: SqlitePool) -> Self {
        Self {
            db,
            gerenciamento: Arc::new(NoopGerenciamentoClient),
        }
    }
}
