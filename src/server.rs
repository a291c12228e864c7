use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use tracing::{info, warn};

use crate::config::{Config, Service};
use crate::db;
use crate::gerenciamento::{GerenciamentoHttpClient, NoopGerenciamentoClient};
use crate::state::AppState;

pub fn migrator(service: Service) -> &'static Migrator {
    match service {
        Service::Gerenciamento => &db::GERENCIAMENTO_MIGRATIONS,
        Service::Atividades => &db::ATIVIDADES_MIGRATIONS,
        Service::Reservas => &db::RESERVAS_MIGRATIONS,
    }
}

/// Wires the pool and, for reservas, the Gerenciamento client.
pub fn build_state(config: &Config, db: SqlitePool) -> Result<AppState, reqwest::Error> {
    if config.service != Service::Reservas {
        return Ok(AppState::local(db));
    }

    match &config.gerenciamento_url {
        Some(url) => {
            let client = GerenciamentoHttpClient::new(url.as_str())?;
            info!("validating turmas against {}", client.base_url());
            Ok(AppState {
                db,
                gerenciamento: Arc::new(client),
            })
        }
        None => {
            warn!("GERENCIAMENTO_URL is not set, turma ids will not be validated");
            Ok(AppState {
                db,
                gerenciamento: Arc::new(NoopGerenciamentoClient),
            })
        }
    }
}
