pub mod atividades;
pub mod gerenciamento;
pub mod reservas;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub static GERENCIAMENTO_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/gerenciamento");
pub static ATIVIDADES_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/atividades");
pub static RESERVAS_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/reservas");

/// Opens the pool, creating the SQLite file on first start, and brings the
/// schema up to date.
pub async fn connect(database_url: &str, migrator: &Migrator) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    migrator.run(&pool).await?;
    Ok(pool)
}

/// Single-connection in-memory pool, used by tests and throwaway runs.
pub async fn connect_in_memory(migrator: &Migrator) -> Result<SqlitePool, sqlx::Error> {
    // one connection, otherwise each pooled connection sees its own empty database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    migrator.run(&pool).await?;
    Ok(pool)
}
