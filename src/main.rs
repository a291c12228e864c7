use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use escola::api::router;
use escola::config::{Config, Service};
use escola::db;
use escola::server::{build_state, migrator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "escola=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = Service::from_args_or_env(std::env::args())?;
    let config = Config::new_from_env(service)?;

    let pool = db::connect(&config.database_url, migrator(service)).await?;
    info!("{} using database {}", service, config.database_url);

    let state = build_state(&config, pool)?;
    let app = router(service, state);

    info!("{} listening on http://{}", service, config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
