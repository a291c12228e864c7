use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown service \"{0}\", expected gerenciamento, atividades or reservas")]
    UnknownService(String),

    #[error("no service selected, pass one as the first argument or set SERVICE")]
    MissingService,

    #[error("invalid BIND_ADDR \"{0}\"")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Gerenciamento,
    Atividades,
    Reservas,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Gerenciamento => "gerenciamento",
            Service::Atividades => "atividades",
            Service::Reservas => "reservas",
        }
    }

    fn default_database_url(self) -> &'static str {
        match self {
            Service::Gerenciamento => "sqlite://gerenciamento.db",
            Service::Atividades => "sqlite://atividades_notas.db",
            Service::Reservas => "sqlite://reservas.db",
        }
    }

    fn default_bind_addr(self) -> SocketAddr {
        let port = match self {
            Service::Gerenciamento => 5000,
            Service::Atividades => 5001,
            Service::Reservas => 5002,
        };
        SocketAddr::from(([127, 0, 0, 1], port))
    }

    /// Picks the service from the first CLI argument, falling back to `SERVICE`.
    pub fn from_args_or_env(mut args: impl Iterator<Item = String>) -> Result<Self, ConfigError> {
        match args.nth(1).or_else(|| env::var("SERVICE").ok()) {
            Some(name) => name.parse(),
            None => Err(ConfigError::MissingService),
        }
    }
}

impl FromStr for Service {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gerenciamento" => Ok(Service::Gerenciamento),
            "atividades" | "atividades-notas" | "notas" => Ok(Service::Atividades),
            "reservas" => Ok(Service::Reservas),
            other => Err(ConfigError::UnknownService(other.to_string())),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service: Service,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Base URL of the Gerenciamento service; only the reservas service reads it.
    pub gerenciamento_url: Option<String>,
}

impl Config {
    pub fn new_from_env(service: Service) -> Result<Self, ConfigError> {
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    fn from_lookup(
        service: Service,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| service.default_database_url().to_string());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => service.default_bind_addr(),
        };

        let gerenciamento_url = lookup("GERENCIAMENTO_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            service,
            database_url,
            bind_addr,
            gerenciamento_url,
        })
    }
}
