//! Client for the Gerenciamento service, which owns professores, turmas and
//! alunos. Other services use it to check that a foreign id exists before
//! storing a reference to it.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::AppError;

#[async_trait]
pub trait GerenciamentoClient: Send + Sync {
    /// Looks up `GET {base}/{collection}/{id}`.
    ///
    /// `Ok(false)` means the remote answered 404. Transport failures and any
    /// other non-success status are `AppError::BadGateway`.
    async fn exists(&self, collection: &str, id: i64) -> Result<bool, AppError>;
}

pub struct GerenciamentoHttpClient {
    client: Client,
    base_url: String,
}

impl GerenciamentoHttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GerenciamentoClient for GerenciamentoHttpClient {
    async fn exists(&self, collection: &str, id: i64) -> Result<bool, AppError> {
        let url = format!("{}/{}/{}", self.base_url, collection, id);
        debug!("checking {} {} at {}", collection, id, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::BadGateway(format!("Gerenciamento service unreachable: {}", e))
        })?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(AppError::BadGateway(format!(
                "Gerenciamento service answered {} for {} {}",
                status, collection, id
            ))),
        }
    }
}

/// Accepts every id. Used when no Gerenciamento URL is configured.
pub struct NoopGerenciamentoClient;

#[async_trait]
impl GerenciamentoClient for NoopGerenciamentoClient {
    async fn exists(&self, _collection: &str, _id: i64) -> Result<bool, AppError> {
        Ok(true)
    }
}
