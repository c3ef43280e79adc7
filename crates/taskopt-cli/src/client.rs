//! HTTP client for the taskopt server.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use taskopt_core::Task;

use crate::error::ClientError;

/// Server reply to a task submission.
#[derive(Debug, Deserialize)]
pub struct AppendResponse {
    pub added: usize,
    pub pool_size: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP client for the task endpoints.
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if the server is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = self.url("/health");
        debug!(url = %url, "Checking health");

        let response = self.inner.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    /// List pending tasks.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let url = self.url("/tasks");
        debug!(url = %url, "GET request");

        let response = self.inner.get(&url).send().await?;
        decode(response).await
    }

    /// Submit a batch of tasks.
    pub async fn add_tasks(&self, tasks: &[Task]) -> Result<AppendResponse, ClientError> {
        let url = self.url("/tasks");
        debug!(url = %url, count = tasks.len(), "POST request");

        let response = self.inner.post(&url).json(tasks).send().await?;
        decode(response).await
    }

    /// Trigger an optimization pass and return the selected tasks.
    pub async fn execute(&self) -> Result<Vec<Task>, ClientError> {
        let url = self.url("/tasks/execution");
        debug!(url = %url, "POST request");

        let response = self.inner.post(&url).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
