use anyhow::{anyhow, Result};
use reqwest::{Client, Response};
use shared::{
    error::{ApiError, ApiException},
    protocol::{RoverCommandRequest, RoverCommandResponse, WelcomeResponse},
};
use tracing::debug;

/// HTTP client for a running rover server.
#[derive(Debug, Clone)]
pub struct RoverClient {
    http: Client,
    server_url: String,
}

impl RoverClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn welcome(&self) -> Result<WelcomeResponse> {
        let res = self
            .http
            .get(format!("{}/", self.server_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    /// Posts a command request. Rejections carrying an [`ApiError`] body come
    /// back as [`ApiException`] so callers can downcast on the error code.
    pub async fn command(&self, request: &RoverCommandRequest) -> Result<RoverCommandResponse> {
        debug!(
            server_url = %self.server_url,
            commands = request.command_count(),
            "sending rover commands"
        );
        let res = self
            .http
            .post(format!("{}/rover/command", self.server_url))
            .json(request)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(rejection(res).await);
        }
        Ok(res.json().await?)
    }
}

async fn rejection(res: Response) -> anyhow::Error {
    let status = res.status();
    let body = match res.bytes().await {
        Ok(body) => body,
        Err(err) => return anyhow!("server returned {status}: {err}"),
    };
    match serde_json::from_slice::<ApiError>(&body) {
        Ok(api_error) => ApiException::from(api_error).into(),
        Err(_) => anyhow!(
            "server returned {status}: {}",
            String::from_utf8_lossy(&body)
        ),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
