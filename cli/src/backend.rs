//! Async REST transport for the terminal client.
//!
//! ERROR HANDLING
//! ==============
//! Mirrors the browser transport: anything reqwest cannot deliver becomes
//! `ApiError::Network`, and every answered request is decoded through
//! `wire::decode_response` so the CLI reports the same error categories.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wire::endpoints;
use wire::types::ValidatedSession;
use wire::{ApiError, AuthBackend, Reply, User};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and decode the envelope into `T`.
    pub async fn call<T, B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<Reply<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = endpoints::url(&self.base_url, path);
        tracing::debug!(%method, %url, "backend request");
        let mut request = self.client.request(method, &url);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, wire::envelope::bearer(token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
        wire::decode_response(status, &bytes)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Reply<Value>, ApiError> {
        self.call::<Value, Value>(Method::GET, path, token, None).await
    }

    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<Reply<Value>, ApiError> {
        self.call(method, path, token, Some(body)).await
    }
}

impl AuthBackend for HttpBackend {
    async fn validate_session(&self, token: &str) -> Result<User, ApiError> {
        self.call::<ValidatedSession, Value>(Method::GET, endpoints::VALIDATE_SESSION, Some(token), None)
            .await
            .map(|reply| reply.data.user)
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.call::<Value, Value>(Method::POST, endpoints::LOGOUT, Some(token), None).await.map(|_| ())
    }
}
