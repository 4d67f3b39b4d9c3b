//! HTTP API Client
//!
//! Thin wrapper over `gloo-net` for the Quiz Master server. Requests resolve
//! to an [`ApiResponse`] holding the status and raw body; callers decide what
//! a given status means for them.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::types::{Credentials, Registration};
use crate::config::{page_origin, Config};
use crate::error::{AppError, AppResult};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const SUBJECTS_PATH: &str = "/api/subjects";

/// Client bound to one API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    auth_header: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, auth_header: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            auth_header: auth_header.into(),
        }
    }

    /// Build a client for the configured (or same-origin) server
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base(&page_origin()), config.api.auth_header.clone())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `POST /login`
    pub async fn login(&self, credentials: &Credentials) -> AppResult<ApiResponse> {
        tracing::debug!(email = %credentials.email, "Submitting login");
        self.post_json(LOGIN_PATH, credentials).await
    }

    /// `POST /register`
    pub async fn register(&self, registration: &Registration) -> AppResult<ApiResponse> {
        tracing::debug!(email = %registration.email, "Submitting registration");
        self.post_json(REGISTER_PATH, registration).await
    }

    /// `GET /api/subjects`, authenticated with the session token when one is held
    pub async fn fetch_subjects(&self, token: Option<&str>) -> AppResult<ApiResponse> {
        let mut request = Request::get(&self.url(SUBJECTS_PATH));
        if let Some(token) = token {
            request = request.header(&self.auth_header, token);
        }

        let response = request.send().await?;
        ApiResponse::read(response).await
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> AppResult<ApiResponse> {
        let response = Request::post(&self.url(path))
            .json(body)?
            .send()
            .await?;

        ApiResponse::read(response).await
    }
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    async fn read(response: Response) -> AppResult<Self> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status, url = %response.url(), "API response");
        Ok(Self { status, body })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`AppError::Http`] carrying the server's message
    pub fn error_for_status(self) -> AppResult<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| default_message(self.status));

        Err(AppError::Http {
            status: self.status,
            message,
        })
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

fn default_message(status: u16) -> String {
    match status {
        401 => "Please log in to continue".to_string(),
        403 => "You are not allowed to view this".to_string(),
        404 => "Not found".to_string(),
        _ => format!("Request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Subject;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:5000/", "Authentication-Token");
        assert_eq!(client.url(LOGIN_PATH), "http://localhost:5000/login");
        assert_eq!(client.url(SUBJECTS_PATH), "http://localhost:5000/api/subjects");
    }

    #[test]
    fn test_same_origin_client_uses_relative_paths() {
        let client = ApiClient::new("", "Authentication-Token");
        assert_eq!(client.url(REGISTER_PATH), "/register");
    }

    #[test]
    fn test_success_passes_through() {
        let response = ApiResponse::new(200, "[]");
        assert!(response.is_success());
        let subjects: Vec<Subject> = response.error_for_status().unwrap().json().unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn test_error_uses_server_message() {
        let err = ApiResponse::new(400, r#"{"message": "Invalid Email"}"#)
            .error_for_status()
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Http {
                status: 400,
                message: "Invalid Email".to_string()
            }
        );
    }

    #[test]
    fn test_error_without_json_body() {
        let err = ApiResponse::new(500, "<h1>Internal Server Error</h1>")
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 500");

        let err = ApiResponse::new(401, "").error_for_status().unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_json_parse_error() {
        let response = ApiResponse::new(200, "not json");
        let result: AppResult<Vec<Subject>> = response.json();
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
