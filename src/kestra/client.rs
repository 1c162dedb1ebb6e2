//! Kestra HTTP client

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::api;
use crate::context::Credentials;
use crate::error::{KestraError, Result};

/// Kestra API client
///
/// Wraps a pooled `reqwest::Client` with bearer authentication and the
/// tenant-scoped base URL. One instance performs exactly one API call per
/// CLI invocation; the pool settings only matter for connection reuse
/// within that call.
pub struct KestraClient {
    client: Client,
    credentials: Credentials,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl KestraClient {
    /// Create a new client with fixed connection settings
    pub fn new(credentials: Credentials) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            base_url_override: None,
        }
    }

    /// Create a client whose scheme and host are replaced by a mock server
    #[cfg(test)]
    pub fn with_base_url(credentials: Credentials, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            base_url_override: Some(base_url),
        }
    }

    /// Tenant the client operates against
    pub fn tenant(&self) -> &str {
        &self.credentials.tenant
    }

    /// Build the tenant-scoped base URL for API requests.
    ///
    /// Hosts given without a scheme default to https; full URLs
    /// (http://localhost:8080 style) are used as-is.
    pub(crate) fn base_url(&self) -> String {
        let root = match &self.base_url_override {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let host = self.credentials.host.trim_end_matches('/');
                if host.starts_with("http://") || host.starts_with("https://") {
                    host.to_string()
                } else {
                    format!("https://{}", host)
                }
            }
        };
        format!("{}{}/{}", root, api::BASE_PATH, self.credentials.tenant)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.credentials.token))
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Create a POST request builder carrying a YAML body
    pub(crate) fn post_yaml(&self, url: &str, body: String) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.credentials.token))
            .header("Content-Type", "application/x-yaml")
            .body(body)
    }

    /// Parse a successful response into a typed model plus the raw JSON
    /// payload (kept verbatim for --output json), mapping error statuses
    /// onto the error taxonomy
    pub(crate) async fn parse_with_raw<T>(
        &self,
        response: reqwest::Response,
        resource_label: &str,
    ) -> Result<(T, serde_json::Value)>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(self.api_error(response, resource_label).await);
        }
        let raw: serde_json::Value = response.json().await?;
        let item: T = serde_json::from_value(raw.clone()).map_err(|e| {
            KestraError::Json(format!("Failed to parse {}: {}", resource_label, e))
        })?;
        Ok((item, raw))
    }

    /// Map a non-success response onto the typed error taxonomy.
    ///
    /// The server's own `message` field is surfaced when the body carries
    /// one; otherwise a generic message names the resource.
    pub(crate) async fn api_error(
        &self,
        response: reqwest::Response,
        resource_label: &str,
    ) -> KestraError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let detail = extract_error_message(&body);
        debug!("API error {} for {}: {:?}", status, resource_label, detail);

        match status {
            401 | 403 => KestraError::Auth {
                status,
                message: detail
                    .unwrap_or_else(|| format!("Access denied for {}", resource_label)),
            },
            404 => KestraError::NotFound(
                detail.unwrap_or_else(|| format!("{} not found", resource_label)),
            ),
            400..=499 => KestraError::Validation {
                status: Some(status),
                message: detail
                    .unwrap_or_else(|| format!("Request rejected for {}", resource_label)),
            },
            _ => KestraError::Server {
                status,
                message: detail
                    .unwrap_or_else(|| format!("Request failed for {}", resource_label)),
            },
        }
    }
}

/// Pull the "message" field out of a JSON error body, if there is one
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
impl KestraClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            Credentials {
                host: "mock.kestra.local".to_string(),
                tenant: "main".to_string(),
                token: "test-token".to_string(),
            },
            base_url.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(host: &str, tenant: &str) -> KestraClient {
        KestraClient::new(Credentials {
            host: host.to_string(),
            tenant: tenant.to_string(),
            token: "tok".to_string(),
        })
    }

    #[test]
    fn test_base_url_bare_host_gets_https() {
        let client = client_for("kestra.corp.com", "main");
        assert_eq!(client.base_url(), "https://kestra.corp.com/api/v1/main");
    }

    #[test]
    fn test_base_url_keeps_http_scheme() {
        let client = client_for("http://localhost:8080", "main");
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1/main");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let client = client_for("https://kestra.corp.com/", "acme");
        assert_eq!(client.base_url(), "https://kestra.corp.com/api/v1/acme");
    }

    #[test]
    fn test_base_url_includes_tenant() {
        let client = client_for("http://localhost:8080", "staging");
        assert!(client.base_url().ends_with("/api/v1/staging"));
    }

    #[test]
    fn test_tenant_getter() {
        let client = client_for("http://localhost:8080", "acme");
        assert_eq!(client.tenant(), "acme");
    }

    #[test]
    fn test_extract_error_message_present() {
        let body = r#"{"message": "Flow not valid", "logref": null}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Flow not valid".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_absent() {
        assert_eq!(extract_error_message(r#"{"detail": "nope"}"#), None);
        assert_eq!(extract_error_message("plain text"), None);
        assert_eq!(extract_error_message(""), None);
    }
}
