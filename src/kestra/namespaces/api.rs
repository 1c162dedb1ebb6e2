//! Namespace API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::kestra::models::PagedResults;
use crate::kestra::KestraClient;

use super::models::NamespaceEntry;

impl KestraClient {
    /// Search namespaces, optionally filtered by a query string
    pub async fn search_namespaces(
        &self,
        query: Option<&str>,
        page: u32,
        size: u32,
    ) -> Result<(PagedResults<NamespaceEntry>, serde_json::Value)> {
        let mut url = format!(
            "{}/{}?page={}&size={}",
            self.base_url(),
            api::NAMESPACES_SEARCH,
            page,
            size
        );
        if let Some(query) = query {
            url.push_str(&format!("&q={}", urlencoding::encode(query)));
        }
        debug!("Searching namespaces: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_with_raw(response, "Namespaces").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KestraError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_namespaces_success() {
        let mock_server = MockServer::start().await;
        let client = KestraClient::test_client(&mock_server.uri());

        let response_body = serde_json::json!({
            "results": [
                {"id": "company.team", "deleted": false},
                {"id": "dev", "deleted": false}
            ],
            "total": 2
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/main/namespaces/search"))
            .and(query_param("page", "1"))
            .and(query_param("size", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let (page, raw) = client.search_namespaces(None, 1, 100).await.unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total, 2);
        assert_eq!(page.results[0].id(), "company.team");
        assert!(raw["results"].is_array());
    }

    #[tokio::test]
    async fn test_search_namespaces_with_query() {
        let mock_server = MockServer::start().await;
        let client = KestraClient::test_client(&mock_server.uri());

        let response_body = serde_json::json!({
            "results": [{"id": "dev.team"}],
            "total": 1
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/main/namespaces/search"))
            .and(query_param("q", "dev team"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let (page, _raw) = client
            .search_namespaces(Some("dev team"), 1, 100)
            .await
            .unwrap();
        assert_eq!(page.results.len(), 1);
    }

    #[tokio::test]
    async fn test_search_namespaces_server_error() {
        let mock_server = MockServer::start().await;
        let client = KestraClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v1/main/namespaces/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = client.search_namespaces(None, 1, 100).await.unwrap_err();
        match err {
            KestraError::Server { status, .. } => assert_eq!(status, 503),
            other => panic!("Expected Server error, got {:?}", other),
        }
    }
}
