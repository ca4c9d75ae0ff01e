//! HTTP client adapter for the Asana API.
//!
//! This is the only place network and error-classification logic lives; every
//! tool delegates here. Outcomes are classified into the typed [`Error`]
//! taxonomy: 429 becomes a retryable rate-limit error with a wait hint,
//! 401/403 an authentication error, 404 a not-found error naming the path,
//! and any other non-2xx a generic API error carrying the status code.

use serde::de::DeserializeOwned;

use crate::error::DEFAULT_RETRY_AFTER_SECS;
use crate::types::{DataWrapper, ListWrapper, Page};
use crate::Error;

const BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Client for interacting with the Asana API on behalf of one tenant.
#[derive(Debug, Clone)]
pub struct AsanaClient {
    http: reqwest::Client,
    base_url: String,
}

impl AsanaClient {
    /// Create a new client with the given access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot form a header value or the HTTP
    /// client cannot be initialized.
    pub fn new(token: &str) -> Result<Self, Error> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|_| Error::InvalidToken)?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at a different base URL (deployment override, tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Make a GET request to the API and deserialize the unwrapped response.
    ///
    /// The `path` should be the API endpoint path without the base URL (e.g.,
    /// "/users/me"). Query parameters can be passed via the `query` slice.
    pub async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;

        self.handle_response::<DataWrapper<T>>(path, response)
            .await
            .map(|wrapper| wrapper.data)
    }

    /// Make a GET request for one page of a list result.
    ///
    /// `limit` and `offset` are forwarded as query parameters; the API's
    /// `next_page.offset` is exposed unmodified as [`Page::next_offset`].
    pub async fn get_page<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        limit: u32,
        offset: Option<&str>,
    ) -> Result<Page<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let limit_value = limit.to_string();

        let mut query = query.to_vec();
        query.push(("limit", limit_value.as_str()));
        if let Some(offset) = offset {
            query.push(("offset", offset));
        }

        let response = self.http.get(&url).query(&query).send().await?;

        let wrapper: ListWrapper<T> = self.handle_response(path, response).await?;
        Ok(Page {
            items: wrapper.data,
            next_offset: wrapper.next_page.map(|next| next.offset),
        })
    }

    /// Make a POST request to create a resource and deserialize the response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.post(&url).json(body).send().await?;

        self.handle_response::<DataWrapper<T>>(path, response)
            .await
            .map(|wrapper| wrapper.data)
    }

    /// Make a PUT request to update a resource and deserialize the response.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.put(&url).json(body).send().await?;

        self.handle_response::<DataWrapper<T>>(path, response)
            .await
            .map(|wrapper| wrapper.data)
    }

    /// Make a POST request that needs no response body (relationship
    /// operations like addProject/removeFollowers).
    pub async fn post_empty<B>(&self, path: &str, body: &B) -> Result<(), Error>
    where
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.post(&url).json(body).send().await?;

        self.handle_empty_response(path, response).await
    }

    /// Make a DELETE request to remove a resource.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.delete(&url).send().await?;

        self.handle_empty_response(path, response).await
    }

    /// Handle an API response, classifying errors as appropriate.
    async fn handle_response<T>(&self, path: &str, response: reqwest::Response) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(Error::Parse)
        } else {
            Err(classify_error(path, response).await)
        }
    }

    /// Handle an API response whose body is irrelevant (2xx/204 → success).
    async fn handle_empty_response(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<(), Error> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(classify_error(path, response).await)
        }
    }
}

/// Convert a non-2xx response into a typed [`Error`].
async fn classify_error(path: &str, response: reqwest::Response) -> Error {
    use reqwest::StatusCode;

    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return Error::RateLimited { retry_after_secs };
    }

    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let message = extract_error_message(&body)
                .unwrap_or_else(|| "access token rejected".to_string());
            Error::Auth { message }
        }
        StatusCode::NOT_FOUND => {
            let message =
                extract_error_message(&body).unwrap_or_else(|| "resource not found".to_string());
            Error::NotFound {
                path: path.to_string(),
                message,
            }
        }
        _ => {
            let message = extract_error_message(&body).unwrap_or_else(|| {
                format!(
                    "HTTP {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            });
            Error::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// Extract the error message from an Asana API error response.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        errors: Vec<ErrorDetail>,
    }

    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.errors.into_iter().next())
        .map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    /// Custom matcher that matches requests without an "offset" query parameter.
    struct NoOffset;

    impl Match for NoOffset {
        fn matches(&self, request: &Request) -> bool {
            !request.url.query_pairs().any(|(k, _)| k == "offset")
        }
    }

    #[test]
    fn test_new_client() {
        let client = AsanaClient::new("test-token").unwrap();
        assert_eq!(client.base_url(), BASE_URL);
    }

    #[test]
    fn test_token_with_control_characters_is_rejected() {
        let result = AsanaClient::new("bad\ntoken");
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    /// Simple test type for HTTP tests.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct TestItem {
        gid: String,
        name: String,
    }

    /// Create a test client pointing at the mock server.
    fn test_client(server: &MockServer) -> AsanaClient {
        AsanaClient::new("test-token")
            .unwrap()
            .with_base_url(&server.uri())
    }

    // ========== get() tests ==========

    #[tokio::test]
    async fn test_get_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"gid": "123", "name": "Test Item"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let item: TestItem = client.get("/items/123", &[]).await.unwrap();

        assert_eq!(item.gid, "123");
        assert_eq!(item.name, "Test Item");
    }

    #[tokio::test]
    async fn test_get_with_query_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("opt_fields", "gid,name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"gid": "456", "name": "Queried Item"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let item: TestItem = client
            .get("/items", &[("opt_fields", "gid,name")])
            .await
            .unwrap();

        assert_eq!(item.gid, "456");
    }

    #[tokio::test]
    async fn test_get_404_returns_not_found_with_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/items/missing", &[]).await;

        match &result {
            Err(Error::NotFound { path, message }) => {
                assert_eq!(path, "/items/missing");
                assert_eq!(message, "resource not found");
            }
            _ => panic!("Expected NotFound error, got {:?}", result),
        }
    }

    #[tokio::test]
    async fn test_get_404_extracts_asana_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/projects/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "errors": [{"message": "project: Unknown object: 999"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/projects/999", &[]).await;

        match &result {
            Err(Error::NotFound { message, .. }) => {
                assert_eq!(message, "project: Unknown object: 999");
            }
            _ => panic!("Expected NotFound with Asana message, got {:?}", result),
        }
    }

    #[tokio::test]
    async fn test_get_401_returns_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "errors": [{"message": "Not Authorized"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/users/me", &[]).await;

        match result {
            Err(Error::Auth { message }) => assert_eq!(message, "Not Authorized"),
            _ => panic!("Expected Auth error"),
        }
    }

    #[tokio::test]
    async fn test_get_403_returns_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/forbidden"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/items/forbidden", &[]).await;

        assert!(matches!(result, Err(Error::Auth { .. })));
    }

    #[tokio::test]
    async fn test_get_429_parses_retry_after() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/tasks", &[]).await;

        match result {
            Err(Error::RateLimited { retry_after_secs }) => assert_eq!(retry_after_secs, 30),
            _ => panic!("Expected RateLimited error"),
        }
    }

    #[tokio::test]
    async fn test_get_429_without_retry_after_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/tasks", &[]).await;

        match result {
            Err(Error::RateLimited { retry_after_secs }) => {
                assert_eq!(retry_after_secs, DEFAULT_RETRY_AFTER_SECS);
            }
            _ => panic!("Expected RateLimited error"),
        }
    }

    #[tokio::test]
    async fn test_get_429_with_invalid_retry_after_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "soon"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/tasks", &[]).await;

        match result {
            Err(Error::RateLimited { retry_after_secs }) => {
                assert_eq!(retry_after_secs, DEFAULT_RETRY_AFTER_SECS);
            }
            _ => panic!("Expected RateLimited error"),
        }
    }

    #[tokio::test]
    async fn test_get_api_error_carries_status_and_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/broken"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errors": [{"message": "Invalid request data"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/items/broken", &[]).await;

        match result {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid request data");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[tokio::test]
    async fn test_get_api_error_fallback_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/error"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: Result<TestItem, Error> = client.get("/items/error", &[]).await;

        match result {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("500"));
            }
            _ => panic!("Expected Api error"),
        }
    }

    // ========== get_page() pagination tests ==========

    #[tokio::test]
    async fn test_get_page_preserves_next_offset() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("limit", "50"))
            .and(NoOffset)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"gid": "1", "name": "Item 1"},
                    {"gid": "2", "name": "Item 2"}
                ],
                "next_page": {"offset": "abc", "path": "/items?offset=abc", "uri": "https://x"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page: Page<TestItem> = client.get_page("/items", &[], 50, None).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_offset.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_get_page_without_next_page_has_no_offset() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"gid": "1", "name": "Item 1"}],
                "next_page": null
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page: Page<TestItem> = client.get_page("/items", &[], 20, None).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert!(page.next_offset.is_none());
    }

    #[tokio::test]
    async fn test_get_page_forwards_offset_and_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("workspace", "123"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"gid": "2", "name": "Item 2"}],
                "next_page": null
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page: Page<TestItem> = client
            .get_page("/items", &[("workspace", "123")], 10, Some("page2"))
            .await
            .unwrap();

        assert_eq!(page.items[0].gid, "2");
    }

    // ========== post() / put() tests ==========

    #[tokio::test]
    async fn test_post_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {"gid": "new123", "name": "Created Item"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = serde_json::json!({"data": {"name": "Created Item"}});

        let item: TestItem = client.post("/items", &body).await.unwrap();

        assert_eq!(item.gid, "new123");
        assert_eq!(item.name, "Created Item");
    }

    #[tokio::test]
    async fn test_post_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errors": [{"message": "Invalid request data"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = serde_json::json!({"data": {}});

        let result: Result<TestItem, Error> = client.post("/items", &body).await;

        match result {
            Err(Error::Api { message, .. }) => assert_eq!(message, "Invalid request data"),
            _ => panic!("Expected Api error"),
        }
    }

    #[tokio::test]
    async fn test_put_success() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/items/123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"gid": "123", "name": "Updated Item"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = serde_json::json!({"data": {"name": "Updated Item"}});

        let item: TestItem = client.put("/items/123", &body).await.unwrap();

        assert_eq!(item.name, "Updated Item");
    }

    // ========== post_empty() / delete() tests ==========

    #[tokio::test]
    async fn test_post_empty_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks/123/addProject"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = serde_json::json!({"data": {"project": "proj456"}});

        let result = client.post_empty("/tasks/123/addProject", &body).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_post_empty_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks/123/addProject"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "errors": [{"message": "Not authorized to add to project"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = serde_json::json!({"data": {"project": "proj456"}});

        let result = client.post_empty("/tasks/123/addProject", &body).await;

        match result {
            Err(Error::Auth { message }) => {
                assert_eq!(message, "Not authorized to add to project");
            }
            _ => panic!("Expected Auth error"),
        }
    }

    #[tokio::test]
    async fn test_delete_success_with_204() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/items/123"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client.delete("/items/123").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/items/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client.delete("/items/missing").await;

        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    // ========== extract_error_message tests ==========

    #[test]
    fn test_extract_error_message_valid() {
        let body = r#"{"errors": [{"message": "Project not found"}]}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Project not found".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_empty_errors() {
        let body = r#"{"errors": []}"#;
        assert_eq!(extract_error_message(body), None);
    }

    #[test]
    fn test_extract_error_message_malformed() {
        let body = "not json";
        assert_eq!(extract_error_message(body), None);
    }
}
