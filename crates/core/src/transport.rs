//! HTTP transport shared by every dispatch in an adapter process.
//!
//! One pooled `reqwest::Client` is built at startup and injected into the
//! dispatcher; every tool call is exactly one network round trip with no
//! implicit retry.

use crate::config::AdapterConfig;
use crate::error::{VeneerError, VeneerResult};
use reqwest::{header, Client, Method, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for vendor API requests.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    config: Arc<AdapterConfig>,
}

impl Transport {
    /// Build a transport from adapter configuration. The bearer token,
    /// when present, is attached to every request as a default header.
    pub fn new(config: Arc<AdapterConfig>) -> VeneerResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref token) = config.access_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| VeneerError::Config("Invalid access token format".to_string()))?,
            );
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Issue one request and translate the response. Query parameters
    /// attach for GET/DELETE, a JSON body for POST/PATCH/PUT.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> VeneerResult<Value> {
        let url = self.config.join(path)?;
        debug!(method = %method, url = %url, "vendor request");

        let mut request = self.client.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::translate(response).await
    }

    /// Map the two special-cased statuses, pass everything else through
    /// either as the JSON body or as an API error.
    async fn translate(response: Response) -> VeneerResult<Value> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            return Err(VeneerError::RateLimited { retry_after });
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(VeneerError::Authentication);
        }

        let text = response.text().await?;

        if !status.is_success() {
            return Err(VeneerError::Api {
                status: status.as_u16(),
                message: extract_message(&text),
            });
        }

        if text.is_empty() {
            // 204 and friends.
            return Ok(Value::Null);
        }
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(text)),
        }
    }
}

/// Pull a human-readable message out of a vendor error body.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> Transport {
        let config = AdapterConfig::new(url::Url::parse(&server.uri()).unwrap());
        Transport::new(Arc::new(config)).unwrap()
    }

    fn transport_with_token(server: &MockServer, token: &str) -> Transport {
        let config = AdapterConfig::new(url::Url::parse(&server.uri()).unwrap())
            .with_access_token(token);
        Transport::new(Arc::new(config)).unwrap()
    }

    #[tokio::test]
    async fn get_returns_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let value = transport_for(&server)
            .execute(Method::GET, "/gists", &[], None)
            .await
            .unwrap();
        assert_eq!(value, json!({"success": true}));
    }

    #[tokio::test]
    async fn bearer_token_is_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("Authorization", "Bearer gho_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": "octocat"})))
            .expect(1)
            .mount(&server)
            .await;

        let value = transport_with_token(&server, "gho_test")
            .execute(Method::GET, "/user", &[], None)
            .await
            .unwrap();
        assert_eq!(value["login"], "octocat");
    }

    #[tokio::test]
    async fn query_parameters_are_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gists"))
            .and(query_param("since", "2024-01-01T00:00:00Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let query = vec![("since".to_string(), "2024-01-01T00:00:00Z".to_string())];
        let value = transport_for(&server)
            .execute(Method::GET, "/gists", &query, None)
            .await
            .unwrap();
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn rate_limit_with_retry_after_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
            .expect(1)
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .execute(Method::GET, "/gists", &[], None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("30"), "got: {}", err);
    }

    #[tokio::test]
    async fn rate_limit_without_retry_after_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .execute(Method::GET, "/gists", &[], None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unknown"), "got: {}", err);
    }

    #[tokio::test]
    async fn unauthorized_has_fixed_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .execute(Method::GET, "/user", &[], None)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Authentication failed - access token may be expired"
        );
    }

    #[tokio::test]
    async fn other_errors_pass_through_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})),
            )
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .execute(Method::GET, "/missing", &[], None)
            .await
            .unwrap_err();
        match err {
            VeneerError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rate_limit_is_not_retried() {
        let server = MockServer::start().await;
        // expect(1) fails the test if the transport retries.
        Mock::given(method("GET"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "1"))
            .expect(1)
            .mount(&server)
            .await;

        let _ = transport_for(&server)
            .execute(Method::GET, "/gists", &[], None)
            .await;
    }

    #[tokio::test]
    async fn empty_body_maps_to_null() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/gists/abc/star"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let value = transport_for(&server)
            .execute(Method::PUT, "/gists/abc/star", &[], None)
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gists"))
            .and(wiremock::matchers::body_json(json!({"files": {"a.txt": {"content": "hi"}}})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "abc"})))
            .mount(&server)
            .await;

        let body = json!({"files": {"a.txt": {"content": "hi"}}});
        let value = transport_for(&server)
            .execute(Method::POST, "/gists", &[], Some(&body))
            .await
            .unwrap();
        assert_eq!(value["id"], "abc");
    }
}
