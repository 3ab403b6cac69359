//! MCP server loop: newline-delimited JSON-RPC 2.0 over stdin/stdout.
//!
//! One request is handled to completion before the next line is read;
//! there is no cross-call state beyond the shared HTTP transport.

use crate::protocol::*;
use anyhow::Result;
use futures_util::StreamExt;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio_util::codec::{FramedRead, LinesCodec};
use veneer_core::Dispatcher;

pub struct McpServer {
    name: String,
    version: String,
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(name: impl Into<String>, version: impl Into<String>, dispatcher: Dispatcher) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dispatcher,
        }
    }

    /// Serve requests from stdin until EOF. Logging goes to stderr; stdout
    /// carries only protocol frames.
    pub async fn run(self) -> Result<()> {
        let mut lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new());
        let mut stdout = tokio::io::stdout();

        tracing::info!(
            server = %self.name,
            tools = self.dispatcher.descriptors().len(),
            "MCP server running on stdio"
        );

        while let Some(line) = lines.next().await {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(request) => self.handle(request).await,
                Err(_) => Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(),
                )),
            };

            if let Some(response) = response {
                let frame = serde_json::to_string(&response)?;
                stdout.write_all(frame.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        tracing::info!(server = %self.name, "stdin closed, shutting down");
        Ok(())
    }

    /// Handle one request. Notifications produce no response.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification");
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.dispatcher.descriptors(),
                },
            ),
            "tools/call" => {
                let params = match request
                    .params
                    .map(serde_json::from_value::<CallToolParams>)
                    .transpose()
                {
                    Ok(Some(params)) => params,
                    Ok(None) | Err(_) => {
                        return Some(JsonRpcResponse::error(
                            id,
                            JsonRpcError::invalid_params("expected {name, arguments}"),
                        ))
                    }
                };
                match self.call_tool(params).await {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(error) => JsonRpcResponse::error(id, error),
                }
            }
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };
        Some(response)
    }

    /// Dispatch one tool call. Resolution failures (unknown tool, bad
    /// arguments) are protocol errors; anything after the vendor call has
    /// been attempted comes back as an in-band error result.
    async fn call_tool(&self, params: CallToolParams) -> Result<CallToolResult, JsonRpcError> {
        match self.dispatcher.dispatch(&params.name, params.arguments).await {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value)
                    .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
                Ok(CallToolResult::text(text))
            }
            Err(err) if err.is_resolution_error() => {
                tracing::warn!(tool = %params.name, error = %err, "tool call rejected");
                Err(JsonRpcError::invalid_params(err.to_string()))
            }
            Err(err) => {
                tracing::warn!(tool = %params.name, error = %err, "vendor call failed");
                Ok(CallToolResult::error(err.to_string()))
            }
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: self.name.clone(),
                version: self.version.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use veneer_core::{AdapterConfig, Catalog, Endpoint, Method, ParamType, Transport};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(mock: &MockServer) -> McpServer {
        let catalog = Catalog::build(vec![
            Endpoint::new(Method::GET, "/gists", "gists_list", "List gists")
                .optional("since", ParamType::String, "Updated-after filter"),
            Endpoint::new(Method::GET, "/gists/{gist_id}", "gists_get", "Get a gist"),
        ])
        .unwrap();
        let config = AdapterConfig::new(url::Url::parse(&mock.uri()).unwrap());
        let dispatcher = Dispatcher::new(catalog, Transport::new(Arc::new(config)).unwrap());
        McpServer::new("github-gists", "0.1.0", dispatcher)
    }

    fn request(id: i64, method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    #[tokio::test]
    async fn initialize_reports_server_info() {
        let mock = MockServer::start().await;
        let response = server_for(&mock)
            .handle(request(1, "initialize", json!({})))
            .await
            .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "github-gists");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn tools_list_returns_the_catalog() {
        let mock = MockServer::start().await;
        let response = server_for(&mock)
            .handle(request(2, "tools/list", json!({})))
            .await
            .unwrap();
        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "gists_list");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn tools_call_pretty_prints_the_vendor_json() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&mock)
            .await;

        let response = server_for(&mock)
            .handle(request(
                3,
                "tools/call",
                json!({"name": "gists_list", "arguments": {}}),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert!(result.get("isError").is_none());
        let text = result["content"][0]["text"].as_str().unwrap();
        assert_eq!(
            text,
            serde_json::to_string_pretty(&json!({"success": true})).unwrap()
        );
    }

    #[tokio::test]
    async fn unknown_tool_is_a_protocol_error() {
        let mock = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock)
            .await;

        let response = server_for(&mock)
            .handle(request(
                4,
                "tools/call",
                json!({"name": "gists_frobnicate", "arguments": {}}),
            ))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Unknown tool: gists_frobnicate");
    }

    #[tokio::test]
    async fn vendor_failure_becomes_an_in_band_error_result() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gists/abc"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
            .mount(&mock)
            .await;

        let response = server_for(&mock)
            .handle(request(
                5,
                "tools/call",
                json!({"name": "gists_get", "arguments": {"gist_id": "abc"}}),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("30"), "got: {}", text);
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let mock = MockServer::start().await;
        let response = server_for(&mock)
            .handle(request(6, "resources/list", json!({})))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn notifications_produce_no_response() {
        let mock = MockServer::start().await;
        let notification = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: None,
        };
        assert!(server_for(&mock).handle(notification).await.is_none());
    }
}
