//! Tool dispatch: catalog lookup, path substitution, one HTTP round trip.

use crate::catalog::{Catalog, ToolDescriptor};
use crate::error::{VeneerError, VeneerResult};
use crate::transport::Transport;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

/// Resolves a tool call to exactly one vendor request. Stateless per call;
/// the transport is shared across the life of the process.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    catalog: Catalog,
    transport: Transport,
}

impl Dispatcher {
    pub fn new(catalog: Catalog, transport: Transport) -> Self {
        Self { catalog, transport }
    }

    /// The catalog's tool descriptors, for the list-tools query.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.catalog.descriptors()
    }

    /// Dispatch one tool call. An unknown tool name fails before any HTTP
    /// request is issued.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> VeneerResult<Value> {
        let endpoint = self
            .catalog
            .get(name)
            .ok_or_else(|| VeneerError::UnknownTool(name.to_string()))?;

        let args = match arguments {
            Value::Null => serde_json::Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(VeneerError::InvalidArguments(format!(
                    "tool arguments must be an object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let path = endpoint.template.render(&args)?;
        debug!(tool = name, path = %path, "dispatching");

        // Path parameters are consumed by substitution; everything else
        // rides in the query string or the JSON body depending on method.
        let rest: serde_json::Map<String, Value> = args
            .into_iter()
            .filter(|(key, _)| !endpoint.template.params().contains(key))
            .collect();

        let method = endpoint.method.clone();
        if matches!(method, Method::GET | Method::DELETE) {
            let query = to_query(&rest)?;
            self.transport.execute(method, &path, &query, None).await
        } else {
            let body = Value::Object(rest);
            self.transport
                .execute(method, &path, &[], Some(&body))
                .await
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Flatten an argument map into query pairs. Nulls are dropped, arrays of
/// scalars are comma-joined, nested objects have no query representation.
fn to_query(args: &serde_json::Map<String, Value>) -> VeneerResult<Vec<(String, String)>> {
    let mut query = Vec::with_capacity(args.len());
    for (key, value) in args {
        match value {
            Value::Null => {}
            Value::String(s) => query.push((key.clone(), s.clone())),
            Value::Number(n) => query.push((key.clone(), n.to_string())),
            Value::Bool(b) => query.push((key.clone(), b.to_string())),
            Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => parts.push(s.clone()),
                        Value::Number(n) => parts.push(n.to_string()),
                        Value::Bool(b) => parts.push(b.to_string()),
                        _ => {
                            return Err(VeneerError::InvalidArguments(format!(
                                "query parameter '{}' contains a non-scalar element",
                                key
                            )))
                        }
                    }
                }
                query.push((key.clone(), parts.join(",")));
            }
            Value::Object(_) => {
                return Err(VeneerError::InvalidArguments(format!(
                    "query parameter '{}' cannot be an object",
                    key
                )))
            }
        }
    }
    Ok(query)
}
