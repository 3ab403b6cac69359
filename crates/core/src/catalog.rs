//! Tool catalog: the static table of operations an adapter advertises.
//!
//! An [`Endpoint`] is the single source of truth for one vendor operation.
//! Tool input schemas are generated from the endpoint definition rather
//! than maintained by hand, so the advertised schema, the required list,
//! and the dispatcher's path substitution can never drift apart.

use crate::error::{VeneerError, VeneerResult};
use crate::template::PathTemplate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// A tool as advertised over MCP: name, description, and a JSON schema
/// describing the input object. Process-lifetime constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// JSON type of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamType {
    fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// A declared query/body parameter. Path parameters are implied by the
/// endpoint's template and never declared here.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
}

/// Definition of one vendor operation.
#[derive(Debug, Clone)]
pub struct Endpoint {
    name: String,
    description: String,
    method: Method,
    path: String,
    params: Vec<ParamSpec>,
}

impl Endpoint {
    pub fn new(method: Method, path: &str, name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            method,
            path: path.to_string(),
            params: Vec::new(),
        }
    }

    /// Declare an optional query/body parameter.
    pub fn optional(mut self, name: &str, param_type: ParamType, description: &str) -> Self {
        self.params.push(ParamSpec {
            name: name.to_string(),
            param_type,
            description: description.to_string(),
            required: false,
        });
        self
    }

    /// Declare a required query/body parameter.
    pub fn required(mut self, name: &str, param_type: ParamType, description: &str) -> Self {
        self.params.push(ParamSpec {
            name: name.to_string(),
            param_type,
            description: description.to_string(),
            required: true,
        });
        self
    }
}

/// A compiled endpoint: template parsed, descriptor generated.
#[derive(Debug, Clone)]
pub struct CompiledEndpoint {
    pub name: String,
    pub method: Method,
    pub template: PathTemplate,
    pub descriptor: ToolDescriptor,
}

/// The read-only list of tools an adapter serves. Built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    endpoints: Vec<CompiledEndpoint>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Compile endpoint definitions into a catalog. Fails on a malformed
    /// path template, a duplicate tool name, or a declared parameter that
    /// collides with a path placeholder.
    pub fn build(definitions: Vec<Endpoint>) -> VeneerResult<Self> {
        let mut endpoints = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for def in definitions {
            let template = PathTemplate::parse(&def.path)?;

            for param in &def.params {
                if template.params().contains(&param.name) {
                    return Err(VeneerError::Config(format!(
                        "tool '{}' declares parameter '{}' which is already a path placeholder",
                        def.name, param.name
                    )));
                }
            }

            let descriptor = build_descriptor(&def, &template);
            let position = endpoints.len();
            if index.insert(def.name.clone(), position).is_some() {
                return Err(VeneerError::Config(format!(
                    "duplicate tool name '{}'",
                    def.name
                )));
            }
            endpoints.push(CompiledEndpoint {
                name: def.name,
                method: def.method,
                template,
                descriptor,
            });
        }

        Ok(Self { endpoints, index })
    }

    /// Look up an endpoint by tool name.
    pub fn get(&self, name: &str) -> Option<&CompiledEndpoint> {
        self.index.get(name).map(|&i| &self.endpoints[i])
    }

    /// All tool descriptors, in declaration order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.endpoints.iter().map(|e| e.descriptor.clone()).collect()
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

fn build_descriptor(def: &Endpoint, template: &PathTemplate) -> ToolDescriptor {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for param in template.params() {
        properties.insert(
            param.clone(),
            json!({
                "type": "string",
                "description": format!("Path parameter: {}", param),
            }),
        );
        required.push(param.clone());
    }

    for param in &def.params {
        properties.insert(
            param.name.clone(),
            json!({
                "type": param.param_type.as_str(),
                "description": param.description,
            }),
        );
        if param.required {
            required.push(param.name.clone());
        }
    }

    ToolDescriptor {
        name: def.name.clone(),
        description: def.description.clone(),
        input_schema: json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::build(vec![
            Endpoint::new(Method::GET, "/gists", "gists_list", "List gists")
                .optional("since", ParamType::String, "Only gists updated after this time"),
            Endpoint::new(
                Method::POST,
                "/repos/{owner}/{repo}/issues",
                "issues_create",
                "Create an issue",
            )
            .required("title", ParamType::String, "Issue title")
            .optional("body", ParamType::String, "Issue body"),
        ])
        .unwrap()
    }

    #[test]
    fn descriptor_schema_is_an_object_with_properties() {
        for descriptor in sample().descriptors() {
            let schema = &descriptor.input_schema;
            assert_eq!(schema["type"], "object");
            assert!(schema["properties"].is_object());
            assert!(schema["required"].is_array());
        }
    }

    #[test]
    fn path_placeholders_become_required_string_properties() {
        let catalog = sample();
        let schema = &catalog.get("issues_create").unwrap().descriptor.input_schema;
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"owner"));
        assert!(required.contains(&"repo"));
        assert!(required.contains(&"title"));
        assert!(!required.contains(&"body"));
        assert_eq!(schema["properties"]["owner"]["type"], "string");
        assert_eq!(
            schema["properties"]["owner"]["description"],
            "Path parameter: owner"
        );
    }

    #[test]
    fn declared_params_carry_their_type() {
        let catalog = sample();
        let schema = &catalog.get("gists_list").unwrap().descriptor.input_schema;
        assert_eq!(schema["properties"]["since"]["type"], "string");
        let required = schema["required"].as_array().unwrap();
        assert!(required.is_empty());
    }

    #[test]
    fn lookup_by_name() {
        let catalog = sample();
        assert!(catalog.get("gists_list").is_some());
        assert!(catalog.get("nope").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Catalog::build(vec![
            Endpoint::new(Method::GET, "/a", "dup", "first"),
            Endpoint::new(Method::GET, "/b", "dup", "second"),
        ])
        .unwrap_err();
        assert!(matches!(err, VeneerError::Config(_)));
    }

    #[test]
    fn param_colliding_with_placeholder_is_rejected() {
        let err = Catalog::build(vec![Endpoint::new(
            Method::GET,
            "/gists/{gist_id}",
            "gists_get",
            "Get a gist",
        )
        .optional("gist_id", ParamType::String, "shadowed")])
        .unwrap_err();
        assert!(matches!(err, VeneerError::Config(_)));
    }

    #[test]
    fn malformed_template_fails_at_build_time() {
        let err = Catalog::build(vec![Endpoint::new(
            Method::GET,
            "/gists/{gist_id",
            "gists_get",
            "Get a gist",
        )])
        .unwrap_err();
        assert!(matches!(err, VeneerError::Template { .. }));
    }
}
