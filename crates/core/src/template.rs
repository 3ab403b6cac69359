//! Named-placeholder path templates.
//!
//! Vendor endpoint paths use `{name}` placeholders (`/repos/{owner}/{repo}`).
//! Templates are parsed at catalog construction time so that a typo'd
//! placeholder fails at startup instead of leaking an unsubstituted path
//! into a live request.

use crate::error::{VeneerError, VeneerResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;

/// Characters escaped in a rendered path segment. Anything outside RFC 3986
/// pchar is covered, so a value cannot introduce new path segments, a query,
/// or a fragment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A URL path with named placeholders.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
    params: Vec<String>,
}

impl PathTemplate {
    /// Parse a template, rejecting unbalanced braces, nested braces, and
    /// empty placeholder names.
    pub fn parse(raw: &str) -> VeneerResult<Self> {
        let mut segments = Vec::new();
        let mut params = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for p in chars.by_ref() {
                        match p {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(Self::malformed(raw, "nested '{' in placeholder"));
                            }
                            _ => name.push(p),
                        }
                    }
                    if !closed {
                        return Err(Self::malformed(raw, "unmatched '{'"));
                    }
                    let name = name.trim().to_string();
                    if name.is_empty() {
                        return Err(Self::malformed(raw, "empty placeholder name"));
                    }
                    if !params.contains(&name) {
                        params.push(name.clone());
                    }
                    segments.push(Segment::Param(name));
                }
                '}' => {
                    return Err(Self::malformed(raw, "unmatched '}'"));
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            params,
        })
    }

    fn malformed(template: &str, reason: &str) -> VeneerError {
        VeneerError::Template {
            template: template.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The template as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of first appearance.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Substitute every placeholder from the argument map. A missing
    /// argument is an error; compound values cannot appear in a path.
    /// String values are percent-escaped so reserved characters stay
    /// inside their segment.
    pub fn render(&self, args: &serde_json::Map<String, Value>) -> VeneerResult<String> {
        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = args
                        .get(name)
                        .ok_or_else(|| VeneerError::MissingParameter(name.clone()))?;
                    path.push_str(&render_value(name, value)?);
                }
            }
        }
        Ok(path)
    }
}

fn render_value(name: &str, value: &Value) -> VeneerResult<String> {
    match value {
        Value::String(s) => Ok(utf8_percent_encode(s, SEGMENT).to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(VeneerError::InvalidArguments(format!(
            "path parameter '{}' must be a string, number, or boolean",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn parses_placeholders_in_order() {
        let t = PathTemplate::parse("/repos/{owner}/{repo}/pulls/{pull_number}").unwrap();
        assert_eq!(t.params(), ["owner", "repo", "pull_number"]);
    }

    #[test]
    fn literal_only_template_has_no_params() {
        let t = PathTemplate::parse("/gists/public").unwrap();
        assert!(t.params().is_empty());
        assert_eq!(t.render(&serde_json::Map::new()).unwrap(), "/gists/public");
    }

    #[test]
    fn renders_path_parameters() {
        let t = PathTemplate::parse("/repos/{owner}/{repo}/issues/{issue_number}").unwrap();
        let path = t
            .render(&args(json!({"owner": "rust-lang", "repo": "rust", "issue_number": 42})))
            .unwrap();
        assert_eq!(path, "/repos/rust-lang/rust/issues/42");
    }

    #[test]
    fn missing_argument_is_an_error() {
        let t = PathTemplate::parse("/gists/{gist_id}").unwrap();
        let err = t.render(&args(json!({"other": "x"}))).unwrap_err();
        assert!(matches!(err, VeneerError::MissingParameter(name) if name == "gist_id"));
    }

    #[test]
    fn duplicate_placeholder_renders_twice_but_lists_once() {
        let t = PathTemplate::parse("/a/{x}/b/{x}").unwrap();
        assert_eq!(t.params(), ["x"]);
        assert_eq!(t.render(&args(json!({"x": "v"}))).unwrap(), "/a/v/b/v");
    }

    #[test]
    fn rejects_unmatched_open_brace() {
        let err = PathTemplate::parse("/gists/{gist_id").unwrap_err();
        assert!(matches!(err, VeneerError::Template { .. }));
    }

    #[test]
    fn rejects_unmatched_close_brace() {
        let err = PathTemplate::parse("/gists/gist_id}").unwrap_err();
        assert!(matches!(err, VeneerError::Template { .. }));
    }

    #[test]
    fn rejects_empty_placeholder() {
        assert!(PathTemplate::parse("/gists/{}").is_err());
        assert!(PathTemplate::parse("/gists/{  }").is_err());
    }

    #[test]
    fn rejects_nested_braces() {
        assert!(PathTemplate::parse("/gists/{{gist_id}}").is_err());
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let t = PathTemplate::parse("/gists/{gist_id}").unwrap();
        assert_eq!(
            t.render(&args(json!({"gist_id": "abc/star"}))).unwrap(),
            "/gists/abc%2Fstar"
        );
        assert_eq!(
            t.render(&args(json!({"gist_id": "a?b#c"}))).unwrap(),
            "/gists/a%3Fb%23c"
        );
        assert_eq!(
            t.render(&args(json!({"gist_id": "50%"}))).unwrap(),
            "/gists/50%25"
        );
    }

    #[test]
    fn plain_values_render_unchanged() {
        let t = PathTemplate::parse("/users/{username}").unwrap();
        assert_eq!(
            t.render(&args(json!({"username": "octo-cat_1.0~x"}))).unwrap(),
            "/users/octo-cat_1.0~x"
        );
    }

    #[test]
    fn compound_value_is_rejected() {
        let t = PathTemplate::parse("/gists/{gist_id}").unwrap();
        let err = t.render(&args(json!({"gist_id": ["a", "b"]}))).unwrap_err();
        assert!(matches!(err, VeneerError::InvalidArguments(_)));
    }
}
