//! # Endpoint Analysis
//!
//! Turns a raw endpoint string such as `GET /users/{id}` into an
//! [`EndpointDescriptor`]. Analysis never fails: unrecognized input degrades
//! to `GET` and an `unknown` resource type.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::http::method::HttpMethod;

/// Resource type used when no segment can be inferred from the path.
pub const UNKNOWN_RESOURCE: &str = "unknown";

static PATH_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("valid path parameter pattern"));

/// Structured summary of an endpoint, derived purely from its raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub path_parameters: Vec<String>,
    pub resource_type: String,
    pub requires_auth: bool,
}

pub fn analyze(raw: &str) -> EndpointDescriptor {
    let mut tokens = raw.split_whitespace();
    let (method, path) = match tokens.next().and_then(HttpMethod::from_token) {
        Some(method) => (method, tokens.next().unwrap_or_default().to_string()),
        None => (HttpMethod::Get, raw.to_string()),
    };

    let path_parameters = path_parameters(&path);
    let resource_type = resource_type(&path);
    // Heuristic: any path parameter implies an authenticated endpoint.
    let requires_auth = !path_parameters.is_empty();

    tracing::debug!(
        endpoint = raw,
        %method,
        resource = %resource_type,
        params = ?path_parameters,
        "analyzed endpoint"
    );

    EndpointDescriptor {
        method,
        path,
        path_parameters,
        resource_type,
        requires_auth,
    }
}

fn path_parameters(path: &str) -> Vec<String> {
    PATH_PARAM
        .captures_iter(path)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn resource_type(path: &str) -> String {
    path.split('/')
        .nth(1)
        .map(str::to_lowercase)
        .filter(|segment| !segment.is_empty() && !segment.starts_with('{'))
        .unwrap_or_else(|| UNKNOWN_RESOURCE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzes_sample_endpoint() {
        let descriptor = analyze("GET /users/{id}");
        assert_eq!(
            descriptor,
            EndpointDescriptor {
                method: HttpMethod::Get,
                path: "/users/{id}".into(),
                path_parameters: vec!["id".into()],
                resource_type: "users".into(),
                requires_auth: true,
            }
        );
    }

    #[test]
    fn every_recognized_verb_is_uppercased() {
        for verb in ["get", "Post", "PUT", "delete", "pAtCh"] {
            let descriptor = analyze(&format!("{verb} /orders"));
            assert_eq!(descriptor.method.as_str(), verb.to_uppercase());
            assert_eq!(descriptor.path, "/orders");
        }
    }

    #[test]
    fn missing_verb_defaults_to_get_and_keeps_raw_path() {
        let descriptor = analyze("/products");
        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(descriptor.path, "/products");
        assert_eq!(descriptor.resource_type, "products");
        assert!(descriptor.path_parameters.is_empty());
        assert!(!descriptor.requires_auth);
    }

    #[test]
    fn unrecognized_verb_keeps_whole_input_as_path() {
        let descriptor = analyze("HEAD /status");
        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(descriptor.path, "HEAD /status");
    }

    #[test]
    fn verb_without_path_yields_empty_path() {
        let descriptor = analyze("DELETE");
        assert_eq!(descriptor.method, HttpMethod::Delete);
        assert_eq!(descriptor.path, "");
        assert_eq!(descriptor.resource_type, UNKNOWN_RESOURCE);
        assert!(descriptor.path_parameters.is_empty());
    }

    #[test]
    fn empty_input_degrades_to_defaults() {
        let descriptor = analyze("");
        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(descriptor.path, "");
        assert_eq!(descriptor.resource_type, UNKNOWN_RESOURCE);
        assert!(!descriptor.requires_auth);
    }

    #[test]
    fn path_parameters_keep_order_and_duplicates() {
        let descriptor = analyze("PUT /orgs/{orgId}/users/{userId}/links/{orgId}");
        assert_eq!(descriptor.path_parameters, vec!["orgId", "userId", "orgId"]);
        assert!(descriptor.requires_auth);
    }

    #[test]
    fn resource_type_is_lowercased() {
        assert_eq!(analyze("GET /Users/{id}").resource_type, "users");
    }

    #[test]
    fn leading_placeholder_is_not_a_resource() {
        assert_eq!(analyze("GET /{tenant}/users").resource_type, UNKNOWN_RESOURCE);
    }

    #[test]
    fn path_without_leading_slash_uses_second_segment() {
        assert_eq!(analyze("users/{id}").resource_type, UNKNOWN_RESOURCE);
        assert_eq!(analyze("api/items").resource_type, "items");
        assert_eq!(analyze("users").resource_type, UNKNOWN_RESOURCE);
    }

    #[test]
    fn analysis_is_a_pure_function_of_input() {
        assert_eq!(analyze("PATCH /carts/{id}"), analyze("PATCH /carts/{id}"));
    }
}
