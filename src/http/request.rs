use serde_json::Value;

use super::method::HttpMethod;

#[derive(Debug, Clone)]
pub struct JsonRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
    pub timeout_ms: Option<u64>,
}
