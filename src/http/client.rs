use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::{Duration, Instant};
use thiserror::Error;

use super::request::JsonRequest;
use super::response::HttpResponse;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),
}

pub async fn send_json(request: JsonRequest) -> Result<HttpResponse, HttpError> {
    let headers = build_headers(&request.headers)?;

    let mut builder = reqwest::Client::builder();
    if let Some(ms) = request.timeout_ms {
        if ms > 0 {
            builder = builder.timeout(Duration::from_millis(ms));
        }
    }
    let client = builder.build().map_err(HttpError::ClientBuild)?;

    let started = Instant::now();
    let response = client
        .request(request.method.into(), &request.url)
        .headers(headers)
        .json(&request.body)
        .send()
        .await
        .map_err(HttpError::Request)?;
    let elapsed = started.elapsed().as_millis();

    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(HttpError::ReadBody)?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(HttpResponse {
        status,
        duration_ms: elapsed,
        body,
    })
}

fn build_headers(input: &[(String, String)]) -> Result<HeaderMap, HttpError> {
    let mut headers = HeaderMap::new();

    for (key, value) in input {
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| HttpError::InvalidHeader {
            name: key.to_string(),
            reason: e.to_string(),
        })?;
        let header_value = HeaderValue::from_str(value.trim()).map_err(|e| HttpError::InvalidHeader {
            name: key.to_string(),
            reason: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}
