//! HTTP transport for endpoint bindings.
//!
//! `ApiClient` knows nothing about individual resources. It takes a
//! [`Binding`] (verb + path template), a resource prefix and the call's
//! parameters, and turns them into one request and one typed response.

use log::{debug, info, warn};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoint::Binding;
use super::error::{ApiError, ApiResult};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// Fails with [`ApiError::Config`] when the URL does not parse or cannot
    /// carry a path (e.g. `mailto:`).
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL `{base_url}`: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base URL `{base_url}` cannot carry a path"
            )));
        }
        Ok(Self {
            base_url: parsed,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues one request for `binding` and decodes the response as `T`.
    ///
    /// Path parameters fill `{name}` slots in the binding's template; query
    /// pairs are appended as-is. Non-2xx statuses become `Client`/`Server`
    /// errors, transport failures `Network`, and shape mismatches `Decode`.
    pub async fn invoke<B, T>(
        &self,
        binding: &Binding,
        prefix: &str,
        path_params: &[(&str, &str)],
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.resolve_url(binding, prefix, path_params)?;
        info!("{} -> {} {}", binding.name, binding.method, url);

        let mut request = self.http.request(binding.method.clone(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            let json_body = serde_json::to_vec(body)
                .map_err(|e| ApiError::Decode(format!("request serialization failed: {e}")))?;
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(json_body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} response status: {}", binding.name, status);

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(status, &text);
            warn!("{} failed: {} - {}", binding.name, status, message);
            return Err(ApiError::from_status(status.as_u16(), message));
        }

        decode_body(&text)
            .inspect_err(|e| warn!("{} returned an unexpected body: {}", binding.name, e))
    }

    /// Builds `<base>/<prefix>/<template with params substituted>`.
    ///
    /// Each parameter value becomes exactly one percent-encoded segment, so
    /// an id containing `/` cannot escape its slot. The bare `/` template
    /// targets the collection itself: `<base>/product`, no trailing slash.
    fn resolve_url(
        &self,
        binding: &Binding,
        prefix: &str,
        path_params: &[(&str, &str)],
    ) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::Config(format!("base URL `{}` cannot carry a path", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.push(prefix);

            for part in binding.template.split('/').filter(|s| !s.is_empty()) {
                match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                    Some(name) => {
                        let value = path_params
                            .iter()
                            .find(|(key, _)| *key == name)
                            .map(|(_, value)| *value)
                            .ok_or_else(|| {
                                ApiError::Config(format!(
                                    "missing path parameter `{name}` for {}",
                                    binding.name
                                ))
                            })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(part);
                    }
                }
            }
        }
        Ok(url)
    }
}

/// Decodes a success body. An empty body reads as JSON `null`, so operations
/// declared as returning nothing accept it while record-returning ones fail.
fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let body = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(body)?)
}

/// Best-effort extraction of a human-readable message from an error body.
fn error_message(status: StatusCode, text: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(text) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(message)) = fields.get(key) {
                return message.clone();
            }
        }
    }

    let trimmed = text.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
