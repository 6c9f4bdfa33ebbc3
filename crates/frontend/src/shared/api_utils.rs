//! API utilities for the host REST API
//!
//! The host publishes the REST root and a nonce in `window.wpApiSettings`.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const DEFAULT_API_ROOT: &str = "/wp-json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WpApiSettings {
    root: Option<String>,
    nonce: Option<String>,
}

fn api_settings() -> WpApiSettings {
    crate::shared::config::read_global("wpApiSettings")
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/wc-analytics/reports/import/status");
/// ```
pub fn api_url(path: &str) -> String {
    let root = api_settings()
        .root
        .unwrap_or_else(|| DEFAULT_API_ROOT.to_string());
    join_url(&root, path)
}

fn join_url(root: &str, path: &str) -> String {
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn with_nonce(builder: RequestBuilder) -> RequestBuilder {
    match api_settings().nonce {
        Some(nonce) => builder.header("X-WP-Nonce", &nonce),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

/// GET и разбор JSON-ответа
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_nonce(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// POST (с телом или без) и разбор JSON-ответа
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: Option<&B>,
) -> Result<T, String> {
    let builder = with_nonce(Request::post(&api_url(path)));
    let response = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?,
        None => builder.send().await.map_err(|e| e.to_string())?,
    };
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("/wp-json/", "/wc-analytics/reports/import"),
            "/wp-json/wc-analytics/reports/import"
        );
        assert_eq!(
            join_url("https://shop.test/wp-json", "wc-admin/options"),
            "https://shop.test/wp-json/wc-admin/options"
        );
    }
}
