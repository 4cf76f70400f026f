use crate::fetch::FetchError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::AbortSignal;

/// The only platform the analytics API is queried for.
pub const PLATFORM: &str = "youtube";

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Picks the human readable reason out of an error body, falling back to a
/// generic message that carries the status code.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.detail)
        .and_then(|detail| {
            detail
                .as_str()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    log::debug!("GET {url}");
    let response = Request::get(url).abort_signal(signal).send().await?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    log::debug!("POST {url}");
    let response = Request::post(url)
        .abort_signal(signal)
        .json(body)?
        .send()
        .await?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message_from_body(status, &body);
        log::warn!("Request to {} failed ({status}): {message}", response.url());
        return Err(FetchError::Http { status, message });
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_is_used_verbatim() {
        assert_eq!(
            error_message_from_body(404, r#"{"detail": "not found"}"#),
            "not found"
        );
    }

    #[test]
    fn unparsable_body_mentions_status() {
        let message = error_message_from_body(502, "<html>Bad Gateway</html>");
        assert!(message.contains("502"));
    }

    #[test]
    fn missing_or_blank_detail_falls_back() {
        assert_eq!(
            error_message_from_body(500, r#"{"error": "boom"}"#),
            "Request failed with status 500"
        );
        assert_eq!(
            error_message_from_body(400, r#"{"detail": "   "}"#),
            "Request failed with status 400"
        );
    }

    #[test]
    fn structured_detail_falls_back() {
        let body = r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#;
        assert_eq!(
            error_message_from_body(422, body),
            "Request failed with status 422"
        );
    }
}
