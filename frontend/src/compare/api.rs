use crate::compare::models::{CompareAnalysis, CompareRequest};
use crate::env_variable_utils::get_api_base_url;
use crate::fetch::client::{post_json, PLATFORM};
use crate::fetch::FetchError;
use web_sys::AbortSignal;

pub fn compare_url(base_url: &str) -> String {
    format!("{base_url}/analysis/shorts/compare")
}

pub fn build_compare_request(
    my_short_url: &str,
    trend_short_url: &str,
) -> Result<CompareRequest, String> {
    let my_short_url = my_short_url.trim();
    let trend_short_url = trend_short_url.trim();

    if my_short_url.is_empty() || trend_short_url.is_empty() {
        return Err("Please enter both video URLs".to_string());
    }

    Ok(CompareRequest {
        platform: PLATFORM.to_string(),
        my_short_url: my_short_url.to_string(),
        trend_short_url: trend_short_url.to_string(),
    })
}

pub async fn compare_shorts(
    request: &CompareRequest,
    signal: Option<&AbortSignal>,
) -> Result<CompareAnalysis, FetchError> {
    let base_url = get_api_base_url()?;
    post_json(&compare_url(&base_url), request, signal).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_endpoint() {
        assert_eq!(
            compare_url("https://api.example.com"),
            "https://api.example.com/analysis/shorts/compare"
        );
    }

    #[test]
    fn request_inputs_are_trimmed() {
        let request = build_compare_request(
            "  https://youtube.com/shorts/a ",
            "https://youtube.com/shorts/b",
        )
        .unwrap();
        assert_eq!(request.my_short_url, "https://youtube.com/shorts/a");
        assert_eq!(request.platform, "youtube");
    }

    #[test]
    fn blank_input_is_rejected_before_any_request() {
        assert_eq!(
            build_compare_request("https://youtube.com/shorts/a", "   "),
            Err("Please enter both video URLs".to_string())
        );
    }
}
