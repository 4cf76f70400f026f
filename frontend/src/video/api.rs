use crate::env_variable_utils::{get_api_base_url, DETAIL_HISTORY_LIMIT};
use crate::fetch::client::{get_json, PLATFORM};
use crate::fetch::FetchError;
use crate::models::VideoDetail;
use web_sys::AbortSignal;

pub fn video_detail_url(base_url: &str, video_id: &str, history_limit: u32) -> String {
    format!(
        "{base_url}/analysis/videos/{}?platform={PLATFORM}&history_limit={history_limit}",
        urlencoding::encode(video_id)
    )
}

pub async fn fetch_video_detail(
    video_id: &str,
    signal: Option<&AbortSignal>,
) -> Result<VideoDetail, FetchError> {
    let base_url = get_api_base_url()?;
    let url = video_detail_url(&base_url, video_id, *DETAIL_HISTORY_LIMIT);
    get_json(&url, signal).await
}
