use crate::env_variable_utils::get_api_base_url;
use crate::fetch::client::{get_json, PLATFORM};
use crate::fetch::FetchError;
use crate::history::utils::sort_history;
use crate::models::{ViewHistoryItem, ViewHistoryResponse};
use web_sys::AbortSignal;

pub fn view_history_url(base_url: &str, video_id: &str, limit: u32) -> String {
    format!(
        "{base_url}/trends/videos/{}/view_history?platform={PLATFORM}&limit={limit}",
        urlencoding::encode(video_id)
    )
}

/// Fetches the snapshots of one video, sorted oldest first.
pub async fn fetch_view_history(
    video_id: &str,
    limit: u32,
    signal: Option<&AbortSignal>,
) -> Result<Vec<ViewHistoryItem>, FetchError> {
    let base_url = get_api_base_url()?;
    let url = view_history_url(&base_url, video_id, limit);
    let response: ViewHistoryResponse = get_json(&url, signal).await?;
    Ok(sort_history(response.history))
}
