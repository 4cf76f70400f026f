use crate::fetch::Payload;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoryPoint {
    pub time: String,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub trending_rank: Option<u32>,
    #[serde(default)]
    pub trending_reason: Option<String>,
    #[serde(default, alias = "viewHistory")]
    pub view_history: Vec<HistoryPoint>,
    #[serde(default, alias = "likeHistory")]
    pub like_history: Vec<HistoryPoint>,
}

impl Payload for VideoDetail {}

/// One snapshot of a video's counters as returned by the view history endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ViewHistoryItem {
    pub date: String,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ViewHistoryResponse {
    #[serde(default)]
    pub history: Vec<ViewHistoryItem>,
}
