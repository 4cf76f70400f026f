use crate::fetch::Payload;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompareRequest {
    pub platform: String,
    pub my_short_url: String,
    pub trend_short_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoCore {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HookProfile {
    pub hook_score: f64,
    #[serde(default)]
    pub hook_type: Option<String>,
    #[serde(default)]
    pub opening_line: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormatProfile {
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub cut_count: u32,
    #[serde(default)]
    pub format_label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReactionProfile {
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub like_rate: f64,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub retention_rate: f64,
    #[serde(default)]
    pub share_rate: f64,
}

/// "Mine" and "trend" measured the same way, plus what the backend concluded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComparisonBlock<P> {
    pub mine: P,
    pub trend: P,
    #[serde(default)]
    pub takeaways: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AiSummary {
    pub headline: String,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub next_experiment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompareAnalysis {
    pub my_short: VideoCore,
    pub trend_short: VideoCore,
    pub hook: ComparisonBlock<HookProfile>,
    pub format: ComparisonBlock<FormatProfile>,
    pub reaction: ComparisonBlock<ReactionProfile>,
    pub ai_summary: AiSummary,
    #[serde(default)]
    pub trust_signals: Vec<String>,
}

impl Payload for CompareAnalysis {}

/// Query string of the compare route: `/compare?ids=a,b`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CompareQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
}

impl CompareQuery {
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        let joined = ids
            .iter()
            .map(|id| id.as_ref().trim())
            .filter(|id| !id.is_empty())
            .collect::<Vec<_>>()
            .join(",");

        Self {
            ids: (!joined.is_empty()).then_some(joined),
        }
    }

    pub fn video_ids(&self) -> Vec<String> {
        self.ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANALYSIS: &str = r#"{
        "my_short": {"id": "mine1", "title": "My short", "view_count": 1200},
        "trend_short": {"id": "trend1", "title": "Trend short", "view_count": 2500000},
        "hook": {
            "mine": {"hook_score": 6.5},
            "trend": {"hook_score": 8.1, "hook_type": "question"},
            "takeaways": ["Open with the payoff"]
        },
        "format": {
            "mine": {"duration_seconds": 42, "cut_count": 6},
            "trend": {"duration_seconds": 28, "cut_count": 14}
        },
        "reaction": {
            "mine": {"views": 1200, "likes": 80, "like_rate": 6.7},
            "trend": {"views": 2500000, "likes": 90000, "like_rate": 3.6}
        },
        "ai_summary": {"headline": "Tighten the first two seconds", "action_items": ["Cut the intro"]}
    }"#;

    #[test]
    fn analysis_deserializes_with_defaults() {
        let analysis: CompareAnalysis = serde_json::from_str(ANALYSIS).unwrap();
        assert_eq!(analysis.trend_short.view_count, 2_500_000);
        assert_eq!(analysis.hook.takeaways.len(), 1);
        assert!(analysis.format.takeaways.is_empty());
        assert_eq!(analysis.reaction.mine.completion_rate, 0.0);
        assert!(analysis.trust_signals.is_empty());
        assert_eq!(analysis.ai_summary.next_experiment, None);
    }

    #[test]
    fn request_body_field_names() {
        let body = CompareRequest {
            platform: "youtube".into(),
            my_short_url: "https://youtube.com/shorts/a".into(),
            trend_short_url: "https://youtube.com/shorts/b".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["my_short_url"], "https://youtube.com/shorts/a");
        assert_eq!(json["trend_short_url"], "https://youtube.com/shorts/b");
        assert_eq!(json["platform"], "youtube");
    }

    #[test]
    fn compare_query_joins_and_splits_ids() {
        let query = CompareQuery::from_ids(&["abc", " def ", ""]);
        assert_eq!(query.ids.as_deref(), Some("abc,def"));
        assert_eq!(query.video_ids(), vec!["abc", "def"]);
    }

    #[test]
    fn empty_compare_query() {
        assert_eq!(CompareQuery::from_ids::<&str>(&[]).ids, None);
        assert!(CompareQuery::default().video_ids().is_empty());
    }
}
