use crate::compare::models::{ComparisonBlock, FormatProfile, HookProfile, ReactionProfile};
use crate::utils::{format_compact, format_duration, format_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Mine,
    Trend,
    Tie,
}

/// Strictly greater wins; equal values (and NaN) tie.
pub fn pick_winner(mine: f64, trend: f64) -> Winner {
    if mine > trend {
        Winner::Mine
    } else if trend > mine {
        Winner::Trend
    } else {
        Winner::Tie
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: &'static str,
    pub mine: String,
    pub trend: String,
    pub winner: Winner,
}

impl MetricRow {
    fn new(label: &'static str, mine: f64, trend: f64, format: impl Fn(f64) -> String) -> Self {
        Self {
            label,
            mine: format(mine),
            trend: format(trend),
            winner: pick_winner(mine, trend),
        }
    }
}

fn score(value: f64) -> String {
    format!("{value:.1}")
}

fn seconds(value: f64) -> String {
    format_duration(Some(value as u64))
}

fn count(value: f64) -> String {
    format_compact(value as i64)
}

pub fn hook_rows(block: &ComparisonBlock<HookProfile>) -> Vec<MetricRow> {
    vec![MetricRow::new(
        "Hook score",
        block.mine.hook_score,
        block.trend.hook_score,
        score,
    )]
}

pub fn format_rows(block: &ComparisonBlock<FormatProfile>) -> Vec<MetricRow> {
    let (mine, trend) = (&block.mine, &block.trend);
    vec![
        MetricRow::new(
            "Duration",
            mine.duration_seconds as f64,
            trend.duration_seconds as f64,
            seconds,
        ),
        MetricRow::new(
            "Cuts",
            f64::from(mine.cut_count),
            f64::from(trend.cut_count),
            |value| format!("{value:.0}"),
        ),
    ]
}

pub fn reaction_rows(block: &ComparisonBlock<ReactionProfile>) -> Vec<MetricRow> {
    let (mine, trend) = (&block.mine, &block.trend);
    vec![
        MetricRow::new("Views", mine.views as f64, trend.views as f64, count),
        MetricRow::new("Likes", mine.likes as f64, trend.likes as f64, count),
        MetricRow::new("Comments", mine.comments as f64, trend.comments as f64, count),
        MetricRow::new("Like rate", mine.like_rate, trend.like_rate, format_percent),
        MetricRow::new(
            "Completion rate",
            mine.completion_rate,
            trend.completion_rate,
            format_percent,
        ),
        MetricRow::new(
            "Retention",
            mine.retention_rate,
            trend.retention_rate,
            format_percent,
        ),
        MetricRow::new("Share rate", mine.share_rate, trend.share_rate, format_percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction(views: i64, like_rate: f64, share_rate: f64) -> ReactionProfile {
        ReactionProfile {
            views,
            likes: 10,
            comments: 3,
            like_rate,
            completion_rate: 50.0,
            retention_rate: 40.0,
            share_rate,
        }
    }

    #[test]
    fn winner_is_antisymmetric_and_ties_on_equal() {
        assert_eq!(pick_winner(5.0, 3.0), Winner::Mine);
        assert_eq!(pick_winner(3.0, 5.0), Winner::Trend);
        assert_eq!(pick_winner(4.0, 4.0), Winner::Tie);
        assert_eq!(pick_winner(f64::NAN, 1.0), Winner::Tie);
    }

    #[test]
    fn reaction_rows_cover_every_metric() {
        let block = ComparisonBlock {
            mine: reaction(2_300, 6.5, 1.0),
            trend: reaction(1_500_000, 3.2, 1.0),
            takeaways: Vec::new(),
        };
        let rows = reaction_rows(&block);

        let labels: Vec<_> = rows.iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            [
                "Views",
                "Likes",
                "Comments",
                "Like rate",
                "Completion rate",
                "Retention",
                "Share rate"
            ]
        );
        assert_eq!(rows[0].mine, "2.3K");
        assert_eq!(rows[0].trend, "1.5M");
        assert_eq!(rows[0].winner, Winner::Trend);
        assert_eq!(rows[1].winner, Winner::Tie);
        assert_eq!(rows[3].winner, Winner::Mine);
        assert_eq!(rows[3].mine, "6.5%");
        assert_eq!(rows[6].winner, Winner::Tie);
    }

    #[test]
    fn format_rows_compare_duration_and_cuts() {
        let block = ComparisonBlock {
            mine: FormatProfile {
                duration_seconds: 65,
                cut_count: 4,
                format_label: None,
            },
            trend: FormatProfile {
                duration_seconds: 30,
                cut_count: 12,
                format_label: Some("talking head".into()),
            },
            takeaways: Vec::new(),
        };
        let rows = format_rows(&block);

        assert_eq!(rows[0].mine, "1:05");
        assert_eq!(rows[0].winner, Winner::Mine);
        assert_eq!(rows[1].trend, "12");
        assert_eq!(rows[1].winner, Winner::Trend);
    }

    #[test]
    fn hook_row_ties_on_equal_scores() {
        let profile = HookProfile {
            hook_score: 7.0,
            hook_type: None,
            opening_line: None,
        };
        let block = ComparisonBlock {
            mine: profile.clone(),
            trend: profile,
            takeaways: Vec::new(),
        };
        let rows = hook_rows(&block);
        assert_eq!(rows[0].winner, Winner::Tie);
        assert_eq!(rows[0].mine, "7.0");
    }
}
