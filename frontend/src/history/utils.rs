use crate::chart::scale::ChartPoint;
use crate::models::ViewHistoryItem;
use crate::utils::{format_short_date, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMetric {
    Views,
    Likes,
    Comments,
}

impl HistoryMetric {
    pub fn display_name(&self) -> &'static str {
        match self {
            HistoryMetric::Views => "Views",
            HistoryMetric::Likes => "Likes",
            HistoryMetric::Comments => "Comments",
        }
    }

    fn value(&self, item: &ViewHistoryItem) -> i64 {
        match self {
            HistoryMetric::Views => item.view_count,
            HistoryMetric::Likes => item.like_count,
            HistoryMetric::Comments => item.comment_count,
        }
    }
}

fn sort_key(raw: &str) -> Option<NaiveDateTime> {
    if let Some(date) = parse_timestamp(raw) {
        return Some(date.naive_utc());
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Oldest first. Snapshots whose date does not parse go last, ordered by
/// their raw text.
pub fn sort_history(mut items: Vec<ViewHistoryItem>) -> Vec<ViewHistoryItem> {
    items.sort_by(|a, b| match (sort_key(&a.date), sort_key(&b.date)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.date.cmp(&b.date),
    });
    items
}

pub fn history_series(items: &[ViewHistoryItem], metric: HistoryMetric) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|item| ChartPoint::new(format_short_date(&item.date), metric.value(item)))
        .collect()
}
