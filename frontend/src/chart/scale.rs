/// Fraction of the tallest value added above it as headroom.
pub const AXIS_HEADROOM: f64 = 0.05;
/// Zero-valued bars are drawn at this height so they stay hoverable.
pub const MIN_BAR_HEIGHT_PERCENT: f64 = 2.0;
pub const MAX_VISIBLE_LABELS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub count: i64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// `None` for an empty series; callers render a placeholder instead.
    pub fn from_points(points: &[ChartPoint]) -> Option<Self> {
        let max = points.iter().map(|p| p.count).max()? as f64;
        let min = points.iter().map(|p| p.count).min()? as f64;

        Some(Self {
            min: min.min(0.0),
            max: max + max.abs() * AXIS_HEADROOM,
        })
    }

    fn range(&self) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 {
            range
        } else {
            1.0
        }
    }

    pub fn bar_height_percent(&self, value: i64) -> f64 {
        let percent = (value as f64 - self.min) / self.range() * 100.0;
        percent.clamp(MIN_BAR_HEIGHT_PERCENT, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSummary {
    pub first: i64,
    pub last: i64,
    pub delta: i64,
    /// Omitted when the first value is zero.
    pub percent_change: Option<f64>,
}

impl ChartSummary {
    pub fn from_points(points: &[ChartPoint]) -> Option<Self> {
        let first = points.first()?.count;
        let last = points.last()?.count;
        let delta = last - first;
        let percent_change = (first != 0).then(|| delta as f64 / first as f64 * 100.0);

        Some(Self {
            first,
            last,
            delta,
            percent_change,
        })
    }
}

/// Spacing between labelled bars. The first and last bar are always labelled,
/// so the remaining `max_labels - 1` slots are spread over `len - 1` gaps.
pub fn label_step(len: usize, max_labels: usize) -> usize {
    if len <= max_labels {
        1
    } else {
        (len - 1).div_ceil(max_labels.max(2) - 1)
    }
}

/// A step label closer than `step` to the final bar gives way to it.
pub fn is_label_visible(index: usize, len: usize, step: usize) -> bool {
    let step = step.max(1);
    let last = len.saturating_sub(1);
    index == 0 || index == last || (index % step == 0 && index + step <= last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(counts: &[i64]) -> Vec<ChartPoint> {
        counts
            .iter()
            .enumerate()
            .map(|(i, count)| ChartPoint::new(format!("d{i}"), *count))
            .collect()
    }

    fn visible_labels(len: usize) -> Vec<usize> {
        let step = label_step(len, MAX_VISIBLE_LABELS);
        (0..len)
            .filter(|&i| is_label_visible(i, len, step))
            .collect()
    }

    #[test]
    fn bounds_add_headroom_and_pin_min_to_zero() {
        let bounds = AxisBounds::from_points(&series(&[10, 20, 15])).unwrap();
        assert!((bounds.max - 21.0).abs() < 1e-9);
        assert_eq!(bounds.min, 0.0);
    }

    #[test]
    fn min_never_exceeds_zero() {
        let bounds = AxisBounds::from_points(&series(&[500, 800])).unwrap();
        assert_eq!(bounds.min, 0.0);

        let bounds = AxisBounds::from_points(&series(&[-4, 6])).unwrap();
        assert_eq!(bounds.min, -4.0);
    }

    #[test]
    fn empty_series_has_no_bounds_or_summary() {
        assert_eq!(AxisBounds::from_points(&[]), None);
        assert_eq!(ChartSummary::from_points(&[]), None);
    }

    #[test]
    fn zero_bars_get_floor_height() {
        let bounds = AxisBounds::from_points(&series(&[0, 100])).unwrap();
        assert_eq!(bounds.bar_height_percent(0), MIN_BAR_HEIGHT_PERCENT);
        assert!((bounds.bar_height_percent(100) - 100.0 / 1.05).abs() < 1e-9);
    }

    #[test]
    fn all_zero_series_does_not_divide_by_zero() {
        let bounds = AxisBounds::from_points(&series(&[0, 0, 0])).unwrap();
        assert_eq!(bounds.bar_height_percent(0), MIN_BAR_HEIGHT_PERCENT);
    }

    #[test]
    fn summary_compares_first_and_last() {
        let summary = ChartSummary::from_points(&series(&[200, 50, 250])).unwrap();
        assert_eq!(summary.delta, 50);
        assert_eq!(summary.percent_change, Some(25.0));
    }

    #[test]
    fn percent_change_omitted_for_zero_base() {
        let summary = ChartSummary::from_points(&series(&[0, 40])).unwrap();
        assert_eq!(summary.delta, 40);
        assert_eq!(summary.percent_change, None);
    }

    #[test]
    fn single_point_series() {
        let summary = ChartSummary::from_points(&series(&[7])).unwrap();
        assert_eq!(summary.delta, 0);
        assert_eq!(summary.percent_change, Some(0.0));
    }

    #[test]
    fn long_series_thins_labels_but_keeps_ends() {
        let len = 30;
        let step = label_step(len, MAX_VISIBLE_LABELS);
        assert_eq!(step, 5);

        let visible = visible_labels(len);
        assert_eq!(visible, vec![0, 5, 10, 15, 20, 29]);
        assert!(!is_label_visible(1, len, step));
        assert!(!is_label_visible(25, len, step));
    }

    #[test]
    fn visible_labels_never_exceed_cap() {
        for len in [9, 30, 60] {
            let step = label_step(len, MAX_VISIBLE_LABELS);
            let visible = visible_labels(len);
            assert!(
                visible.len() <= MAX_VISIBLE_LABELS,
                "len={len}: {} labels",
                visible.len()
            );
            assert_eq!(visible.first(), Some(&0));
            assert_eq!(visible.last(), Some(&(len - 1)));
            assert!(
                visible.windows(2).all(|pair| pair[1] - pair[0] >= step),
                "len={len}: labels closer than {step}: {visible:?}"
            );
        }
    }

    #[test]
    fn negative_series_keeps_headroom_above_top_bar() {
        let bounds = AxisBounds::from_points(&series(&[-10, -5])).unwrap();
        assert!((bounds.max - -4.75).abs() < 1e-9);
        assert_eq!(bounds.min, -10.0);
        assert!(bounds.bar_height_percent(-5) < 100.0);
    }

    #[test]
    fn short_series_shows_every_label() {
        assert_eq!(label_step(5, MAX_VISIBLE_LABELS), 1);
        assert!((0..5).all(|i| is_label_visible(i, 5, 1)));
    }
}
