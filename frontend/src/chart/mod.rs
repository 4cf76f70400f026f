pub mod scale;

use crate::components::{EmptyState, LoadingSpinner};
use crate::utils::{format_change, format_compact, format_number, format_percent};
use scale::{
    is_label_visible, label_step, AxisBounds, ChartPoint, ChartSummary, MAX_VISIBLE_LABELS,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SimpleBarChartProps {
    pub title: AttrValue,
    pub points: Vec<ChartPoint>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub show_percent_change: bool,
    #[prop_or(AttrValue::from("bg-blue-500 hover:bg-blue-600"))]
    pub bar_class: AttrValue,
}

#[function_component(SimpleBarChart)]
pub fn simple_bar_chart(props: &SimpleBarChartProps) -> Html {
    let body = if props.loading {
        html! { <LoadingSpinner label="Loading chart..." /> }
    } else {
        match (
            AxisBounds::from_points(&props.points),
            ChartSummary::from_points(&props.points),
        ) {
            (Some(bounds), Some(summary)) => html! {
                <>
                    <ChartSummaryLine summary={summary} show_percent_change={props.show_percent_change} />
                    <ChartBars points={props.points.clone()} bounds={bounds} bar_class={props.bar_class.clone()} />
                </>
            },
            _ => html! { <EmptyState message="No data" /> },
        }
    };

    html! {
        <div class="bg-white border border-gray-200 rounded-lg p-4">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{ &props.title }</h3>
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChartSummaryLineProps {
    summary: ChartSummary,
    show_percent_change: bool,
}

#[function_component(ChartSummaryLine)]
fn chart_summary_line(props: &ChartSummaryLineProps) -> Html {
    let summary = props.summary;
    let delta_class = if summary.delta >= 0 {
        "text-green-600"
    } else {
        "text-red-600"
    };

    let percent = match summary.percent_change {
        Some(percent) if props.show_percent_change => {
            let sign = if percent >= 0.0 { "+" } else { "" };
            html! { <span class="ml-1">{ format!("({sign}{})", format_percent(percent)) }</span> }
        }
        _ => html! {},
    };

    html! {
        <div class="flex flex-wrap gap-4 text-sm text-gray-600 mb-3">
            <span>{ format!("First: {}", format_compact(summary.first)) }</span>
            <span>{ format!("Latest: {}", format_compact(summary.last)) }</span>
            <span class={delta_class}>
                { format!("Change: {}", format_change(summary.delta)) }
                { percent }
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChartBarsProps {
    points: Vec<ChartPoint>,
    bounds: AxisBounds,
    bar_class: AttrValue,
}

#[function_component(ChartBars)]
fn chart_bars(props: &ChartBarsProps) -> Html {
    let len = props.points.len();
    let step = label_step(len, MAX_VISIBLE_LABELS);

    html! {
        <div>
            <div class="flex items-end gap-1 h-48 border-b border-gray-300">
                { for props.points.iter().map(|point| {
                    let height = props.bounds.bar_height_percent(point.count);
                    html! {
                        <div
                            class={classes!("flex-1", "rounded-t", "transition-colors", props.bar_class.to_string())}
                            style={format!("height: {height:.2}%;")}
                            title={format!("{}: {}", point.label, format_number(point.count))}
                        />
                    }
                })}
            </div>
            <div class="flex gap-1 mt-1">
                { for props.points.iter().enumerate().map(|(index, point)| {
                    let visibility = if is_label_visible(index, len, step) { "visible" } else { "hidden" };
                    html! {
                        <span
                            class="flex-1 text-center text-xs text-gray-500 truncate"
                            style={format!("visibility: {visibility};")}
                        >
                            { &point.label }
                        </span>
                    }
                })}
            </div>
        </div>
    }
}
