use crate::compare::models::{AiSummary, VideoCore};
use crate::compare::utils::{MetricRow, Winner};
use crate::utils::{format_compact, format_duration, format_timestamp, youtube_watch_url};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCoreCardProps {
    pub video: VideoCore,
    pub caption: AttrValue,
}

#[function_component(VideoCoreCard)]
pub fn video_core_card(props: &VideoCoreCardProps) -> Html {
    let video = &props.video;

    html! {
        <div class="bg-gray-50 rounded-lg p-4 flex gap-4">
            {
                if let Some(thumbnail) = &video.thumbnail_url {
                    html! { <img src={thumbnail.clone()} alt={video.title.clone()} class="w-24 h-40 object-cover rounded" /> }
                } else {
                    html! {}
                }
            }
            <div class="min-w-0">
                <p class="text-xs uppercase tracking-wide text-gray-400">{ &props.caption }</p>
                <a href={youtube_watch_url(&video.id)}
                   target="_blank"
                   class="block text-lg font-semibold text-blue-600 hover:underline truncate">
                    { &video.title }
                </a>
                <p class="text-sm text-gray-600">{ &video.channel_title }</p>
                <div class="mt-2 flex flex-wrap gap-3 text-sm text-gray-700">
                    <span>{ format!("👁️ {}", format_compact(video.view_count)) }</span>
                    <span>{ format!("👍 {}", format_compact(video.like_count)) }</span>
                    <span>{ format!("💬 {}", format_compact(video.comment_count)) }</span>
                    <span>{ format!("⏱️ {}", format_duration(video.duration_seconds)) }</span>
                </div>
                {
                    if let Some(published_at) = &video.published_at {
                        html! { <p class="mt-1 text-xs text-gray-500">{ format_timestamp(published_at) }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub title: AttrValue,
    pub rows: Vec<MetricRow>,
    #[prop_or_default]
    pub takeaways: Vec<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    html! {
        <section class="border border-gray-200 rounded-lg p-4">
            <h2 class="text-xl font-semibold text-gray-800 mb-3">{ &props.title }</h2>
            <table class="min-w-full text-sm">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Metric"}</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-gray-500 uppercase">{"Mine"}</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-gray-500 uppercase">{"Trend"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    { for props.rows.iter().map(|row| html! { <ComparisonRow row={row.clone()} /> }) }
                </tbody>
            </table>
            { for props.children.iter() }
            {
                if props.takeaways.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="mt-3 list-disc list-inside text-sm text-gray-700 space-y-1">
                            { for props.takeaways.iter().map(|takeaway| html! { <li>{ takeaway }</li> }) }
                        </ul>
                    }
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ComparisonRowProps {
    row: MetricRow,
}

fn value_class(winner: Winner, side: Winner) -> &'static str {
    if winner == side {
        "px-4 py-2 text-right font-bold text-green-600"
    } else {
        "px-4 py-2 text-right text-gray-700"
    }
}

#[function_component(ComparisonRow)]
fn comparison_row(props: &ComparisonRowProps) -> Html {
    let row = &props.row;
    let marker = |side: Winner| {
        if row.winner == side {
            html! { <span class="ml-1" title="Winner">{"▲"}</span> }
        } else {
            html! {}
        }
    };

    html! {
        <tr>
            <td class="px-4 py-2 text-gray-900">{ row.label }</td>
            <td class={value_class(row.winner, Winner::Mine)}>{ &row.mine }{ marker(Winner::Mine) }</td>
            <td class={value_class(row.winner, Winner::Trend)}>{ &row.trend }{ marker(Winner::Trend) }</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub summary: AiSummary,
    pub trust_signals: Vec<String>,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    let summary = &props.summary;

    html! {
        <section class="bg-blue-50 border border-blue-200 rounded-lg p-4">
            <h2 class="text-xl font-semibold text-blue-900 mb-2">{ &summary.headline }</h2>
            {
                if summary.action_items.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ol class="list-decimal list-inside text-sm text-blue-900 space-y-1">
                            { for summary.action_items.iter().map(|item| html! { <li>{ item }</li> }) }
                        </ol>
                    }
                }
            }
            {
                if let Some(next) = &summary.next_experiment {
                    html! {
                        <p class="mt-3 text-sm text-blue-800">
                            <span class="font-semibold">{"Next experiment: "}</span>{ next }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            {
                if props.trust_signals.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="mt-3 flex flex-wrap gap-2">
                            { for props.trust_signals.iter().map(|signal| html! {
                                <span class="px-2 py-1 text-xs rounded bg-white border border-blue-200 text-blue-700">{ signal }</span>
                            })}
                        </div>
                    }
                }
            }
        </section>
    }
}
