use crate::components::StatCard;
use crate::models::VideoDetail;
use crate::utils::{
    format_compact, format_duration, format_percent, format_time_since, format_timestamp,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoDetailProps {
    pub detail: VideoDetail,
}

pub fn like_rate(detail: &VideoDetail) -> Option<f64> {
    (detail.view_count > 0).then(|| detail.like_count as f64 / detail.view_count as f64 * 100.0)
}

#[function_component(VideoMeta)]
pub fn video_meta(props: &VideoDetailProps) -> Html {
    let detail = &props.detail;
    let relative = detail
        .published_at
        .as_deref()
        .and_then(|published_at| format_time_since(published_at, chrono::Utc::now()));

    html! {
        <div class="bg-gray-50 p-4 rounded-lg text-sm flex flex-wrap gap-4 mb-6">
            <p class="flex items-center">
                {"📺 "}
                <a href={format!("https://www.youtube.com/channel/{}", &detail.channel_id)}
                   target="_blank"
                   class="text-blue-600 hover:underline">
                    { &detail.channel_title }
                </a>
            </p>
            <p class="flex items-center" title={relative.clone().unwrap_or_default()}>
                {"📅 "}
                <span>{ detail.published_at.as_deref().map(format_timestamp).unwrap_or_else(|| "Unknown".to_string()) }</span>
                {
                    if let Some(relative) = relative {
                        html! { <span class="ml-1 text-gray-500">{ format!("({relative})") }</span> }
                    } else {
                        html! {}
                    }
                }
            </p>
            <p class="flex items-center">{"⏱️ "}<span>{ format_duration(detail.duration_seconds) }</span></p>
            {
                if let Some(category) = &detail.category {
                    html! { <p class="flex items-center">{"🏷️ "}<span>{ category }</span></p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(updated_at) = &detail.updated_at {
                    html! {
                        <p class="flex items-center text-gray-500">
                            { format!("Updated {}", format_timestamp(updated_at)) }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(TrendingBadge)]
pub fn trending_badge(props: &VideoDetailProps) -> Html {
    let detail = &props.detail;
    let Some(rank) = detail.trending_rank else {
        return html! {};
    };

    html! {
        <div class="bg-orange-100 border border-orange-300 text-orange-800 px-4 py-3 rounded mb-6">
            <span class="font-bold">{ format!("🔥 Trending #{rank}") }</span>
            {
                if let Some(reason) = &detail.trending_reason {
                    html! { <span class="ml-2">{ reason }</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &VideoDetailProps) -> Html {
    let detail = &props.detail;

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
            <StatCard label="Views" value={format_compact(detail.view_count)} />
            <StatCard
                label="Likes"
                value={format_compact(detail.like_count)}
                color_class="bg-green-100 text-green-700"
            />
            <StatCard
                label="Comments"
                value={format_compact(detail.comment_count)}
                color_class="bg-purple-100 text-purple-700"
            />
            <StatCard
                label="Like rate"
                value={like_rate(detail).map(format_percent).unwrap_or_else(|| "-".to_string())}
                color_class="bg-orange-100 text-orange-700"
            />
        </div>
    }
}

#[function_component(DescriptionAndTags)]
pub fn description_and_tags(props: &VideoDetailProps) -> Html {
    let detail = &props.detail;

    html! {
        <div class="mb-6">
            {
                if detail.description.trim().is_empty() {
                    html! {}
                } else {
                    html! { <p class="text-gray-700 whitespace-pre-line mb-3">{ &detail.description }</p> }
                }
            }
            <div class="flex flex-wrap gap-2">
                { for detail.tags.iter().map(|tag| html! {
                    <span class="px-2 py-1 text-xs rounded bg-gray-100 text-gray-700">{ format!("#{tag}") }</span>
                })}
            </div>
        </div>
    }
}
