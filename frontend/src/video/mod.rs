pub mod api;
pub mod components;

use crate::chart::scale::ChartPoint;
use crate::chart::SimpleBarChart;
use crate::compare::models::CompareQuery;
use crate::components::{EmptyState, ErrorMessage, LoadingSpinner, PageLayout};
use crate::fetch::{use_fetch, FetchState};
use crate::history::ViewHistoryModal;
use crate::models::{HistoryPoint, VideoDetail};
use crate::router::Route;
use crate::utils::{format_short_date, youtube_watch_url};
use api::fetch_video_detail;
use components::{DescriptionAndTags, StatsGrid, TrendingBadge, VideoMeta};
use yew::prelude::*;
use yew_router::prelude::*;

pub fn chart_points(history: &[HistoryPoint]) -> Vec<ChartPoint> {
    history
        .iter()
        .map(|point| ChartPoint::new(format_short_date(&point.time), point.count))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct VideoDetailPageProps {
    pub video_id: String,
}

#[function_component(VideoDetailPage)]
pub fn video_detail_page(props: &VideoDetailPageProps) -> Html {
    let detail = use_fetch(props.video_id.clone(), |video_id, signal| async move {
        fetch_video_detail(&video_id, signal.as_ref()).await
    });

    match detail {
        FetchState::Idle | FetchState::Loading => html! {
            <PageLayout title="Video">
                <LoadingSpinner label="Loading video..." />
            </PageLayout>
        },
        FetchState::Error(message) => html! {
            <PageLayout title="Video">
                <ErrorMessage error_message={Some(message)} />
            </PageLayout>
        },
        FetchState::Empty => html! {
            <PageLayout title="Video">
                <EmptyState message="Video not found" />
            </PageLayout>
        },
        FetchState::Ready(detail) => html! { <VideoDetailView detail={detail} /> },
    }
}

#[derive(Properties, PartialEq)]
struct VideoDetailViewProps {
    detail: VideoDetail,
}

#[function_component(VideoDetailView)]
fn video_detail_view(props: &VideoDetailViewProps) -> Html {
    let detail = &props.detail;
    let show_history = use_state(|| false);

    let on_open_history = {
        let show_history = show_history.clone();
        Callback::from(move |_: MouseEvent| show_history.set(true))
    };
    let on_close_history = {
        let show_history = show_history.clone();
        Callback::from(move |_| show_history.set(false))
    };

    html! {
        <PageLayout title={detail.title.clone()}>
            <div class="flex flex-wrap gap-3 mb-6">
                <a href={youtube_watch_url(&detail.id)}
                   target="_blank"
                   class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700">
                    {"Watch on YouTube ↗"}
                </a>
                <Link<Route, CompareQuery>
                    to={Route::Compare}
                    query={Some(CompareQuery::from_ids(&[detail.id.as_str()]))}
                    classes="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">
                    {"Compare with a trend"}
                </Link<Route, CompareQuery>>
                <button onclick={on_open_history}
                        class="px-4 py-2 bg-gray-600 text-white rounded hover:bg-gray-700">
                    {"View history"}
                </button>
            </div>

            <TrendingBadge detail={detail.clone()} />
            <VideoMeta detail={detail.clone()} />
            <StatsGrid detail={detail.clone()} />
            <DescriptionAndTags detail={detail.clone()} />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <SimpleBarChart
                    title="Views"
                    points={chart_points(&detail.view_history)}
                    show_percent_change={true}
                />
                <SimpleBarChart
                    title="Likes"
                    points={chart_points(&detail.like_history)}
                    bar_class="bg-green-500 hover:bg-green-600"
                />
            </div>

            {
                if *show_history {
                    html! {
                        <ViewHistoryModal
                            video_id={detail.id.clone()}
                            title={AttrValue::from(detail.title.clone())}
                            on_close={on_close_history}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </PageLayout>
    }
}
