pub mod api;
pub mod components;
pub mod models;
pub mod utils;

use crate::components::{EmptyState, ErrorMessage, LoadingSpinner, PageLayout};
use crate::fetch::{AbortHandle, FetchState, SingleFlight};
use crate::utils::youtube_watch_url;
use api::{build_compare_request, compare_shorts};
use components::{ComparisonTable, SummaryCard, VideoCoreCard};
use models::{CompareAnalysis, CompareQuery};
use utils::{format_rows, hook_rows, reaction_rows};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ComparePage)]
pub fn compare_page() -> Html {
    let location = use_location();
    let initial_ids = location
        .and_then(|location| location.query::<CompareQuery>().ok())
        .map(|query| query.video_ids())
        .unwrap_or_default();

    let my_url = {
        let first = initial_ids.first().cloned();
        use_state(move || first.map(|id| youtube_watch_url(&id)).unwrap_or_default())
    };
    let trend_url = {
        let second = initial_ids.get(1).cloned();
        use_state(move || second.map(|id| youtube_watch_url(&id)).unwrap_or_default())
    };
    let analysis = use_state(|| FetchState::<CompareAnalysis>::Idle);
    let flight = use_mut_ref(SingleFlight::default);
    let abort = use_mut_ref(|| None::<AbortHandle>);

    // Abandon a running analysis when the page goes away
    {
        let flight = flight.clone();
        let abort = abort.clone();
        use_effect_with((), move |_| {
            move || {
                flight.borrow_mut().cancel();
                if let Some(handle) = abort.borrow_mut().take() {
                    handle.abort();
                }
            }
        });
    }

    let on_my_url_input = {
        let my_url = my_url.clone();
        Callback::from(move |e: InputEvent| {
            my_url.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_trend_url_input = {
        let trend_url = trend_url.clone();
        Callback::from(move |e: InputEvent| {
            trend_url.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_analyze = {
        let my_url = my_url.clone();
        let trend_url = trend_url.clone();
        let analysis = analysis.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if flight.borrow().is_running() {
                log::debug!("Analysis already running, ignoring submit");
                return;
            }

            let request = match build_compare_request(&my_url, &trend_url) {
                Ok(request) => request,
                Err(message) => {
                    analysis.set(FetchState::Error(message));
                    return;
                }
            };

            let Some(token) = flight.borrow_mut().try_begin() else {
                return;
            };
            let handle = AbortHandle::new();
            let signal = handle.signal();
            *abort.borrow_mut() = Some(handle);
            analysis.set(FetchState::Loading);

            let analysis = analysis.clone();
            let flight = flight.clone();
            let abort = abort.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = compare_shorts(&request, signal.as_ref()).await;

                if !flight.borrow_mut().finish(token) {
                    log::debug!("Discarding analysis of a cancelled request");
                    return;
                }
                abort.borrow_mut().take();

                if let Err(err) = &result {
                    log::warn!("Shorts comparison failed: {err}");
                }
                if let Some(next) = FetchState::from_result(result) {
                    analysis.set(next);
                }
            });
        })
    };

    let loading = analysis.is_loading();

    html! {
        <PageLayout title="Compare Shorts">
            <form onsubmit={on_analyze} class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                <label class="block">
                    <span class="block text-gray-700 text-sm font-bold mb-2">{"My short"}</span>
                    <input
                        type="url"
                        class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="https://www.youtube.com/shorts/..."
                        value={(*my_url).clone()}
                        oninput={on_my_url_input}
                        disabled={loading}
                    />
                </label>
                <label class="block">
                    <span class="block text-gray-700 text-sm font-bold mb-2">{"Trending short"}</span>
                    <input
                        type="url"
                        class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="https://www.youtube.com/shorts/..."
                        value={(*trend_url).clone()}
                        oninput={on_trend_url_input}
                        disabled={loading}
                    />
                </label>
                <button
                    type="submit"
                    disabled={loading}
                    class="md:col-span-2 bg-blue-600 text-white p-3 rounded hover:bg-blue-700 disabled:opacity-50"
                >
                    { if loading { "Analyzing..." } else { "Analyze" } }
                </button>
            </form>

            {
                match &*analysis {
                    FetchState::Idle => html! {
                        <p class="text-center text-gray-500">{"Paste two Shorts URLs and press Analyze."}</p>
                    },
                    FetchState::Loading => html! { <LoadingSpinner label="Analyzing..." /> },
                    FetchState::Error(message) => html! { <ErrorMessage error_message={Some(message.clone())} /> },
                    FetchState::Empty => html! { <EmptyState message="No analysis available" /> },
                    FetchState::Ready(analysis) => html! { <AnalysisView analysis={analysis.clone()} /> },
                }
            }
        </PageLayout>
    }
}

#[derive(Properties, PartialEq)]
struct AnalysisViewProps {
    analysis: CompareAnalysis,
}

#[function_component(AnalysisView)]
fn analysis_view(props: &AnalysisViewProps) -> Html {
    let analysis = &props.analysis;
    let hook = &analysis.hook;
    let format = &analysis.format;

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <VideoCoreCard video={analysis.my_short.clone()} caption="Mine" />
                <VideoCoreCard video={analysis.trend_short.clone()} caption="Trend" />
            </div>

            <SummaryCard summary={analysis.ai_summary.clone()} trust_signals={analysis.trust_signals.clone()} />

            <ComparisonTable title="Hook" rows={hook_rows(hook)} takeaways={hook.takeaways.clone()}>
                <div class="mt-3 grid grid-cols-2 gap-4 text-sm text-gray-600">
                    <ProfileNote
                        kind={hook.mine.hook_type.clone()}
                        text={hook.mine.opening_line.clone()}
                    />
                    <ProfileNote
                        kind={hook.trend.hook_type.clone()}
                        text={hook.trend.opening_line.clone()}
                    />
                </div>
            </ComparisonTable>

            <ComparisonTable title="Format" rows={format_rows(format)} takeaways={format.takeaways.clone()}>
                <div class="mt-3 grid grid-cols-2 gap-4 text-sm text-gray-600">
                    <ProfileNote kind={format.mine.format_label.clone()} />
                    <ProfileNote kind={format.trend.format_label.clone()} />
                </div>
            </ComparisonTable>

            <ComparisonTable
                title="Audience reaction"
                rows={reaction_rows(&analysis.reaction)}
                takeaways={analysis.reaction.takeaways.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileNoteProps {
    #[prop_or_default]
    kind: Option<String>,
    #[prop_or_default]
    text: Option<String>,
}

#[function_component(ProfileNote)]
fn profile_note(props: &ProfileNoteProps) -> Html {
    html! {
        <div>
            {
                if let Some(kind) = &props.kind {
                    html! { <span class="inline-block px-2 py-1 mb-1 text-xs rounded bg-gray-100">{ kind }</span> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(text) = &props.text {
                    html! { <p class="italic">{ format!("\"{text}\"") }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
