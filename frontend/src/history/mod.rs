pub mod api;
pub mod utils;

use crate::chart::SimpleBarChart;
use crate::components::{EmptyState, ErrorMessage};
use crate::env_variable_utils::MODAL_HISTORY_LIMIT;
use crate::fetch::{use_fetch, FetchState};
use crate::models::ViewHistoryItem;
use crate::utils::format_compact;
use api::fetch_view_history;
use utils::{history_series, HistoryMetric};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;
use yew::prelude::*;

const METRICS: [HistoryMetric; 3] = [
    HistoryMetric::Views,
    HistoryMetric::Likes,
    HistoryMetric::Comments,
];

#[derive(Properties, PartialEq)]
pub struct ViewHistoryModalProps {
    pub video_id: String,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub on_close: Callback<()>,
}

/// What the modal body shows; exactly one of these per fetch state.
#[derive(Debug, PartialEq)]
enum HistoryContent<'a> {
    Failed(&'a str),
    Loading,
    NoData,
    Series(&'a [ViewHistoryItem]),
}

impl<'a> HistoryContent<'a> {
    fn from_state(state: &'a FetchState<Vec<ViewHistoryItem>>) -> Self {
        match state {
            FetchState::Error(message) => Self::Failed(message),
            FetchState::Idle | FetchState::Loading => Self::Loading,
            FetchState::Empty => Self::NoData,
            FetchState::Ready(items) if items.is_empty() => Self::NoData,
            FetchState::Ready(items) => Self::Series(items),
        }
    }
}

#[function_component(ViewHistoryModal)]
pub fn view_history_modal(props: &ViewHistoryModalProps) -> Html {
    let metric = use_state(|| HistoryMetric::Views);
    let history = use_fetch(props.video_id.clone(), |video_id, signal| async move {
        fetch_view_history(&video_id, *MODAL_HISTORY_LIMIT, signal.as_ref()).await
    });

    // Escape closes the modal; the page behind it must not scroll while open
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let guard = ModalGuard::install(on_close);
            move || drop(guard)
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_select_metric = {
        let metric = metric.clone();
        Callback::from(move |selected: HistoryMetric| metric.set(selected))
    };

    let body = match HistoryContent::from_state(&history) {
        HistoryContent::Failed(message) => html! {
            <ErrorMessage error_message={Some(message.to_string())} />
        },
        HistoryContent::Loading => html! {
            <SimpleBarChart
                title={format!("{} over time", metric.display_name())}
                points={Vec::new()}
                loading={true}
            />
        },
        HistoryContent::NoData => html! { <EmptyState message="No data" /> },
        HistoryContent::Series(items) => html! {
            <>
                <MetricTabs metric={*metric} on_select={on_select_metric} />
                <SimpleBarChart
                    title={format!("{} over time", metric.display_name())}
                    points={history_series(items, *metric)}
                    show_percent_change={true}
                />
                {
                    if let Some(latest) = items.last() {
                        html! {
                            <div class="mt-4 flex flex-wrap gap-4 text-sm text-gray-600">
                                <span>{ format!("👁️ {}", format_compact(latest.view_count)) }</span>
                                <span>{ format!("👍 {}", format_compact(latest.like_count)) }</span>
                                <span>{ format!("💬 {}", format_compact(latest.comment_count)) }</span>
                                <span>{ format!("{} snapshots", items.len()) }</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        },
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-60 p-4"
             onclick={on_backdrop_click}>
            <div class="bg-white rounded-lg shadow-lg w-full max-w-3xl p-6"
                 role="dialog"
                 aria-modal="true"
                 onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-2xl font-semibold text-gray-800 truncate">
                        { props.title.clone().unwrap_or_else(|| AttrValue::from("View history")) }
                    </h2>
                    <button onclick={on_close_click}
                            class="text-gray-500 hover:text-gray-800 text-xl"
                            aria-label="Close">
                        {"✕"}
                    </button>
                </div>

                { body }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MetricTabsProps {
    metric: HistoryMetric,
    on_select: Callback<HistoryMetric>,
}

#[function_component(MetricTabs)]
fn metric_tabs(props: &MetricTabsProps) -> Html {
    html! {
        <div class="flex gap-2 mb-4">
            { for METRICS.iter().map(|candidate| {
                let candidate = *candidate;
                let onclick = props.on_select.reform(move |_: MouseEvent| candidate);
                html! {
                    <button {onclick}
                            class={if props.metric == candidate {
                                "px-4 py-2 text-sm rounded bg-blue-600 text-white"
                            } else {
                                "px-4 py-2 text-sm rounded bg-gray-100 text-gray-700 hover:bg-gray-200"
                            }}>
                        { candidate.display_name() }
                    </button>
                }
            })}
        </div>
    }
}

/// Keyboard listener and body scroll lock held for the lifetime of a modal.
/// Dropping it detaches the listener and restores the previous overflow.
struct ModalGuard {
    document: Option<Document>,
    listener: Closure<dyn Fn(KeyboardEvent)>,
    previous_overflow: Option<String>,
}

impl ModalGuard {
    fn install(on_close: Callback<()>) -> Self {
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_close.emit(());
            }
        });

        let document = web_sys::window().and_then(|window| window.document());
        let mut previous_overflow = None;

        if let Some(document) = &document {
            if let Err(e) = document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            {
                log::warn!("Failed to register keydown listener: {e:?}");
            }

            if let Some(body) = document.body() {
                let style = body.style();
                previous_overflow = style.get_property_value("overflow").ok();
                if let Err(e) = style.set_property("overflow", "hidden") {
                    log::warn!("Failed to lock page scroll: {e:?}");
                }
            }
        }

        Self {
            document,
            listener,
            previous_overflow,
        }
    }
}

impl Drop for ModalGuard {
    fn drop(&mut self) {
        let Some(document) = &self.document else {
            return;
        };

        if let Err(e) = document
            .remove_event_listener_with_callback("keydown", self.listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove keydown listener: {e:?}");
        }

        if let Some(body) = document.body() {
            let style = body.style();
            let restored = match self.previous_overflow.as_deref() {
                Some(previous) if !previous.is_empty() => style.set_property("overflow", previous),
                _ => style.remove_property("overflow").map(|_| ()),
            };
            if let Err(e) = restored {
                log::warn!("Failed to restore page scroll: {e:?}");
            }
        }
    }
}
