use crate::compare::ComparePage;
use crate::components::{ErrorMessage, PageLayout};
use crate::video::VideoDetailPage;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/videos/:id")]
    VideoDetail { id: String },
    #[at("/compare")]
    Compare,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::VideoDetail { id } => html! { <VideoDetailPage video_id={id} /> },
        Route::Compare => html! { <ComparePage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back home"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator();
    let video_id = use_state(String::new);
    let error_message = use_state(|| None::<String>);

    let on_input = {
        let video_id = video_id.clone();
        Callback::from(move |e: InputEvent| {
            video_id.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let video_id = video_id.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let id = video_id.trim().to_string();
            if id.is_empty() {
                error_message.set(Some("Please enter a video id".to_string()));
                return;
            }

            error_message.set(None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::VideoDetail { id });
            }
        })
    };

    html! {
        <PageLayout title="Video insights">
            <ErrorMessage error_message={(*error_message).clone()} />

            <form onsubmit={on_submit} class="flex mb-6">
                <input
                    type="text"
                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Enter a YouTube video id..."
                    value={(*video_id).clone()}
                    oninput={on_input}
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700"
                >
                    {"Open"}
                </button>
            </form>

            <div class="text-center">
                <Link<Route> to={Route::Compare} classes="text-blue-600 hover:underline">
                    {"Compare two Shorts →"}
                </Link<Route>>
            </div>
        </PageLayout>
    }
}
