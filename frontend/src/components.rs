use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4" role="alert">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(AttrValue::from("Loading..."))]
    pub label: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-8 text-gray-500">
            <div class="h-8 w-8 rounded-full border-4 border-gray-300 border-t-blue-600 animate-spin"></div>
            <p class="mt-2 text-sm">{ &props.label }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="flex items-center justify-center py-8 bg-gray-50 rounded-lg">
            <p class="text-gray-500">{ &props.message }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageLayoutProps {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(PageLayout)]
pub fn page_layout(props: &PageLayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-5xl mx-auto">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <div class="flex justify-between items-center mb-6">
                        <div>
                            <p class="text-xs uppercase tracking-wide text-gray-400">{ get_app_name() }</p>
                            <h1 class="text-3xl font-bold text-gray-800">{ &props.title }</h1>
                        </div>
                        <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                            {"← Home"}
                        </Link<Route>>
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::from("bg-blue-100 text-blue-700"))]
    pub color_class: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("p-4", "rounded-lg", props.color_class.to_string())}>
            <h3 class="text-sm font-semibold opacity-80">{ &props.label }</h3>
            <p class="text-2xl font-bold">{ &props.value }</p>
        </div>
    }
}
