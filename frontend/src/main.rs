mod chart;
mod compare;
mod components;
mod env_variable_utils;
mod fetch;
mod history;
mod logging;
mod models;
mod router;
mod utils;
mod video;

use crate::env_variable_utils::{get_app_name, is_debug_mode, API_BASE_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let debug_mode = is_debug_mode();
    logging::init_logger(debug_mode);

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        API_BASE_URL.as_deref().unwrap_or("<not configured>"),
        debug_mode
    );
    if API_BASE_URL.is_none() {
        log::error!("API_BASE_URL is missing from ENV_CONFIG; every request will fail");
    }

    yew::Renderer::<App>::new().render();
}
