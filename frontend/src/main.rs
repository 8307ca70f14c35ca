mod actions;
mod analysis;
mod app_state;
mod components;
mod env_variable_utils;
mod error;
mod http;
mod key_store;
mod logging;
mod models;
mod router;
mod search;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, ENDPOINTS};
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
    logging::init_logger(is_debug_mode());

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", YOUTUBE: \"{}\", GEMINI: \"{}\" ({}), DEBUG: \"{}\"",
        get_app_name(),
        ENDPOINTS.youtube_api_url,
        ENDPOINTS.gemini_api_url,
        ENDPOINTS.gemini_model,
        is_debug_mode()
    );
}
