mod api;
mod cache;
mod components;
mod config;
mod env_variable_utils;
mod logging;
mod models;
mod notice;
mod router;
mod search;
mod session;
mod theme;
mod timer;
mod utils;
mod validation;

use crate::cache::SearchCache;
use crate::config::CONFIG;
use crate::router::{switch, Route};
use crate::theme::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // One cache per mounted app, shared by every page.
    let cache = use_memo((), |_| SearchCache::default());
    let theme = use_memo((), |_| Theme::default());

    html! {
        <ContextProvider<SearchCache> context={(*cache).clone()}>
            <ContextProvider<Theme> context={(*theme).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Theme>>
        </ContextProvider<SearchCache>>
    }
}

fn main() {
    logging::init();
    logging::set_debug(CONFIG.debug_mode);

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        CONFIG.app_name,
        CONFIG.backend_url,
        CONFIG.debug_mode
    );

    yew::Renderer::<App>::new().render();
}
