use crate::search::SearchPage;
use crate::session::SessionPage;
use crate::theme::use_theme;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/session/:session_id")]
    Session { session_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SearchPage /> },
        // Keyed so that moving between sessions starts from fresh local state.
        Route::Session { session_id } => html! {
            <SessionPage key={session_id.clone()} session_id={session_id.clone()} />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let theme = use_theme();

    html! {
        <div class={classes!(theme.page, "flex", "items-center", "justify-center")}>
            <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home} classes={theme.link}>
                    {"Go back to search"}
                </Link<Route>>
            </div>
        </div>
    }
}
