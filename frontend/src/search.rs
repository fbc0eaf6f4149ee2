pub mod components;
pub mod state;

use crate::api::ApiClient;
use crate::cache::use_search_cache;
use crate::components::{NoticeBanner, PageHeader};
use crate::config::CONFIG;
use crate::models::SearchResponse;
use crate::router::Route;
use crate::search::components::{BackendStatus, RecentSearches, SearchBar};
use crate::search::state::{SearchAction, SearchPhase, SearchState};
use crate::theme::use_theme;
use yew::prelude::*;
use yew_router::prelude::*;

/// Opens the session view, handing the search result over as history state.
fn open_session(navigator: Option<&Navigator>, response: SearchResponse) {
    let Some(navigator) = navigator else {
        log::error!("Router unavailable, cannot open session {}", response.session_id);
        return;
    };
    let route = Route::Session {
        session_id: response.session_id.clone(),
    };
    navigator.push_with_state(&route, response);
}

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let theme = use_theme();
    let navigator = use_navigator();
    let cache = use_search_cache();
    let state = use_reducer(SearchState::default);

    let on_search = {
        let state = state.clone();
        let cache = cache.clone();
        let navigator = navigator.clone();

        Callback::from(move |raw_keyword: String| {
            let request = match state.prepare(&raw_keyword, CONFIG.max_results) {
                Ok(request) => request,
                Err(e) => {
                    log::debug!("Search not sent: {e}");
                    state.dispatch(SearchAction::Rejected(e));
                    return;
                }
            };

            state.dispatch(SearchAction::Started(request.keyword.clone()));

            let state = state.clone();
            let cache = cache.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_config(&CONFIG);
                match client.search_videos(&request).await {
                    Ok(response) => {
                        log::info!(
                            "Search for {:?} returned {} videos (session {})",
                            response.keyword,
                            response.videos.len(),
                            response.session_id
                        );
                        cache.insert(response.clone());
                        state.dispatch(SearchAction::Succeeded(response.session_id.clone()));
                        open_session(navigator.as_ref(), response);
                    }
                    Err(e) => {
                        log::error!("Search for {:?} failed: {e}", request.keyword);
                        state.dispatch(SearchAction::Failed);
                    }
                }
            });
        })
    };

    let on_open_recent = {
        let navigator = navigator.clone();
        Callback::from(move |response: SearchResponse| {
            log::debug!("Reopening cached session {}", response.session_id);
            open_session(navigator.as_ref(), response);
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(SearchAction::DismissNotice))
    };

    let recent = cache.recent(chrono::Utc::now());
    let progress = match &state.phase {
        SearchPhase::Searching { keyword } => format!("Searching videos for “{keyword}”..."),
        SearchPhase::Succeeded { session_id } => format!("Opening session {session_id}..."),
        SearchPhase::Idle | SearchPhase::Failed => String::new(),
    };

    html! {
        <div class={theme.page}>
            <PageHeader title={CONFIG.app_name.clone()}>
                <BackendStatus />
            </PageHeader>
            <NoticeBanner notice={state.notice.clone()} seq={state.notice_seq} {on_dismiss} />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col items-center justify-center min-h-[60vh]">
                    <div class={classes!(theme.card, "max-w-2xl", "p-8")}>
                        <div class="text-center mb-8">
                            <h2 class={theme.heading}>{"Search YouTube videos"}</h2>
                            <p class={classes!(theme.body_text, "mt-4")}>
                                {"Enter a keyword to find videos, then ask questions about what they cover."}
                            </p>
                        </div>
                        <SearchBar loading={state.is_searching()} {on_search} />
                        <p class={classes!(theme.muted_text, "text-sm", "mt-2", "h-5")}>{ progress }</p>
                        <RecentSearches searches={recent} on_open={on_open_recent} />
                    </div>
                </div>
            </main>
        </div>
    }
}
