pub mod components;
pub mod state;

use crate::api::ApiClient;
use crate::components::{NoticeBanner, PageHeader};
use crate::config::CONFIG;
use crate::models::SearchResponse;
use crate::router::Route;
use crate::session::components::{AnswerPanel, ClipList, OverviewPanel, QuestionBar, VideoList};
use crate::session::state::{SessionAction, SessionState};
use crate::theme::use_theme;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Picks the search result handed over by the search page, if it belongs to
/// this session.
pub fn handoff_for(
    state: Option<Rc<SearchResponse>>,
    session_id: &str,
) -> Option<Rc<SearchResponse>> {
    state.filter(|search| search.session_id == session_id)
}

#[derive(Properties, PartialEq)]
pub struct SessionPageProps {
    pub session_id: String,
}

#[function_component(SessionPage)]
pub fn session_page(props: &SessionPageProps) -> Html {
    let theme = use_theme();
    let location = use_location();
    let state = use_reducer(SessionState::default);
    let query = use_state(String::new);

    let search = handoff_for(
        location.and_then(|location| location.state::<SearchResponse>()),
        &props.session_id,
    );
    // Without a search result there is nothing to analyze against.
    let Some(search) = search else {
        log::warn!(
            "No search result for session {}, redirecting to search",
            props.session_id
        );
        return html! { <Redirect<Route> to={Route::Home} /> };
    };

    let on_input = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_analyze = {
        let state = state.clone();
        let query = query.clone();
        let session_id = props.session_id.clone();

        Callback::from(move |_: ()| {
            let request = match state.prepare(&session_id, query.as_str()) {
                Ok(request) => request,
                Err(e) => {
                    log::debug!("Analysis not sent: {e}");
                    state.dispatch(SessionAction::Rejected(e));
                    return;
                }
            };

            state.dispatch(SessionAction::Started(request.query.clone()));

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_config(&CONFIG);
                match client
                    .analyze_session_content(&request.session_id, &request.query)
                    .await
                {
                    Ok(response) => {
                        log::info!(
                            "Session {} returned {} clips",
                            request.session_id,
                            response.clips.len()
                        );
                        state.dispatch(SessionAction::Succeeded(response));
                    }
                    Err(e) => {
                        log::error!("Analysis of session {} failed: {e}", request.session_id);
                        state.dispatch(SessionAction::Failed);
                    }
                }
            });
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(SessionAction::DismissNotice))
    };

    html! {
        <div class={theme.page}>
            <PageHeader title="Video content analysis" back_to_search=true />
            <NoticeBanner notice={state.notice.clone()} seq={state.notice_seq} {on_dismiss} />
            <main class="max-w-7xl mx-auto flex flex-col lg:flex-row">
                <section class="lg:w-1/2 p-8 flex flex-col gap-6">
                    <QuestionBar
                        value={(*query).clone()}
                        pending={state.pending}
                        {on_input}
                        on_submit={on_analyze}
                    />
                    <AnswerPanel answer={state.answer.clone()} query={state.last_query.clone()} />
                    <ClipList clips={state.clips.clone()} total_clips={state.total_clips} />
                </section>
                <section class="lg:w-1/2 p-8 flex flex-col gap-6 lg:border-l border-gray-200">
                    <OverviewPanel search={search.clone()} />
                    <VideoList {search} />
                </section>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::search_response;

    #[test]
    fn handoff_requires_state() {
        assert!(handoff_for(None, "s1").is_none());
    }

    #[test]
    fn handoff_must_match_route_session() {
        let search = Rc::new(search_response("s1", "rust"));
        assert!(handoff_for(Some(search.clone()), "s2").is_none());

        let accepted = handoff_for(Some(search), "s1").unwrap();
        assert_eq!(accepted.session_id, "s1");
        assert_eq!(accepted.videos.len(), 1);
        assert_eq!(accepted.videos[0].title, "A");
    }
}
