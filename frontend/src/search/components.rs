use crate::api::ApiClient;
use crate::config::CONFIG;
use crate::models::SearchResponse;
use crate::theme::use_theme;
use crate::utils::format_iso8601_date;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let theme = use_theme();
    let current_input = use_state(String::new);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex">
            <input
                type="text"
                class={theme.input}
                placeholder="Enter a keyword to search YouTube videos..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button type="submit" class={theme.button} disabled={props.loading}>
                { if props.loading { "Searching..." } else { "🔍 Search" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentSearchesProps {
    pub searches: Vec<SearchResponse>,
    pub on_open: Callback<SearchResponse>,
}

#[function_component(RecentSearches)]
pub fn recent_searches(props: &RecentSearchesProps) -> Html {
    let theme = use_theme();

    if props.searches.is_empty() {
        return html! {};
    }

    html! {
        <div class="mt-8">
            <h3 class={theme.section_title}>{"Recent searches"}</h3>
            <ul class="divide-y divide-gray-200">
                { for props.searches.iter().map(|search| {
                    let onclick = {
                        let on_open = props.on_open.clone();
                        let search = search.clone();
                        Callback::from(move |_: MouseEvent| on_open.emit(search.clone()))
                    };
                    html! {
                        <li class="py-2 flex justify-between items-center">
                            <button class={theme.link} {onclick}>{ &search.keyword }</button>
                            <span class={classes!(theme.muted_text, "text-sm")}>
                                { format!("{} videos · {}", search.videos.len(), format_iso8601_date(&search.created_at)) }
                            </span>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendHealth {
    Checking,
    Online,
    Offline,
}

impl BackendHealth {
    pub fn from_status(status: &str) -> Self {
        if status.eq_ignore_ascii_case("ok") {
            BackendHealth::Online
        } else {
            BackendHealth::Offline
        }
    }

    fn label(&self) -> (&'static str, &'static str) {
        match self {
            BackendHealth::Checking => ("bg-gray-400", "Checking backend..."),
            BackendHealth::Online => ("bg-green-500", "Backend online"),
            BackendHealth::Offline => ("bg-red-500", "Backend unreachable"),
        }
    }
}

/// Small indicator fed by a single `GET /health` on mount. Informational only.
#[function_component(BackendStatus)]
pub fn backend_status() -> Html {
    let health = use_state(|| BackendHealth::Checking);

    {
        let health = health.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_config(&CONFIG);
                match client.health_check().await {
                    Ok(response) => health.set(BackendHealth::from_status(&response.status)),
                    Err(e) => {
                        log::warn!("Backend health check failed: {e}");
                        health.set(BackendHealth::Offline);
                    }
                }
            });
            || ()
        });
    }

    let (dot, label) = health.label();
    html! {
        <span class="inline-flex items-center gap-2 text-sm text-gray-500" title={label}>
            <span class={classes!("inline-block", "w-2", "h-2", "rounded-full", dot)}></span>
            { label }
        </span>
    }
}
