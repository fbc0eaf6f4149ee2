use crate::components::{VideoCard, VideoClipCard};
use crate::models::{SearchResponse, VideoClip};
use crate::theme::use_theme;
use crate::utils::{format_iso8601_date, format_time_until};
use chrono::{DateTime, Utc};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuestionBarProps {
    pub value: String,
    pub pending: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(QuestionBar)]
pub fn question_bar(props: &QuestionBarProps) -> Html {
    let theme = use_theme();

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            on_input.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class={classes!(theme.card, "sticky", "top-4")}>
            <h2 class={theme.section_title}>{"Ask about these videos"}</h2>
            <form {onsubmit} class="flex">
                <input
                    type="text"
                    class={theme.input}
                    placeholder="e.g. What do these videos cover?"
                    value={props.value.clone()}
                    {oninput}
                    disabled={props.pending}
                />
                <button type="submit" class={theme.button} disabled={props.pending}>
                    { if props.pending { "Analyzing..." } else { "❓ Analyze" } }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnswerPanelProps {
    pub answer: Option<String>,
    pub query: Option<String>,
}

#[function_component(AnswerPanel)]
pub fn answer_panel(props: &AnswerPanelProps) -> Html {
    let theme = use_theme();
    let Some(answer) = &props.answer else {
        return html! {};
    };

    html! {
        <div class={theme.card}>
            <h2 class={theme.section_title}>{"Answer"}</h2>
            {
                if let Some(query) = &props.query {
                    html! { <p class={classes!(theme.muted_text, "italic", "mb-2")}>{ format!("“{query}”") }</p> }
                } else {
                    html! {}
                }
            }
            <p class={classes!(theme.body_text, "whitespace-pre-line")}>{ answer }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClipListProps {
    pub clips: Vec<VideoClip>,
    pub total_clips: u32,
}

#[function_component(ClipList)]
pub fn clip_list(props: &ClipListProps) -> Html {
    let theme = use_theme();

    if props.clips.is_empty() {
        return html! {};
    }

    html! {
        <div class="flex flex-col gap-2">
            <h2 class={theme.section_title}>
                { format!("Relevant clips ({})", props.total_clips.max(props.clips.len() as u32)) }
            </h2>
            { for props.clips.iter().map(|clip| html! {
                <VideoClipCard clip={clip.clone()} />
            })}
        </div>
    }
}

/// Human readable expiry of the server-side session, and whether it has
/// already passed. Never used to block requests.
pub fn expiry_hint(search: &SearchResponse, now: DateTime<Utc>) -> Option<(bool, String)> {
    let expiry = search.expires_at_utc()?;
    Some((search.is_expired(now), format_time_until(expiry, now)))
}

#[derive(Properties, PartialEq)]
pub struct OverviewPanelProps {
    pub search: Rc<SearchResponse>,
}

#[function_component(OverviewPanel)]
pub fn overview_panel(props: &OverviewPanelProps) -> Html {
    let theme = use_theme();
    let search = &props.search;
    let summary = &search.summary;

    let expiry = match expiry_hint(search, Utc::now()) {
        Some((true, _)) => html! {
            <p class="text-sm text-yellow-700 mt-2">
                {"This session has expired on the server. Start a new search if analysis fails."}
            </p>
        },
        Some((false, text)) => html! { <p class={classes!(theme.muted_text, "text-sm", "mt-2")}>{ text }</p> },
        None => html! {},
    };

    html! {
        <div class={theme.card}>
            <h2 class={theme.section_title}>{ format!("Overview for “{}”", search.keyword) }</h2>
            <p class={theme.body_text}>{ &summary.overview }</p>
            <div class={classes!(theme.muted_text, "flex", "flex-wrap", "gap-4", "text-sm", "mt-3")}>
                <span>{ format!("🎬 {} videos", summary.total_videos) }</span>
                {
                    if let Some(minutes) = summary.total_duration {
                        html! { <span>{ format!("⏱️ {minutes} min total") }</span> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(latest) = &summary.latest_video_date {
                        html! { <span>{ format!("📅 latest {}", format_iso8601_date(latest)) }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            { expiry }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub search: Rc<SearchResponse>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    let theme = use_theme();

    html! {
        <div class="flex flex-col gap-2">
            <h2 class={theme.section_title}>{"Videos found"}</h2>
            // Backend order is preserved.
            { for props.search.videos.iter().map(|video| html! {
                <VideoCard key={video.video_id.clone()} video={video.clone()} />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::search_response;
    use chrono::TimeZone;

    #[test]
    fn expiry_hint_reports_remaining_time() {
        let search = search_response("s1", "rust");
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap();
        assert_eq!(expiry_hint(&search, now), Some((false, "expires in 45m".to_string())));
    }

    #[test]
    fn expiry_hint_flags_expired_sessions() {
        let search = search_response("s1", "rust");
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(expiry_hint(&search, now), Some((true, "expired".to_string())));
    }

    #[test]
    fn expiry_hint_absent_for_unparseable_expiry() {
        let mut search = search_response("s1", "rust");
        search.expires_at = String::new();
        assert_eq!(expiry_hint(&search, Utc::now()), None);
    }
}
