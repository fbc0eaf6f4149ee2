use crate::models::{VideoClip, VideoInfo};
use crate::notice::{Notice, NoticeLevel};
use crate::router::Route;
use crate::theme::use_theme;
use crate::timer::Timeout;
use crate::utils::{
    format_duration, format_iso8601_date, format_number, format_relevance, generate_video_url,
    video_url,
};
use yew::prelude::*;
use yew_router::prelude::*;

const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoInfo,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let theme = use_theme();
    let video = &props.video;

    html! {
        <div class={theme.card}>
            <div class="flex gap-3 items-start">
                <img
                    src={video.thumbnail_url.clone()}
                    alt={video.title.clone()}
                    class="w-32 h-auto rounded-lg object-cover flex-shrink-0"
                />
                <div class="flex flex-col gap-1 flex-1 min-w-0">
                    <a href={video_url(&video.video_id)}
                       target="_blank"
                       rel="noopener noreferrer"
                       class="text-lg font-semibold text-sky-700 line-clamp-2 hover:underline">
                        { &video.title }
                    </a>
                    <p class={theme.muted_text}>{ &video.channel_title }</p>
                    <div class="flex flex-wrap gap-3 text-gray-600 text-sm">
                        <span>{ format!("⏱️ {}", format_duration(&video.duration)) }</span>
                        <span>{ format!("👁️ {}", format_number(video.view_count)) }</span>
                        <span>{ format!("📅 {}", format_iso8601_date(&video.published_at)) }</span>
                        {
                            if video.has_subtitles {
                                html! { <span class="px-2 rounded bg-sky-100 text-sky-700">{"CC"}</span> }
                            } else {
                                html! {}
                            }
                        }
                        { for video.languages.iter().map(|language| html! {
                            <span class="px-2 rounded bg-gray-100 text-gray-600 uppercase">{ language }</span>
                        })}
                    </div>
                    {
                        if video.description.is_empty() {
                            html! {}
                        } else {
                            html! { <p class={classes!(theme.body_text, "text-sm", "line-clamp-2")}>{ &video.description }</p> }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

/// Link for a clip: the backend's URL when present, otherwise a deep link
/// built from the clip timestamp.
pub fn clip_link(clip: &VideoClip) -> String {
    if clip.url.trim().is_empty() {
        generate_video_url(&clip.video_id, &clip.timestamp)
    } else {
        clip.url.clone()
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoClipCardProps {
    pub clip: VideoClip,
}

#[function_component(VideoClipCard)]
pub fn video_clip_card(props: &VideoClipCardProps) -> Html {
    let theme = use_theme();
    let clip = &props.clip;

    html! {
        <div class={theme.card}>
            <div class="flex flex-col gap-2">
                <div class="flex items-center gap-3 flex-wrap">
                    <span class="font-semibold text-sky-700">{ &clip.video_title }</span>
                    <span class={theme.muted_text}>{ format!("Timestamp: {}", clip.timestamp) }</span>
                    <span class={theme.muted_text}>{ format!("Relevance: {}", format_relevance(clip.relevance)) }</span>
                </div>
                <p class={classes!(theme.body_text, "mb-2")}>{ &clip.content }</p>
                <a href={clip_link(clip)}
                   target="_blank"
                   rel="noopener noreferrer"
                   class={classes!(theme.link, "inline-flex", "items-center", "gap-2")}>
                    {"▶ Watch on YouTube ↗"}
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    /// Changes whenever a new notice is raised, even with identical text.
    #[prop_or_default]
    pub seq: u64,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((props.seq, props.notice.clone()), move |(_, notice)| {
            let timer = notice
                .as_ref()
                .and_then(|_| Timeout::new(NOTICE_TTL_MS, move || on_dismiss.emit(())).ok());
            move || drop(timer)
        });
    }

    let Some(notice) = &props.notice else {
        return html! {};
    };

    let palette = match notice.level {
        NoticeLevel::Info => "bg-sky-100 border-sky-400 text-sky-700",
        NoticeLevel::Warning => "bg-yellow-100 border-yellow-400 text-yellow-800",
        NoticeLevel::Error => "bg-red-100 border-red-400 text-red-700",
    };
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("fixed", "top-4", "left-1/2", "-translate-x-1/2", "z-50", "border", "px-4", "py-3", "rounded", "shadow", "cursor-pointer", palette)}
             role="alert"
             {onclick}>
            { &notice.text }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or(false)]
    pub back_to_search: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let theme = use_theme();

    html! {
        <header class={theme.header}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center gap-4">
                {
                    if props.back_to_search {
                        html! {
                            <Link<Route> to={Route::Home} classes={theme.link}>
                                {"← Back to search"}
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
                <h1 class={theme.heading}>{ props.title.clone() }</h1>
                <div class="ml-auto">{ for props.children.iter() }</div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::clip;

    #[test]
    fn clip_link_prefers_backend_url() {
        let clip = clip("abc123", "01:30", 0.9);
        assert_eq!(clip_link(&clip), "https://youtube.com/watch?v=abc123&t=90");

        let mut custom = clip.clone();
        custom.url = "https://youtu.be/abc123?t=91".to_string();
        assert_eq!(clip_link(&custom), "https://youtu.be/abc123?t=91");
    }

    #[test]
    fn clip_link_falls_back_to_timestamp_deep_link() {
        let mut clip = clip("abc123", "02:15", 0.5);
        clip.url = String::new();
        assert_eq!(clip_link(&clip), "https://youtube.com/watch?v=abc123&t=135");
    }
}
