use crate::models::SearchRequest;
use crate::notice::Notice;
use crate::validation::{require_text, InputError};
use std::rc::Rc;
use yew::Reducible;

pub const SEARCH_FAILED: &str = "Search failed, please try again";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching {
        keyword: String,
    },
    Succeeded {
        session_id: String,
    },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub phase: SearchPhase,
    pub notice: Option<Notice>,
    /// Bumped every time a notice is raised, so a repeat of the same text
    /// still restarts the banner timer.
    pub notice_seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    Started(String),
    Succeeded(String),
    Failed,
    Rejected(InputError),
    DismissNotice,
}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    /// Builds the request for a submitted keyword, or says why none is sent.
    pub fn prepare(&self, raw_keyword: &str, max_results: u32) -> Result<SearchRequest, InputError> {
        if self.is_searching() {
            return Err(InputError::Busy);
        }
        let keyword = require_text(raw_keyword, InputError::EmptyKeyword)?;
        Ok(SearchRequest {
            keyword,
            max_results: Some(max_results),
        })
    }

    pub fn apply(&self, action: SearchAction) -> Self {
        match action {
            SearchAction::Started(keyword) => Self {
                phase: SearchPhase::Searching { keyword },
                notice: None,
                notice_seq: self.notice_seq,
            },
            SearchAction::Succeeded(session_id) => Self {
                phase: SearchPhase::Succeeded { session_id },
                notice: None,
                notice_seq: self.notice_seq,
            },
            SearchAction::Failed => Self {
                phase: SearchPhase::Failed,
                notice: Some(Notice::error(SEARCH_FAILED)),
                notice_seq: self.notice_seq + 1,
            },
            // Rejections never touch the phase of an in-flight search.
            SearchAction::Rejected(error) => Self {
                phase: self.phase.clone(),
                notice: Some(error.into()),
                notice_seq: self.notice_seq + 1,
            },
            SearchAction::DismissNotice => Self {
                phase: self.phase.clone(),
                notice: None,
                notice_seq: self.notice_seq,
            },
        }
    }
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn submitted_keyword_becomes_one_request_with_limit() {
        let request = SearchState::default().prepare("  rust async  ", 5).unwrap();
        assert_eq!(
            request,
            SearchRequest {
                keyword: "rust async".to_string(),
                max_results: Some(5),
            }
        );
    }

    #[test]
    fn blank_keyword_is_refused_without_request() {
        let state = SearchState::default();
        assert_eq!(state.prepare("", 5), Err(InputError::EmptyKeyword));
        assert_eq!(state.prepare("   ", 5), Err(InputError::EmptyKeyword));

        let warned = state.apply(SearchAction::Rejected(InputError::EmptyKeyword));
        assert_eq!(warned.phase, SearchPhase::Idle);
        assert_eq!(warned.notice.map(|n| n.level), Some(NoticeLevel::Warning));
    }

    #[test]
    fn second_submit_while_searching_is_busy() {
        let state = SearchState::default().apply(SearchAction::Started("rust".to_string()));
        assert!(state.is_searching());
        assert_eq!(state.prepare("tokio", 5), Err(InputError::Busy));

        let still = state.apply(SearchAction::Rejected(InputError::Busy));
        assert!(still.is_searching());
    }

    #[test]
    fn lifecycle_to_success() {
        let state = SearchState::default()
            .apply(SearchAction::Rejected(InputError::EmptyKeyword))
            .apply(SearchAction::Started("rust".to_string()));
        assert_eq!(state.notice, None);

        let done = state.apply(SearchAction::Succeeded("s1".to_string()));
        assert_eq!(
            done.phase,
            SearchPhase::Succeeded {
                session_id: "s1".to_string()
            }
        );
        assert!(!done.is_searching());
    }

    #[test]
    fn failure_shows_generic_retry_notice_and_allows_resubmit() {
        let failed = SearchState::default()
            .apply(SearchAction::Started("rust".to_string()))
            .apply(SearchAction::Failed);

        assert_eq!(failed.phase, SearchPhase::Failed);
        assert_eq!(failed.notice, Some(Notice::error(SEARCH_FAILED)));
        assert!(failed.prepare("rust", 5).is_ok());

        let dismissed = failed.apply(SearchAction::DismissNotice);
        assert_eq!(dismissed.notice, None);
        assert_eq!(dismissed.phase, SearchPhase::Failed);
    }

    #[test]
    fn repeated_rejection_raises_a_fresh_notice() {
        let first = SearchState::default().apply(SearchAction::Rejected(InputError::EmptyKeyword));
        let second = first.apply(SearchAction::Rejected(InputError::EmptyKeyword));

        assert_eq!(first.notice, second.notice);
        assert!(second.notice_seq > first.notice_seq);

        let dismissed = second.apply(SearchAction::DismissNotice);
        assert_eq!(dismissed.notice_seq, second.notice_seq);
    }
}
