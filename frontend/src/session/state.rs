use crate::models::{SessionAnalysisRequest, SessionAnalysisResponse, VideoClip};
use crate::notice::Notice;
use crate::validation::{require_text, InputError};
use std::rc::Rc;
use yew::Reducible;

pub const ANALYSIS_FAILED: &str = "Analysis failed, please try again";
pub const NO_CLIPS_FOUND: &str = "No relevant clips were found for this question";

/// Local state of the session view. `clips` and `answer` always come from a
/// single analyze response; a failed call leaves them as they were.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub clips: Vec<VideoClip>,
    pub total_clips: u32,
    pub answer: Option<String>,
    pub pending: bool,
    pub last_query: Option<String>,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Started(String),
    Succeeded(SessionAnalysisResponse),
    Failed,
    Rejected(InputError),
    DismissNotice,
}

impl SessionState {
    pub fn prepare(
        &self,
        session_id: &str,
        raw_query: &str,
    ) -> Result<SessionAnalysisRequest, InputError> {
        if self.pending {
            return Err(InputError::Busy);
        }
        let query = require_text(raw_query, InputError::EmptyQuery)?;
        Ok(SessionAnalysisRequest {
            session_id: session_id.to_string(),
            query,
        })
    }

    pub fn apply(&self, action: SessionAction) -> Self {
        match action {
            SessionAction::Started(query) => Self {
                pending: true,
                last_query: Some(query),
                notice: None,
                ..self.clone()
            },
            SessionAction::Succeeded(response) => {
                let notice = response
                    .clips
                    .is_empty()
                    .then(|| Notice::info(NO_CLIPS_FOUND));
                let notice_seq = self.notice_seq + u64::from(notice.is_some());
                Self {
                    clips: response.clips,
                    total_clips: response.total_clips,
                    answer: response.answer.filter(|answer| !answer.trim().is_empty()),
                    pending: false,
                    last_query: self.last_query.clone(),
                    notice,
                    notice_seq,
                }
            }
            SessionAction::Failed => Self {
                pending: false,
                notice: Some(Notice::error(ANALYSIS_FAILED)),
                notice_seq: self.notice_seq + 1,
                ..self.clone()
            },
            SessionAction::Rejected(error) => Self {
                notice: Some(error.into()),
                notice_seq: self.notice_seq + 1,
                ..self.clone()
            },
            SessionAction::DismissNotice => Self {
                notice: None,
                ..self.clone()
            },
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::clip;
    use crate::notice::NoticeLevel;

    fn answered() -> SessionState {
        SessionState::default()
            .apply(SessionAction::Started("what is this about?".to_string()))
            .apply(SessionAction::Succeeded(SessionAnalysisResponse {
                clips: vec![clip("abc123", "01:30", 0.9), clip("abc123", "04:00", 0.4)],
                total_clips: 2,
                answer: Some("Ownership.".to_string()),
            }))
    }

    #[test]
    fn question_becomes_request_scoped_to_session() {
        let request = SessionState::default()
            .prepare("s1", "what is this about?")
            .unwrap();
        assert_eq!(
            request,
            SessionAnalysisRequest {
                session_id: "s1".to_string(),
                query: "what is this about?".to_string(),
            }
        );
    }

    #[test]
    fn blank_question_is_refused() {
        let state = SessionState::default();
        assert_eq!(state.prepare("s1", "  "), Err(InputError::EmptyQuery));

        let warned = state.apply(SessionAction::Rejected(InputError::EmptyQuery));
        assert!(!warned.pending);
        assert_eq!(warned.notice.map(|n| n.level), Some(NoticeLevel::Warning));
    }

    #[test]
    fn pending_analysis_blocks_another_submit() {
        let state = SessionState::default().apply(SessionAction::Started("q".to_string()));
        assert!(state.pending);
        assert_eq!(state.prepare("s1", "another"), Err(InputError::Busy));
    }

    #[test]
    fn success_replaces_clips_and_answer_wholesale() {
        let first = answered();
        assert_eq!(first.clips.len(), 2);
        assert_eq!(first.answer.as_deref(), Some("Ownership."));
        assert!(!first.pending);

        let second = first
            .apply(SessionAction::Started("and lifetimes?".to_string()))
            .apply(SessionAction::Succeeded(SessionAnalysisResponse {
                clips: vec![clip("def456", "00:10", 0.7)],
                total_clips: 1,
                answer: None,
            }));
        assert_eq!(second.clips, vec![clip("def456", "00:10", 0.7)]);
        assert_eq!(second.total_clips, 1);
        assert_eq!(second.answer, None);
        assert_eq!(second.last_query.as_deref(), Some("and lifetimes?"));
    }

    #[test]
    fn failure_keeps_previous_clips_and_raises_error() {
        let before = answered();
        let after = before
            .apply(SessionAction::Started("and lifetimes?".to_string()))
            .apply(SessionAction::Failed);

        assert_eq!(after.clips, before.clips);
        assert_eq!(after.answer, before.answer);
        assert_eq!(after.total_clips, before.total_clips);
        assert!(!after.pending);
        assert_eq!(after.notice, Some(Notice::error(ANALYSIS_FAILED)));
    }

    #[test]
    fn empty_result_is_reported() {
        let state = SessionState::default()
            .apply(SessionAction::Started("q".to_string()))
            .apply(SessionAction::Succeeded(SessionAnalysisResponse::default()));
        assert!(state.clips.is_empty());
        assert_eq!(state.notice, Some(Notice::info(NO_CLIPS_FOUND)));
    }

    #[test]
    fn each_raised_notice_gets_a_new_sequence() {
        let once = SessionState::default().apply(SessionAction::Rejected(InputError::EmptyQuery));
        let twice = once.apply(SessionAction::Rejected(InputError::EmptyQuery));
        assert_eq!(once.notice, twice.notice);
        assert_eq!(twice.notice_seq, once.notice_seq + 1);

        let failed = twice
            .apply(SessionAction::Started("q".to_string()))
            .apply(SessionAction::Failed);
        assert_eq!(failed.notice_seq, twice.notice_seq + 1);

        let quiet = answered();
        assert_eq!(quiet.notice, None);
        assert_eq!(quiet.notice_seq, 0);
    }
}
