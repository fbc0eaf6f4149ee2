use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchRequest {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub duration: String,
    pub view_count: u64,
    pub published_at: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub has_subtitles: bool,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchSummary {
    pub total_videos: u32,
    pub overview: String,
    /// Total runtime of the result set in minutes.
    #[serde(default)]
    pub total_duration: Option<u32>,
    #[serde(default)]
    pub latest_video_date: Option<String>,
}

/// Result of `POST /search`. `session_id` scopes every later analyze call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResponse {
    pub session_id: String,
    #[serde(alias = "search_keyword")]
    pub keyword: String,
    pub summary: SearchSummary,
    pub videos: Vec<VideoInfo>,
    pub created_at: String,
    pub expires_at: String,
}

impl SearchResponse {
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_backend_timestamp(&self.expires_at)
    }

    /// Sessions with an unparseable expiry are treated as live; the backend is
    /// the only authority on session lifetime.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc().is_some_and(|expiry| expiry <= now)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoClip {
    pub video_id: String,
    pub video_title: String,
    pub content: String,
    pub timestamp: String,
    pub relevance: f64,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionAnalysisRequest {
    pub session_id: String,
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SessionAnalysisResponse {
    pub clips: Vec<VideoClip>,
    pub total_clips: u32,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body returned by the backend on non-2xx responses. FastAPI uses
/// `detail`, other layers in front of it use `message`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "message")]
    pub detail: String,
}

// The backend emits RFC 3339 as well as naive ISO timestamps (no offset).
pub fn parse_backend_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn search_request_omits_missing_max_results() {
        let request = SearchRequest {
            keyword: "rust".to_string(),
            max_results: None,
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "keyword": "rust" }));
    }

    #[test]
    fn search_response_accepts_backend_keyword_alias_and_defaults() {
        let payload = json!({
            "session_id": "s1",
            "search_keyword": "rust",
            "summary": {
                "total_videos": 1,
                "total_duration": 42,
                "latest_video_date": "2024-03-01T10:00:00",
                "overview": "overview"
            },
            "videos": [{
                "video_id": "abc123",
                "title": "A",
                "channel_title": "C",
                "duration": "10:00",
                "view_count": 10,
                "published_at": "2024-03-01T10:00:00",
                "thumbnail_url": "https://example.com/t.jpg"
            }],
            "created_at": "2024-03-01T10:00:00",
            "expires_at": "2024-03-01T11:00:00"
        });

        let response: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.keyword, "rust");
        assert_eq!(response.summary.total_duration, Some(42));
        assert_eq!(response.videos.len(), 1);
        assert!(!response.videos[0].has_subtitles);
        assert!(response.videos[0].description.is_empty());
        assert!(response.videos[0].languages.is_empty());
    }

    #[test]
    fn analysis_response_answer_is_optional() {
        let without: SessionAnalysisResponse =
            serde_json::from_value(json!({ "clips": [], "total_clips": 0 })).unwrap();
        assert_eq!(without.answer, None);

        let with: SessionAnalysisResponse = serde_json::from_value(json!({
            "clips": [],
            "total_clips": 0,
            "answer": "It is about ownership."
        }))
        .unwrap();
        assert_eq!(with.answer.as_deref(), Some("It is about ownership."));
    }

    #[test]
    fn error_response_reads_detail_or_message() {
        let detail: ErrorResponse = serde_json::from_str(r#"{"detail":"boom"}"#).unwrap();
        assert_eq!(detail.detail, "boom");
        let message: ErrorResponse = serde_json::from_str(r#"{"message":"bang"}"#).unwrap();
        assert_eq!(message.detail, "bang");
    }

    #[test]
    fn parses_naive_and_offset_timestamps() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap();
        assert_eq!(parse_backend_timestamp("2024-03-01T11:00:00"), Some(expected));
        assert_eq!(parse_backend_timestamp("2024-03-01T11:00:00.250"), Some(expected + chrono::Duration::milliseconds(250)));
        assert_eq!(parse_backend_timestamp("2024-03-01T12:00:00+01:00"), Some(expected));
        assert_eq!(parse_backend_timestamp("tomorrow"), None);
    }

    #[test]
    fn expiry_is_informational() {
        let response = fixtures::search_response("s1", "rust");
        let before = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 1).unwrap();
        assert!(!response.is_expired(before));
        assert!(response.is_expired(after));

        let mut unparseable = response;
        unparseable.expires_at = "soon".to_string();
        assert!(!unparseable.is_expired(after));
    }
}
