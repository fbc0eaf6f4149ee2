use crate::config::AppConfig;
use crate::models::{
    ErrorResponse, HealthResponse, SearchRequest, SearchResponse, SessionAnalysisRequest,
    SessionAnalysisResponse,
};
use crate::timer::{js_error_text, Timeout};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::AbortController;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("browser API unavailable: {0}")]
    Browser(String),
}

/// A fully resolved JSON POST, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub body: String,
}

/// Thin client for the analysis backend. No retries and no caching.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.backend_url.clone(), config.request_timeout_ms)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn prepare_search(&self, request: &SearchRequest) -> Result<PreparedRequest, ApiError> {
        Ok(PreparedRequest {
            url: self.endpoint("/search"),
            body: encode(request)?,
        })
    }

    pub fn prepare_analyze(
        &self,
        session_id: &str,
        query: &str,
    ) -> Result<PreparedRequest, ApiError> {
        let body = SessionAnalysisRequest {
            session_id: session_id.to_string(),
            query: query.to_string(),
        };
        Ok(PreparedRequest {
            url: self.endpoint(&format!(
                "/sessions/{}/analyze",
                urlencoding::encode(session_id)
            )),
            body: encode(&body)?,
        })
    }

    /// `POST /search`
    pub async fn search_videos(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let prepared = self.prepare_search(request)?;
        log::debug!("Searching videos for {:?}", request.keyword);
        self.post_json(prepared).await
    }

    /// `POST /sessions/{session_id}/analyze`
    pub async fn analyze_session_content(
        &self,
        session_id: &str,
        query: &str,
    ) -> Result<SessionAnalysisResponse, ApiError> {
        let prepared = self.prepare_analyze(session_id, query)?;
        log::debug!("Analyzing session {} with query {:?}", session_id, query);
        self.post_json(prepared).await
    }

    /// `GET /health`
    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let url = self.endpoint("/health");
        self.send(Request::get(&url), None).await
    }

    async fn post_json<T: DeserializeOwned>(&self, prepared: PreparedRequest) -> Result<T, ApiError> {
        self.send(Request::post(&prepared.url), Some(prepared.body))
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::Browser(js_error_text(&e)))?;
        let timed_out = Rc::new(Cell::new(false));

        // Aborts the fetch once the deadline passes; dropping it clears the timer.
        let _deadline = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
            .map_err(|e| ApiError::Browser(js_error_text(&e)))?
        };

        let builder = builder.abort_signal(Some(&controller.signal()));
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let transport_error = |e: gloo_net::Error| {
            if timed_out.get() {
                ApiError::Timeout(self.timeout_ms)
            } else {
                ApiError::Network(e.to_string())
            }
        };

        let response = request.send().await.map_err(&transport_error)?;
        let status = response.status();
        let ok = response.ok();
        let text = response.text().await.map_err(&transport_error)?;

        if !ok {
            return Err(http_error(status, &text));
        }
        decode(&text)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn http_error(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => error_response.detail,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => format!("request failed with status {status}"),
    };
    ApiError::Http { status, message }
}
