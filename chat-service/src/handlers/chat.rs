use crate::dtos::{ChatRequest, ChatResponse};
use crate::models::{ChatTurn, Language};
use crate::services::{build_prompt, truncate_to_sentences, ProviderError};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics::{counter, histogram};
use std::time::Instant;
use thiserror::Error;

/// Failures of `/chat`. Each maps to a fixed, user-facing text in a
/// `{"response": ...}` body.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Please ask me something about waste management!")]
    EmptyMessage,

    #[error("Could not connect to AI service. Please check if Ollama is running.")]
    BackendUnreachable,

    #[error("Request timed out. Please try again with a simpler question.")]
    BackendTimeout,

    #[error("Sorry, there was an error with the AI service.")]
    BackendStatus,

    #[error("Sorry, there was an unexpected error.")]
    Unexpected,
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            ChatError::EmptyMessage => "empty_message",
            ChatError::BackendUnreachable => "unreachable",
            ChatError::BackendTimeout => "timeout",
            ChatError::BackendStatus => "backend_error",
            ChatError::Unexpected => "unexpected",
        }
    }
}

impl From<ProviderError> for ChatError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Connection(_) => ChatError::BackendUnreachable,
            ProviderError::Timeout(_) => ChatError::BackendTimeout,
            ProviderError::Status { .. } => ChatError::BackendStatus,
            ProviderError::InvalidResponse(_) | ProviderError::Other(_) => ChatError::Unexpected,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        counter!("chat_requests_total", "outcome" => self.outcome()).increment(1);
        (self.status(), Json(ChatResponse::error(self.to_string()))).into_response()
    }
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    // An unreadable body is treated like a missing message.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Chat body is not valid JSON");
            ChatRequest::default()
        }
    };

    let language = Language::from_code(request.lang_code());
    let turn = ChatTurn::new(request.message, language);
    let Some(question) = turn.question() else {
        return Err(ChatError::EmptyMessage);
    };

    let prompt = build_prompt(question, turn.language);
    tracing::info!(
        language = %turn.language,
        message_len = question.chars().count(),
        backend = state.backend.name(),
        "Forwarding chat message"
    );

    let start = Instant::now();
    let result = state.backend.generate(&prompt, &state.params).await;
    histogram!("chat_backend_latency_seconds").record(start.elapsed().as_secs_f64());

    let raw = result.map_err(|e| {
        tracing::error!(error = %e, "Generation backend call failed");
        ChatError::from(e)
    })?;

    let turn = turn.with_reply(truncate_to_sentences(&raw));
    counter!("chat_requests_total", "outcome" => "ok").increment(1);

    Ok(Json(ChatResponse::brief(turn.reply.unwrap_or_default())))
}
