//! Request handlers for the four page endpoints.
//!
//! Every handler renders the same shared page template: a nullable result
//! string plus the full feedback list. Uploads are persisted to scoped
//! temporary files that are deleted on every exit path, including model
//! failures.

use askama::Template;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Form;
use serde::Deserialize;
use tracing::warn;

use super::assets;
use super::error::AppError;
use super::template_structs::{FeedbackRow, IndexTemplate};
use super::AppState;
use crate::feedback::FeedbackEntry;

/// Rendered when a required upload field is missing.
pub const NO_FILE_MESSAGE: &str = "No file uploaded.";

/// Rendered when a document yields no extractable text.
pub const NO_READABLE_TEXT_MESSAGE: &str = "No readable text found in file.";

/// Word budget applied to document summaries when `maxL` is omitted.
const DEFAULT_DOCUMENT_WORD_LIMIT: usize = 150;

/// Form fields for the text summarization endpoint.
#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    pub data: Option<String>,
    #[serde(rename = "maxL")]
    pub max_l: Option<String>,
}

/// Form fields for the feedback endpoint. All optional, all defaulted.
#[derive(Debug, Deserialize)]
pub struct FeedbackForm {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<String>,
}

/// GET / - the page with no result.
pub async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, None).await
}

/// POST / - summarize pasted text.
pub async fn summarize_text(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Result<Html<String>, AppError> {
    let Some(text) = form.data else {
        return render_page(&state, None).await;
    };

    let word_limit = parse_word_limit(form.max_l.as_deref(), None)?;
    let summary = state.summarizer.summarize(&text, word_limit).await?;

    render_page(&state, Some(summary)).await
}

/// POST /voice - transcribe an uploaded audio file.
pub async fn voice_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().map(|n| n.to_string());
        if name.as_deref() == Some("voicefile") {
            let filename = field.file_name().unwrap_or("voice.wav").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(e.to_string()))?;
            upload = Some((filename, bytes));
            break;
        }
    }

    let Some((filename, bytes)) = upload else {
        return render_page(&state, Some(NO_FILE_MESSAGE.to_string())).await;
    };

    // Temp file is removed on drop, whatever the transcription outcome.
    let temp = tempfile::Builder::new()
        .suffix(&suffix_for(&filename, ".wav"))
        .tempfile()?;
    tokio::fs::write(temp.path(), &bytes).await?;

    // The one explicitly recovered model failure: rendered inline, HTTP 200.
    let transcription = match state.transcriber.transcribe(temp.path()).await {
        Ok(text) => text,
        Err(err) => {
            warn!("transcription failed: {}", err);
            format!("Error transcribing audio: {}", err)
        }
    };

    render_page(&state, Some(transcription)).await
}

/// POST /document - extract text from an uploaded document and summarize it.
pub async fn document_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut upload = None;
    let mut max_l = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("docfile") => {
                let filename = field.file_name().unwrap_or("document").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
                upload = Some((filename, bytes));
            }
            Some("maxL") => {
                max_l = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let Some((filename, bytes)) = upload else {
        return render_page(&state, Some(NO_FILE_MESSAGE.to_string())).await;
    };

    // Suffix keeps the original extension so extraction can dispatch on it.
    let temp = tempfile::Builder::new()
        .suffix(&suffix_for(&filename, ""))
        .tempfile()?;
    tokio::fs::write(temp.path(), &bytes).await?;

    let extractor = state.extractor.clone();
    let path = temp.path().to_path_buf();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&path))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    if text.trim().is_empty() {
        return render_page(&state, Some(NO_READABLE_TEXT_MESSAGE.to_string())).await;
    }

    let word_limit = parse_word_limit(max_l.as_deref(), Some(DEFAULT_DOCUMENT_WORD_LIMIT))?;
    let summary = state.summarizer.summarize(&text, word_limit).await?;

    render_page(&state, Some(summary)).await
}

/// POST /feedback - append an entry and re-render with the updated list.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Form(form): Form<FeedbackForm>,
) -> Result<Html<String>, AppError> {
    state
        .feedback
        .append(FeedbackEntry::from_form(form.name, form.comment, form.rating))
        .await;

    render_page(&state, None).await
}

/// GET /static/style.css
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

/// Render the shared page with an optional result and the feedback list.
async fn render_page(state: &AppState, result: Option<String>) -> Result<Html<String>, AppError> {
    let entries = state.feedback.entries().await;
    let feedbacks: Vec<FeedbackRow> = entries.iter().map(FeedbackRow::from_entry).collect();

    let template = IndexTemplate {
        title: "Condense",
        has_result: result.is_some(),
        result_val: result.unwrap_or_default(),
        has_feedback: !feedbacks.is_empty(),
        feedback_count: feedbacks.len(),
        feedbacks,
    };

    Ok(Html(template.render()?))
}

/// Parse a word limit form field. `default` applies when the field is
/// absent; a present-but-invalid or non-positive value is a client error.
fn parse_word_limit(raw: Option<&str>, default: Option<usize>) -> Result<usize, AppError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => {
            return default.ok_or_else(|| AppError::InvalidWordLimit("missing".to_string()));
        }
    };

    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(AppError::InvalidWordLimit("must be positive".to_string())),
        Err(_) => Err(AppError::InvalidWordLimit(raw.to_string())),
    }
}

/// Temp-file suffix preserving the upload's extension.
fn suffix_for(filename: &str, fallback: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_else(|| fallback.to_string())
}
