//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::pdf::extract_text_blocking;
use crate::models::resume::{ParsedResume, ScanReport, ScanSource};
use crate::resume::parser::{parse_resume, parse_resume_with};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
    /// Overrides the configured vocabulary for this request only.
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub required_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
///
/// Returns the configured default vocabulary.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        required_skills: state.config.required_skills.clone(),
    })
}

/// POST /api/v1/resumes/parse
///
/// Parses pasted résumé text and scores it against the vocabulary.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ScanReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let resume = scan_against(&state, &request.resume_text, request.required_skills);
    Ok(Json(finish(ScanSource::Text, resume)))
}

/// POST /api/v1/resumes/parse-pdf
///
/// Multipart upload: one `file` part holding the PDF, optional repeated
/// `skill` parts overriding the vocabulary.
pub async fn handle_parse_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanReport>, AppError> {
    let mut file: Option<Bytes> = None;
    let mut skills: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => file = Some(field.bytes().await.map_err(multipart_error)?),
            Some("skill") => {
                let skill = field.text().await.map_err(multipart_error)?;
                if !skill.trim().is_empty() {
                    skills.push(skill.trim().to_string());
                }
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("missing 'file' part".to_string()))?;
    if file.is_empty() {
        return Err(AppError::Validation("'file' part is empty".to_string()));
    }

    let text = extract_text_blocking(file).await?;
    let required_skills = (!skills.is_empty()).then_some(skills);
    let resume = scan_against(&state, &text, required_skills);
    Ok(Json(finish(ScanSource::Pdf, resume)))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Uses the cached default trie unless the caller supplied a vocabulary.
fn scan_against(
    state: &AppState,
    text: &str,
    required_skills: Option<Vec<String>>,
) -> ParsedResume {
    match required_skills {
        Some(skills) => parse_resume(text, &skills),
        None => parse_resume_with(text, &state.default_trie, &state.config.required_skills),
    }
}

fn finish(source: ScanSource, resume: ParsedResume) -> ScanReport {
    let report = ScanReport::new(source, resume);
    info!(
        scan_id = %report.scan_id,
        source = ?report.source,
        found = report.resume.skills_found.len(),
        percent = report.resume.skill_match.percent,
        "Resume scanned"
    );
    report
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", e.body_text()))
    }
}
