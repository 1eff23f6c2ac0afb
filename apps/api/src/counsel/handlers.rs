use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::catalog::{self, Statement};
use crate::counsel::prompts;
use crate::counsel::scoring::{self, UserAnswer};
use crate::errors::AppError;
use crate::extract;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: Vec<UserAnswer>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswersResponse {
    pub category_scores: HashMap<String, i64>,
    pub top_categories: Vec<String>,
    pub career_suggestions: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub filename: String,
    pub career_recommendations: String,
}

/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Interactive Career Counselor AI Agent!"
    }))
}

/// GET /statements
pub async fn handle_statements() -> Json<&'static [Statement]> {
    Json(catalog::statements())
}

/// POST /submit_answers
///
/// Scores the submitted ratings per category and asks the LLM for career
/// suggestions based on the positively-scored categories.
pub async fn handle_submit_answers(
    State(state): State<AppState>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Json<SubmitAnswersResponse>, AppError> {
    let report = scoring::score(&req.answers);
    info!(
        answers = req.answers.len(),
        top_categories = report.top_categories.len(),
        "Scored preference answers"
    );

    let prompt = prompts::preference_prompt(&report.top_categories);
    let career_suggestions = state
        .llm
        .complete(prompts::PREFERENCE_SYSTEM, &prompt)
        .await?;

    Ok(Json(SubmitAnswersResponse {
        category_scores: report.category_scores,
        top_categories: report.top_categories,
        career_suggestions,
    }))
}

/// POST /upload_resume
///
/// Accepts a multipart resume upload (`.pdf`, `.doc`, `.docx`), extracts
/// its text and asks the LLM for career recommendations.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .ok_or_else(|| AppError::Validation("File field has no filename".to_string()))?
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, content) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    info!(filename = %filename, bytes = content.len(), "Resume uploaded");

    let resume_text = extract::extract(&filename, &content)?;
    let prompt = prompts::resume_prompt(&resume_text);
    let career_recommendations = state.llm.complete(prompts::RESUME_SYSTEM, &prompt).await?;

    Ok(Json(UploadResumeResponse {
        filename,
        career_recommendations,
    }))
}
