//! Axum route handlers for the writing assistants.

use axum::{extract::State, Json};

use crate::assist::cover_letter::{generate_cover_letter, CoverLetter, CoverLetterRequest};
use crate::assist::interview::{
    generate_interview_questions, InterviewQuestionSet, InterviewQuestionsRequest,
};
use crate::assist::job_optimizer::{optimize_job_description, OptimizeJobRequest, OptimizedJob};
use crate::assist::resume_parser::{parse_resume, ParseResumeRequest, ParsedResumeResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/assist/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetter>, AppError> {
    request.validate()?;
    let letter = generate_cover_letter(state.generator.as_ref(), &request).await?;
    Ok(Json(letter))
}

/// POST /api/v1/assist/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<InterviewQuestionsRequest>,
) -> Result<Json<InterviewQuestionSet>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::blank("jobTitle"));
    }
    let set = generate_interview_questions(state.generator.as_ref(), &request).await?;
    Ok(Json(set))
}

/// POST /api/v1/assist/optimize-job
pub async fn handle_optimize_job(
    State(state): State<AppState>,
    Json(request): Json<OptimizeJobRequest>,
) -> Result<Json<OptimizedJob>, AppError> {
    request.validate()?;
    let optimized = optimize_job_description(state.generator.as_ref(), &request).await?;
    Ok(Json(optimized))
}

/// POST /api/v1/assist/parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParsedResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::blank("resumeText"));
    }
    let parsed = parse_resume(state.generator.as_ref(), &request.resume_text).await?;
    Ok(Json(parsed))
}
