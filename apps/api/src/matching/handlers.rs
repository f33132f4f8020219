//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::ranking::{has_match_signal, rank_jobs, JobMatch};
use crate::matching::scorer::{MatchReport, MatchRequest};
use crate::models::applicant::ApplicantProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    pub applicant: ApplicantProfile,
    /// Restrict ranking to these listings; the whole catalog when absent.
    pub job_ids: Option<Vec<String>>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub matches: Vec<JobMatch>,
}

/// POST /api/v1/matches/score
///
/// Scores a single pair with the skill-overlap heuristic. No external call.
pub async fn handle_score_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    Ok(Json(state.skill_scorer.score_now(&request)))
}

/// POST /api/v1/matches
///
/// Ranks catalog jobs for an applicant through the configured scorer chain.
/// A profile with no skills, experience or summary gets no matches.
pub async fn handle_rank_matches(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if !has_match_signal(&request.applicant) {
        info!(
            "Applicant {} has an empty profile; skipping match ranking",
            request.applicant.id
        );
        return Ok(Json(RankResponse { matches: vec![] }));
    }

    let jobs = match &request.job_ids {
        Some(ids) => state.catalog.get_many(ids).await,
        None => state.catalog.list().await,
    };

    let mut matches = rank_jobs(state.match_scorer.as_ref(), &jobs, &request.applicant).await?;
    if let Some(limit) = request.limit {
        matches.truncate(limit);
    }

    Ok(Json(RankResponse { matches }))
}
