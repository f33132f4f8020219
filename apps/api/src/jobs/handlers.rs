//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::search::{filter_jobs, SearchFilters};
use crate::models::job::JobListing;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobListing>,
    pub total: usize,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = filter_jobs(state.catalog.list().await, &filters);
    Ok(Json(JobListResponse {
        total: jobs.len(),
        jobs,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobListing>, AppError> {
    state
        .catalog
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
