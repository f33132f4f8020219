//! Batch matching: scores a set of jobs against one applicant and orders
//! them best-first.

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::search::format_salary;
use crate::matching::scorer::{MatchRequest, MatchScorer};
use crate::matching::skill_overlap::MatchResult;
use crate::models::applicant::ApplicantProfile;
use crate::models::job::JobListing;

/// Badge bucket for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => MatchTier::Excellent,
            75..=89 => MatchTier::Good,
            60..=74 => MatchTier::Fair,
            _ => MatchTier::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
            MatchTier::Poor => "Poor Match",
        }
    }
}

/// One ranked job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job: JobListing,
    #[serde(flatten)]
    pub result: MatchResult,
    pub tier: MatchTier,
    pub tier_label: &'static str,
    pub salary_label: String,
    pub scorer_backend: String,
}

/// True when the profile carries anything to match on.
pub fn has_match_signal(applicant: &ApplicantProfile) -> bool {
    !applicant.skills.is_empty()
        || !applicant.latest_experience_text().trim().is_empty()
        || !applicant.summary.trim().is_empty()
}

/// Scores every job concurrently and returns them by descending score. Ties
/// keep catalog order.
pub async fn rank_jobs(
    scorer: &dyn MatchScorer,
    jobs: &[JobListing],
    applicant: &ApplicantProfile,
) -> Result<Vec<JobMatch>, AppError> {
    let requests: Vec<MatchRequest> = jobs
        .iter()
        .map(|job| MatchRequest::for_pair(job, applicant))
        .collect();

    let reports = try_join_all(requests.iter().map(|r| scorer.score(r))).await?;

    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .zip(reports)
        .map(|(job, report)| {
            let tier = MatchTier::from_score(report.result.score);
            JobMatch {
                job: job.clone(),
                tier,
                tier_label: tier.label(),
                salary_label: format_salary(job.salary.min, job.salary.max),
                result: report.result,
                scorer_backend: report.scorer_backend,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.result.score.cmp(&a.result.score));

    info!(
        "Ranked {} jobs for applicant {} (top score: {:?})",
        matches.len(),
        applicant.id,
        matches.first().map(|m| m.result.score)
    );

    Ok(matches)
}
