//! Match scoring backends: pluggable, trait-based scorers for a
//! (job, applicant) pair.
//!
//! - `SkillOverlapScorer`: pure heuristic, never fails.
//! - `GenerativeMatchScorer`: asks the text-generation API for a verdict.
//! - `FallbackMatchScorer`: generative first, heuristic when that fails.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{generate_json_object, LlmError, TextGenerator};
use crate::matching::prompts::MATCH_PROMPT_TEMPLATE;
use crate::matching::skill_overlap::{
    score_skill_overlap, seeded_jitter, MatchInput, MatchResult, NoJitter, RngJitter,
    MAX_MISSING_SKILLS,
};
use crate::models::applicant::ApplicantProfile;
use crate::models::job::JobListing;

pub const BACKEND_SKILL_OVERLAP: &str = "skill_overlap";
pub const BACKEND_GENERATIVE: &str = "generative";

const MAX_REASONS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Request / report
// ────────────────────────────────────────────────────────────────────────────

/// One pair to score. The ids only seed the jitter and label logs; the job
/// description only feeds the generative prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub job_id: Option<String>,
    pub applicant_id: Option<String>,
    #[serde(default)]
    pub job_description: String,
    #[serde(flatten)]
    pub input: MatchInput,
}

impl MatchRequest {
    pub fn for_pair(job: &JobListing, applicant: &ApplicantProfile) -> Self {
        Self {
            job_id: Some(job.id.clone()),
            applicant_id: Some(applicant.id.clone()),
            job_description: job.description.clone(),
            input: MatchInput {
                job_skills: job.skills.clone(),
                job_requirements: job.requirements.clone(),
                applicant_skills: applicant.skills.clone(),
                applicant_experience_text: applicant.latest_experience_text().to_string(),
                applicant_summary_text: applicant.summary.clone(),
            },
        }
    }
}

/// A match result plus the backend that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    #[serde(flatten)]
    pub result: MatchResult,
    pub scorer_backend: String,
}

/// The match scorer trait. Implement this to swap backends without touching
/// handlers or ranking.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, request: &MatchRequest) -> Result<MatchReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// SkillOverlapScorer
// ────────────────────────────────────────────────────────────────────────────

/// How the heuristic perturbs its ratio score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JitterPolicy {
    /// Pure ratio score.
    Off,
    /// Fresh random offset on every call.
    PerCall,
    /// Offset seeded from the (job, applicant) ids, or from the input itself
    /// when ids are absent. Identical requests score identically.
    #[default]
    PerPair,
}

impl FromStr for JitterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(JitterPolicy::Off),
            "per_call" | "random" => Ok(JitterPolicy::PerCall),
            "per_pair" | "seeded" => Ok(JitterPolicy::PerPair),
            other => Err(format!(
                "unknown jitter policy '{other}' (expected off, per_call or per_pair)"
            )),
        }
    }
}

/// Heuristic scorer. No I/O, never returns an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillOverlapScorer {
    pub jitter: JitterPolicy,
}

impl SkillOverlapScorer {
    pub fn new(jitter: JitterPolicy) -> Self {
        Self { jitter }
    }

    /// Synchronous entry point; the trait impl delegates here.
    pub fn score_now(&self, request: &MatchRequest) -> MatchReport {
        let input = &request.input;
        let result = match self.jitter {
            JitterPolicy::Off => score_skill_overlap(input, &mut NoJitter),
            JitterPolicy::PerCall => score_skill_overlap(input, &mut RngJitter(rand::rng())),
            JitterPolicy::PerPair => match (&request.job_id, &request.applicant_id) {
                (Some(job_id), Some(applicant_id)) => {
                    score_skill_overlap(input, &mut seeded_jitter((job_id, applicant_id)))
                }
                _ => score_skill_overlap(input, &mut seeded_jitter(input)),
            },
        };

        MatchReport {
            result,
            scorer_backend: BACKEND_SKILL_OVERLAP.to_string(),
        }
    }
}

#[async_trait]
impl MatchScorer for SkillOverlapScorer {
    async fn score(&self, request: &MatchRequest) -> Result<MatchReport, AppError> {
        Ok(self.score_now(request))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GenerativeMatchScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct GeneratedSkillsMatch {
    #[serde(default)]
    matched: Vec<String>,
    #[serde(default)]
    missing: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedMatch {
    score: f64,
    #[serde(default)]
    reasons: Vec<String>,
    #[serde(default)]
    skills_match: GeneratedSkillsMatch,
}

/// Scores through the text-generation API. Fails on transport errors and on
/// replies that carry no usable JSON.
pub struct GenerativeMatchScorer {
    generator: Arc<dyn TextGenerator>,
}

impl GenerativeMatchScorer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl MatchScorer for GenerativeMatchScorer {
    async fn score(&self, request: &MatchRequest) -> Result<MatchReport, AppError> {
        let prompt = build_match_prompt(request);
        let generated: GeneratedMatch =
            generate_json_object(self.generator.as_ref(), &prompt).await?;
        let result = sanitize_generated(generated, &request.input.job_skills)?;

        debug!(
            "Generative match score {} for job {:?}",
            result.score, request.job_id
        );

        Ok(MatchReport {
            result,
            scorer_backend: BACKEND_GENERATIVE.to_string(),
        })
    }
}

fn build_match_prompt(request: &MatchRequest) -> String {
    let input = &request.input;
    let prompt = MATCH_PROMPT_TEMPLATE
        .replace("{job_requirements}", &input.job_requirements.join(", "))
        .replace("{job_skills}", &input.job_skills.join(", "))
        .replace("{job_description}", &request.job_description)
        .replace("{applicant_skills}", &input.applicant_skills.join(", "))
        .replace("{applicant_experience}", &input.applicant_experience_text)
        .replace("{applicant_summary}", &input.applicant_summary_text);
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

/// Holds a model verdict to the same shape the heuristic guarantees: score in
/// [0, 100], skills restricted to the job's own labels (job casing), missing
/// disjoint from matched and capped at three, one to three reasons.
fn sanitize_generated(
    generated: GeneratedMatch,
    job_skills: &[String],
) -> Result<MatchResult, LlmError> {
    let reasons: Vec<String> = generated
        .reasons
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .take(MAX_REASONS)
        .collect();
    if reasons.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    let lookup = |label: &str| {
        job_skills
            .iter()
            .find(|s| s.eq_ignore_ascii_case(label.trim()))
            .cloned()
    };

    let mut matched_skills: Vec<String> = Vec::new();
    for skill in generated.skills_match.matched.iter().filter_map(|l| lookup(l.as_str())) {
        if !matched_skills.contains(&skill) {
            matched_skills.push(skill);
        }
    }

    let mut missing_skills: Vec<String> = Vec::new();
    for skill in generated.skills_match.missing.iter().filter_map(|l| lookup(l.as_str())) {
        if missing_skills.len() == MAX_MISSING_SKILLS {
            break;
        }
        if !matched_skills.contains(&skill) && !missing_skills.contains(&skill) {
            missing_skills.push(skill);
        }
    }

    Ok(MatchResult {
        score: generated.score.clamp(0.0, 100.0).round() as u32,
        matched_skills,
        missing_skills,
        reasons,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary`; on any error logs a warning and answers with the
/// heuristic instead. Never fails.
pub struct FallbackMatchScorer {
    primary: Arc<dyn MatchScorer>,
    fallback: SkillOverlapScorer,
}

impl FallbackMatchScorer {
    pub fn new(primary: Arc<dyn MatchScorer>, fallback: SkillOverlapScorer) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl MatchScorer for FallbackMatchScorer {
    async fn score(&self, request: &MatchRequest) -> Result<MatchReport, AppError> {
        match self.primary.score(request).await {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!(
                    "Match scoring for job {:?} fell back to skill overlap: {e}",
                    request.job_id
                );
                Ok(self.fallback.score_now(request))
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
