//! Job description optimization.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assist::prompts::OPTIMIZE_JOB_PROMPT_TEMPLATE;
use crate::assist::AssistSource;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{extract_json_object, TextGenerator};

pub const DEFAULT_TARGET_AUDIENCE: &str = "experienced professionals";

const NO_JSON_SEO_SCORE: u32 = 75;
const UNPARSEABLE_SEO_SCORE: u32 = 70;
const MAX_SEO_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeJobRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub target_audience: Option<String>,
}

impl OptimizeJobRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::blank("title"));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::blank("description"));
        }
        Ok(())
    }

    fn audience(&self) -> &str {
        self.target_audience
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_TARGET_AUDIENCE)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedJob {
    pub optimized_description: String,
    pub suggestions: Vec<String>,
    pub seo_score: u32,
    pub source: AssistSource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedOptimization {
    optimized_description: String,
    #[serde(default)]
    suggestions: Vec<String>,
    seo_score: f64,
}

pub fn build_optimize_prompt(request: &OptimizeJobRequest) -> String {
    let prompt = OPTIMIZE_JOB_PROMPT_TEMPLATE
        .replace("{title}", &request.title)
        .replace("{description}", &request.description)
        .replace("{requirements}", &request.requirements.join(", "))
        .replace("{target_audience}", request.audience());
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub async fn optimize_job_description(
    generator: &dyn TextGenerator,
    request: &OptimizeJobRequest,
) -> Result<OptimizedJob, AppError> {
    let text = generator.generate(&build_optimize_prompt(request)).await?;

    let Some(json) = extract_json_object(&text) else {
        warn!("Job optimization reply held no JSON object; returning original description");
        return Ok(OptimizedJob {
            optimized_description: request.description.clone(),
            suggestions: strings(&[
                "Add more specific skill requirements",
                "Include company culture information",
                "Mention growth opportunities",
            ]),
            seo_score: NO_JSON_SEO_SCORE,
            source: AssistSource::FallbackNoJson,
        });
    };

    let generated = match serde_json::from_str::<GeneratedOptimization>(json) {
        Ok(g) if !g.optimized_description.trim().is_empty() => g,
        Ok(_) | Err(_) => {
            warn!("Job optimization reply did not parse; returning original description");
            return Ok(OptimizedJob {
                optimized_description: request.description.clone(),
                suggestions: strings(&[
                    "Consider adding more details about the role",
                    "Include information about company benefits",
                ]),
                seo_score: UNPARSEABLE_SEO_SCORE,
                source: AssistSource::FallbackUnparseable,
            });
        }
    };

    let seo_score = generated.seo_score.clamp(0.0, MAX_SEO_SCORE).round() as u32;
    info!("Optimized job description for {} (seo {seo_score})", request.title);

    Ok(OptimizedJob {
        optimized_description: generated.optimized_description.trim().to_string(),
        suggestions: generated
            .suggestions
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        seo_score,
        source: AssistSource::Generated,
    })
}
