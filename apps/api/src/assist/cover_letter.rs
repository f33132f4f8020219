//! Cover letter drafting.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assist::prompts::COVER_LETTER_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub job_description: String,
    pub applicant_name: String,
    #[serde(default)]
    pub applicant_summary: String,
    #[serde(default)]
    pub relevant_experience: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub cover_letter: String,
}

impl CoverLetterRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("jobTitle", &self.job_title),
            ("companyName", &self.company_name),
            ("applicantName", &self.applicant_name),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::blank(field));
            }
        }
        Ok(())
    }
}

pub fn build_cover_letter_prompt(request: &CoverLetterRequest) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", &request.job_title)
        .replace("{company_name}", &request.company_name)
        .replace("{applicant_name}", &request.applicant_name)
        .replace("{applicant_summary}", &request.applicant_summary)
        .replace("{relevant_experience}", &request.relevant_experience.join("\n"))
        .replace("{job_description}", &request.job_description)
}

/// Free-text letter; there is no fallback letter.
pub async fn generate_cover_letter(
    generator: &dyn TextGenerator,
    request: &CoverLetterRequest,
) -> Result<CoverLetter, AppError> {
    let text = generator
        .generate(&build_cover_letter_prompt(request))
        .await?;
    let cover_letter = text.trim().to_string();
    if cover_letter.is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    info!(
        "Drafted cover letter for {} at {} ({} chars)",
        request.job_title,
        request.company_name,
        cover_letter.len()
    );
    Ok(CoverLetter { cover_letter })
}
