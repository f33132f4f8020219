//! Resume text → structured profile.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assist::prompts::PARSE_RESUME_PROMPT_TEMPLATE;
use crate::assist::AssistSource;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{extract_json_object, TextGenerator};

pub const UNKNOWN_NAME: &str = "Unknown";
const NO_JSON_SUMMARY: &str = "Unable to parse resume content";
const UNPARSEABLE_SUMMARY: &str = "Error parsing resume content";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedEducation {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedResume {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ParsedExperience>,
    pub education: Vec<ParsedEducation>,
    pub skills: Vec<String>,
    pub summary: String,
}

impl ParsedResume {
    fn placeholder(summary: &str) -> Self {
        Self {
            personal_info: PersonalInfo {
                name: UNKNOWN_NAME.to_string(),
                ..Default::default()
            },
            summary: summary.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedResumeResponse {
    #[serde(flatten)]
    pub resume: ParsedResume,
    pub source: AssistSource,
}

pub fn build_parse_resume_prompt(resume_text: &str) -> String {
    let prompt = PARSE_RESUME_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

pub async fn parse_resume(
    generator: &dyn TextGenerator,
    resume_text: &str,
) -> Result<ParsedResumeResponse, AppError> {
    let text = generator
        .generate(&build_parse_resume_prompt(resume_text))
        .await?;

    let Some(json) = extract_json_object(&text) else {
        warn!("Resume parse reply held no JSON object");
        return Ok(ParsedResumeResponse {
            resume: ParsedResume::placeholder(NO_JSON_SUMMARY),
            source: AssistSource::FallbackNoJson,
        });
    };

    let mut resume: ParsedResume = match serde_json::from_str(json) {
        Ok(r) => r,
        Err(e) => {
            warn!("Resume parse reply did not parse: {e}");
            return Ok(ParsedResumeResponse {
                resume: ParsedResume::placeholder(UNPARSEABLE_SUMMARY),
                source: AssistSource::FallbackUnparseable,
            });
        }
    };

    if resume.personal_info.name.trim().is_empty() {
        resume.personal_info.name = UNKNOWN_NAME.to_string();
    }
    resume.skills.retain(|s| !s.trim().is_empty());

    info!(
        "Parsed resume: {} roles, {} schools, {} skills",
        resume.experience.len(),
        resume.education.len(),
        resume.skills.len()
    );
    Ok(ParsedResumeResponse {
        resume,
        source: AssistSource::Generated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{CannedGenerator, FailingGenerator};

    #[tokio::test]
    async fn test_parses_structured_reply() {
        let reply = r#"```json
        {
          "personalInfo": {"name": "Jane Smith", "email": "jane@example.com"},
          "experience": [
            {"company": "Acme", "position": "Engineer", "startDate": "01/2020", "endDate": "Present"}
          ],
          "education": [{"institution": "State U", "degree": "BS", "field": "CS"}],
          "skills": ["Rust", "", "SQL"],
          "summary": "Systems engineer"
        }
        ```"#;
        let generator = CannedGenerator::new(reply);
        let parsed = parse_resume(&generator, "Jane Smith\nEngineer at Acme").await.unwrap();

        assert_eq!(parsed.source, AssistSource::Generated);
        assert_eq!(parsed.resume.personal_info.name, "Jane Smith");
        assert_eq!(parsed.resume.personal_info.phone, "");
        assert_eq!(parsed.resume.experience[0].end_date, "Present");
        assert_eq!(parsed.resume.skills, vec!["Rust", "SQL"]);
        assert!(generator.last_prompt().contains("Engineer at Acme"));
    }

    #[tokio::test]
    async fn test_missing_name_becomes_unknown() {
        let generator = CannedGenerator::new(r#"{"skills": ["Go"]}"#);
        let parsed = parse_resume(&generator, "Go developer").await.unwrap();
        assert_eq!(parsed.resume.personal_info.name, UNKNOWN_NAME);
    }

    #[tokio::test]
    async fn test_no_json_placeholder() {
        let generator = CannedGenerator::new("This does not look like a resume.");
        let parsed = parse_resume(&generator, "hello").await.unwrap();

        assert_eq!(parsed.source, AssistSource::FallbackNoJson);
        assert_eq!(parsed.resume.personal_info.name, "Unknown");
        assert_eq!(parsed.resume.summary, "Unable to parse resume content");
        assert!(parsed.resume.skills.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_placeholder() {
        let generator = CannedGenerator::new(r#"{"skills": "Rust, Go"}"#);
        let parsed = parse_resume(&generator, "hello").await.unwrap();

        assert_eq!(parsed.source, AssistSource::FallbackUnparseable);
        assert_eq!(parsed.resume.summary, "Error parsing resume content");
    }

    #[tokio::test]
    async fn test_response_flattens_resume_fields() {
        let generator = CannedGenerator::new("nothing");
        let parsed = parse_resume(&generator, "hello").await.unwrap();
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["personalInfo"]["name"], "Unknown");
        assert_eq!(value["source"], "fallback_no_json");
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let result = parse_resume(&FailingGenerator, "resume").await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
