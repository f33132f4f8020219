//! Interview question generation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assist::prompts::INTERVIEW_QUESTIONS_PROMPT_TEMPLATE;
use crate::assist::AssistSource;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{extract_json_array, TextGenerator};

pub const QUESTION_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Situational,
    CompanySpecific,
    #[serde(other)]
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: QuestionCategory,
    pub difficulty: Difficulty,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuestion {
    question: String,
    category: QuestionCategory,
    difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsRequest {
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewQuestionSet {
    pub questions: Vec<InterviewQuestion>,
    pub source: AssistSource,
}

pub fn build_interview_prompt(request: &InterviewQuestionsRequest) -> String {
    let prompt = INTERVIEW_QUESTIONS_PROMPT_TEMPLATE
        .replace("{count}", &QUESTION_COUNT.to_string())
        .replace("{job_title}", &request.job_title)
        .replace("{job_description}", &request.job_description)
        .replace("{required_skills}", &request.required_skills.join(", "))
        .replace("{difficulty}", request.difficulty.as_str());
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

fn question(text: &str, category: QuestionCategory, difficulty: Difficulty) -> InterviewQuestion {
    InterviewQuestion {
        question: text.to_string(),
        category,
        difficulty,
    }
}

/// Used when the reply holds no JSON array (or an empty one).
fn questions_without_json(difficulty: Difficulty) -> Vec<InterviewQuestion> {
    vec![
        question(
            "Tell me about your experience with the main technologies required for this role.",
            QuestionCategory::Technical,
            difficulty,
        ),
        question(
            "Describe a challenging project you've worked on and how you overcame obstacles.",
            QuestionCategory::Behavioral,
            difficulty,
        ),
        question(
            "How would you approach learning a new technology or framework required for this position?",
            QuestionCategory::Situational,
            difficulty,
        ),
        question(
            "What interests you most about working at our company?",
            QuestionCategory::CompanySpecific,
            difficulty,
        ),
    ]
}

/// Used when the reply holds an array that does not parse as questions.
fn questions_after_parse_error(difficulty: Difficulty) -> Vec<InterviewQuestion> {
    vec![
        question(
            "Tell me about your relevant experience for this role.",
            QuestionCategory::Behavioral,
            difficulty,
        ),
        question(
            "How do you handle challenging situations at work?",
            QuestionCategory::Situational,
            difficulty,
        ),
    ]
}

pub async fn generate_interview_questions(
    generator: &dyn TextGenerator,
    request: &InterviewQuestionsRequest,
) -> Result<InterviewQuestionSet, AppError> {
    let text = generator.generate(&build_interview_prompt(request)).await?;
    let difficulty = request.difficulty;

    let Some(json) = extract_json_array(&text) else {
        warn!("Interview question reply held no JSON array; using fallback set");
        return Ok(InterviewQuestionSet {
            questions: questions_without_json(difficulty),
            source: AssistSource::FallbackNoJson,
        });
    };

    let generated: Vec<GeneratedQuestion> = match serde_json::from_str(json) {
        Ok(g) => g,
        Err(e) => {
            warn!("Interview question reply did not parse: {e}");
            return Ok(InterviewQuestionSet {
                questions: questions_after_parse_error(difficulty),
                source: AssistSource::FallbackUnparseable,
            });
        }
    };

    let questions: Vec<InterviewQuestion> = generated
        .into_iter()
        .filter(|q| !q.question.trim().is_empty())
        .map(|q| InterviewQuestion {
            question: q.question.trim().to_string(),
            category: q.category,
            difficulty: q.difficulty.unwrap_or(difficulty),
        })
        .collect();

    if questions.is_empty() {
        warn!("Interview question reply was an empty array; using fallback set");
        return Ok(InterviewQuestionSet {
            questions: questions_without_json(difficulty),
            source: AssistSource::FallbackNoJson,
        });
    }

    info!(
        "Generated {} interview questions for {}",
        questions.len(),
        request.job_title
    );
    Ok(InterviewQuestionSet {
        questions,
        source: AssistSource::Generated,
    })
}
