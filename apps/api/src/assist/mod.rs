// Writing assistants backed by the text-generation API: cover letters,
// interview questions, job-description optimization and resume parsing.
// Transport failures surface as errors; replies that cannot be parsed
// degrade to fixed fallback payloads.

pub mod cover_letter;
pub mod handlers;
pub mod interview;
pub mod job_optimizer;
pub mod prompts;
pub mod resume_parser;

use serde::Serialize;

/// Which path produced an assistant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistSource {
    Generated,
    /// The reply held no JSON value of the expected kind.
    FallbackNoJson,
    /// The reply held JSON that did not match the expected shape.
    FallbackUnparseable,
}
