// Prompt constants for generative match scoring.

/// Match analysis prompt. Replace every `{placeholder}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Analyze the job match between an applicant and a job posting. Return a JSON response with the following structure:

{
  "score": <number between 0-100>,
  "reasons": ["reason1", "reason2", "reason3"],
  "skillsMatch": {
    "matched": ["skill1", "skill2"],
    "missing": ["skill1", "skill2"]
  }
}

Job Requirements: {job_requirements}
Job Skills: {job_skills}
Job Description: {job_description}

Applicant Skills: {applicant_skills}
Applicant Experience: {applicant_experience}
Applicant Summary: {applicant_summary}

Analyze the match considering skills alignment, experience relevance, and overall fit. Provide specific reasons for the score. Only list skills from "Job Skills" under matched or missing."#;
