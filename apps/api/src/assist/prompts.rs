// Prompt templates for the writing assistants.
// Replace every `{placeholder}` before sending.

pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Generate a professional cover letter for the following job application:

Job Title: {job_title}
Company: {company_name}
Applicant Name: {applicant_name}

Applicant Summary: {applicant_summary}

Relevant Experience:
{relevant_experience}

Job Description: {job_description}

Please write a compelling, personalized cover letter that highlights the applicant's relevant experience and explains why they would be a great fit for this role. Keep it professional but engaging, around 3-4 paragraphs."#;

pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate {count} interview questions for the following job position:

Job Title: {job_title}
Job Description: {job_description}
Required Skills: {required_skills}
Difficulty Level: {difficulty}

Please return a JSON array with the following structure:
[
  {
    "question": "question text",
    "category": "technical|behavioral|situational|company-specific",
    "difficulty": "{difficulty}"
  }
]

Include a mix of technical questions related to the required skills, behavioral questions, and situational questions that assess problem-solving abilities."#;

pub const OPTIMIZE_JOB_PROMPT_TEMPLATE: &str = r#"Optimize the following job description for better candidate attraction and SEO:

Job Title: {title}
Current Description: {description}
Requirements: {requirements}
Target Audience: {target_audience}

Please return a JSON response with:
{
  "optimizedDescription": "improved description",
  "suggestions": ["suggestion1", "suggestion2", "suggestion3"],
  "seoScore": <number between 0-100>
}

Focus on making the description more engaging, inclusive, and SEO-friendly while maintaining professionalism."#;

pub const PARSE_RESUME_PROMPT_TEMPLATE: &str = r#"Parse the following resume text and extract structured information. Return a JSON response:

{resume_text}

Please return:
{
  "personalInfo": {
    "name": "Full Name",
    "email": "email@example.com",
    "phone": "phone number",
    "location": "city, state"
  },
  "experience": [
    {
      "company": "Company Name",
      "position": "Job Title",
      "startDate": "MM/YYYY",
      "endDate": "MM/YYYY or Present",
      "description": "Brief description"
    }
  ],
  "education": [
    {
      "institution": "School Name",
      "degree": "Degree Type",
      "field": "Field of Study",
      "graduationDate": "MM/YYYY"
    }
  ],
  "skills": ["skill1", "skill2", "skill3"],
  "summary": "Professional summary extracted from resume"
}"#;
