// Prompt constants for the analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

const ANALYST_PREAMBLE: &str = "You are an expert ATS (Applicant Tracking System) analyzer and \
    resume optimization specialist. Analyze the following resume against the provided job \
    description and return a detailed analysis.";

/// Wire shape the backend must reply with.
pub const RESPONSE_SHAPE: &str = r#"{
  "ats_score": <number between 0-100>,
  "matched_skills": [<array of skills/keywords found in both resume and job description>],
  "missing_skills": [<array of important skills/keywords from job description that are missing in resume>],
  "recommendations": [<array of specific actionable recommendations to improve ATS score>],
  "categories": {
    "technical_skills": <score 0-100 for technical skills match>,
    "experience": <score 0-100 for experience relevance>,
    "education": <score 0-100 for education alignment>,
    "keywords": <score 0-100 for keyword optimization>,
    "formatting": <score 0-100 for ATS-friendly formatting>
  }
}"#;

const GUIDELINES: &str = "Important guidelines:
- Be precise and specific in skill matching
- Focus on hard skills, soft skills, and industry keywords
- Consider experience level, education requirements, and certifications
- Provide actionable recommendations for improvement
- Score should reflect realistic ATS compatibility
- Include both technical and non-technical skills in analysis";

/// Builds the single analysis prompt. Both inputs are embedded verbatim.
pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        "{ANALYST_PREAMBLE}\n\n\
         JOB DESCRIPTION:\n{job_description}\n\n\
         RESUME CONTENT:\n{resume_text}\n\n\
         Please analyze the resume and provide a comprehensive ATS compatibility assessment. \
         {JSON_ONLY_INSTRUCTION}\n\n\
         {RESPONSE_SHAPE}\n\n\
         {GUIDELINES}\n"
    )
}
