// ATS analysis prompt templates.
// Placeholders are filled with `llm_client::prompts::render`; no escaping is applied.

/// Resume parse prompt. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT: &str = r#"
Extract key information from resume.

Return format:
SKILLS:
EXPERIENCE:
EDUCATION:

Resume:
{resume_text}
"#;

/// Job description parse prompt. Replace `{jd_text}` before sending.
pub const JD_PARSE_PROMPT: &str = r#"
Extract required skills and qualifications.

Return format:
REQUIRED_SKILLS:
REQUIREMENTS:

Job Description:
{jd_text}
"#;

/// Resume vs job description comparison.
/// Replace: {parsed_resume}, {parsed_jd}
pub const COMPARISON_PROMPT: &str = r#"
You are a strict ATS system.

Compare Resume with Job Description.

Return ONLY in this format:

SCORE: <number>/100

PROS:
- strength

CONS:
- weakness

MATCHED_SKILLS:
- skill

MISSING_SKILLS:
- skill

RECOMMENDATIONS:
- suggestion

RESUME:
{parsed_resume}

JOB DESCRIPTION:
{parsed_jd}
"#;

/// Resume-only analysis, used when no job description is given.
/// Replace: {parsed_resume}
pub const RESUME_ONLY_ANALYSIS_PROMPT: &str = r#"
You are a strict ATS (Applicant Tracking System).

Analyze resume ONLY.

Return ONLY in this format:

SCORE: <number>/100

PROS:
- strength

CONS:
- weakness

CRITICAL_ISSUES:
- issue

MISSING_KEYWORDS:
- keyword

RECOMMENDATIONS:
- suggestion

RESUME:
{parsed_resume}
"#;
