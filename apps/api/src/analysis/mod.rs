//! Analysis Orchestrator — sequences the model calls behind one ATS report.
//!
//! resume parse → (job description parse) → comparison or resume-only analysis.
//! Calls are strictly sequential and nothing is cached between requests.

pub mod prompts;

use tracing::{debug, info};

use crate::analysis::prompts::{
    COMPARISON_PROMPT, JD_PARSE_PROMPT, RESUME_ONLY_ANALYSIS_PROMPT, RESUME_PARSE_PROMPT,
};
use crate::llm_client::prompts::render;
use crate::llm_client::{LlmError, TextModel};

/// A job description counts only when it has non-whitespace content.
pub fn is_present(job_description: Option<&str>) -> bool {
    job_description.is_some_and(|jd| !jd.trim().is_empty())
}

pub fn resume_parse_prompt(resume_text: &str) -> String {
    render(RESUME_PARSE_PROMPT, &[("resume_text", resume_text)])
}

pub fn jd_parse_prompt(jd_text: &str) -> String {
    render(JD_PARSE_PROMPT, &[("jd_text", jd_text)])
}

pub fn comparison_prompt(parsed_resume: &str, parsed_jd: &str) -> String {
    render(
        COMPARISON_PROMPT,
        &[("parsed_resume", parsed_resume), ("parsed_jd", parsed_jd)],
    )
}

pub fn resume_only_prompt(parsed_resume: &str) -> String {
    render(
        RESUME_ONLY_ANALYSIS_PROMPT,
        &[("parsed_resume", parsed_resume)],
    )
}

/// Runs the full analysis and returns the model's final reply unchanged.
///
/// Two model calls without a job description, three with one. Intermediate
/// replies are not validated; an empty parse is forwarded as-is.
pub async fn analyze(
    model: &dyn TextModel,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<String, LlmError> {
    let parsed_resume = model.generate(&resume_parse_prompt(resume_text)).await?;
    debug!("Parsed resume: {} chars", parsed_resume.len());

    let prompt = match job_description.filter(|jd| is_present(Some(jd))) {
        Some(jd) => {
            let parsed_jd = model.generate(&jd_parse_prompt(jd)).await?;
            debug!("Parsed job description: {} chars", parsed_jd.len());
            comparison_prompt(&parsed_resume, &parsed_jd)
        }
        None => resume_only_prompt(&parsed_resume),
    };

    let result = model.generate(&prompt).await?;
    info!("ATS analysis complete: {} chars", result.len());
    Ok(result)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextModel};

    /// Records every prompt and answers from a script, falling back to a
    /// numbered canned reply once the script runs out.
    #[derive(Default)]
    pub struct RecordingModel {
        pub prompts: Mutex<Vec<String>>,
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
    }

    impl RecordingModel {
        pub fn with_replies(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                replies: Mutex::new(replies.into()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextModel for RecordingModel {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            let call = {
                let mut prompts = self.prompts.lock().unwrap();
                prompts.push(prompt.to_string());
                prompts.len()
            };
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(format!("reply #{call}")))
        }
    }
}
