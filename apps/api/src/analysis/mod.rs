//! Analysis Endpoint — scores a resume against a job description via the LLM.
//!
//! Flow: validate request → build prompt → one model call → strict shape
//! validation of the returned text. All LLM calls go through llm_client —
//! no direct Anthropic API calls here.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{self, LlmError, TextGenerator};

/// Incoming analysis request. Both fields must carry enough text for the
/// model to evaluate; anything shorter is rejected before the model call.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalysisRequest {
    #[validate(length(min = 50, message = "resume_text must be at least 50 characters"))]
    pub resume_text: String,

    #[validate(length(min = 50, message = "job_description must be at least 50 characters"))]
    pub job_description: String,
}

/// The model's verdict. All four fields are required; a response missing or
/// mistyping any of them is rejected wholesale, never partially accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: i64,
    pub strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Builds the user prompt by placing the two request fields under their
/// labeled headers.
fn build_prompt(request: &AnalysisRequest) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", &request.resume_text)
        .replace("{job_description}", &request.job_description)
}

/// Runs the analysis: exactly one `generate` call, then strict deserialization
/// of the returned text. Model output is untrusted input — it goes through the
/// same schema validation a hostile network payload would.
///
/// Failure mapping: unparseable or mis-shaped output (and responses with no
/// text content at all) are `UpstreamInvalid`; transport and provider errors
/// are `UpstreamUnavailable`.
pub async fn analyze(
    request: &AnalysisRequest,
    generator: &dyn TextGenerator,
) -> Result<AnalysisResult, AppError> {
    let prompt = build_prompt(request);

    let text = generator
        .generate(&prompt, ANALYSIS_SYSTEM)
        .await
        .map_err(|e| match e {
            LlmError::EmptyContent => AppError::UpstreamInvalid(e.to_string()),
            other => AppError::UpstreamUnavailable(other.to_string()),
        })?;

    llm_client::parse_json_response::<AnalysisResult>(&text)
        .map_err(|e| AppError::UpstreamInvalid(e.to_string()))
}
