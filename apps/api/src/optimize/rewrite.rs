//! Résumé rewrite — asks the LLM to retarget résumé LaTeX at a job
//! description. The model's text is returned as-is; compilation problems
//! surface later through the compile endpoint, not here.

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::optimize::prompts::RESUME_REWRITE_PROMPT_TEMPLATE;

/// Rewrites `resume` against `jd`, returning the new LaTeX source.
pub async fn optimize_resume(jd: &str, resume: &str, llm: &LlmClient) -> Result<String, AppError> {
    if !llm.has_key() {
        return Err(AppError::LlmMissingKey);
    }

    let prompt = RESUME_REWRITE_PROMPT_TEMPLATE
        .replace("{jd}", jd)
        .replace("{resume}", resume);

    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))
}
