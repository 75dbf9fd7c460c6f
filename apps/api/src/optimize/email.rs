//! Email personalization — rewrites a cold-outreach template against a role
//! description and validates the model's structured reply.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::optimize::prompts::EMAIL_PROMPT_TEMPLATE;

/// Personalized email returned to the client. camelCase field names are
/// part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedEmail {
    pub optimized_subject: String,
    pub optimized_body: String,
}

/// Raw model output. Some models capitalize the keys; accept both.
#[derive(Debug, Deserialize)]
struct EmailDraft {
    #[serde(alias = "Subject")]
    subject: Option<String>,
    #[serde(alias = "Body")]
    body: Option<String>,
}

/// Personalizes `template` against `description`, carrying the user's
/// starting `subject` line (may be empty) into the prompt.
pub async fn optimize_email(
    description: &str,
    template: &str,
    subject: &str,
    llm: &LlmClient,
) -> Result<OptimizedEmail, AppError> {
    if !llm.has_key() {
        return Err(AppError::LlmMissingKey);
    }

    let subject_line = if subject.trim().is_empty() {
        "(no subject provided)"
    } else {
        subject
    };

    let prompt = EMAIL_PROMPT_TEMPLATE
        .replace("{description}", description)
        .replace("{template}", template)
        .replace("{subject}", subject_line);

    let draft: EmailDraft = llm
        .complete_json(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Email rewrite failed: {e}")))?;

    finalize_draft(draft)
}

/// Rejects drafts with missing or blank fields, trims both, and normalizes
/// CRLF line endings in the body.
fn finalize_draft(draft: EmailDraft) -> Result<OptimizedEmail, AppError> {
    let subject = draft.subject.as_deref().map(str::trim).unwrap_or("");
    let body = draft.body.as_deref().map(str::trim).unwrap_or("");

    if subject.is_empty() || body.is_empty() {
        return Err(AppError::Llm(
            "LLM email output is missing subject or body".to_string(),
        ));
    }

    Ok(OptimizedEmail {
        optimized_subject: subject.to_string(),
        optimized_body: body.replace("\r\n", "\n"),
    })
}
