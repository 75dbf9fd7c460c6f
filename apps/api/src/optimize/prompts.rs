// All LLM prompt constants for the optimize module.

/// Résumé rewrite prompt. Replace `{jd}` and `{resume}` before sending.
pub const RESUME_REWRITE_PROMPT_TEMPLATE: &str = r#"You are a resume editor. Rewrite the LaTeX resume below so its content and keywords align with the job description, while staying truthful to the underlying experience.

Rules:
1. Weave the job description's keywords into the resume wherever the existing experience supports them.
2. Remove skills and bullet points that are irrelevant to this role.
3. The output must be VALID LaTeX that compiles with pdflatex; keep the document's preamble and overall structure intact.
4. Return ONLY the rewritten LaTeX document — no commentary, no code fences.

### Job Description
{jd}

### Current Resume (LaTeX)
{resume}"#;

/// Email personalization prompt. Replace `{description}`, `{template}`,
/// and `{subject}` before sending.
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"You are an outreach copywriter. Rewrite and personalise the cold email draft below so it is tailored to the role context and immediately sendable.

Rules:
1. Replace placeholders such as [first name], [role], or [company] with the best fit from the context; when information is missing, substitute a warm generic alternative (for example "Hi there" or "hiring team").
2. Keep the email under 160 words, in the first person, with a warm and confident tone. No buzzwords or filler.
3. End with a clear call-to-action for a short conversation.
4. Return ONLY a valid JSON object with string keys "subject" and "body" — no code fences, no commentary. "subject" is at most 90 characters and references the role or company; "body" uses \n for paragraph breaks and must not expose placeholder tokens.

Starting subject line from the user (may be empty):
{subject}

User-provided draft email body:
{template}

Job description or outreach context:
{description}"#;
