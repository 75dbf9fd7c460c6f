// ATS scoring: deterministic keyword-coverage analysis of a résumé
// against a job description. Pure functions only — no LLM calls here.

pub mod handlers;
pub mod scoring;
