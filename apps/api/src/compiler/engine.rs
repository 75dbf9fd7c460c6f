//! Tectonic orchestration: availability probe, scoped temporary workspace,
//! subprocess invocation, artifact harvesting.
//!
//! Each `compile` call owns an exclusive workspace that is removed on every
//! exit path — success, engine failure, or abandonment. Concurrent calls run
//! independent subprocesses; there is no shared lock or queue, and a failed
//! compilation is surfaced once, never retried.

use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::compiler::fontconfig::{render_fontconfig, OsFamily};

const SOURCE_FILE: &str = "resume.tex";
const ARTIFACT_FILE: &str = "resume.pdf";
const FONTCONFIG_FILE: &str = "fonts.conf";
const WORKSPACE_PREFIX: &str = "resume-latex-";
const DIAGNOSTIC_TAIL_LINES: usize = 15;

/// Failures of a single compile call. `Engine` messages are shown to the
/// user verbatim, so they carry only engine diagnostic text.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("LaTeX payload is empty")]
    EmptyInput,

    #[error("{0}")]
    EngineUnavailable(String),

    #[error("[tectonic] {0}")]
    Engine(String),

    #[error("workspace I/O error: {0}")]
    Workspace(#[from] std::io::Error),
}

/// Compiles LaTeX source to PDF through an external Tectonic binary.
///
/// The engine path is fixed at startup from config; the struct itself is
/// stateless and cheap to clone into handlers.
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    engine_path: String,
}

impl LatexCompiler {
    pub fn new(engine_path: impl Into<String>) -> Self {
        Self {
            engine_path: engine_path.into(),
        }
    }

    /// Compiles `source`, returning the PDF bytes base64-encoded.
    ///
    /// Blank input is rejected before any filesystem or subprocess work;
    /// the engine is version-probed before the workspace is created.
    pub async fn compile(&self, source: &str) -> Result<String, CompileError> {
        if source.trim().is_empty() {
            return Err(CompileError::EmptyInput);
        }

        self.ensure_engine_available().await?;

        let workspace = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir()?;

        // The workspace is removed when `workspace` drops — on success and
        // on every early return below. Removal failures are ignored and
        // never mask the primary result.
        self.compile_in_workspace(source, workspace.path()).await
    }

    /// Version-probes the engine binary. Only a spawn failure counts as
    /// unavailable; the guidance names the config knob to fix it.
    async fn ensure_engine_available(&self) -> Result<(), CompileError> {
        match Command::new(&self.engine_path)
            .arg("--version")
            .output()
            .await
        {
            Ok(output) => {
                debug!(
                    "engine probe ok: {}",
                    String::from_utf8_lossy(&output.stdout).trim()
                );
                Ok(())
            }
            Err(e) => Err(CompileError::EngineUnavailable(format!(
                "Tectonic binary not found at '{}'. Install it from \
                 https://tectonic-typesetting.github.io/ or set TECTONIC_PATH \
                 to the executable. Original error: {e}",
                self.engine_path
            ))),
        }
    }

    async fn compile_in_workspace(
        &self,
        source: &str,
        dir: &Path,
    ) -> Result<String, CompileError> {
        let tex_path = dir.join(SOURCE_FILE);
        let fontconfig_path = dir.join(FONTCONFIG_FILE);
        let pdf_path = dir.join(ARTIFACT_FILE);

        tokio::fs::write(&tex_path, sanitize_latex(source).as_bytes()).await?;
        tokio::fs::write(&fontconfig_path, render_fontconfig(OsFamily::current())).await?;

        let output = Command::new(&self.engine_path)
            .arg("-o")
            .arg(dir)
            .arg("--synctex=none")
            .arg("--keep-intermediates")
            .arg("--keep-logs")
            .arg(&tex_path)
            .current_dir(dir)
            .env("FONTCONFIG_FILE", &fontconfig_path)
            // An abandoned (timed-out) request drops the future and kills
            // the engine instead of leaving it running detached.
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| CompileError::Engine(e.to_string()))?;

        if !output.status.success() {
            let tail = stderr_tail(&String::from_utf8_lossy(&output.stderr))
                .unwrap_or_else(|| format!("engine exited with {}", output.status));
            return Err(CompileError::Engine(tail));
        }

        let pdf = tokio::fs::read(&pdf_path).await.map_err(|_| {
            CompileError::Engine(format!(
                "engine exited successfully but produced no {ARTIFACT_FILE}"
            ))
        })?;

        Ok(BASE64.encode(pdf))
    }
}

fn glyphtounicode_directive() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\\input\{glyphtounicode[^}]*\}\s*")
            .expect("glyphtounicode pattern is valid")
    })
}

/// Strips `\input{glyphtounicode...}` directives before the source hits
/// disk. The mapping file is absent from minimal Tectonic installs and
/// aborts the run before the user's actual content is even considered.
pub fn sanitize_latex(source: &str) -> Cow<'_, str> {
    glyphtounicode_directive().replace_all(source, "")
}

/// Last ~15 lines of engine stderr, or `None` when the engine produced no
/// usable diagnostics.
fn stderr_tail(stderr: &str) -> Option<String> {
    let lines: Vec<&str> = stderr.lines().collect();
    if lines.iter().all(|line| line.trim().is_empty()) {
        return None;
    }
    let start = lines.len().saturating_sub(DIAGNOSTIC_TAIL_LINES);
    Some(lines[start..].join("\n"))
}
