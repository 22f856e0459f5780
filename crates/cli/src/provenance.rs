//! `<out>.provenance.json` sidecars for files written by `solve` and `gen`.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One sidecar document: which build wrote `output`, from what, and how.
#[derive(Serialize)]
pub struct Sidecar {
    code_rev: String,
    version: &'static str,
    command: &'static str,
    params: Value,
    inputs: Vec<String>,
    output: String,
}

impl Sidecar {
    pub fn new(command: &'static str, output: &str, params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: polynest::VERSION,
            command,
            params,
            inputs: Vec::new(),
            output: output.to_string(),
        }
    }

    /// Record a scene file the output was derived from (`-` for stdin).
    pub fn with_input(mut self, input: &str) -> Self {
        self.inputs.push(input.to_string());
        self
    }

    /// Write next to the output; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(Path::new(&self.output));
        let body = serde_json::to_vec_pretty(self)?;
        std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/borders.txt` -> `dir/borders.provenance.json`
fn sidecar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy().into_owned());
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
