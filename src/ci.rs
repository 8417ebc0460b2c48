//! GitHub Actions plumbing: inputs from `INPUT_*` variables, outputs via
//! `$GITHUB_OUTPUT`, failures as `::error::` workflow commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Read an action input. Actions expose the input `foo-bar` to the step as
/// the environment variable `INPUT_FOO_BAR`. Unset inputs read as empty.
pub fn get_input(name: &str) -> String {
    let key = format!("INPUT_{}", name.to_uppercase().replace('-', "_"));
    std::env::var(key).unwrap_or_default().trim().to_string()
}

/// Publish a step output for later workflow steps. Outside Actions (no
/// `GITHUB_OUTPUT` set) there is nowhere to publish, so this is a no-op.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) => append_output(Path::new(&path), name, value),
        Err(_) => Ok(()),
    }
}

fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;
    writeln!(file, "{name}={value}")?;
    Ok(())
}

/// Emit a workflow error annotation. The caller owns the exit code.
pub fn set_failed(message: &str) {
    println!("::error::{message}");
}
