use anyhow::{bail, Context, Result};
use std::process::Command;

/// External command execution, behind a trait so the parsing path can be
/// exercised against canned output without spawning anything.
pub trait CommandRunner {
    /// Run the program and return its stdout as text.
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

/// The real runner: spawns one process per call via `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let out = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute {}", program))?;

        if !out.status.success() {
            bail!("{} exited with {}", program, out.status);
        }

        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}
