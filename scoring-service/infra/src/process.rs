use std::ffi::OsString;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

const STDERR_TAIL_CHARS: usize = 400;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` did not finish within {timeout_ms} ms")]
    Timeout { program: String, timeout_ms: u128 },
}

#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub program: String,
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// One-line description of a failed run, ending with the tail of stderr.
    pub fn failure_summary(&self) -> String {
        let stderr = self.stderr.trim();
        let skip = stderr.chars().count().saturating_sub(STDERR_TAIL_CHARS);
        let tail: String = stderr.chars().skip(skip).collect();
        if tail.is_empty() {
            format!("`{}` exited with {}", self.program, self.status)
        } else {
            format!("`{}` exited with {}: {}", self.program, self.status, tail)
        }
    }
}

/// Runs external binaries to completion with a wall-clock limit.
/// Children are killed if the limit elapses.
#[derive(Debug, Clone)]
pub struct ToolRunner {
    timeout: Duration,
}

impl ToolRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn run<I, A>(&self, program: &str, args: I) -> Result<ToolOutput, ToolError>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        tracing::debug!(program, ?args, "running external tool");

        let mut command = Command::new(program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let child = command.output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| ToolError::Timeout {
                program: program.to_string(),
                timeout_ms: self.timeout.as_millis(),
            })?
            .map_err(|source| ToolError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let output = ToolOutput {
            program: program.to_string(),
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(program, status = %output.status, "external tool finished");
        Ok(output)
    }
}
