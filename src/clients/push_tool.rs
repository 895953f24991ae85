#![allow(async_fn_in_trait)]

use std::process::Stdio;

use anyhow::Context;
use anyhow::Result;
#[cfg(test)]
use mockall::automock;
use tokio::process::Command;
use tracing::instrument;

use crate::config::ToolCommand;

// -----------------------------------------------------------------------------
// PushTool trait

/// Performs the remote write for one serialized upload request.
#[cfg_attr(test, automock)]
pub trait PushTool {
    /// Run the tool once with `payload` as its final argument.
    ///
    /// Returns `Err` only if the tool could not be run at all; a tool that
    /// runs and fails is reported through [`ToolOutput`].
    async fn push_files(&self, payload: &str) -> Result<ToolOutput>;
}

/// Exit status and captured standard error of one tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    /// `None` if the tool was terminated by a signal.
    pub code: Option<i32>,
    pub stderr: String,
}

/// Canned outputs for tests.
#[cfg(test)]
impl ToolOutput {
    pub(crate) fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub(crate) fn failed(code: i32, stderr: &str) -> Self {
        Self {
            success: false,
            code: Some(code),
            stderr: stderr.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// CommandPushTool

/// Real implementation that spawns the configured program
pub struct CommandPushTool {
    command: ToolCommand,
}

impl CommandPushTool {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }
}

impl PushTool for CommandPushTool {
    #[instrument(skip_all, fields(program = %self.command.program, bytes = payload.len()))]
    async fn push_files(&self, payload: &str) -> Result<ToolOutput> {
        let output = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(payload)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to execute {}", self.command.program))?;

        tracing::debug!(status = %output.status, "Push tool exited");

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        })
    }
}
