use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::Result;
use anyhow::bail;
use regex::Regex;

/// Owner and repository names accepted by the hosting service.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex"));

pub const DEFAULT_OWNER: &str = "blazermask";
pub const DEFAULT_REPO: &str = "Blazy";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_MESSAGE_PREFIX: &str = "Add Blazy project files";
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();
pub const DEFAULT_TOOL: &str = "mcp-tools";
pub const DEFAULT_TOOL_ARGS: [&str; 2] = ["call", "github_push_files"];

/// Where the files end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

/// External program that performs the remote write.
///
/// The serialized request is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub target: Target,
    pub message_prefix: String,
    pub batch_size: NonZeroUsize,
    /// Directory that manifest paths are relative to.
    pub root: PathBuf,
    pub tool: ToolCommand,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: Target {
                owner: DEFAULT_OWNER.to_string(),
                repo: DEFAULT_REPO.to_string(),
                branch: DEFAULT_BRANCH.to_string(),
            },
            message_prefix: DEFAULT_MESSAGE_PREFIX.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            root: PathBuf::from("."),
            tool: ToolCommand {
                program: DEFAULT_TOOL.to_string(),
                args: DEFAULT_TOOL_ARGS.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

impl Config {
    /// Create a config with explicit values, validating the target names.
    pub fn new(
        target: Target,
        message_prefix: String,
        batch_size: NonZeroUsize,
        root: PathBuf,
        tool: ToolCommand,
    ) -> Result<Self> {
        validate_name("owner", &target.owner)?;
        validate_name("repo", &target.repo)?;
        if target.branch.trim().is_empty() {
            bail!("Branch name must not be empty");
        }
        if tool.program.trim().is_empty() {
            bail!("Tool program must not be empty");
        }

        Ok(Self {
            target,
            message_prefix,
            batch_size,
            root,
            tool,
        })
    }

    /// Default config for tests
    pub fn default_for_tests() -> Self {
        Self {
            target: Target {
                owner: "test-owner".to_string(),
                repo: "test-repo".to_string(),
                branch: "main".to_string(),
            },
            ..Self::default()
        }
    }

    /// Commit message for batch `index` (1-based) out of `total`.
    pub fn commit_message(&self, index: usize, total: usize) -> String {
        format!("{} - Batch {}/{}", self.message_prefix, index, total)
    }
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    if !NAME_RE.is_match(name) {
        bail!("Invalid {} name: {:?}", kind, name);
    }
    Ok(())
}
