#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;

use batch_push::config::ToolCommand;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer as _;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Creates the given files under `dir`, each containing its own path.
///
/// Parent directories are created as needed.
pub fn create_project(dir: &Path, files: &[&str]) -> anyhow::Result<()> {
    for file in files {
        let path = dir.join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, format!("// {}\n", file))?;
    }
    Ok(())
}

/// A push tool backed by `sh` that records every request it receives.
///
/// Requests are written to `log_dir` as `0.json`, `1.json`, ... in call
/// order. Any request whose commit message contains `fail_on` makes the tool
/// exit with status 1 and a message on stderr.
pub fn recording_tool(log_dir: &Path, fail_on: &str) -> ToolCommand {
    let dir = log_dir.display();
    let script = format!(
        r#"n=$(ls '{dir}' | wc -l | tr -d ' ')
printf '%s' "$1" > '{dir}'/"$n".json
case "$1" in
  *'{fail_on}'*) echo "remote rejected push" >&2; exit 1 ;;
esac"#
    );
    ToolCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script, "recording-tool".to_string()],
    }
}

/// Reads the requests recorded by [`recording_tool`], in call order.
pub fn recorded_requests(log_dir: &Path) -> anyhow::Result<Vec<serde_json::Value>> {
    let mut requests = Vec::new();
    for n in 0.. {
        let path = log_dir.join(format!("{}.json", n));
        if !path.exists() {
            break;
        }
        requests.push(serde_json::from_str(&std::fs::read_to_string(path)?)?);
    }
    Ok(requests)
}

pub fn setup_logging() -> anyhow::Result<()> {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let format = tracing_subscriber::fmt::format().with_timer(timer);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    let subscriber = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_test_writer()
        .with_filter(filter);
    tracing_subscriber::registry().with(subscriber).init();
    Ok(())
}

pub enum TestDir {
    Temp(tempfile::TempDir),
    Kept(PathBuf),
}

impl TestDir {
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;

        if std::env::var("DEBUG_TESTS").is_ok() {
            let path = temp_dir.keep();
            eprintln!("Test directory kept at: {}", path.display());
            Ok(TestDir::Kept(path))
        } else {
            Ok(TestDir::Temp(temp_dir))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TestDir::Temp(t) => t.path(),
            TestDir::Kept(p) => p.as_path(),
        }
    }
}
