use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Result;
use batch_push::App;
use batch_push::Config;
use batch_push::clients::push_tool::CommandPushTool;
use batch_push::config;
use batch_push::config::Target;
use batch_push::config::ToolCommand;
use batch_push::manifest;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer as _;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Parser)]
#[command(name = "batch-push")]
#[command(about = "Push a project's files to a remote repository in batches through an external tool", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct Options {
    /// File listing the paths to push, one per line (defaults to the built-in Blazy list)
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Directory the paths are relative to
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Repository owner
    #[arg(long, global = true, default_value = config::DEFAULT_OWNER)]
    pub owner: String,

    /// Repository name
    #[arg(long, global = true, default_value = config::DEFAULT_REPO)]
    pub repo: String,

    /// Branch to push to
    #[arg(long, global = true, default_value = config::DEFAULT_BRANCH)]
    pub branch: String,

    /// Commit message prefix; " - Batch i/n" is appended
    #[arg(long, global = true, default_value = config::DEFAULT_MESSAGE_PREFIX)]
    pub message_prefix: String,

    /// Number of files per push
    #[arg(long, global = true, default_value_t = config::DEFAULT_BATCH_SIZE)]
    pub batch_size: NonZeroUsize,

    /// Program that performs the push
    #[arg(long, global = true, default_value = config::DEFAULT_TOOL)]
    pub tool: String,

    /// Leading argument for the push program (repeatable; defaults to "call github_push_files")
    #[arg(long = "tool-arg", global = true, allow_hyphen_values = true)]
    pub tool_args: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push every batch (default)
    Push,
    /// Show the batches without reading or pushing files
    Plan,
}

impl Options {
    fn into_config(self) -> Result<Config> {
        let args = if self.tool_args.is_empty() {
            config::DEFAULT_TOOL_ARGS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.tool_args
        };

        Config::new(
            Target {
                owner: self.owner,
                repo: self.repo,
                branch: self.branch,
            },
            self.message_prefix,
            self.batch_size,
            self.root,
            ToolCommand {
                program: self.tool,
                args,
            },
        )
    }
}

fn setup_logging() -> Result<()> {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let format = tracing_subscriber::fmt::format().with_timer(timer);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;
    let subscriber = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_writer(std::io::stderr)
        .with_filter(filter);
    tracing_subscriber::registry().with(subscriber).init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    let files = match &cli.options.manifest {
        Some(path) => manifest::load(path).await?,
        None => manifest::builtin(),
    };
    let config = cli.options.into_config()?;
    let app = App::new(config.clone(), CommandPushTool::new(config.tool));

    match cli.command {
        Some(Commands::Plan) => app.cmd_plan(&files, &mut std::io::stdout())?,
        Some(Commands::Push) | None => app.cmd_push(&files, &mut std::io::stdout()).await?,
    }

    Ok(())
}
