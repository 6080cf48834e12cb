use clap::{Parser, Subcommand};
use gitreleases::core::GitReleasesResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "gitreleases")]
#[command(about = "Resolve GitHub release assets into stable gitreleases.dev redirect paths")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List redirect paths for the assets of the latest release
    Assets {
        /// Repository URL (https://github.com/org/repo) or org/repo
        repository: String,
        /// Also list the zip and tar.gz source archives
        #[arg(short, long)]
        archives: bool,
        /// Print nothing instead of failing when no recent release has assets
        #[arg(long)]
        soft_empty: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the download URL a redirect path points at
    Redirect {
        /// Path such as /gh/org/repo/latest/asset
        path: String,
    },
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
}

async fn dispatch(cli: Cli) -> GitReleasesResult<()> {
    match cli.command {
        Commands::Assets {
            repository,
            archives,
            soft_empty,
            json,
        } => {
            cli::assets::run(cli::assets::AssetsOptions {
                repository,
                archives,
                soft_empty,
                json,
                config: cli.config,
            })
            .await
        }
        Commands::Redirect { path } => cli::redirect::run(path, cli.config).await,
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(cli.config),
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", gitreleases::core::format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
