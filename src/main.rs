use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teamforge::cli::CommandContext;
use teamforge::cli::commands;

#[derive(Parser)]
#[command(name = "teamforge")]
#[command(
    version,
    about = "Skill inference and team matching engine with AI-assisted enrichment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize teamforge in the current directory
    Init {
        #[arg(long, short, help = "Overwrite existing configuration")]
        force: bool,
    },

    /// Ingest a pre-fetched profile dump and run technology detection
    Ingest {
        #[arg(long, short, help = "Path to the profile dump JSON")]
        file: PathBuf,
        #[arg(long, help = "Comma-separated goal tags (overrides the dump)")]
        seeking: Option<String>,
    },

    /// Request an AI profile analysis and store it
    Enrich {
        #[arg(help = "Profile handle")]
        handle: String,
    },

    /// Compute pairwise compatibility between two profiles
    Score {
        #[arg(help = "Reference profile handle")]
        reference: String,
        #[arg(help = "Candidate profile handle")]
        candidate: String,
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    /// Analyze skill gaps against required project skills
    Gaps {
        #[arg(help = "Profile handle")]
        handle: String,
        #[arg(long, short, help = "Comma-separated required skills")]
        skills: String,
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    /// Form an optimal team around a reference profile
    Team {
        #[arg(help = "Reference profile handle")]
        handle: String,
        #[arg(long, short, help = "Comma-separated required skills")]
        skills: String,
        #[arg(long, help = "Team size including the reference member")]
        size: Option<usize>,
        #[arg(long = "no-ai", help = "Skip AI enrichment, deterministic output only")]
        no_ai: bool,
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    /// List stored profiles
    Profiles {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Show configuration file paths
    Path,
    /// Initialize project configuration
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Init { force } => {
            commands::init::run(force)?;
        }
        Commands::Ingest { file, seeking } => {
            let ctx = CommandContext::load()?;
            commands::ingest::run(&ctx, &file, seeking.as_deref())?;
        }
        Commands::Enrich { handle } => {
            let ctx = CommandContext::load()?;
            rt.block_on(commands::enrich::run(&ctx, &handle))?;
        }
        Commands::Score {
            reference,
            candidate,
            json,
        } => {
            let ctx = CommandContext::load()?;
            commands::score::run(&ctx, &reference, &candidate, json)?;
        }
        Commands::Gaps {
            handle,
            skills,
            json,
        } => {
            let ctx = CommandContext::load()?;
            commands::gaps::run(&ctx, &handle, &skills, json)?;
        }
        Commands::Team {
            handle,
            skills,
            size,
            no_ai,
            json,
        } => {
            let ctx = CommandContext::load()?;
            rt.block_on(commands::team::run(
                &ctx,
                commands::team::TeamOptions {
                    handle: &handle,
                    skills: &skills,
                    size,
                    no_ai,
                    json,
                },
            ))?;
        }
        Commands::Profiles { json } => {
            let ctx = CommandContext::load()?;
            commands::profiles::run(&ctx, json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                commands::config::show(json)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                commands::config::init(force)?;
            }
        },
    }

    Ok(())
}
