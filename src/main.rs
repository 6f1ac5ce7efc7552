use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use jbranch::api::JiraClient;
use jbranch::branch::branch_name;
use jbranch::config::{Config, ConfigError};
use jbranch::logging;

#[derive(Parser)]
#[command(name = "jbranch")]
#[command(about = "Generate git branch names from Jira tickets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config directory path (default: <data dir>/jbranch)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively create the config file
    Config,

    /// Fetch an issue and print the derived branch name
    Gen {
        /// Issue ID, for example APP-512
        issue_id: String,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are not failures
            let code = u8::from(err.use_stderr());
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.debug)?;

    // Resolve the config directory once; everything below takes it as a
    // parameter instead of looking up the home directory itself.
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::default_dir()
            .ok_or_else(|| anyhow!("Could not determine the user data directory"))?,
    };

    match cli.command {
        Commands::Config => cmd_config(&config_dir),
        Commands::Gen { issue_id } => cmd_gen(&config_dir, &issue_id),
    }
}

fn cmd_config(config_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let config = Config::from_prompts(&mut input, &mut output)?;
    config.save(config_dir)?;

    println!("Wrote {}", Config::file_path(config_dir).display());

    Ok(())
}

fn cmd_gen(config_dir: &Path, issue_id: &str) -> Result<()> {
    let config = match Config::load(config_dir) {
        Ok(config) => config,
        Err(ConfigError::NotFound(_)) => {
            eprintln!("Please run `jbranch config` first to generate the config file.");
            std::process::exit(1);
        }
        Err(err) => return Err(err).context("Failed to read config"),
    };

    let client = JiraClient::new(&config.jira_base_url, &config.username, &config.token)
        .context("Failed to create a Jira client")?;

    let issue = client
        .get_issue(issue_id)
        .context("Failed to get issue")?;

    debug!(key = %issue.key, summary = %issue.summary, "Deriving branch name");

    println!("{}", branch_name(&config.short_name, issue_id, &issue.summary));

    Ok(())
}
