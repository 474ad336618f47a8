use crate::errors::Error;
use crate::{config, leaderboard, submission, task_dir};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CLIArgs {
    /// Path to the submission document
    pub submission: Option<PathBuf>,

    /// Configuration file overriding the default data paths
    #[clap(short, long)]
    pub config: Option<PathBuf>,
}

pub fn main() -> Result<()> {
    env_logger::init();

    let cli_args = CLIArgs::parse();

    let config = match &cli_args.config {
        Some(path) => {
            let config = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&config).context("Config is invalid")?
        }
        None => config::Config::default(),
    };

    // The positional is declared optional so that an absent argument takes
    // the same single-line error path as every other failure.
    let submission_file = cli_args.submission.ok_or_else(|| {
        Error::Usage("missing required argument: path to the submission document".to_owned())
    })?;

    let rollno = process_submission(&submission_file, &config)?;
    println!("Successfully processed submission for rollno {rollno}.");
    Ok(())
}

/// Runs the full pipeline: validate, provision the task folder, record the
/// entry on the leaderboard. A failure while recording leaves the already
/// provisioned folder in place.
pub fn process_submission(
    submission_file: &Path,
    config: &config::Config,
) -> Result<i64, Error> {
    let submission = submission::validate(submission_file)?;
    log::debug!(
        "validated submission for rollno {} (username {:?}, score {})",
        submission.rollno,
        submission.username,
        submission.score
    );

    let task_dir = task_dir::TaskDirs::new(&config.data.task_base).provision(submission.rollno)?;
    log::debug!("task folder ready at {}", task_dir.display());

    leaderboard::Store::new(&config.data.leaderboard).record(&submission)?;
    log::debug!("leaderboard {} updated", config.data.leaderboard.display());

    Ok(submission.rollno)
}
