// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command-line configuration for git-commits
//!
//! Every option maps onto a field of [`QueryOptions`]. The repository path
//! and timezone can also be supplied through the environment.

use std::path::PathBuf;

use clap::Parser;
use git_commits::{QueryOptions, parse_timezone};

use crate::output::OutputFormat;

/// Timezone used when none is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// List and filter commits from a local git repository
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "git-commits")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository
    ///
    /// Defaults to the current directory.
    #[arg(env = "GIT_COMMITS_REPO")]
    pub repo: Option<PathBuf>,

    /// Only show commits whose author name or email contains this text
    /// (case-insensitive)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Only show commits authored on or after this date
    ///
    /// Accepts ISO dates ("2024-01-31"), timestamps with an offset, and
    /// expressions such as "yesterday" or "3 weeks ago".
    #[arg(long)]
    pub since: Option<String>,

    /// Only show commits authored on or before this date
    #[arg(long)]
    pub until: Option<String>,

    /// IANA timezone used to interpret dates without an offset and to print
    /// timestamps
    #[arg(short, long, env = "GIT_COMMITS_TIMEZONE")]
    pub timezone: Option<String>,

    /// Walk every branch, remote-tracking branch and tag instead of HEAD only
    #[arg(long, default_value = "false")]
    pub all_branches: bool,

    /// Show the branches that contain each commit
    #[arg(long, default_value = "false")]
    pub branches: bool,

    /// Maximum number of commits to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// List distinct authors instead of commits
    #[arg(long, default_value = "false")]
    pub authors: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail with a non-zero exit status instead of printing nothing
    ///
    /// Without this flag an unreadable repository or an invalid date is
    /// reported on stderr and produces empty output.
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the repository path, using the current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the configured timezone name, using UTC as default
    #[must_use]
    pub fn timezone_name(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// Build the library query from the command-line options
    #[must_use]
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            author: self.author.clone(),
            since: self.since.clone().map(Into::into),
            until: self.until.clone().map(Into::into),
            timezone: Some(self.timezone_name().to_string()),
            all_branches: self.all_branches,
            include_branches: self.branches,
            limit: self.limit,
            now: None,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository path doesn't exist
    /// - The timezone is not a known IANA name
    /// - The limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let repo = self.repo_path();
        if !repo.exists() {
            return Err(ConfigError::RepositoryNotFound(repo));
        }

        if parse_timezone(self.timezone_name()).is_err() {
            return Err(ConfigError::InvalidTimezone(self.timezone_name().to_string()));
        }

        if self.limit == Some(0) {
            return Err(ConfigError::ZeroLimit);
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepositoryNotFound(PathBuf),

    /// Timezone is not in the tz database
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    /// A limit of zero would never print anything
    #[error("--limit must be greater than zero")]
    ZeroLimit,
}
