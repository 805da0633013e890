// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-commits command-line front end
//!
//! This module exports the configuration and rendering used by the
//! `git-commits` binary, for use in integration tests.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use git_commits::{
    list_git_commits, list_repo_authors, parse_timezone, query_authors, query_commits,
};
use tracing::debug;

pub mod config;
pub mod output;

use config::Config;

/// Run the query described by `config` and return the rendered output
///
/// In strict mode any failure is returned as an error. Otherwise failures
/// are logged by the library and render as empty output.
///
/// # Errors
///
/// Returns an error in strict mode when the configuration is invalid or the
/// query fails, and in any mode when JSON rendering fails.
pub fn run(config: &Config) -> Result<String> {
    let path = config.repo_path();
    let options = config.query_options();
    debug!(path = %path.display(), ?options, strict = config.strict, "Running query");

    if config.strict {
        config.validate().context("invalid configuration")?;
    }
    let display_tz = parse_timezone(config.timezone_name()).unwrap_or(Tz::UTC);

    if config.authors {
        let authors = if config.strict {
            query_authors(&path, &options)
                .with_context(|| format!("failed to list authors in {}", path.display()))?
        } else {
            list_repo_authors(&path, &options)
        };
        return output::render_authors(&authors, config.format).context("failed to render authors");
    }

    let commits = if config.strict {
        query_commits(&path, &options)
            .with_context(|| format!("failed to list commits in {}", path.display()))?
    } else {
        list_git_commits(&path, &options)
    };
    output::render_commits(&commits, config.format, display_tz).context("failed to render commits")
}
