// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-commits: list and filter commits from a local git repository

use std::io;
use std::process::ExitCode;

use clap::Parser;
use git_commits_cli::config::Config;
use git_commits_cli::output::write_output;
use tracing::error;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match git_commits_cli::run(&config) {
        Ok(rendered) => match write_output(&mut io::stdout().lock(), &rendered) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Failed to write output");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
