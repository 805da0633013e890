// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering of query results

use std::io::{self, Write};

use chrono_tz::Tz;
use clap::ValueEnum;
use git_commits::{CommitRecord, RepoAuthor};

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per commit or author
    #[default]
    Text,
    /// A pretty-printed JSON array
    Json,
}

/// Render commits, printing timestamps in `tz` for the text format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_commits(
    commits: &[CommitRecord],
    format: OutputFormat,
    tz: Tz,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(commits),
        OutputFormat::Text => Ok(commits
            .iter()
            .map(|c| commit_line(c, tz))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render distinct authors
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_authors(
    authors: &[RepoAuthor],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(authors),
        OutputFormat::Text => Ok(authors
            .iter()
            .map(|a| format!("{} <{}>", a.name, a.email))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Write rendered output followed by a newline
///
/// A reader that has gone away (`git-commits | head -1`) is not an error.
///
/// # Errors
///
/// Returns any other I/O error from `out`.
pub fn write_output<W: Write>(out: &mut W, rendered: &str) -> io::Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }
    match writeln!(out, "{rendered}").and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn commit_line(commit: &CommitRecord, tz: Tz) -> String {
    let when = commit
        .authored_datetime
        .with_timezone(&tz)
        .format("%Y-%m-%d %H:%M:%S");
    let mut line = format!(
        "{} {} {} {}",
        commit.short_sha,
        when,
        commit.author_name,
        commit.subject()
    );
    if !commit.branches.is_empty() {
        line.push_str(&format!(" [{}]", commit.branches.join(", ")));
    }
    line
}
