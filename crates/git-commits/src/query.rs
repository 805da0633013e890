// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit queries
//!
//! Two entry points are offered for each query. The `query_*` functions
//! return a typed `Result`, so callers can tell "no commits matched" apart
//! from "the query failed". The `list_*` functions never fail: any error is
//! reported through `tracing` and an empty vector is returned.

use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{error, info};

use crate::commit::{CommitRecord, RepoAuthor};
use crate::date::{DateBound, parse_timezone};
use crate::error::{DateError, QueryError};
use crate::repo::CommitRepo;

/// Filters and traversal settings for a commit query
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Case-insensitive substring of the author name or email
    pub author: Option<String>,
    /// Only include commits authored at or after this bound
    pub since: Option<DateBound>,
    /// Only include commits authored at or before this bound
    pub until: Option<DateBound>,
    /// IANA timezone for interpreting date expressions (defaults to UTC)
    pub timezone: Option<String>,
    /// Walk every ref instead of the current branch only
    pub all_branches: bool,
    /// Annotate each record with the branches that contain it
    pub include_branches: bool,
    /// Maximum number of matching commits to return
    pub limit: Option<usize>,
    /// Reference instant for relative expressions (defaults to the clock)
    pub now: Option<DateTime<Utc>>,
}

impl QueryOptions {
    /// Create options returning at most the N most recent matching commits
    #[must_use]
    pub fn latest(n: usize) -> Self {
        Self {
            limit: Some(n),
            ..Default::default()
        }
    }

    /// Filter by author name or email
    #[must_use]
    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Filter commits since a date
    #[must_use]
    pub fn since(mut self, bound: impl Into<DateBound>) -> Self {
        self.since = Some(bound.into());
        self
    }

    /// Filter commits until a date
    #[must_use]
    pub fn until(mut self, bound: impl Into<DateBound>) -> Self {
        self.until = Some(bound.into());
        self
    }

    /// Set the timezone used to interpret date expressions
    #[must_use]
    pub fn timezone(mut self, name: &str) -> Self {
        self.timezone = Some(name.to_string());
        self
    }

    /// Walk all branches and refs
    #[must_use]
    pub fn all_branches(mut self) -> Self {
        self.all_branches = true;
        self
    }

    /// Record which branches contain each commit
    #[must_use]
    pub fn with_branches(mut self) -> Self {
        self.include_branches = true;
        self
    }

    /// Pin the reference instant for relative date expressions
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Resolve the interpreting timezone
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidTimezone` for unknown names.
    pub fn resolve_timezone(&self) -> Result<Tz, DateError> {
        self.timezone
            .as_deref()
            .map_or(Ok(Tz::UTC), parse_timezone)
    }

    /// Resolve the author and date bounds into a [`CommitFilter`]
    ///
    /// # Errors
    ///
    /// Returns `DateError` if the timezone or a date bound is invalid.
    pub fn filter(&self) -> Result<CommitFilter, DateError> {
        let tz = self.resolve_timezone()?;
        let now = self.now.unwrap_or_else(Utc::now);
        let since = self
            .since
            .as_ref()
            .map(|bound| bound.resolve(tz, now))
            .transpose()?;
        let until = self
            .until
            .as_ref()
            .map(|bound| bound.resolve(tz, now))
            .transpose()?;

        Ok(CommitFilter {
            author: self.author.as_deref().map(str::to_lowercase),
            since,
            until,
        })
    }
}

/// Resolved predicate applied to every walked commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitFilter {
    author: Option<String>,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
}

impl CommitFilter {
    /// Lower bound (inclusive)
    #[must_use]
    pub fn since(&self) -> Option<DateTime<Utc>> {
        self.since
    }

    /// Upper bound (inclusive)
    #[must_use]
    pub fn until(&self) -> Option<DateTime<Utc>> {
        self.until
    }

    /// Check a commit's author and authored time against the filter
    #[must_use]
    pub fn matches(&self, name: &str, email: &str, authored: DateTime<Utc>) -> bool {
        if let Some(ref needle) = self.author {
            if !name.to_lowercase().contains(needle) && !email.to_lowercase().contains(needle) {
                return false;
            }
        }
        if self.since.is_some_and(|since| authored < since) {
            return false;
        }
        if self.until.is_some_and(|until| authored > until) {
            return false;
        }
        true
    }
}

/// Open a repository for querying, rejecting bare repositories
fn open_for_query(path: &Path) -> Result<CommitRepo, QueryError> {
    let repo = CommitRepo::open(path)?;
    if repo.is_bare() {
        return Err(QueryError::BareRepository {
            path: path.display().to_string(),
        });
    }
    Ok(repo)
}

/// List the commits of the repository at `path` that match `options`
///
/// Records are returned in log order (newest first).
///
/// # Errors
///
/// Returns `QueryError` if the path is missing or unreadable, is not a
/// non-bare git repository, if a date bound is invalid, or if libgit2 fails.
pub fn query_commits(
    path: impl AsRef<Path>,
    options: &QueryOptions,
) -> Result<Vec<CommitRecord>, QueryError> {
    let path = path.as_ref();
    let repo = open_for_query(path)?;
    let commits = repo.list_commits(options)?;
    info!(
        path = %path.display(),
        count = commits.len(),
        all_branches = options.all_branches,
        "Listed commits"
    );
    Ok(commits)
}

/// Fail-soft variant of [`query_commits`]
///
/// Any failure is logged at error level and yields an empty vector.
#[must_use]
pub fn list_git_commits(path: impl AsRef<Path>, options: &QueryOptions) -> Vec<CommitRecord> {
    let path = path.as_ref();
    query_commits(path, options).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "Commit query failed");
        Vec::new()
    })
}

/// List the distinct authors of the commits matching `options`
///
/// # Errors
///
/// Fails under the same conditions as [`query_commits`].
pub fn query_authors(
    path: impl AsRef<Path>,
    options: &QueryOptions,
) -> Result<Vec<RepoAuthor>, QueryError> {
    let path = path.as_ref();
    let repo = open_for_query(path)?;
    let authors = repo.list_authors(options)?;
    info!(path = %path.display(), count = authors.len(), "Listed authors");
    Ok(authors)
}

/// Fail-soft variant of [`query_authors`]
#[must_use]
pub fn list_repo_authors(path: impl AsRef<Path>, options: &QueryOptions) -> Vec<RepoAuthor> {
    let path = path.as_ref();
    query_authors(path, options).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "Author query failed");
        Vec::new()
    })
}
