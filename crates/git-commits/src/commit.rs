// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the abbreviated commit identifier
pub const SHORT_SHA_LEN: usize = 7;

/// A snapshot of a single commit returned by a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// The first seven characters of `sha`
    pub short_sha: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Authored timestamp
    pub authored_datetime: DateTime<Utc>,
    /// Commit message, trimmed
    pub message: String,
    /// Branches whose history contains this commit (only when requested)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
}

impl CommitRecord {
    /// Build a record, deriving `short_sha` from `sha` and trimming `message`
    #[must_use]
    pub fn new(
        sha: impl Into<String>,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
        authored_datetime: DateTime<Utc>,
        message: &str,
    ) -> Self {
        let sha = sha.into();
        let short_sha = abbreviate(&sha).to_string();
        Self {
            sha,
            short_sha,
            author_name: author_name.into(),
            author_email: author_email.into(),
            authored_datetime,
            message: message.trim().to_string(),
            branches: Vec::new(),
        }
    }

    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the first line of the commit message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// The author as a distinct name/email pair
    #[must_use]
    pub fn author(&self) -> RepoAuthor {
        RepoAuthor {
            name: self.author_name.clone(),
            email: self.author_email.clone(),
        }
    }
}

/// A distinct author seen in the repository history
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoAuthor {
    /// Author name
    pub name: String,
    /// Author email
    pub email: String,
}

fn abbreviate(sha: &str) -> &str {
    sha.get(..SHORT_SHA_LEN).unwrap_or(sha)
}
