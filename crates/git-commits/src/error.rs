// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for git-commits

use thiserror::Error;

/// Errors that can occur while querying a repository
#[derive(Debug, Error)]
pub enum QueryError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// The repository path does not exist
    #[error("Repository path '{path}' does not exist")]
    PathNotFound {
        /// The path that was requested
        path: String,
    },

    /// The repository path could not be inspected
    #[error("Permission denied while accessing '{path}'")]
    PermissionDenied {
        /// The path that could not be read
        path: String,
    },

    /// The path exists but does not hold a git repository
    #[error("'{path}' is not a valid Git repository")]
    NotARepository {
        /// The path that was opened
        path: String,
    },

    /// The repository has no working tree
    #[error("'{path}' is a bare repository")]
    BareRepository {
        /// The path of the bare repository
        path: String,
    },

    /// A `since`/`until` bound or the timezone could not be resolved
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Errors produced while normalizing date expressions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The expression matched none of the supported forms
    #[error("Unable to parse date string '{input}'")]
    Unparseable {
        /// The rejected expression
        input: String,
    },

    /// The timezone name is not in the IANA database
    #[error("Invalid timezone: {name}")]
    InvalidTimezone {
        /// The rejected timezone name
        name: String,
    },

    /// The expression parsed but the resulting instant is not representable
    #[error("Date string '{input}' is out of range")]
    OutOfRange {
        /// The offending expression
        input: String,
    },
}

impl DateError {
    pub(crate) fn unparseable(input: &str) -> Self {
        Self::Unparseable {
            input: input.to_string(),
        }
    }

    pub(crate) fn out_of_range(input: &str) -> Self {
        Self::OutOfRange {
            input: input.to_string(),
        }
    }
}
