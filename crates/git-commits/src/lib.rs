// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-commits: list and filter commits from local git repositories
//!
//! This library opens a repository with `git2`, walks its history (the
//! current branch or every ref), filters commits by author and authored date,
//! and returns plain [`CommitRecord`] values in log order.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use git_commits::{QueryOptions, list_git_commits, query_commits};
//!
//! let options = QueryOptions::default()
//!     .author("alice")
//!     .since("2 weeks ago")
//!     .timezone("Europe/Berlin");
//!
//! // Fail-soft: errors are logged and yield an empty list
//! for c in list_git_commits(".", &options) {
//!     println!("{} {} {}", c.short_sha, c.authored_datetime, c.subject());
//! }
//!
//! // Typed: distinguish "nothing matched" from "the query failed"
//! match query_commits("/not/a/repo", &options) {
//!     Ok(commits) => println!("{} commits", commits.len()),
//!     Err(e) => eprintln!("query failed: {e}"),
//! }
//! ```

pub mod commit;
pub mod date;
pub mod error;
pub mod query;
pub mod repo;

pub use commit::{CommitRecord, RepoAuthor};
pub use date::{DateBound, parse_date_string, parse_timezone};
pub use error::{DateError, QueryError};
pub use query::{
    CommitFilter, QueryOptions, list_git_commits, list_repo_authors, query_authors,
    query_commits,
};
pub use repo::CommitRepo;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::{CommitRecord, RepoAuthor};
    pub use crate::date::DateBound;
    pub use crate::error::{DateError, QueryError};
    pub use crate::query::{QueryOptions, list_git_commits, query_commits};
    pub use crate::repo::CommitRepo;
}
