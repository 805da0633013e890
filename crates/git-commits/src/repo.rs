// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository access
//!
//! This module opens repositories and walks their history using the `git2`
//! crate, mapping each commit into a [`CommitRecord`].

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use git2::{BranchType, ErrorCode, Oid, Repository, Revwalk, Sort};
use tracing::debug;

use crate::commit::{CommitRecord, RepoAuthor};
use crate::error::QueryError;
use crate::query::QueryOptions;

/// A read-only handle on a git repository
///
/// The underlying libgit2 handle is released when this value is dropped.
pub struct CommitRepo {
    repo: Repository,
}

impl CommitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `QueryError::PathNotFound` or `QueryError::PermissionDenied` if
    /// the path cannot be inspected, and `QueryError::NotARepository` if it is
    /// not the root of a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        check_path(path)?;
        let repo = Repository::open(path).map_err(|e| open_error(path, e))?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Same as [`CommitRepo::open`].
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        check_path(path)?;
        let repo = Repository::discover(path).map_err(|e| open_error(path, e))?;
        Ok(Self { repo })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the repository path (the `.git` directory)
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// List commits matching the given options, newest first
    ///
    /// A repository without any commits yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if a date bound is invalid or the history cannot
    /// be walked.
    pub fn list_commits(&self, options: &QueryOptions) -> Result<Vec<CommitRecord>, QueryError> {
        let filter = options.filter()?;
        debug!(?filter, all_branches = options.all_branches, "Walking commits");

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;
        if !self.push_tips(&mut revwalk, options.all_branches)? {
            debug!(path = %self.path().display(), "HEAD is unborn, no commits to list");
            return Ok(Vec::new());
        }

        let branch_index = if options.include_branches {
            Some(self.branch_index(options.all_branches)?)
        } else {
            None
        };

        let mut records = Vec::new();
        let limit = options.limit.unwrap_or(usize::MAX);

        for oid_result in revwalk {
            if records.len() >= limit {
                break;
            }

            let oid = oid_result?;
            let git_commit = self.repo.find_commit(oid)?;
            let author = git_commit.author();
            let name = String::from_utf8_lossy(author.name_bytes());
            let email = String::from_utf8_lossy(author.email_bytes());
            let authored = signature_time(&author.when());

            if !filter.matches(&name, &email, authored) {
                continue;
            }

            let mut record = CommitRecord::new(
                oid.to_string(),
                name,
                email,
                authored,
                &String::from_utf8_lossy(git_commit.message_bytes()),
            );
            if let Some(ref index) = branch_index {
                record.branches = index.get(&oid).cloned().unwrap_or_default();
            }
            records.push(record);
        }

        Ok(records)
    }

    /// List distinct authors of the commits matching the given options
    ///
    /// Authors appear in the order their newest matching commit was walked.
    ///
    /// # Errors
    ///
    /// Same as [`CommitRepo::list_commits`].
    pub fn list_authors(&self, options: &QueryOptions) -> Result<Vec<RepoAuthor>, QueryError> {
        let mut seen = HashSet::new();
        let authors: Vec<RepoAuthor> = self
            .list_commits(options)?
            .iter()
            .map(CommitRecord::author)
            .filter(|author| seen.insert(author.clone()))
            .collect();
        Ok(authors)
    }

    /// Get the HEAD commit SHA
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if HEAD cannot be resolved.
    pub fn head_sha(&self) -> Result<String, QueryError> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    /// Count commits reachable from HEAD
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the repository cannot be walked.
    pub fn commit_count(&self) -> Result<usize, QueryError> {
        let mut revwalk = self.repo.revwalk()?;
        if !self.push_tips(&mut revwalk, false)? {
            return Ok(0);
        }
        Ok(revwalk.count())
    }

    /// Seed the walk with HEAD, plus every ref when `all_refs` is set
    ///
    /// Returns false when there is nothing to walk.
    fn push_tips(&self, revwalk: &mut Revwalk<'_>, all_refs: bool) -> Result<bool, QueryError> {
        let head_born = match self.repo.head() {
            Ok(_) => true,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => false,
            Err(e) => return Err(e.into()),
        };
        if head_born {
            revwalk.push_head()?;
        }
        if all_refs {
            // Non-commit refs (e.g. tags of trees) are skipped by libgit2
            revwalk.push_glob("refs/*")?;
            return Ok(true);
        }
        Ok(head_born)
    }

    /// Map each reachable commit to the sorted names of branches containing it
    fn branch_index(&self, all_refs: bool) -> Result<HashMap<Oid, Vec<String>>, QueryError> {
        let kind = if all_refs {
            None
        } else {
            Some(BranchType::Local)
        };

        let mut index: HashMap<Oid, Vec<String>> = HashMap::new();
        for entry in self.repo.branches(kind)? {
            let (branch, _) = entry?;
            let Some(name) = branch.name()? else {
                continue;
            };
            // Symbolic branches such as origin/HEAD have no direct target
            let Some(tip) = branch.get().target() else {
                continue;
            };

            let mut walk = self.repo.revwalk()?;
            walk.push(tip)?;
            for oid in walk {
                index.entry(oid?).or_default().push(name.to_string());
            }
        }

        for names in index.values_mut() {
            names.sort();
            names.dedup();
        }
        Ok(index)
    }
}

fn check_path(path: &Path) -> Result<(), QueryError> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(QueryError::PermissionDenied {
                path: path.display().to_string(),
            })
        }
        Err(_) => Err(QueryError::PathNotFound {
            path: path.display().to_string(),
        }),
    }
}

fn open_error(path: &Path, err: git2::Error) -> QueryError {
    match err.code() {
        ErrorCode::NotFound => QueryError::NotARepository {
            path: path.display().to_string(),
        },
        _ => QueryError::Git2(err),
    }
}

fn signature_time(time: &git2::Time) -> DateTime<Utc> {
    DateTime::from_timestamp(time.seconds(), 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
