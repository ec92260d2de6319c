use crate::changeset::{ChangeRecord, ChangeSet, ChangeStatus};
use anyhow::{Result, anyhow, bail};
use git2::{Delta, DiffFindOptions, DiffOptions, Repository, RepositoryState};

/// which side of the index to collect changes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// staged changes if any exist, otherwise unstaged
    Any,
    Staged,
    Unstaged,
}

/// discover the enclosing git repository and check it's in a usable state
pub fn discover_repository() -> Result<Repository> {
    // can be run from anywhere within the repo
    let repo = match Repository::discover(".") {
        Ok(repo) => repo,
        Err(e) => bail!("not in a git repository: {e}"),
    };

    // refuse to summarise while a merge, rebase, etc is in progress
    if repo.state() != RepositoryState::Clean {
        bail!("repository is in the middle of an operation (merge, rebase, etc)");
    }

    Ok(repo)
}

/// get changes from the repository
/// under `Any`, staged changes are checked first with a fallback to unstaged
/// (including untracked files); returns None if no changes are found
pub fn get_changes(repo: &Repository, source: ChangeSource) -> Result<Option<ChangeSet>> {
    if source != ChangeSource::Unstaged {
        let staged_diff = create_staged_diff(repo)?;
        let records = records_from_diff(&staged_diff);
        if !records.is_empty() {
            return Ok(Some(ChangeSet {
                records,
                is_staged: true,
            }));
        }
        if source == ChangeSource::Staged {
            return Ok(None);
        }
    }

    let unstaged_diff = create_unstaged_diff(repo)?;
    let records = records_from_diff(&unstaged_diff);
    if records.is_empty() {
        return Ok(None);
    }

    Ok(Some(ChangeSet {
        records,
        is_staged: false,
    }))
}

/// extract ordered change records from a `git2::Diff` using native types
fn records_from_diff(diff: &git2::Diff) -> Vec<ChangeRecord> {
    let mut records = Vec::new();

    for delta in diff.deltas() {
        let status = match delta.status() {
            Delta::Added | Delta::Untracked => ChangeStatus::Added,
            Delta::Modified | Delta::Typechange => ChangeStatus::Modified,
            Delta::Deleted => ChangeStatus::Deleted,
            Delta::Renamed => ChangeStatus::Renamed,
            Delta::Copied => ChangeStatus::Copied,
            _ => continue, // skip ignored, unmodified, etc.
        };

        let (path, old_path) = match status {
            // renames and copies carry both paths
            ChangeStatus::Renamed | ChangeStatus::Copied => (
                delta.new_file().path(),
                delta
                    .old_file()
                    .path()
                    .map(|p| p.to_string_lossy().to_string()),
            ),
            ChangeStatus::Deleted => (delta.old_file().path(), None),
            _ => (delta.new_file().path(), None),
        };

        if let Some(path) = path {
            records.push(ChangeRecord {
                path: path.to_string_lossy().to_string(),
                status,
                old_path,
            });
        }
    }

    records
}

/// create a diff object for staged changes
fn create_staged_diff(repo: &Repository) -> Result<git2::Diff<'_>> {
    // handle unborn branch (no commits yet) - compare against empty tree
    let tree = match repo.head() {
        Ok(head) => Some(
            head.peel_to_tree()
                .map_err(|e| anyhow!("failed to get tree: {e}"))?,
        ),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) => bail!("failed to get HEAD: {e}"),
    };

    let mut diff = repo
        .diff_tree_to_index(tree.as_ref(), None, None)
        .map_err(|e| anyhow!("failed to create diff: {e}"))?;

    detect_renames(&mut diff)?;

    Ok(diff)
}

/// create a diff object for unstaged changes
fn create_unstaged_diff(repo: &Repository) -> Result<git2::Diff<'_>> {
    let mut opts = DiffOptions::new();
    opts.include_untracked(true);
    opts.recurse_untracked_dirs(true);
    let mut diff = repo
        .diff_index_to_workdir(None, Some(&mut opts))
        .map_err(|e| anyhow!("failed to create diff: {e}"))?;

    detect_renames(&mut diff)?;

    Ok(diff)
}

/// enable rename and copy detection so moves surface as single records
fn detect_renames(diff: &mut git2::Diff) -> Result<()> {
    let mut find_opts = DiffFindOptions::new();
    find_opts.renames(true);
    find_opts.rename_threshold(50); // 50% similarity (git default)
    find_opts.copies(true);
    find_opts.copy_threshold(50);
    diff.find_similar(Some(&mut find_opts))
        .map_err(|e| anyhow!("failed to detect renames: {e}"))?;
    Ok(())
}
