use crate::changeset::{ChangeRecord, ChangeStatus};

/// compose a one-line commit message summarising a set of file changes
///
/// a single change is described by its status word and base filename, e.g.
/// "Added foo.ts". for two or more changes the headline is
/// "Update in <dir>: " when a strict majority of the files share a parent
/// directory name, otherwise "Multiple changes: ", followed by per-status
/// clauses in fixed order, e.g.
/// "Multiple changes: Add 2 files, Modify main.rs, Delete old.rs"
///
/// pure and deterministic: the same records in the same order always produce
/// the same string, and no input can make it fail. an empty slice yields the
/// bare "Multiple changes: " headline.
pub fn compose(records: &[ChangeRecord]) -> String {
    if let [record] = records {
        return format!("{} {}", record.status, base_name(&record.path));
    }

    let clauses = detail_clauses(records);
    format!("{}{}", multi_headline(records), clauses.join(", "))
}

/// headline for two or more changes
///
/// counts records per parent directory name in first-seen order; the strict
/// `>` comparison means an earlier directory keeps the lead over a later one
/// with an equal count
fn multi_headline(records: &[ChangeRecord]) -> String {
    let mut dir_counts: Vec<(&str, usize)> = Vec::new();
    for record in records {
        let dir = parent_dir_name(&record.path);
        match dir_counts.iter_mut().find(|(name, _)| *name == dir) {
            Some((_, count)) => *count += 1,
            None => dir_counts.push((dir, 1)),
        }
    }

    let mut max_dir = "";
    let mut max_count = 0;
    for &(dir, count) in &dir_counts {
        if count > max_count {
            max_dir = dir;
            max_count = count;
        }
    }

    // strict majority: more than half of all changes under one directory name
    if max_count * 2 > records.len() {
        format!("Update in {max_dir}: ")
    } else {
        String::from("Multiple changes: ")
    }
}

/// per-status clauses in fixed order: added, modified, deleted, other
fn detail_clauses(records: &[ChangeRecord]) -> Vec<String> {
    let mut added = Vec::new();
    let mut modified = Vec::new();
    let mut deleted = Vec::new();
    let mut other = Vec::new();

    for record in records {
        let filename = base_name(&record.path);
        match record.status {
            ChangeStatus::Added => added.push(filename),
            ChangeStatus::Modified => modified.push(filename),
            ChangeStatus::Deleted => deleted.push(filename),
            // renames, copies and unrecognised statuses share the last bucket
            ChangeStatus::Renamed | ChangeStatus::Copied | ChangeStatus::Other => {
                other.push(filename);
            }
        }
    }

    let buckets = [
        ("Add", added),
        ("Modify", modified),
        ("Delete", deleted),
        ("Change", other),
    ];

    let mut clauses = Vec::new();
    for (verb, bucket) in buckets {
        match bucket.as_slice() {
            [] => {}
            [filename] => clauses.push(format!("{verb} {filename}")),
            _ => clauses.push(format!("{verb} {} files", bucket.len())),
        }
    }
    clauses
}

/// last path segment; tolerates both unix and windows separators
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// name of the immediate parent directory, empty for files at the repo root
fn parent_dir_name(path: &str) -> &str {
    let mut segments = path.rsplit(['/', '\\']);
    segments.next(); // the filename itself
    segments.next().unwrap_or("")
}

#[cfg(test)]
mod tests;
