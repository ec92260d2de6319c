use serde::Serialize;
use std::fmt;

/// status of a single file change, as reported by the change collector
///
/// serialises as the lowercase status word; the catch-all variant serialises
/// as "changed", matching the vocabulary providers use for unmapped codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    #[serde(rename = "changed")]
    Other,
}

impl ChangeStatus {
    /// map a provider numeric status code; unrecognised codes collapse to Other
    #[allow(dead_code)] // the git2 collector maps typed deltas, not numeric codes
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ChangeStatus::Modified,
            2 => ChangeStatus::Added,
            3 => ChangeStatus::Deleted,
            4 => ChangeStatus::Renamed,
            5 => ChangeStatus::Copied,
            _ => ChangeStatus::Other,
        }
    }

    /// single-character marker for file listings
    pub fn marker(self) -> char {
        match self {
            ChangeStatus::Added => 'A',
            ChangeStatus::Modified => 'M',
            ChangeStatus::Deleted => 'D',
            ChangeStatus::Renamed => 'R',
            ChangeStatus::Copied => 'C',
            ChangeStatus::Other => '?',
        }
    }
}

// capitalised status word, used for single-change headlines
impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            ChangeStatus::Added => "Added",
            ChangeStatus::Modified => "Modified",
            ChangeStatus::Deleted => "Deleted",
            ChangeStatus::Renamed => "Renamed",
            ChangeStatus::Copied => "Copied",
            ChangeStatus::Other => "Changed",
        };
        write!(f, "{word}")
    }
}

/// represents a single file change with its status
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRecord {
    pub path: String,
    pub status: ChangeStatus,
    /// set for renames and copies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_path: Option<String>,
}

/// represents a set of changes (staged or unstaged)
#[derive(Debug)]
pub struct ChangeSet {
    pub records: Vec<ChangeRecord>,
    pub is_staged: bool,
}

impl ChangeSet {
    pub fn source(&self) -> &str {
        if self.is_staged {
            "staged changes"
        } else {
            "unstaged changes"
        }
    }
}
