mod changeset;
mod cli;
mod compose;
mod git;
mod ui;

use crate::changeset::{ChangeRecord, ChangeSet};
use crate::git::ChangeSource;
use anyhow::Result;
use serde::Serialize;

const MAX_FILES_TO_SHOW: usize = 10;

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse_args();

    let source = if cli.staged {
        ChangeSource::Staged
    } else if cli.unstaged {
        ChangeSource::Unstaged
    } else {
        ChangeSource::Any
    };

    let repo = git::discover_repository()?;

    match git::get_changes(&repo, source)? {
        Some(changeset) => {
            let message = compose::compose(&changeset.records);
            if cli.json {
                print_json_report(&message, &changeset)?;
            } else {
                if cli.list {
                    display_changes(&changeset);
                }
                info!("{}", message);
            }
        }
        None => {
            match source {
                ChangeSource::Staged => warning!("no staged changes found"),
                ChangeSource::Unstaged => warning!("no unstaged changes found"),
                ChangeSource::Any => warning!("no changes found"),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

/// display the collected files ahead of the message
fn display_changes(changeset: &ChangeSet) {
    let file_count = changeset.records.len();
    let file_word = if file_count == 1 { "file" } else { "files" };

    status!("{} touching {} {}:", changeset.source(), file_count, file_word);

    for record in changeset.records.iter().take(MAX_FILES_TO_SHOW) {
        if let Some(old_path) = &record.old_path {
            // show renames as "old_path → new_path"
            info!("{} {} → {}", record.status.marker(), old_path, record.path);
        } else {
            info!("{} {}", record.status.marker(), record.path);
        }
    }

    // show count of remaining files if there are more than MAX_FILES_TO_SHOW
    if file_count > MAX_FILES_TO_SHOW {
        info!("(+{} more)", file_count - MAX_FILES_TO_SHOW);
    }

    info!();
}

/// single-line JSON report for host UIs consuming the message programmatically
#[derive(Serialize)]
struct Report<'a> {
    message: &'a str,
    staged: bool,
    files: &'a [ChangeRecord],
}

fn print_json_report(message: &str, changeset: &ChangeSet) -> Result<()> {
    let report = Report {
        message,
        staged: changeset.is_staged,
        files: &changeset.records,
    };
    info!("{}", serde_json::to_string(&report)?);
    Ok(())
}
