use super::*;

/// helper to build a change record
fn record(path: &str, status: ChangeStatus) -> ChangeRecord {
    ChangeRecord {
        path: path.to_string(),
        status,
        old_path: None,
    }
}

#[test]
fn single_added_file() {
    let records = vec![record("/a/b/foo.ts", ChangeStatus::Added)];
    assert_eq!(compose(&records), "Added foo.ts");
}

#[test]
fn single_change_uses_capitalised_status_word() {
    assert_eq!(
        compose(&[record("src/lib.rs", ChangeStatus::Modified)]),
        "Modified lib.rs"
    );
    assert_eq!(
        compose(&[record("src/lib.rs", ChangeStatus::Deleted)]),
        "Deleted lib.rs"
    );
    assert_eq!(
        compose(&[record("src/lib.rs", ChangeStatus::Renamed)]),
        "Renamed lib.rs"
    );
    assert_eq!(
        compose(&[record("src/lib.rs", ChangeStatus::Copied)]),
        "Copied lib.rs"
    );
    assert_eq!(
        compose(&[record("src/lib.rs", ChangeStatus::Other)]),
        "Changed lib.rs"
    );
}

#[test]
fn majority_directory_with_plural_clause() {
    let records = vec![
        record("src/a.rs", ChangeStatus::Added),
        record("src/b.rs", ChangeStatus::Added),
        record("src/c.rs", ChangeStatus::Added),
    ];
    assert_eq!(compose(&records), "Update in src: Add 3 files");
}

#[test]
fn exactly_half_is_not_a_majority() {
    let records = vec![
        record("src/a.rs", ChangeStatus::Modified),
        record("src/b.rs", ChangeStatus::Modified),
        record("docs/c.md", ChangeStatus::Modified),
        record("tests/d.rs", ChangeStatus::Modified),
    ];
    assert_eq!(compose(&records), "Multiple changes: Modify 4 files");
}

#[test]
fn three_of_five_is_a_majority() {
    let records = vec![
        record("src/a.rs", ChangeStatus::Modified),
        record("src/b.rs", ChangeStatus::Modified),
        record("src/c.rs", ChangeStatus::Modified),
        record("docs/d.md", ChangeStatus::Modified),
        record("tests/e.rs", ChangeStatus::Modified),
    ];
    assert_eq!(compose(&records), "Update in src: Modify 5 files");
}

#[test]
fn clause_order_is_fixed_regardless_of_input_order() {
    let records = vec![
        record("docs/readme.md", ChangeStatus::Deleted),
        record("src/main.rs", ChangeStatus::Modified),
        record("tests/new.rs", ChangeStatus::Added),
    ];
    assert_eq!(
        compose(&records),
        "Multiple changes: Add new.rs, Modify main.rs, Delete readme.md"
    );
}

#[test]
fn plural_and_singular_clauses_combine() {
    let records = vec![
        record("src/a.rs", ChangeStatus::Added),
        record("src/b.rs", ChangeStatus::Added),
        record("src/c.rs", ChangeStatus::Deleted),
    ];
    assert_eq!(compose(&records), "Update in src: Add 2 files, Delete c.rs");
}

#[test]
fn renames_copies_and_unknowns_share_the_change_clause() {
    let records = vec![
        record("src/new_name.rs", ChangeStatus::Renamed),
        record("src/copy.rs", ChangeStatus::Copied),
        record("src/odd.rs", ChangeStatus::Other),
    ];
    assert_eq!(compose(&records), "Update in src: Change 3 files");
}

#[test]
fn single_item_clauses_use_the_filename() {
    let records = vec![
        record("a/one.rs", ChangeStatus::Added),
        record("b/two.rs", ChangeStatus::Renamed),
    ];
    assert_eq!(
        compose(&records),
        "Multiple changes: Add one.rs, Change two.rs"
    );
}

#[test]
fn empty_changeset_yields_bare_headline() {
    assert_eq!(compose(&[]), "Multiple changes: ");
}

#[test]
fn deterministic_over_repeated_calls() {
    let records = vec![
        record("src/a.rs", ChangeStatus::Added),
        record("src/b.rs", ChangeStatus::Deleted),
        record("docs/c.md", ChangeStatus::Modified),
    ];
    assert_eq!(compose(&records), compose(&records));
}

#[test]
fn directory_names_pool_across_parents() {
    // parent directory names are counted, not full paths
    let records = vec![
        record("a/src/one.rs", ChangeStatus::Modified),
        record("b/src/two.rs", ChangeStatus::Modified),
        record("c/docs/three.md", ChangeStatus::Modified),
    ];
    assert_eq!(compose(&records), "Update in src: Modify 3 files");
}

#[test]
fn tied_directories_never_form_a_majority() {
    let records = vec![
        record("alpha/a.rs", ChangeStatus::Added),
        record("beta/b.rs", ChangeStatus::Added),
        record("alpha/c.rs", ChangeStatus::Added),
        record("beta/d.rs", ChangeStatus::Added),
    ];
    assert_eq!(compose(&records), "Multiple changes: Add 4 files");
}

#[test]
fn root_level_files_count_under_the_empty_directory_name() {
    // the empty name is rendered as-is when the root holds the majority
    let records = vec![
        record("README.md", ChangeStatus::Modified),
        record("LICENSE", ChangeStatus::Modified),
        record("src/main.rs", ChangeStatus::Modified),
    ];
    assert_eq!(compose(&records), "Update in : Modify 3 files");
}

#[test]
fn tolerates_backslash_separators() {
    let records = vec![record(r"src\windows.rs", ChangeStatus::Added)];
    assert_eq!(compose(&records), "Added windows.rs");

    let records = vec![
        record(r"src\a.rs", ChangeStatus::Modified),
        record(r"src\b.rs", ChangeStatus::Modified),
        record(r"docs\c.md", ChangeStatus::Modified),
    ];
    assert_eq!(compose(&records), "Update in src: Modify 3 files");
}

#[test]
fn path_helpers_split_on_both_separators() {
    assert_eq!(base_name("a/b/c.rs"), "c.rs");
    assert_eq!(base_name(r"a\b\c.rs"), "c.rs");
    assert_eq!(base_name(r"a/b\c.rs"), "c.rs");
    assert_eq!(base_name("c.rs"), "c.rs");
    assert_eq!(parent_dir_name("a/b/c.rs"), "b");
    assert_eq!(parent_dir_name(r"a\b\c.rs"), "b");
    assert_eq!(parent_dir_name("c.rs"), "");
    assert_eq!(parent_dir_name("/c.rs"), "");
}
