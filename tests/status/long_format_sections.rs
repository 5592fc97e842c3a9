use crate::common::command::{hunter_stdout, init_repository_dir, run_hunter_command};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn long_format_lists_every_section(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = std::fs::read_to_string(repository_dir.path().join(".hunter").join("HEAD"))?;

    repository_dir.child("new.txt").write_str("new")?;
    run_hunter_command(repository_dir.path(), &["add", "new.txt"])
        .assert()
        .success();
    repository_dir.child("1.txt").write_str("changed")?;
    repository_dir.child("notes.md").write_str("untracked")?;

    let actual_output = hunter_stdout(repository_dir.path(), &["status"]);

    let expected_output = format!(
        "On commit {}

Changes to be committed:
        new file:   new.txt

Changes not staged for commit:
        modified:   1.txt

Untracked files:
        notes.md
",
        &head[..7]
    );
    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn long_format_prints_empty_sections(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = std::fs::read_to_string(repository_dir.path().join(".hunter").join("HEAD"))?;

    repository_dir.child("1.txt").write_str("changed")?;

    let actual_output = hunter_stdout(repository_dir.path(), &["status"]);

    let expected_output = format!(
        "On commit {}

No changes staged for commit

Changes not staged for commit:
        modified:   1.txt

No untracked files
",
        &head[..7]
    );
    assert_eq!(actual_output, expected_output);

    Ok(())
}
