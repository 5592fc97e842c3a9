use crate::common::command::{init_repository_dir, run_hunter_command};
use crate::common::{metadata_path, read_metadata_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn edited_commit_record_is_rejected(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = read_metadata_file(repository_dir.path(), "HEAD");
    let record_path = metadata_path(repository_dir.path()).join("commits").join(&head);

    let record = std::fs::read_to_string(&record_path)?;
    std::fs::write(&record_path, record.replace("Initial commit", "Forged commit"))?;

    run_hunter_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt record"));

    Ok(())
}
