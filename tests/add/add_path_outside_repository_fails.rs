use crate::common::command::{repository_dir, run_hunter_command};
use crate::common::{list_metadata_dir, read_metadata_file};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_path_outside_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let outside_dir = TempDir::new()?;
    outside_dir.child("passwd").write_str("root:x:0:0")?;
    let outside_file = outside_dir.path().join("passwd");

    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_hunter_command(
        repository_dir.path(),
        &["add", outside_file.to_str().expect("temp path is UTF-8")],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("outside repository"));

    assert_eq!(read_metadata_file(repository_dir.path(), "index"), "");
    assert!(list_metadata_dir(repository_dir.path(), "objects").is_empty());

    Ok(())
}

#[rstest]
fn add_parent_relative_path_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_dir.path().join("repo");
    std::fs::create_dir_all(&repository)?;
    repository_dir.child("secret.txt").write_str("secret")?;

    run_hunter_command(&repository, &["init"]).assert().success();

    run_hunter_command(&repository, &["add", "../secret.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside repository"));

    Ok(())
}
