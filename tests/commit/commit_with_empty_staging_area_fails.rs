use crate::common::command::{hunter_commit, init_repository_dir, repository_dir, run_hunter_command};
use crate::common::{list_metadata_dir, list_metadata_root, metadata_path, read_metadata_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_in_a_fresh_repository_fails(repository_dir: TempDir) {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let layout = list_metadata_root(repository_dir.path());
    let index = read_metadata_file(repository_dir.path(), "index");

    hunter_commit(repository_dir.path(), "nothing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(list_metadata_root(repository_dir.path()), layout);
    assert_eq!(read_metadata_file(repository_dir.path(), "index"), index);
    assert!(list_metadata_dir(repository_dir.path(), "commits").is_empty());
    assert!(!metadata_path(repository_dir.path()).join("HEAD").exists());
}

#[rstest]
fn commit_without_a_lock_file_and_nothing_staged_creates_nothing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    std::fs::remove_file(metadata_path(repository_dir.path()).join("lock"))?;
    let layout = list_metadata_root(repository_dir.path());

    hunter_commit(repository_dir.path(), "nothing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(list_metadata_root(repository_dir.path()), layout);

    Ok(())
}

#[rstest]
fn commit_twice_without_adding_fails(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;
    let head = read_metadata_file(repository_dir.path(), "HEAD");
    let commits = list_metadata_dir(repository_dir.path(), "commits");

    hunter_commit(repository_dir.path(), "again")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(read_metadata_file(repository_dir.path(), "HEAD"), head);
    assert_eq!(list_metadata_dir(repository_dir.path(), "commits"), commits);
}

#[rstest]
fn commit_with_missing_index_file_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    std::fs::remove_file(metadata_path(repository_dir.path()).join("index"))?;

    hunter_commit(repository_dir.path(), "nothing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    Ok(())
}
