use crate::common::command::{repository_dir, run_hunter_command};
use crate::common::{list_metadata_dir, list_metadata_root, metadata_path, read_metadata_file};
use pretty_assertions::assert_eq;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_creates_metadata_layout(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let metadata_absolute_path = metadata_path(&repository_dir.path().canonicalize()?);

    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty Hunter repository in",
        ))
        .stdout(predicate::str::contains(
            metadata_absolute_path.display().to_string(),
        ));

    let metadata = metadata_path(repository_dir.path());
    assert!(metadata.join("objects").is_dir());
    assert!(metadata.join("commits").is_dir());
    assert!(!metadata.join("HEAD").exists());
    assert_eq!(read_metadata_file(repository_dir.path(), "index"), "");
    assert!(list_metadata_dir(repository_dir.path(), "objects").is_empty());
    assert_eq!(
        list_metadata_root(repository_dir.path()),
        vec!["commits", "index", "lock", "objects"]
    );

    Ok(())
}
