use crate::common::command::{repository_dir, run_hunter_command};
use crate::common::{HELLO_OID, list_metadata_dir, read_metadata_file};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_same_content_stores_one_object(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    repository_dir.child("a.txt").write_str("hello")?;
    repository_dir.child("b.txt").write_str("hello")?;

    run_hunter_command(repository_dir.path(), &["add", "a.txt", "b.txt"])
        .assert()
        .success();
    run_hunter_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    assert_eq!(
        list_metadata_dir(repository_dir.path(), "objects"),
        vec![HELLO_OID.to_string()]
    );
    assert_eq!(
        read_metadata_file(repository_dir.path(), "index"),
        format!("{HELLO_OID}\ta.txt\n{HELLO_OID}\tb.txt\n")
    );

    Ok(())
}
