use crate::common::command::{repository_dir, run_hunter_command};
use crate::common::{HELLO_OID, list_metadata_dir};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(false, vec![])]
#[case(true, vec![HELLO_OID.to_string()])]
fn hash_object_prints_the_blob_id(
    repository_dir: TempDir,
    #[case] write: bool,
    #[case] expected_objects: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    repository_dir.child("a.txt").write_str("hello")?;

    let mut args = vec!["hash-object"];
    if write {
        args.push("-w");
    }
    args.push("a.txt");

    run_hunter_command(repository_dir.path(), &args)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{HELLO_OID}\n")));

    assert_eq!(list_metadata_dir(repository_dir.path(), "objects"), expected_objects);

    Ok(())
}
