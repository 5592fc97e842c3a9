use crate::common::command::{repository_dir, run_hunter_command};
use crate::common::file::write_generated_files;
use crate::common::read_metadata_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sha1::{Digest, Sha1};

#[rstest]
fn readding_a_file_replaces_its_entry(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(repository_dir.path(), 1);
    let file_name = files[0]
        .path
        .file_name()
        .expect("generated file has a name")
        .to_string_lossy()
        .into_owned();

    run_hunter_command(repository_dir.path(), &["add", &file_name])
        .assert()
        .success();

    std::fs::write(&files[0].path, "rewritten")?;
    run_hunter_command(repository_dir.path(), &["add", &file_name])
        .assert()
        .success();

    assert_eq!(
        read_metadata_file(repository_dir.path(), "index"),
        format!("{:x}\t{}\n", Sha1::digest(b"rewritten"), file_name)
    );

    Ok(())
}
