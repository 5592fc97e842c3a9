use crate::common::command::{hunter_stdout, repository_dir, run_hunter_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_in_name_order(repository_dir: TempDir) {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let mut files = write_generated_files(repository_dir.path(), 3);
    files.sort();

    let expected_output = files
        .iter()
        .map(|f| format!("?? {}", f.path.file_name().unwrap().to_string_lossy()))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n";

    let actual_output = hunter_stdout(repository_dir.path(), &["status", "--porcelain"]);

    assert_eq!(actual_output, expected_output);
}

#[rstest]
fn untracked_files_in_nested_directories_are_listed_individually(repository_dir: TempDir) {
    run_hunter_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let nested = repository_dir.path().join("dir").join("sub");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("file.txt"), "nested").unwrap();
    std::fs::write(repository_dir.path().join("top.txt"), "top").unwrap();

    let actual_output = hunter_stdout(repository_dir.path(), &["status", "--porcelain"]);

    assert_eq!(actual_output, "?? dir/sub/file.txt\n?? top.txt\n");
}
