use crate::common::command::{hunter_commit, hunter_stdout, init_repository_dir, run_hunter_command};
use crate::common::read_metadata_file;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn two_commits_dir(init_repository_dir: TempDir) -> TempDir {
    let repository_dir = init_repository_dir;

    repository_dir
        .child("1.txt")
        .write_str("one, edited")
        .expect("Failed to write file");
    run_hunter_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    hunter_commit(repository_dir.path(), "Second commit\n\nWith a body")
        .assert()
        .success();

    repository_dir
}

#[rstest]
fn log_oneline_lists_commits_newest_first(two_commits_dir: TempDir) {
    let repository_dir = two_commits_dir;
    let second = read_metadata_file(repository_dir.path(), "HEAD");

    let actual_output = hunter_stdout(repository_dir.path(), &["log", "--oneline"]);

    let lines = actual_output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("{} Second commit", &second[..7]));
    assert!(lines[1].ends_with(" Initial commit"));
}

#[rstest]
fn log_medium_format_shows_date_and_message(two_commits_dir: TempDir) {
    let repository_dir = two_commits_dir;
    let second = read_metadata_file(repository_dir.path(), "HEAD");
    let record = read_metadata_file(repository_dir.path(), &format!("commits/{second}"));
    let first = record
        .lines()
        .find_map(|line| line.strip_prefix("parent: "))
        .expect("second commit has a parent")
        .to_string();

    let actual_output = hunter_stdout(repository_dir.path(), &["log"]);

    let expected_output = format!(
        "commit {second}
Date:   Sun Jan 1 12:00:00 2023 +0000

    Second commit
    
    With a body

commit {first}
Date:   Sun Jan 1 12:00:00 2023 +0000

    Initial commit
"
    );
    assert_eq!(actual_output, expected_output);
}
