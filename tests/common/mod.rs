#![allow(dead_code)]

pub mod file;

/// Fixed timestamp handed to every commit made by the tests
pub const COMMIT_DATE: &str = "2023-01-01T12:00:00Z";

/// Digest of the five bytes `hello`
pub const HELLO_OID: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

pub fn metadata_path(dir: &std::path::Path) -> std::path::PathBuf {
    dir.join(".hunter")
}

pub fn read_metadata_file(dir: &std::path::Path, name: &str) -> String {
    let path = metadata_path(dir).join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

pub fn list_metadata_dir(dir: &std::path::Path, name: &str) -> Vec<String> {
    let path = metadata_path(dir).join(name);
    let mut entries = std::fs::read_dir(&path)
        .unwrap_or_else(|e| panic!("Failed to list {:?}: {}", path, e))
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>();
    entries.sort();
    entries
}

/// Every entry directly under `.hunter`, sorted
pub fn list_metadata_root(dir: &std::path::Path) -> Vec<String> {
    list_metadata_dir(dir, "")
}
