use crate::areas::repository::METADATA_DIR;
use crate::artifacts::index::index_entry::is_valid_path;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Working directory rooted at the repository root
///
/// Paths handed out are repository-relative strings with `/` separators, which is the
/// form stored in the index and in commits.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn absolute_path(&self, file_path: &str) -> PathBuf {
        file_path
            .split('/')
            .fold(self.path.to_path_buf(), |path, component| path.join(component))
    }

    /// Every regular file below the root, skipping dot-prefixed directories
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<String>> {
        self.list_files_under(&self.path)
    }

    fn list_files_under(&self, root: &Path) -> anyhow::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !Self::is_hidden_dir(entry));

        for entry in walker {
            let entry = entry.with_context(|| format!("Unable to walk {}", root.display()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            match self.to_repo_path(entry.path()) {
                Some(path) => {
                    files.insert(path);
                }
                None => tracing::warn!(
                    path = %entry.path().display(),
                    "skipped file with an unsupported name"
                ),
            }
        }

        Ok(files)
    }

    fn is_hidden_dir(entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry.file_name().to_string_lossy().starts_with('.')
    }

    /// Convert an absolute path below the root into its stored form
    pub fn to_repo_path(&self, absolute_path: &Path) -> Option<String> {
        let relative = absolute_path.strip_prefix(&self.path).ok()?;

        let components = relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => name.to_str().map(str::to_string),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        let path = components.join("/");
        is_valid_path(&path).then_some(path)
    }

    /// Resolve a user-supplied path to the stored paths it stands for
    ///
    /// Relative paths are taken from the process working directory and symbolic links
    /// are resolved. A directory expands to every regular file beneath it.
    pub fn resolve_paths(&self, user_path: &Path) -> anyhow::Result<Vec<String>> {
        let absolute_path = std::path::absolute(user_path)
            .with_context(|| format!("Unable to resolve path {}", user_path.display()))?;
        let absolute_path = absolute_path
            .canonicalize()
            .with_context(|| format!("Unable to read path {}", user_path.display()))?;

        let relative = absolute_path.strip_prefix(&self.path).map_err(|_| {
            RepositoryError::PathOutsideRepository {
                path: absolute_path.clone(),
                root: self.path.to_path_buf(),
            }
        })?;

        if relative.components().next() == Some(Component::Normal(METADATA_DIR.as_ref())) {
            return Err(RepositoryError::MetadataPath(absolute_path.clone()).into());
        }

        if absolute_path.is_dir() {
            return Ok(self.list_files_under(&absolute_path)?.into_iter().collect());
        }

        let path = self
            .to_repo_path(&absolute_path)
            .with_context(|| format!("Unsupported file name {}", absolute_path.display()))?;

        Ok(vec![path])
    }

    /// Whether a non-directory entry sits at the path; links are not followed, so a
    /// broken link still counts as present and fails when read
    pub fn exists(&self, file_path: &str) -> bool {
        std::fs::symlink_metadata(self.absolute_path(file_path))
            .is_ok_and(|metadata| !metadata.is_dir())
    }

    pub fn read_file(&self, file_path: &str) -> anyhow::Result<Vec<u8>> {
        let absolute_path = self.absolute_path(file_path);

        std::fs::read(&absolute_path)
            .with_context(|| format!("Unable to read file {}", absolute_path.display()))
    }

    pub fn parse_blob(&self, file_path: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?.into()))
    }

    /// Hash the working copy of a file without storing it
    pub fn hash_file(&self, file_path: &str) -> anyhow::Result<ObjectId> {
        Ok(ObjectId::digest(&self.read_file(file_path)?))
    }
}
