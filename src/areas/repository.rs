use crate::areas::commits::CommitLog;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::lock::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::config::Config;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the metadata directory that marks a repository root
pub const METADATA_DIR: &str = ".hunter";
const OBJECTS_DIR: &str = "objects";
const COMMITS_DIR: &str = "commits";
const INDEX_FILE: &str = "index";
const HEAD_FILE: &str = "HEAD";
const LOCK_FILE: &str = "lock";

/// Repository context: the resolved root plus every area beneath it
///
/// All operations go through this value; nothing about the repository location is
/// kept in global state.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    commits: CommitLog,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    /// Open a repository rooted exactly at `path`, creating the directory if needed
    ///
    /// Used by `init`; every other command goes through [`Repository::discover`].
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }

        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve directory {}", path.display()))?;

        Ok(Self::at_root(path, writer))
    }

    /// Locate the repository governing `start` by walking up its ancestors
    ///
    /// The root is the nearest directory containing a `.hunter` directory.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let root = Self::find_root(start)?;

        Ok(Self::at_root(root, writer))
    }

    pub fn find_root(start: &Path) -> anyhow::Result<PathBuf> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Unable to resolve directory {}", start.display()))?;

        start
            .ancestors()
            .find(|dir| dir.join(METADATA_DIR).is_dir())
            .map(Path::to_path_buf)
            .ok_or_else(|| RepositoryError::NotFound(start.clone()).into())
    }

    fn at_root(path: PathBuf, writer: Box<dyn std::io::Write>) -> Self {
        let metadata = path.join(METADATA_DIR);

        Repository {
            index: RefCell::new(Index::new(metadata.join(INDEX_FILE).into_boxed_path())),
            database: Database::new(metadata.join(OBJECTS_DIR).into_boxed_path()),
            commits: CommitLog::new(metadata.join(COMMITS_DIR).into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(metadata.join(HEAD_FILE).into_boxed_path()),
            writer: RefCell::new(writer),
            path: path.into_boxed_path(),
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn commits(&self) -> &CommitLog {
        &self.commits
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lock_path(&self) -> PathBuf {
        self.metadata_path().join(LOCK_FILE)
    }

    /// Block until no other process mutates the repository
    pub fn lock_exclusive(&self) -> anyhow::Result<RepositoryLock> {
        RepositoryLock::exclusive(&self.lock_path())
    }

    /// Block until no other process holds the exclusive lock
    ///
    /// Returns `None` without touching the disk when the lock file is missing.
    pub fn lock_shared(&self) -> anyhow::Result<Option<RepositoryLock>> {
        RepositoryLock::shared(&self.lock_path())
    }
}
