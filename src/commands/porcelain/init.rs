use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the metadata layout; running it again on an existing repository only fills
    /// in what is missing
    pub fn init(&self) -> anyhow::Result<()> {
        let reinitialized = self.metadata_path().is_dir();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .hunter/objects directory")?;

        fs::create_dir_all(self.commits().commits_path())
            .context("Failed to create .hunter/commits directory")?;

        let index = self.index();
        // create the index file if it does not exist
        if !index.path().exists() {
            fs::write(index.path(), b"").context("Failed to create .hunter/index file")?;
        }
        drop(index);

        let lock_path = self.lock_path();
        if !lock_path.exists() {
            fs::write(&lock_path, b"").context("Failed to create .hunter/lock file")?;
        }

        tracing::debug!(path = %self.path().display(), reinitialized, "repository initialized");

        writeln!(
            self.writer(),
            "{} Hunter repository in {}",
            if reinitialized {
                "Reinitialized existing"
            } else {
                "Initialized empty"
            },
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
