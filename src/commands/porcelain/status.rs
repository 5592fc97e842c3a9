use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{ChangeSet, Status, StatusInfo};
use colored::Colorize;
use std::io::Write;

const INDENT: &str = "        ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFormat {
    #[default]
    Long,
    Porcelain,
}

impl Repository {
    pub fn status(&self, format: StatusFormat) -> anyhow::Result<StatusInfo> {
        let status = Status::new(self).initialize()?;

        match format {
            StatusFormat::Long => self.print_long_format(&status)?,
            StatusFormat::Porcelain => self.print_porcelain_format(&status)?,
        }

        Ok(status)
    }

    fn print_porcelain_format(&self, status: &StatusInfo) -> anyhow::Result<()> {
        for (path, change) in status.changed_files() {
            writeln!(self.writer(), "{} {}", change, path)?;
        }

        for path in status.untracked_files() {
            writeln!(self.writer(), "?? {}", path)?;
        }

        Ok(())
    }

    fn print_long_format(&self, status: &StatusInfo) -> anyhow::Result<()> {
        match status.head() {
            Some(head) => writeln!(self.writer(), "On commit {}", head.to_short_oid())?,
            None => writeln!(self.writer(), "No commits yet")?,
        }
        writeln!(self.writer())?;

        if status.is_clean() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
            return Ok(());
        }

        self.print_changeset(
            "Changes to be committed:",
            "No changes staged for commit",
            status.index_changeset(),
        )?;
        self.print_changeset(
            "Changes not staged for commit:",
            "No unstaged changes",
            status.workspace_changeset(),
        )?;

        if status.untracked_files().is_empty() {
            writeln!(self.writer(), "No untracked files")?;
        } else {
            writeln!(self.writer(), "Untracked files:")?;
            for path in status.untracked_files() {
                writeln!(self.writer(), "{}{}", INDENT, path.red())?;
            }
        }

        for path in status.unreadable_files() {
            writeln!(self.writer())?;
            writeln!(
                self.writer(),
                "{}",
                format!("warning: could not read {}", path).yellow()
            )?;
        }

        Ok(())
    }

    fn print_changeset(
        &self,
        header: &str,
        empty_message: &str,
        changeset: &ChangeSet,
    ) -> anyhow::Result<()> {
        if changeset.is_empty() {
            writeln!(self.writer(), "{}", empty_message)?;
        } else {
            writeln!(self.writer(), "{}", header)?;
            for (path, change) in changeset {
                writeln!(self.writer(), "{}{}", change, path)?;
            }
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
