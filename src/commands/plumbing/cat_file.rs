use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Pretty-print the content
    Pretty,
    /// Print the object type only
    Type,
}

impl Repository {
    /// Print a stored object; blobs are looked up first, then commits
    pub fn cat_file(&self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id.to_string())?;

        if self.database().contains(&object_id) {
            let blob = self.database().parse_object_as_blob(&object_id)?;
            match mode {
                CatFileMode::Type => writeln!(self.writer(), "{}", blob.object_type())?,
                // blob content is written as-is, it may not be text
                CatFileMode::Pretty => self.writer().write_all(blob.content())?,
            }
            return Ok(());
        }

        if self.commits().contains(&object_id) {
            let commit = self.commits().load(&object_id)?;
            match mode {
                CatFileMode::Type => writeln!(self.writer(), "{}", commit.object_type())?,
                CatFileMode::Pretty => writeln!(self.writer(), "{}", commit.display())?,
            }
            return Ok(());
        }

        Err(RepositoryError::ObjectNotFound(object_id.to_string()).into())
    }
}
