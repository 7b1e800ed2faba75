use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use super::StagedFile;

#[derive(Debug, Clone, PartialEq)]
pub enum StageError {
  HomeDirNotFound,
  CouldNotCreateDestinationDir(PathBuf, String),
  CouldNotCopyFile(StagedFile, String),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
        StageError::HomeDirNotFound =>
          write!(f, "Could not determine the home directory of the current user"),

        StageError::CouldNotCreateDestinationDir(path, reason) =>
          write!(f, "Could not create destination dir '{}': {}", path.display(), reason),

        StageError::CouldNotCopyFile(staged, reason) =>
          write!(f, "Could not copy '{}' to '{}': {}", staged.source().display(), staged.destination().display(), reason),
      }
    }
}

impl Error for StageError {}
