use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{StagedFile, StageError, R};

use super::SourceFile;

#[derive(Debug, Clone)]
pub struct FileCopy {
  source_file: SourceFile,
  destination_dir_path: PathBuf,
}

impl FileCopy {

  pub fn new<D: AsRef<Path>>(source_file: SourceFile, destination_dir_path: D) -> Self {
    Self {
      source_file,
      destination_dir_path: destination_dir_path.as_ref().to_path_buf(),
    }
  }

  /// Copies the file contents and permission bits under the same file name.
  /// An existing destination file is overwritten. Sources that are not files,
  /// or symlinks to files, fail.
  pub fn copy(&self) -> R<StagedFile> {
    let staged = StagedFile::new(self.source_file.full_path(), &self.destination_dir_path);

    match fs::copy(staged.source(), staged.destination()) {
      Ok(_) => Ok(staged),
      Err(e) => Err(StageError::CouldNotCopyFile(staged, e.to_string()))
    }
  }
}
