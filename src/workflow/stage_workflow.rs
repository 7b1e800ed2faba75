use std::fs;
use std::io::Write;

use crate::copy::{FileCopy, SourceFile};
use crate::model::{StagedFile, StageError, StagePaths, R};
use crate::output::StageConsole;

#[derive(Debug, PartialEq)]
pub enum StageOutcome {
  /// The destination root was already there, nothing was touched.
  AlreadyExists,
  /// Copies in the order they were made.
  Staged(Vec<StagedFile>),
}

pub struct StageWorkflow {
  paths: StagePaths
}

impl StageWorkflow {

  pub fn new(paths: StagePaths) -> Self {
    Self {
      paths
    }
  }

  /// Populates the destination source folder, unless the destination root exists.
  ///
  /// Only the root is checked: a root without its `src` folder still counts as
  /// existing. Files copied before a failure are left in place.
  pub fn run<W: Write>(&self, console: &mut StageConsole<W>) -> R<StageOutcome> {
    let destination_root = self.paths.destination_root();

    if destination_root.exists() {
      console.info(&format!("'{}' already exists. Exiting.", destination_root.display()));
      return Ok(StageOutcome::AlreadyExists)
    }

    let destination_src = self.paths.destination_src();
    fs::create_dir_all(&destination_src)
      .map_err(|e| StageError::CouldNotCreateDestinationDir(destination_src.clone(), e.to_string()))?;
    console.info(&format!("Created folder: {}", destination_src.display()));

    let mut copied = Vec::new();
    for location in self.paths.sources() {
      let files_to_copy = SourceFile::get_source_files(location.dir(), location.pattern());

      for file in files_to_copy {
        let staged = FileCopy::new(file, &destination_src).copy()?;
        console.info(&format!("Copied {} file: {}", location.label(), staged.display_name()));
        copied.push(staged);
      }
    }

    console.info("All files copied successfully.");
    Ok(StageOutcome::Staged(copied))
  }
}
