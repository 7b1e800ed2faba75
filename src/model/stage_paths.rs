use std::path::{Path, PathBuf};

use crate::copy::{FilePattern, CPP_PATTERN, HEADER_PATTERN};

use super::{StageError, R};

const DESTINATION_ROOT: &str = "realProject";
const DESTINATION_SRC: &str = "src";
const PROJECT_DIR: [&str; 3] = ["Documents", "platformioProjects", "espTicker32"];

/// A directory scanned (non-recursively) for files matching `pattern`.
#[derive(Debug, Clone)]
pub struct SourceLocation {
  dir: PathBuf,
  pattern: FilePattern,
  label: String,
}

impl SourceLocation {
  pub fn new<P: AsRef<Path>>(dir: P, pattern: FilePattern, label: &str) -> Self {
    Self {
      dir: dir.as_ref().to_path_buf(),
      pattern,
      label: label.to_owned(),
    }
  }

  pub fn dir(&self) -> &Path {
    self.dir.as_path()
  }

  pub fn pattern(&self) -> &FilePattern {
    &self.pattern
  }

  /// Used in log lines, eg. ".cpp"
  pub fn label(&self) -> &str {
    &self.label
  }
}

#[derive(Debug, Clone)]
pub struct StagePaths {
  destination_root: PathBuf,
  sources: Vec<SourceLocation>,
}

impl StagePaths {

  pub fn from_home() -> R<Self> {
    dirs::home_dir()
      .map(Self::with_home)
      .ok_or(StageError::HomeDirNotFound)
  }

  pub fn with_home<H: AsRef<Path>>(home: H) -> Self {
    let project_dir: PathBuf =
      PROJECT_DIR
        .iter()
        .fold(home.as_ref().to_path_buf(), |acc, p| acc.join(p));

    let sources = vec![
      SourceLocation::new(project_dir.join("src"), (*CPP_PATTERN).clone(), ".cpp"),
      SourceLocation::new(project_dir.join("include"), (*HEADER_PATTERN).clone(), ".h"),
    ];

    Self::with_roots(DESTINATION_ROOT, sources)
  }

  pub fn with_roots<D: AsRef<Path>>(destination_root: D, sources: Vec<SourceLocation>) -> Self {
    Self {
      destination_root: destination_root.as_ref().to_path_buf(),
      sources,
    }
  }

  pub fn destination_root(&self) -> &Path {
    self.destination_root.as_path()
  }

  pub fn destination_src(&self) -> PathBuf {
    self.destination_root.join(DESTINATION_SRC)
  }

  pub fn sources(&self) -> &[SourceLocation] {
    &self.sources
  }
}
