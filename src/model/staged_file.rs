use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// One source file and where it lands in the destination `src` folder.
///
/// Both paths share the same file name, byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
  source: PathBuf,
  destination: PathBuf,
}

impl StagedFile {
  pub fn new<S: AsRef<Path>>(source: S, destination_dir: &Path) -> Self {
    let source = source.as_ref().to_path_buf();
    let destination =
      match source.file_name() {
        Some(name) => destination_dir.join(name),
        None => destination_dir.to_path_buf(),
      };

    Self {
      source,
      destination,
    }
  }

  pub fn source(&self) -> &Path {
    self.source.as_path()
  }

  pub fn destination(&self) -> &Path {
    self.destination.as_path()
  }

  /// File name for log lines; invalid UTF-8 is replaced.
  pub fn display_name(&self) -> Cow<'_, str> {
    self.source
      .file_name()
      .map(|n| n.to_string_lossy())
      .unwrap_or_else(|| self.source.to_string_lossy())
  }
}
