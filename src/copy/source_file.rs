use walkdir::{DirEntry, WalkDir};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::FilePattern;

#[derive(Debug, Clone)]
pub struct SourceFile {
  full: PathBuf,
}

impl SourceFile {

  fn from_dir_entry(de: DirEntry) -> Self {
    Self {
      full: de.into_path(),
    }
  }

  pub fn file_name(&self) -> &OsStr {
    self.full.file_name().unwrap_or_default()
  }

  pub fn full_path(&self) -> &Path {
    self.full.as_path()
  }

  /// Entries directly inside `source_dir` whose name matches `pattern`, sorted by name.
  ///
  /// Every matching entry is returned, whatever its type, so a matching directory
  /// or dangling symlink surfaces later as a copy failure. Subdirectories are not
  /// descended into. A missing or unreadable `source_dir` yields no entries.
  pub fn get_source_files<P: AsRef<Path>>(source_dir: P, pattern: &FilePattern) -> Vec<SourceFile> {
    WalkDir::new(source_dir)
      .min_depth(1)
      .max_depth(1)
      .sort_by_file_name()
      .into_iter()
      .filter_map(|de| {
        de
          .ok()
          .filter(|d| pattern.matches(d.file_name()))
          .map(Self::from_dir_entry)
      })
      .collect()
  }
}
