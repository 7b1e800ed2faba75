use std::ffi::OsStr;

use globset::{Glob, GlobMatcher};
use once_cell::sync::Lazy;

pub static CPP_PATTERN: Lazy<FilePattern> = Lazy::new(|| FilePattern::new("*.cpp").unwrap());
pub static HEADER_PATTERN: Lazy<FilePattern> = Lazy::new(|| FilePattern::new("*.h").unwrap());

/// A shell-style glob matched against file names only, never paths.
#[derive(Debug, Clone)]
pub struct FilePattern {
  matcher: GlobMatcher,
}

impl FilePattern {

  pub fn new(glob: &str) -> Result<Self, globset::Error> {
    let matcher =
      Glob::new(glob)?
        .compile_matcher();

    Ok(Self { matcher })
  }

  pub fn matches<N: AsRef<OsStr>>(&self, file_name: N) -> bool {
    self.matcher.is_match(file_name.as_ref())
  }
}
