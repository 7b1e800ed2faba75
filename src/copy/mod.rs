mod file_copy;
mod file_pattern;
mod source_file;

pub use file_copy::FileCopy;
pub use file_pattern::{FilePattern, CPP_PATTERN, HEADER_PATTERN};
pub use source_file::SourceFile;
