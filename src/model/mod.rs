mod stage_error;
mod stage_paths;
mod staged_file;

pub type R<A> = Result<A, StageError>;

pub use stage_error::StageError;
pub use stage_paths::{SourceLocation, StagePaths};
pub use staged_file::StagedFile;
