mod stage_workflow;

pub use stage_workflow::{StageOutcome, StageWorkflow};
