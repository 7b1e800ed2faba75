mod stage_console;

pub use stage_console::StageConsole;
