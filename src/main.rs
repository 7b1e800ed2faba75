use std::process::ExitCode;

use args::cli;
use output::StageConsole;
use model::StagePaths;
use workflow::StageWorkflow;

mod args;
mod model;
mod copy;
mod output;
mod workflow;

#[cfg(test)]
mod test_dir;

fn main() -> ExitCode {
  let _args = cli::get_cli_args();

  let result =
    StagePaths::from_home()
      .and_then(|paths| {
        let mut console = StageConsole::stdout();
        StageWorkflow::new(paths).run(&mut console)
      });

  match result {
    Ok(_) => ExitCode::SUCCESS,
    Err(e) => {
      StageConsole::stderr().error(&e.to_string());
      ExitCode::FAILURE
    }
  }
}
