use clap::Parser;

/// Stage firmware sources into a local realProject folder.
///
/// Copies every *.cpp file from ~/Documents/platformioProjects/espTicker32/src
/// and every *.h file from ~/Documents/platformioProjects/espTicker32/include
/// into ./realProject/src. Does nothing if ./realProject already exists.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {}

pub fn get_cli_args() -> Args {
  Args::parse()
}
