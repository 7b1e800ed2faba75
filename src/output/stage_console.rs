use std::io::{self, Stderr, Stdout, Write};

use ::console::style;

/// Writes `[INFO]` / `[ERROR]` tagged lines. The tag is only styled when `styled` is set.
pub struct StageConsole<W: Write> {
  writer: W,
  styled: bool,
}

impl StageConsole<Stdout> {
  pub fn stdout() -> Self {
    Self::new(io::stdout(), ::console::colors_enabled())
  }
}

impl StageConsole<Stderr> {
  pub fn stderr() -> Self {
    Self::new(io::stderr(), ::console::colors_enabled_stderr())
  }
}

impl <W: Write> StageConsole<W> {

  pub fn new(writer: W, styled: bool) -> Self {
    Self {
      writer,
      styled
    }
  }

  pub fn info(&mut self, msg: &str) {
    let tag = style("[INFO]").cyan().force_styling(self.styled);
    self.write_line(&format!("{} {}", tag, msg))
  }

  pub fn error(&mut self, msg: &str) {
    let tag = style("[ERROR]").red().bold().force_styling(self.styled);
    self.write_line(&format!("{} {}", tag, msg))
  }

  #[cfg(test)]
  pub fn into_inner(self) -> W {
    self.writer
  }

  fn write_line(&mut self, line: &str) {
    let _ = writeln!(self.writer, "{}", line);
    let _ = self.writer.flush();
  }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain() -> StageConsole<Vec<u8>> {
      StageConsole::new(Vec::new(), false)
    }

    #[test]
    fn info_lines_are_tagged() {
      let mut console = plain();
      console.info("Created folder: realProject/src");
      console.info("All files copied successfully.");

      let output = String::from_utf8(console.into_inner()).unwrap();
      assert_eq!(output, "[INFO] Created folder: realProject/src\n[INFO] All files copied successfully.\n")
    }

    #[test]
    fn error_lines_are_tagged() {
      let mut console = plain();
      console.error("Could not determine the home directory of the current user");

      let output = String::from_utf8(console.into_inner()).unwrap();
      assert_eq!(output, "[ERROR] Could not determine the home directory of the current user\n")
    }

    #[test]
    fn styled_output_strips_back_to_plain_text() {
      let mut console = StageConsole::new(Vec::new(), true);
      console.info("Copied .h file: x.h");

      let output = String::from_utf8(console.into_inner()).unwrap();
      assert!(output.contains("\u{1b}["));
      assert_eq!(::console::strip_ansi_codes(&output), "[INFO] Copied .h file: x.h\n")
    }
}
