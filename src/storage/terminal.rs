//! Interactive read-query-print loop.
//!
//! Entering the loop moves the handle into interactive mode, so a bad
//! statement prints `error: ...` instead of ending the session.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::error::Result;
use crate::storage::database::Database;

/// Prompt printed before each query.
pub const PROMPT: &str = "- ";

/// Cursor up one line.
const CURSOR_UP: &str = "\x1b[1A";
/// Erase the whole current line.
const ERASE_LINE: &str = "\x1b[2K";

impl Database {
    /// Run the terminal on stdin/stdout until end of input.
    ///
    /// With `minimize`, the prompt and echoed query are erased before each
    /// result is printed.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin/stdout fail.
    pub fn terminal(&mut self, minimize: bool) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_terminal(stdin.lock(), stdout.lock(), minimize)
    }

    /// Terminal loop over arbitrary input and output streams.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `output` fails.
    pub fn run_terminal<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        minimize: bool,
    ) -> Result<()> {
        self.enter_interactive();

        let banner = format!("sqlite terminal | {}", self.path().display());
        writeln!(output, "{}", banner.cyan().bold())?;

        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("terminal input closed");
                writeln!(output)?;
                return Ok(());
            }

            let query = line.trim();
            if query.is_empty() {
                continue;
            }

            if minimize {
                erase_lines(&mut output, 2)?;
            }

            // log/export I/O failures still surface as Err; keep the session alive
            let shown = match self.execute(query, None, true) {
                Ok(result) => result.to_string(),
                Err(err) => format!("error: {err}"),
            };
            writeln!(output, "{shown}")?;
        }
    }
}

/// Move the cursor up and clear a line, `n` times.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn erase_lines<W: Write>(output: &mut W, n: usize) -> io::Result<()> {
    for _ in 0..n {
        output.write_all(CURSOR_UP.as_bytes())?;
        output.write_all(ERASE_LINE.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ErrorPolicy, Mode};
    use tempfile::TempDir;

    fn run(db: &mut Database, script: &str, minimize: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        db.run_terminal(script.as_bytes(), &mut out, minimize).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_terminal_session() {
        let dir = TempDir::new().unwrap();
        let mut db = Database::new(dir.path().join("term"));

        let out = run(
            &mut db,
            "create table t (id integer, name text)\n\
             insert into t values (1, 'a')\n\
             \n\
             select * from t\n\
             selec broken\n\
             select name from t\n",
            false,
        );

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("sqlite terminal | "));
        assert!(lines[0].ends_with("term.sqlite"));
        assert_eq!(lines[1], "- query ok, no results");
        assert_eq!(lines[2], "- query ok, no results");
        assert_eq!(lines[3], "- - [1, 'a']");
        assert!(lines[4].starts_with("- error: "));
        assert_eq!(lines[5], "- 'a'");

        assert_eq!(db.mode(), Mode::Interactive);
        assert_eq!(db.error_policy(), ErrorPolicy::Return);
    }

    #[test]
    fn test_minimize_erases_two_lines() {
        let dir = TempDir::new().unwrap();
        let mut db = Database::new(dir.path().join("term"));

        let out = run(&mut db, "select 1\n", true);
        assert!(out.contains(&format!("{PROMPT}{CURSOR_UP}{ERASE_LINE}{CURSOR_UP}{ERASE_LINE}1\n")));
    }

    #[test]
    fn test_erase_lines() {
        let mut out = Vec::new();
        erase_lines(&mut out, 2).unwrap();
        assert_eq!(out, b"\x1b[1A\x1b[2K\x1b[1A\x1b[2K");
    }
}
