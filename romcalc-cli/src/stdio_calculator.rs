use std::io::{stdin, BufRead, IsTerminal};
use std::path::PathBuf;

use crate::cli_args::CliArgs;
use colored::*;
use romcalc_core::{evaluate_line, CalcError, TracedCalcError};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::debug;

const HISTORY_FILENAME: &'static str = ".romcalc-history.txt";

const PROMPT: &'static str = "> ";

fn get_history_path() -> Option<PathBuf> {
    // Note that we're using the deprecated std::env::home_dir() here, which
    // doesn't give correct paths under some environments like Cygwin and Mingw.
    #[allow(deprecated)]
    if let Some(path) = std::env::home_dir() {
        if path.exists() {
            Some(path.join(HISTORY_FILENAME))
        } else {
            None
        }
    } else {
        None
    }
}

pub struct StdioCalculator {
    args: CliArgs,
    /// Whether any line has failed to evaluate so far.
    had_error: bool,
}

impl StdioCalculator {
    pub fn new(args: CliArgs) -> Self {
        StdioCalculator {
            args,
            had_error: false,
        }
    }

    fn show_error(&self, err: &TracedCalcError, line: Option<&str>) {
        if let Some(line) = line {
            for caret_line in err.get_line_with_pointer_caret(line) {
                eprintln!("{}", caret_line);
            }
        }
        eprintln!("{}", err.to_string().red());
    }

    /// Evaluates a single line and prints its result. Returns whether the
    /// line evaluated successfully; errors have already been shown.
    fn evaluate(&mut self, line: &str) -> bool {
        match evaluate_line(line) {
            Ok(output) => {
                println!("{}", output);
                true
            }
            Err(err) => {
                self.show_error(&err, Some(line));
                self.had_error = true;
                false
            }
        }
    }

    fn stream_error(&self, message: String) -> i32 {
        debug!(%message, "reading input failed");
        self.show_error(&CalcError::Stream(message).into(), None);
        1
    }

    pub fn run(&mut self) -> i32 {
        let run_result = if self.args.has_expressions() {
            self.run_expressions()
        } else if stdin().is_terminal() {
            self.run_interactive()
        } else {
            self.run_piped()
        };

        match run_result {
            Ok(_) if self.had_error => 1,
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_expressions(&mut self) -> Result<(), i32> {
        debug!(count = self.args.expressions.len(), "evaluating arguments");
        for expression in self.args.expressions.clone() {
            if !self.evaluate(&expression) {
                return Err(1);
            }
        }
        Ok(())
    }

    /// Errors aren't fatal here, since the user can just try again.
    fn run_interactive(&mut self) -> Result<(), i32> {
        debug!("reading from terminal");
        let Ok(mut rl) = DefaultEditor::new() else {
            eprintln!("Initializing DefaultEditor failed!");
            return Err(1);
        };

        let history_path = get_history_path();

        if let Some(path) = &history_path {
            // Ignore the result, if it errors it's generally b/c the file doesn't exist.
            let _ = rl.load_history(path);
        }

        println!(
            "Roman numeral calculator v{}. Enter expressions like 3+4 or III*II.",
            env!("CARGO_PKG_VERSION")
        );
        println!("Press CTRL-D or CTRL-C to exit.");

        let run_result = loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        eprintln!("WARNING: Failed to add history entry ({:?}).", err);
                    }
                    self.evaluate(&line);
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    break Ok(());
                }
                Err(err) => {
                    break Err(self.stream_error(err.to_string()));
                }
            }
        };

        if let Some(path) = &history_path {
            // Ignore the result, if we fail no biggie.
            let _ = rl.save_history(path);
        }

        // Mistakes made at the prompt don't affect the exit code.
        self.had_error = false;

        run_result
    }

    /// Unless we've been told to keep going, treat errors as fatal.
    ///
    /// Lines that aren't valid UTF-8 are decoded lossily, so they fail to
    /// evaluate like any other bad line instead of ending the stream.
    fn run_piped(&mut self) -> Result<(), i32> {
        debug!(keep_going = self.args.keep_going, "reading from pipe");
        let mut input = stdin().lock();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(()),
                Ok(_) => {}
                Err(err) => return Err(self.stream_error(err.to_string())),
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            if !self.evaluate(line) && !self.args.keep_going {
                return Err(1);
            }
        }
    }
}
