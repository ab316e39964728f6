use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::division::arithmetic;
use crate::division::error::{ErrorKind, Result};
use crate::division::input;
use crate::division::io::result_file::{self, RESULT_FILE};
use crate::division::messages::Locale;

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The quotient was printed and persisted.
    Completed { quotient: i32 },
    /// The run stopped at the first failure of the given kind.
    Failed(ErrorKind),
}

/// Interactive routine that reads two operands, divides them, reports the
/// quotient, and persists it to the result file.
#[derive(Debug, Clone)]
pub struct DivisionTool {
    output_path: PathBuf,
    locale: Locale,
    pause: bool,
}

impl Default for DivisionTool {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(RESULT_FILE),
            locale: Locale::default(),
            pause: false,
        }
    }
}

impl DivisionTool {
    /// Creates a tool writing to [`RESULT_FILE`] with English messages.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Waits for one more input line after a successful write.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Runs the whole read, divide, report, persist sequence once.
    ///
    /// Every failure is reported to `output` as exactly one message line, and
    /// the closing line is written on every path. The returned `Err` only
    /// signals that `output` itself could not be written.
    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> std::io::Result<Outcome>
    where
        R: BufRead,
        W: Write,
    {
        let reported = match self.execute(input, output) {
            Ok(quotient) => Ok(Outcome::Completed { quotient }),
            Err(error) => {
                let kind = error.kind();
                info!(%kind, %error, "division run failed");
                writeln!(output, "{}", self.locale.error_line(&error))
                    .map(|()| Outcome::Failed(kind))
            }
        };

        let finished =
            writeln!(output, "{}", self.locale.finished_line()).and_then(|()| output.flush());

        let outcome = reported?;
        finished?;
        Ok(outcome)
    }

    #[instrument(level = "info", skip_all, fields(output = %self.output_path.display()))]
    fn execute<R, W>(&self, input: &mut R, output: &mut W) -> Result<i32>
    where
        R: BufRead,
        W: Write,
    {
        let dividend = input::read_operand(input, output, self.locale.first_prompt())?;
        let divisor = input::read_operand(input, output, self.locale.second_prompt())?;

        let quotient = arithmetic::divide(dividend, divisor)?;
        info!(dividend, divisor, quotient, "division computed");
        writeln!(output, "{}", self.locale.result_line(quotient))?;

        result_file::write_result(&self.output_path, quotient)?;
        writeln!(output, "{}", self.locale.saved_line(&self.output_path))?;

        if self.pause {
            input::wait_for_enter(input)?;
        }

        Ok(quotient)
    }
}
