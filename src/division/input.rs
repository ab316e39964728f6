use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use tracing::debug;

use crate::division::error::{Result, ToolError};

/// Parses one line of user input as a base-10 `i32`.
///
/// Surrounding whitespace and line terminators are ignored and a single
/// leading `+` or `-` is accepted.
pub fn parse_operand(line: &str) -> Result<i32> {
    let text = line.trim();
    text.parse::<i32>().map_err(|source| match source.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow if is_plain_integer(text) => {
            ToolError::OperandOutOfRange {
                input: text.to_owned(),
            }
        }
        _ => ToolError::InvalidOperand {
            input: text.to_owned(),
            source,
        },
    })
}

/// True for an optional sign followed by ASCII digits only.
fn is_plain_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Writes `prompt`, then reads and parses a single line from `input`.
///
/// End of input is treated as an empty line and therefore fails to parse.
/// Bytes that are not valid UTF-8 are replaced and fail to parse as well.
pub fn read_operand<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<i32>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    let value = parse_operand(&String::from_utf8_lossy(&line))?;
    debug!(value, "operand parsed");
    Ok(value)
}

/// Blocks until one more line (or end of input) arrives and discards it.
pub fn wait_for_enter<R: BufRead>(input: &mut R) -> Result<()> {
    let mut discarded = Vec::new();
    input.read_until(b'\n', &mut discarded)?;
    Ok(())
}
