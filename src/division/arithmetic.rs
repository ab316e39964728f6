use crate::division::error::{Result, ToolError};

/// Divides `dividend` by `divisor`, truncating toward zero.
///
/// A zero divisor is rejected before any arithmetic happens. The only
/// overflowing pair, `i32::MIN / -1`, is reported instead of panicking.
pub fn divide(dividend: i32, divisor: i32) -> Result<i32> {
    if divisor == 0 {
        return Err(ToolError::DivisionByZero { dividend });
    }

    dividend
        .checked_div(divisor)
        .ok_or(ToolError::Overflow { dividend, divisor })
}
