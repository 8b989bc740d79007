use std::io::{self, BufRead, Write};

use crate::error::AppError;

/// Parse a line of user input as a unix timestamp (seconds).
pub fn parse_start_time(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Input(format!("invalid unix timestamp: '{}'", raw.trim())))
}

/// Prompt on stdout for the chart start time and read one line from stdin.
pub fn prompt_start_time() -> Result<i64, AppError> {
    print!("Enter start time (unix): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    parse_start_time(&line)
}
