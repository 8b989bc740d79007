use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("start time must be within the last 50 weeks")]
    OutOfRange,

    #[error("HTTP status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("bybit API error (ret_code {ret_code}): {ret_msg}")]
    Bybit { ret_code: i64, ret_msg: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chart error: {0}")]
    Chart(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
