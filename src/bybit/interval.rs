use crate::error::AppError;

/// Candle interval codes accepted by the kline endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Min1,
    Min3,
    Min5,
    Min15,
    Min30,
    Min60,
    Min120,
    Min240,
    Min360,
    Min720,
    Day,
    Week,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Min1 => "1",
            Interval::Min3 => "3",
            Interval::Min5 => "5",
            Interval::Min15 => "15",
            Interval::Min30 => "30",
            Interval::Min60 => "60",
            Interval::Min120 => "120",
            Interval::Min240 => "240",
            Interval::Min360 => "360",
            Interval::Min720 => "720",
            Interval::Day => "D",
            Interval::Week => "W",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bounds (exclusive) of elapsed 200-minute windows per interval code.
const LADDER: [(f64, Interval); 12] = [
    (1.0, Interval::Min1),
    (3.0, Interval::Min3),
    (5.0, Interval::Min5),
    (15.0, Interval::Min15),
    (30.0, Interval::Min30),
    (60.0, Interval::Min60),
    (120.0, Interval::Min120),
    (240.0, Interval::Min240),
    (360.0, Interval::Min360),
    (720.0, Interval::Min720),
    (1440.0, Interval::Day),
    (10080.0, Interval::Week),
];

/// Pick the coarsest interval such that at most ~200 candles cover the span.
/// `windows` is the number of elapsed 200-minute windows since the start time.
pub fn interval_for_windows(windows: f64) -> Result<Interval, AppError> {
    for (upper, code) in LADDER {
        if windows < upper {
            return Ok(code);
        }
    }
    Err(AppError::OutOfRange)
}

/// Derive the candle interval for a series beginning at `start_time` (unix secs).
pub fn candle_length(start_time: i64) -> Result<Interval, AppError> {
    let now = chrono::Utc::now().timestamp();
    let windows = (now - start_time) as f64 / (60.0 * 200.0);
    interval_for_windows(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_exchange_identifiers() {
        assert_eq!(Interval::Min1.as_str(), "1");
        assert_eq!(Interval::Min720.as_str(), "720");
        assert_eq!(Interval::Day.as_str(), "D");
        assert_eq!(Interval::Week.to_string(), "W");
    }
}
