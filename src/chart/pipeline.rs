use crate::bybit::{candle_length, BybitRestClient};
use crate::error::AppError;

use super::table::WideTable;

/// Percentage change of each close relative to the first observation. The
/// first element of a non-empty series is always exactly 0.
pub fn pct_change(closes: &[f64]) -> Vec<f64> {
    let Some(&first) = closes.first() else {
        return Vec::new();
    };
    closes
        .iter()
        .map(|close| (close - first) / first * 100.0)
        .collect()
}

/// Fetch every ticker's candle series and assemble the wide pct-change table.
///
/// The first ticker's timestamps establish the shared axis; each series is
/// aligned positionally against it and rows with any missing cell are
/// dropped, so a series with no overlap silently vanishes from the result.
pub fn pull_all_data(
    client: &BybitRestClient,
    tickers: &[String],
    start_time: i64,
) -> Result<WideTable, AppError> {
    let first = tickers
        .first()
        .ok_or_else(|| AppError::Chart("ticker list is empty".to_string()))?;

    let interval = candle_length(start_time)?;
    tracing::info!(interval = %interval, tickers = tickers.len(), "pulling candle data");

    let times: Vec<i64> = client
        .market_data(first, interval, start_time)?
        .iter()
        .map(|k| k.start_at)
        .collect();

    let mut table = WideTable::new(times);
    for ticker in tickers {
        let closes: Vec<f64> = client
            .market_data(ticker, interval, start_time)?
            .iter()
            .map(|k| k.close)
            .collect();
        table.push_series(ticker, pct_change(&closes));
    }

    table.drop_missing();
    Ok(table)
}
