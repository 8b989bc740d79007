use crate::error::AppError;

use super::interval::Interval;
use super::types::{ApiResponse, Kline, SymbolInfo, Ticker};

pub struct BybitRestClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

/// Keep only symbols open for trading, optionally restricted to one quote
/// currency.
pub fn filter_tickers(rows: Vec<SymbolInfo>, quote_currency: Option<&str>) -> Vec<Ticker> {
    rows.into_iter()
        .filter(|row| row.status == "Trading")
        .filter(|row| quote_currency.map_or(true, |q| row.quote_currency == q))
        .map(Ticker::from)
        .collect()
}

impl BybitRestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List tradable symbols (GET /v2/public/symbols).
    pub fn get_tickers(&self, quote_currency: Option<&str>) -> Result<Vec<Ticker>, AppError> {
        let url = format!("{}/v2/public/symbols", self.base_url);
        let resp = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiResponse<Vec<SymbolInfo>> = resp.json()?;
        let tickers = filter_tickers(envelope.result.unwrap_or_default(), quote_currency);
        tracing::debug!(count = tickers.len(), "symbol listing fetched");
        Ok(tickers)
    }

    /// Fetch kline rows for one symbol from `start_time` (unix secs) at the
    /// given interval (GET /public/linear/kline).
    pub fn market_data(
        &self,
        symbol: &str,
        interval: Interval,
        start_time: i64,
    ) -> Result<Vec<Kline>, AppError> {
        let url = format!("{}/public/linear/kline", self.base_url);
        let resp = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(&[
                ("symbol", symbol),
                ("interval", interval.as_str()),
                ("from", &start_time.to_string()),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiResponse<Vec<Kline>> = resp.json()?;
        if envelope.ret_code != 0 {
            return Err(AppError::Bybit {
                ret_code: envelope.ret_code,
                ret_msg: envelope.ret_msg,
            });
        }

        let rows = envelope.result.unwrap_or_default();
        tracing::debug!(symbol, interval = %interval, rows = rows.len(), "kline fetched");
        Ok(rows)
    }
}
