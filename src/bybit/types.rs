use serde::Deserialize;

/// Deserialize values Bybit sends either as JSON numbers or string-encoded
/// numbers to f64.
pub fn string_or_number_to_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::String(s) => s.parse::<f64>().map_err(serde::de::Error::custom),
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("invalid number")),
        _ => Err(serde::de::Error::custom("invalid numeric value")),
    }
}

pub fn string_or_number_to_f64_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::Null => Ok(0.0),
        other => string_or_number_to_f64(other).map_err(serde::de::Error::custom),
    }
}

/// Response envelope shared by the public endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub ret_code: i64,
    #[serde(default)]
    pub ret_msg: String,
    pub result: Option<T>,
}

/// Symbol listing row (GET /v2/public/symbols). The upstream schema carries
/// four trailing fee/filter fields this client never reads; they are not
/// modeled here.
#[derive(Debug, Deserialize, Clone)]
pub struct SymbolInfo {
    pub name: String,
    #[serde(default)]
    pub alias: String,
    pub status: String,
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(default)]
    pub price_scale: u32,
}

/// A symbol retained after filtering; its status is "Trading" by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    pub name: String,
    pub alias: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub price_scale: u32,
}

impl From<SymbolInfo> for Ticker {
    fn from(row: SymbolInfo) -> Self {
        Self {
            name: row.name,
            alias: row.alias,
            base_currency: row.base_currency,
            quote_currency: row.quote_currency,
            price_scale: row.price_scale,
        }
    }
}

/// Kline row (GET /public/linear/kline).
#[derive(Debug, Deserialize, Clone)]
pub struct Kline {
    pub symbol: String,
    #[serde(default)]
    pub period: String,
    pub start_at: i64,
    #[serde(deserialize_with = "string_or_number_to_f64")]
    pub open: f64,
    #[serde(deserialize_with = "string_or_number_to_f64")]
    pub high: f64,
    #[serde(deserialize_with = "string_or_number_to_f64")]
    pub low: f64,
    #[serde(deserialize_with = "string_or_number_to_f64")]
    pub close: f64,
    #[serde(default, deserialize_with = "string_or_number_to_f64_default")]
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_symbol_row_ignores_trailing_fields() {
        let json = r#"{
            "name": "BTCUSDT",
            "alias": "BTCUSDT",
            "status": "Trading",
            "base_currency": "BTC",
            "quote_currency": "USDT",
            "price_scale": 2,
            "taker_fee": "0.00075",
            "maker_fee": "-0.00025",
            "leverage_filter": {"min_leverage": 1, "max_leverage": 100},
            "price_filter": {"min_price": "0.5", "max_price": "999999"},
            "lot_size_filter": {"max_trading_qty": 100, "min_trading_qty": 0.001}
        }"#;
        let row: SymbolInfo = serde_json::from_str(json).unwrap();
        assert_eq!(row.name, "BTCUSDT");
        assert_eq!(row.status, "Trading");
        assert_eq!(row.quote_currency, "USDT");
        assert_eq!(row.price_scale, 2);
    }

    #[test]
    fn deserialize_kline_numeric_and_string_prices() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "period": "15",
            "interval": "15",
            "start_at": 1670000000,
            "open_time": 1670000000,
            "volume": "12.5",
            "open": 17000.5,
            "high": "17100.0",
            "low": 16950.0,
            "close": "17050.25",
            "turnover": "212531.25"
        }"#;
        let row: Kline = serde_json::from_str(json).unwrap();
        assert_eq!(row.start_at, 1670000000);
        assert!((row.open - 17000.5).abs() < f64::EPSILON);
        assert!((row.close - 17050.25).abs() < f64::EPSILON);
        assert!((row.volume - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_error_envelope_with_null_result() {
        let json = r#"{
            "ret_code": 10001,
            "ret_msg": "invalid symbol",
            "ext_code": "",
            "ext_info": "",
            "result": null,
            "time_now": "1670000000.123"
        }"#;
        let envelope: ApiResponse<Vec<Kline>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.ret_code, 10001);
        assert_eq!(envelope.ret_msg, "invalid symbol");
        assert!(envelope.result.is_none());
    }

    #[test]
    fn deserialize_symbols_envelope() {
        let json = r#"{
            "ret_code": 0,
            "ret_msg": "OK",
            "result": [
                {
                    "name": "ETHUSDT",
                    "alias": "ETHUSDT",
                    "status": "Trading",
                    "base_currency": "ETH",
                    "quote_currency": "USDT",
                    "price_scale": 2
                }
            ]
        }"#;
        let envelope: ApiResponse<Vec<SymbolInfo>> = serde_json::from_str(json).unwrap();
        let rows = envelope.result.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].base_currency, "ETH");
    }
}
