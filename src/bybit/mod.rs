pub mod interval;
pub mod rest;
pub mod types;

pub use interval::{candle_length, Interval};
pub use rest::BybitRestClient;
pub use types::{Kline, Ticker};
