use anyhow::{Context, Result};

use bybit_charting::bybit::BybitRestClient;
use bybit_charting::chart::{plot_data, pull_all_data};
use bybit_charting::config::Config;
use bybit_charting::input;

fn main() -> Result<()> {
    let config = Config::load().context("failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        rest_url = %config.bybit.rest_base_url,
        quote_currency = %config.bybit.quote_currency,
        "Starting bybit-charting"
    );

    let client = BybitRestClient::new(&config.bybit.rest_base_url);
    let tickers: Vec<String> = client
        .get_tickers(Some(&config.bybit.quote_currency))
        .context("failed to fetch symbol listing")?
        .into_iter()
        .map(|t| t.name)
        .collect();
    tracing::info!(count = tickers.len(), "tradable symbols");

    let start_time = input::prompt_start_time()?;

    let wide = pull_all_data(&client, &tickers, start_time)?;
    let long = wide.melt();
    plot_data(&long, &config.chart)?;

    tracing::info!(path = %config.chart.output_path, "chart written");
    Ok(())
}
