use bybit_charting::config::Config;

#[test]
fn parse_default_toml() {
    let toml_str = r#"
[bybit]
rest_base_url = "https://api-testnet.bybit.com"
quote_currency = "USDC"

[chart]
size = 10
output_path = "out/compare.png"

[logging]
level = "debug"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.bybit.rest_base_url, "https://api-testnet.bybit.com");
    assert_eq!(config.bybit.quote_currency, "USDC");
    assert_eq!(config.chart.size, 10);
    assert_eq!(config.chart.output_path, "out/compare.png");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.bybit.rest_base_url, "https://api.bybit.com");
    assert_eq!(config.bybit.quote_currency, "USDT");
    assert_eq!(config.chart.size, 8);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn partial_section_keeps_other_fields_default() {
    let toml_str = r#"
[bybit]
quote_currency = "BUSD"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.bybit.quote_currency, "BUSD");
    assert_eq!(config.bybit.rest_base_url, "https://api.bybit.com");
}
