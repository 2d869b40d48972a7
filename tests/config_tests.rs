use smoothie_shop::utils::{formatting::format_price, Config};

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();

    assert_eq!(config.shop_name, "Smoothie Shop");
    assert_eq!(config.currency_symbol, "$");
    assert!(config.validate().is_ok());
}

#[test]
fn test_blank_shop_name_rejected() {
    let config = Config {
        shop_name: "  ".to_string(),
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_long_currency_symbol_rejected() {
    let config = Config {
        currency_symbol: "EURO".to_string(),
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_log_level_rejected() {
    let config = Config {
        log_level: "loud".to_string(),
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_format_price_uses_two_decimals() {
    assert_eq!(format_price(5.5, "$"), "$5.50");
    assert_eq!(format_price(0.0, "€"), "€0.00");
}
