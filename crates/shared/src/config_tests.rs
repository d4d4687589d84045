use super::*;

#[test]
fn test_load_from_environment() {
    temp_env::with_vars(
        [
            ("SALONLEDGER__UPSTREAM__BASE_URL", Some("http://localhost:3000/api")),
            ("SALONLEDGER__SERVER__PORT", Some("9090")),
            ("SALONLEDGER__REPORT__TIMEZONE", Some("Africa/Nairobi")),
        ],
        || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.upstream.base_url, "http://localhost:3000/api");
            assert_eq!(config.upstream.page_size, 100);
            assert_eq!(config.upstream.max_pages, 50);
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.report.tz().unwrap(), chrono_tz::Africa::Nairobi);
            assert_eq!(config.report.currency, Currency::Rwf);
        },
    );
}

#[test]
fn test_invalid_timezone_is_config_error() {
    let report = ReportConfig {
        timezone: "Mars/Olympus".to_string(),
        currency: Currency::Usd,
    };
    let err = report.tz().unwrap_err();
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
}

#[test]
fn test_report_defaults() {
    let report = ReportConfig::default();
    assert_eq!(report.tz().unwrap(), chrono_tz::Africa::Kigali);
}
