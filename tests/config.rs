mod support;

use fractic_household_finance::{entities::ClientConfig, util::HouseholdFinanceUtil};
use iso_currency::Currency;
use support::FakeTransport;

#[test]
fn defaults_match_household_deployment() {
    let config = ClientConfig::default();
    assert_eq!(config.api_prefix, "/finance");
    assert_eq!(config.currency().unwrap(), Currency::BRL);
    assert_eq!(config.fallback_category_label, "Geral");
    assert_eq!(config.recent_transactions_limit, 5);
    assert!(!config.legacy_salaries);
}

#[test]
fn ron_overrides_only_given_fields() {
    let util = HouseholdFinanceUtil::from_config_string(
        FakeTransport::new(),
        r#"(api_prefix: "/api/v2", currency: "USD", legacy_salaries: true)"#,
    )
    .unwrap();
    let config = util.config();
    assert_eq!(config.api_prefix, "/api/v2");
    assert_eq!(config.currency().unwrap(), Currency::USD);
    assert!(config.legacy_salaries);
    assert_eq!(config.report_wrap_width, 74);
}

#[test]
fn unknown_currency_is_rejected() {
    let result =
        HouseholdFinanceUtil::from_config_string(FakeTransport::new(), r#"(currency: "XYZ1")"#);
    assert!(result.is_err());

    let config = ClientConfig {
        currency: "nope".into(),
        ..Default::default()
    };
    assert!(HouseholdFinanceUtil::new(FakeTransport::new(), config).is_err());
}

#[test]
fn malformed_ron_is_rejected() {
    let result =
        HouseholdFinanceUtil::from_config_string(FakeTransport::new(), "(api_prefix: 3");
    assert!(result.is_err());
}

#[tokio::test]
async fn config_file_is_read() {
    let path = std::env::temp_dir().join(format!("hf-config-{}.ron", std::process::id()));
    std::fs::write(&path, r#"(recent_transactions_limit: 3)"#).unwrap();
    let util = HouseholdFinanceUtil::from_config_file(FakeTransport::new(), &path)
        .await
        .unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(util.config().recent_transactions_limit, 3);

    let missing = std::env::temp_dir().join("hf-config-does-not-exist.ron");
    assert!(
        HouseholdFinanceUtil::from_config_file(FakeTransport::new(), &missing)
            .await
            .is_err()
    );
}
