use super::*;

fn overrides(base: &str, timeout: &str, policy: &str) -> Overrides {
    Overrides {
        api_base_url: normalize_value(base),
        timeout_ms: normalize_value(timeout),
        guard_policy: normalize_value(policy),
    }
}

#[test]
fn defaults_match_production_endpoint() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "https://movizio.onrender.com/api");
    assert_eq!(config.timeout, Duration::from_millis(20_000));
    assert_eq!(config.guard_policy, GuardPolicy::LiteralList);
}

#[test]
fn normalize_value_trims_and_rejects_empty() {
    assert_eq!(normalize_value(""), None);
    assert_eq!(normalize_value("   "), None);
    assert_eq!(
        normalize_value(" https://movizio.onrender.com/api"),
        Some("https://movizio.onrender.com/api".to_owned())
    );
}

#[test]
fn apply_overrides_ignores_empty_values() {
    let mut config = AppConfig::default();
    apply_overrides(&mut config, overrides("", "  ", ""));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn apply_overrides_ignores_unparsable_values() {
    let mut config = AppConfig::default();
    apply_overrides(&mut config, overrides("", "soon", "strict"));
    assert_eq!(config, AppConfig::default());
    apply_overrides(&mut config, overrides("", "0", ""));
    assert_eq!(config.timeout, Duration::from_millis(20_000));
}

#[test]
fn apply_overrides_overwrites_when_present() {
    let mut config = AppConfig::default();
    apply_overrides(&mut config, overrides("http://localhost:5000/api", "5000", "metadata"));
    assert_eq!(config.api_base_url, "http://localhost:5000/api");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.guard_policy, GuardPolicy::RouteMetadata);
}
