use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.peer_channel_capacity, DEFAULT_PEER_CHANNEL_CAPACITY);
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some("8080"), Some("16")).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.peer_channel_capacity, 16);
}

#[test]
fn from_vars_rejects_bad_host_and_port() {
    assert!(matches!(
        ServerConfig::from_vars(Some("localhost:1"), None, None),
        Err(ConfigError::InvalidHost(raw)) if raw == "localhost:1"
    ));
    assert!(matches!(
        ServerConfig::from_vars(None, Some("70000"), None),
        Err(ConfigError::InvalidPort(raw)) if raw == "70000"
    ));
}

#[test]
fn from_vars_rejects_zero_or_non_numeric_capacity() {
    assert!(matches!(
        ServerConfig::from_vars(None, None, Some("0")),
        Err(ConfigError::InvalidCapacity(_))
    ));
    assert!(matches!(
        ServerConfig::from_vars(None, None, Some("many")),
        Err(ConfigError::InvalidCapacity(_))
    ));
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::remove_var("HOST");
        std::env::remove_var("PEER_CHANNEL_CAPACITY");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);

    unsafe { std::env::remove_var("PORT") };
}
