use std::net::SocketAddr;

use warden_dns_domain::config::{Config, ForwardingConfig};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert!(!config.forwarding.enabled);
    assert!(config.forwarding.upstreams.is_empty());
    assert_eq!(config.forwarding.timeout_ms, 1000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_parse_toml() {
    let config: Config = toml::from_str(
        r#"
        [server]
        port = 5353
        bind_address = "127.0.0.1"

        [forwarding]
        enabled = true
        upstreams = ["1.1.1.1", "8.8.8.8:5300"]

        [database]
        path = "/var/lib/warden/dns.db"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.port, 5353);
    assert!(config.forwarding.enabled);
    assert_eq!(config.database.path, "/var/lib/warden/dns.db");
    // Unset sections keep their defaults.
    assert_eq!(config.forwarding.timeout_ms, 1000);
}

#[test]
fn test_upstreams_get_default_dns_port() {
    let forwarding = ForwardingConfig {
        enabled: true,
        upstreams: vec!["1.1.1.1".to_string(), "8.8.8.8:5300".to_string(), "::1".to_string()],
        timeout_ms: 1000,
    };

    let addrs = forwarding.upstream_addrs().unwrap();
    assert_eq!(addrs[0], "1.1.1.1:53".parse::<SocketAddr>().unwrap());
    assert_eq!(addrs[1], "8.8.8.8:5300".parse::<SocketAddr>().unwrap());
    assert_eq!(addrs[2], "[::1]:53".parse::<SocketAddr>().unwrap());
}

#[test]
fn test_invalid_upstream_fails_validation() {
    let config: Config = toml::from_str(
        r#"
        [forwarding]
        upstreams = ["not-an-address"]
        "#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn test_zero_port_fails_validation() {
    let config: Config = toml::from_str("[server]\nport = 0\n").unwrap();
    assert!(config.validate().is_err());
}
