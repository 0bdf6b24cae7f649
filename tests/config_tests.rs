// Config loading and validation tests

use dockdeck::collector::SortOrder;
use dockdeck::config::AppConfig;
use std::io::Write;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[runtime]
socket = "/var/run/docker.sock"
timeout_secs = 3

[collection]
concurrency = 4
sort = "cpu"
mask_secrets = true
evict_stale = true

[polling]
interval_ms = 2000
cycle_timeout_ms = 10000
stats_log_interval_secs = 60

[publishing]
broadcast_capacity = 16
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 8081
host = "127.0.0.1"

[polling]
interval_ms = 1000
cycle_timeout_ms = 5000
stats_log_interval_secs = 60

[publishing]
broadcast_capacity = 8
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.runtime.socket.as_deref(), Some("/var/run/docker.sock"));
    assert_eq!(config.runtime.timeout_secs, 3);
    assert_eq!(config.collection.concurrency, 4);
    assert_eq!(config.collection.sort, SortOrder::Cpu);
    assert!(config.collection.mask_secrets);
    assert!(config.collection.evict_stale);
    assert_eq!(config.polling.interval_ms, 2000);
    assert_eq!(config.polling.cycle_timeout_ms, 10000);
    assert_eq!(config.publishing.broadcast_capacity, 16);
}

#[test]
fn test_optional_sections_use_defaults() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("load_from_str");
    assert_eq!(config.runtime.socket, None);
    assert_eq!(config.runtime.timeout_secs, 5);
    assert_eq!(config.collection.concurrency, 8);
    assert_eq!(config.collection.sort, SortOrder::Name);
    assert!(!config.collection.mask_secrets);
    assert!(!config.collection.evict_stale);
}

#[test]
fn test_collector_config_mirrors_collection_section() {
    let config = AppConfig::load_from_str(VALID_CONFIG).unwrap();
    let collector = config.collection.collector_config();
    assert_eq!(collector.concurrency, 4);
    assert_eq!(collector.sort, SortOrder::Cpu);
    assert!(collector.evict_stale);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_zero_concurrency() {
    let bad = VALID_CONFIG.replace("concurrency = 4", "concurrency = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("collection.concurrency"));
}

#[test]
fn test_config_validation_rejects_zero_timeout() {
    let bad = VALID_CONFIG.replace("timeout_secs = 3", "timeout_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("runtime.timeout_secs"));
}

#[test]
fn test_config_validation_rejects_blank_socket() {
    let bad = VALID_CONFIG.replace("socket = \"/var/run/docker.sock\"", "socket = \" \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("runtime.socket"));
}

#[test]
fn test_config_validation_rejects_zero_interval() {
    let bad = VALID_CONFIG.replace("interval_ms = 2000", "interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("polling.interval_ms"));
}

#[test]
fn test_config_validation_rejects_zero_cycle_timeout() {
    let bad = VALID_CONFIG.replace("cycle_timeout_ms = 10000", "cycle_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("polling.cycle_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_zero_stats_log_interval() {
    let bad = VALID_CONFIG.replace("stats_log_interval_secs = 60", "stats_log_interval_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("stats_log_interval_secs"));
}

#[test]
fn test_config_validation_rejects_zero_broadcast_capacity() {
    let bad = VALID_CONFIG.replace("broadcast_capacity = 16", "broadcast_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("publishing.broadcast_capacity"));
}

#[test]
fn test_config_rejects_unknown_sort() {
    let bad = VALID_CONFIG.replace("sort = \"cpu\"", "sort = \"memory\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_missing_section_fails() {
    let bad = MINIMAL_CONFIG.replace("[publishing]\nbroadcast_capacity = 8\n", "");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

// CONFIG_FILE is process-global; only this test touches it.
#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MINIMAL_CONFIG.as_bytes()).unwrap();
    unsafe {
        std::env::set_var("CONFIG_FILE", file.path());
    }
    let config = AppConfig::load().expect("load");
    assert_eq!(config.server.host, "127.0.0.1");
    unsafe {
        std::env::remove_var("CONFIG_FILE");
    }
}
