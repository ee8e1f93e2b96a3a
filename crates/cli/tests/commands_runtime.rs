use std::env;
use std::sync::{Mutex, OnceLock};

use caliope_cli::commands::{catalog, config, doctor};
use serde_json::Value;

#[test]
fn catalog_summarizes_the_seed_data() {
    with_env(&[], || {
        let result = catalog::run();
        assert_eq!(result.exit_code, 0, "expected catalog summary success");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "catalog");
        assert_eq!(payload["status"], "ok");

        let message = payload["message"].as_str().unwrap_or("");
        assert!(message.contains("8 services"));
        assert!(message.contains("8 products"));
        assert!(message.contains("3 membership plans"));
        assert!(message.contains("  - Plus: COP 89000/mes [popular]"));
    });
}

#[test]
fn doctor_passes_with_a_clean_environment() {
    with_env(&[], || {
        let output = doctor::run(true);
        let payload = parse_payload(&output);

        assert_eq!(payload["overall_status"], "pass");
        let checks = payload["checks"].as_array().expect("checks array");
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|check| check["status"] == "pass"));
    });
}

#[test]
fn doctor_human_output_lists_each_check() {
    with_env(&[], || {
        let output = doctor::run(false);

        assert!(output.starts_with("doctor: all readiness checks passed"));
        assert!(output.contains("- [ok] config_validation:"));
        assert!(output.contains("- [ok] loyalty_tiers:"));
        assert!(output.contains("- [ok] reward_levels:"));
        assert!(output.contains("- [ok] catalog_integrity:"));
    });
}

#[test]
fn doctor_fails_when_config_is_invalid() {
    with_env(&[("CALIOPE_LOGGING_LEVEL", "shouting")], || {
        let output = doctor::run(true);
        let payload = parse_payload(&output);

        assert_eq!(payload["overall_status"], "fail");
        let checks = payload["checks"].as_array().expect("checks array");
        let config_check = checks
            .iter()
            .find(|check| check["name"] == "config_validation")
            .expect("config_validation check");
        assert_eq!(config_check["status"], "fail");
    });
}

#[test]
fn config_reports_defaults_without_overrides() {
    with_env(&[], || {
        let output = config::run();

        assert!(output.starts_with("effective config"));
        assert!(output.contains("- server.port = 8080 (source: default)"));
        assert!(output.contains("- concierge.response_delay_ms = 750 (source: default)"));
        assert!(output.contains("- logging.level = info (source: default)"));
    });
}

#[test]
fn config_attributes_environment_overrides() {
    with_env(&[("CALIOPE_SERVER_PORT", "9090")], || {
        let output = config::run();

        assert!(output.contains("- server.port = 9090 (source: env (CALIOPE_SERVER_PORT))"));
        assert!(output.contains("- server.bind_address = 127.0.0.1 (source: default)"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "CALIOPE_SERVER_BIND_ADDRESS",
        "CALIOPE_SERVER_PORT",
        "CALIOPE_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "CALIOPE_CONCIERGE_RESPONSE_DELAY_MS",
        "CALIOPE_LOGGING_LEVEL",
        "CALIOPE_LOGGING_FORMAT",
        "CALIOPE_LOG_LEVEL",
        "CALIOPE_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
