use std::collections::HashMap;
use std::path::PathBuf;

use rebate_survey::config::Config;

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.host.to_string(), "0.0.0.0");
    assert_eq!(config.data_path, PathBuf::from("data/responses.json"));
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert_eq!(config.max_body_size, 65_536);
    assert_eq!(config.log_level, "info");
}

#[test]
fn port_is_read_from_env() {
    let config = config_from(&[("PORT", "8080")]).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
    assert!(err.starts_with("Invalid PORT"), "{err}");

    let err = config_from(&[("PORT", "70000")]).unwrap_err();
    assert!(err.starts_with("Invalid PORT"), "{err}");
}

#[test]
fn invalid_host_is_rejected() {
    let err = config_from(&[("SURVEY_HOST", "localhost:80")]).unwrap_err();
    assert!(err.starts_with("Invalid SURVEY_HOST"), "{err}");
}

#[test]
fn invalid_body_size_is_rejected() {
    let err = config_from(&[("SURVEY_MAX_BODY_SIZE", "-1")]).unwrap_err();
    assert!(err.starts_with("Invalid SURVEY_MAX_BODY_SIZE"), "{err}");
}

#[test]
fn data_path_must_name_a_file() {
    let err = config_from(&[("SURVEY_DATA_PATH", "/")]).unwrap_err();
    assert!(err.starts_with("Invalid SURVEY_DATA_PATH"), "{err}");
}
