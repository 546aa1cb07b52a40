use pulse_config::PulseConfigLoader;
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_twitter_section_from_file() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r##"
version: "0.1"
twitter:
  bearer_token: "${TWITTER_BEARER_TOKEN}"
  query: "#DeSci OR Hetu Protocol"
  max_results: 10
"##;
    let p = write_yaml(&tmp, "pulse.yaml", file_yaml);

    let config = temp_env::with_var("TWITTER_BEARER_TOKEN", Some("file-token"), || {
        PulseConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load pulse config")
    });

    assert_eq!(config.twitter.bearer_token, "file-token");
    assert_eq!(config.twitter.query, "#DeSci OR Hetu Protocol");
    assert_eq!(config.twitter.max_results, 10);
}

#[test]
#[serial]
fn env_only_deployment_needs_no_file() {
    let config = temp_env::with_var("PULSE__TWITTER__BEARER_TOKEN", Some("env-token"), || {
        PulseConfigLoader::new().load().expect("load from env")
    });

    assert_eq!(config.twitter.bearer_token, "env-token");
    assert_eq!(config.twitter.query, pulse_config::DEFAULT_QUERY);
    assert_eq!(config.twitter.max_results, 10);
}
