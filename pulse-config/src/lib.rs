//! Loader for Pulse configuration with YAML + environment overlays.
//!
//! Sources merge in order: optional YAML file, then `PULSE__`-prefixed
//! environment variables (`PULSE__TWITTER__BEARER_TOKEN=...`). String values
//! may reference `${VAR}` and are expanded recursively after the merge, so a
//! checked-in YAML file never has to carry the bearer token itself.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Default search expression: DeSci hashtag chatter or Hetu Protocol mentions.
pub const DEFAULT_QUERY: &str = "#DeSci OR Hetu Protocol";

/// Default page size for the recent-search call.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct PulseConfig {
    pub version: Option<String>,
    pub twitter: TwitterSection,
}

#[derive(Debug, Deserialize)]
pub struct TwitterSection {
    pub bearer_token: String,
    #[serde(default = "default_query")]
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_query() -> String {
    DEFAULT_QUERY.to_string()
}
fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct PulseConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for PulseConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseConfigLoader {
    /// Start with the `PULSE__` environment source only; files are opt-in so
    /// headless deployments can rely purely on environment variables.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("PULSE").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use pulse_config::PulseConfigLoader;
    ///
    /// let cfg = PulseConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// version: "1"
    /// twitter:
    ///   bearer_token: "example"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.version.as_deref(), Some("1"));
    /// assert_eq!(cfg.twitter.query, pulse_config::DEFAULT_QUERY);
    /// assert_eq!(cfg.twitter.max_results, 10);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly
    /// typed config, expanding `${VAR}` placeholders first.
    pub fn load(self) -> Result<PulseConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: PulseConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("FOO", Some("bar"), || {
            let mut v = json!("prefix-${FOO}-suffix");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("prefix-bar-suffix"));
        });
    }

    #[test]
    fn expands_recursively_across_env_values() {
        temp_env::with_vars(
            [
                // BAR references BAZ; FOO references BAR — two hops.
                ("BAZ", Some("qux")),
                ("BAR", Some("mid-${BAZ}")),
                ("FOO", Some("start-${BAR}-end")),
            ],
            || {
                let mut v = json!("X=${FOO}");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("X=start-mid-qux-end"));
            },
        );
    }

    #[test]
    fn stops_on_cycles_and_leaves_value_reasonable() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("x=${A}-y");
            // Only termination matters here; the depth cap breaks the cycle.
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${DOES_NOT_EXIST}"));
    }

    #[test]
    fn token_can_come_from_the_environment() {
        temp_env::with_var("TWITTER_BEARER_TOKEN", Some("sekret"), || {
            let cfg = PulseConfigLoader::new()
                .with_yaml_str(
                    r#"
twitter:
  bearer_token: "${TWITTER_BEARER_TOKEN}"
"#,
                )
                .load()
                .unwrap();
            assert_eq!(cfg.twitter.bearer_token, "sekret");
        });
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = PulseConfigLoader::new()
            .with_yaml_str(
                r##"
twitter:
  bearer_token: "tok"
  query: "#biotech"
  max_results: 25
"##,
            )
            .load()
            .unwrap();
        assert_eq!(cfg.twitter.query, "#biotech");
        assert_eq!(cfg.twitter.max_results, 25);
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = PulseConfigLoader::new()
            .with_yaml_str("version: \"1\"\n")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("twitter"));
    }
}
