//! Layered configuration loading
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed with `{APP}_`, nested keys split on `__`
//! 2. Explicit config file (e.g. `--config my.toml`)
//! 3. `{app}.yaml` in the working directory
//! 4. `{app}.toml` in the working directory
//! 5. Default values

use crate::error::{Error, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Figment provider for a single file, chosen by extension
fn file_figment(path: &Path) -> Result<Figment> {
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::config("Config file must have an extension"))?;

    match extension {
        "toml" => Ok(Figment::new().merge(Toml::file(path))),
        "yaml" | "yml" => Ok(Figment::new().merge(Yaml::file(path))),
        "json" => Ok(Figment::new().merge(Json::file(path))),
        _ => Err(Error::config(format!(
            "Unsupported config file format: {}",
            extension
        ))),
    }
}

/// Load configuration for `app_name` from every layer
pub fn load_config<T>(app_name: &str, explicit: Option<&Path>) -> Result<T>
where
    T: Serialize + for<'de> Deserialize<'de> + Default,
{
    let mut figment = Figment::new()
        .merge(Serialized::defaults(T::default()))
        .merge(Toml::file(format!("{}.toml", app_name)))
        .merge(Yaml::file(format!("{}.yaml", app_name)));

    if let Some(path) = explicit {
        figment = figment.merge(file_figment(path)?);
    }

    figment
        .merge(Env::prefixed(&format!("{}_", app_name.to_uppercase())).split("__"))
        .extract()
        .map_err(|e| Error::config(format!("Failed to load configuration: {}", e)))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use figment::Jail;

    #[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
    #[serde(default)]
    struct TestConfig {
        name: String,
        color: bool,
        nested: NestedConfig,
    }

    #[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
    #[serde(default)]
    struct NestedConfig {
        level: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                color: true,
                nested: NestedConfig::default(),
            }
        }
    }

    impl Default for NestedConfig {
        fn default() -> Self {
            Self {
                level: "warn".to_string(),
            }
        }
    }

    fn to_figment_error(e: Error) -> figment::Error {
        figment::Error::from(e.to_string())
    }

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config: TestConfig = load_config("testapp", None).map_err(to_figment_error)?;
            assert_eq!(config, TestConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_layer_priority() {
        Jail::expect_with(|jail| {
            jail.create_file("testapp.toml", "name = \"from-toml\"\ncolor = false")?;
            jail.create_file("testapp.yaml", "name: from-yaml")?;
            jail.create_file("explicit.json", r#"{ "nested": { "level": "info" } }"#)?;
            jail.set_env("TESTAPP_NESTED__LEVEL", "debug");

            let config: TestConfig = load_config("testapp", Some(Path::new("explicit.json")))
                .map_err(to_figment_error)?;

            assert_eq!(config.name, "from-yaml");
            assert!(!config.color);
            assert_eq!(config.nested.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_cwd_files() {
        Jail::expect_with(|jail| {
            jail.create_file("testapp.toml", "name = \"cwd\"")?;
            jail.create_file("override.yaml", "name: explicit")?;

            let config: TestConfig = load_config("testapp", Some(Path::new("override.yaml")))
                .map_err(to_figment_error)?;
            assert_eq!(config.name, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|_jail| {
            let result: Result<TestConfig> = load_config("testapp", Some(Path::new("missing.toml")));
            assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("not found")));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("app.yml", "name: file\ncolor: false\nnested:\n  level: error\n")?;

            let config: TestConfig = load_config("testapp", Some(Path::new("app.yml")))
                .map_err(to_figment_error)?;
            assert_eq!(config.name, "file");
            assert!(!config.color);
            assert_eq!(config.nested.level, "error");
            Ok(())
        });
    }

    #[test]
    fn test_unsupported_extension() {
        Jail::expect_with(|jail| {
            jail.create_file("app.ini", "name = file")?;

            let result: Result<TestConfig> = load_config("testapp", Some(Path::new("app.ini")));
            assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("Unsupported")));
            Ok(())
        });
    }
}
