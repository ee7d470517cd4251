// Configuration for the locx CLI - locx.json

use anyhow::{bail, Context, Result};
use locx_expander::FunctionRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const CONFIG_FILE: &str = "locx.json";

/// Function table for the command line expander
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Placeholder name -> replacement template, `{}` stands for the argument
    #[serde(default)]
    pub functions: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a locx.json file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        log::debug!(
            "loaded {} function(s) from {}",
            config.functions.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load configuration from directory (searches for locx.json upwards)
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut current = Some(dir.as_ref());
        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::from_file(config_path);
            }
            current = dir.parent();
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Starter configuration with the usual location functions
    pub fn example() -> Self {
        let functions = [
            ("location", "bazel-out/bin/{}"),
            ("locations", "bazel-out/bin/{}"),
            ("execpath", "bazel-out/bin/{}"),
            ("rootpath", "{}"),
        ]
        .into_iter()
        .map(|(name, template)| (name.to_string(), template.to_string()))
        .collect();

        Self { functions }
    }

    /// Apply a `NAME=TEMPLATE` definition, replacing any existing entry
    pub fn define(&mut self, definition: &str) -> Result<()> {
        let Some((name, template)) = definition.split_once('=') else {
            bail!("Invalid definition `{}`, expected NAME=TEMPLATE", definition);
        };
        let name = name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) || name.contains(')') {
            bail!("Invalid function name `{}`", name);
        }
        self.functions.insert(name.to_string(), template.to_string());
        Ok(())
    }

    /// Build the expansion function table
    pub fn registry(&self) -> FunctionRegistry {
        let mut builder = FunctionRegistry::builder();
        for (name, template) in &self.functions {
            let template = template.clone();
            builder.insert(name.clone(), move |arg| template.replace("{}", arg));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.functions.is_empty());
        assert!(config.registry().is_empty());
    }

    #[test]
    fn test_template_substitution() {
        let mut config = Config::default();
        config.define("location=one({})").unwrap();
        config.define("both={}+{}").unwrap();
        config.define("fixed=constant").unwrap();

        let registry = config.registry();
        assert_eq!(registry.call("location", "a"), Some("one(a)".to_string()));
        assert_eq!(registry.call("both", "x"), Some("x+x".to_string()));
        assert_eq!(registry.call("fixed", "x"), Some("constant".to_string()));
    }

    #[test]
    fn test_define_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.define("no-equals").is_err());
        assert!(config.define("=x").is_err());
        assert!(config.define("two words=x").is_err());
        assert!(config.define("a)b=x").is_err());
        assert!(config.functions.is_empty());
    }

    #[test]
    fn test_define_overrides_file_entry() {
        let mut config = Config::example();
        config.define("rootpath=external/{}").unwrap();
        assert_eq!(config.functions["rootpath"], "external/{}");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pkg/sub");
        std::fs::create_dir_all(&nested).unwrap();

        Config::example().save(dir.path().join(CONFIG_FILE)).unwrap();

        let loaded = Config::from_dir(&nested).unwrap();
        assert_eq!(loaded, Config::example());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_missing_functions_key_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.functions.is_empty());
    }
}
