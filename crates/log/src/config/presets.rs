//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format, Writer};

impl Config {
    /// Create configuration from environment variables
    ///
    /// | Variable | Effect |
    /// |---|---|
    /// | `TESSERA_LOG`, else `RUST_LOG` | level filter |
    /// | `TESSERA_LOG_FORMAT` | `pretty`, `compact` or `json`; anything else is compact |
    /// | `TESSERA_LOG_TIME` / `_SOURCE` / `_COLORS` | `0` or `false` disables |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = level_var(&lookup) {
            config.level = level;
        }

        if let Some(format) = lookup("TESSERA_LOG_FORMAT") {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config.display.apply_vars(&lookup);
        config
    }

    /// Pick the configuration `auto_init` would install.
    ///
    /// A level in `TESSERA_LOG` or `RUST_LOG` selects [`Config::from_vars`];
    /// otherwise debug builds get [`Config::development`] and release builds
    /// [`Config::production`].
    #[must_use]
    pub fn detect(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if level_var(&lookup).is_some() {
            Self::from_vars(lookup)
        } else if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (everything, no decoration)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            writer: Writer::Test,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
        }
    }
}

fn level_var(lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("TESSERA_LOG").or_else(|| lookup("RUST_LOG"))
}

fn flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

impl DisplayConfig {
    fn apply_vars(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("TESSERA_LOG_TIME") {
            self.time = flag(&v);
        }
        if let Some(v) = lookup("TESSERA_LOG_SOURCE") {
            self.source = flag(&v);
        }
        if let Some(v) = lookup("TESSERA_LOG_COLORS") {
            self.colors = flag(&v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(Config::from_vars(vars(&[])), Config::default());
    }

    #[test]
    fn tessera_log_wins_over_rust_log() {
        let config = Config::from_vars(vars(&[("TESSERA_LOG", "trace"), ("RUST_LOG", "warn")]));
        assert_eq!(config.level, "trace");

        let config = Config::from_vars(vars(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[rstest]
    #[case("json", Format::Json)]
    #[case("pretty", Format::Pretty)]
    #[case("logfmt", Format::Compact)]
    fn reads_format(#[case] value: &str, #[case] expected: Format) {
        let config = Config::from_vars(vars(&[("TESSERA_LOG_FORMAT", value)]));
        assert_eq!(config.format, expected);
    }

    #[test]
    fn reads_display_flags() {
        let config = Config::from_vars(vars(&[
            ("TESSERA_LOG_TIME", "0"),
            ("TESSERA_LOG_SOURCE", "FALSE"),
            ("TESSERA_LOG_COLORS", "1"),
        ]));
        assert!(!config.display.time);
        assert!(!config.display.source);
        assert!(config.display.colors);
    }

    #[test]
    fn detect_uses_env_only_when_a_level_is_readable() {
        let config = Config::detect(vars(&[("RUST_LOG", "warn"), ("TESSERA_LOG_FORMAT", "json")]));
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, Format::Json);

        // Non-level variables alone do not opt into env configuration.
        let config = Config::detect(vars(&[("TESSERA_LOG_FORMAT", "json")]));
        let preset = if cfg!(debug_assertions) {
            Config::development()
        } else {
            Config::production()
        };
        assert_eq!(config, preset);
    }

    #[test]
    fn presets_differ_in_format() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
        assert!(!Config::test().display.time);
        assert_eq!(Config::test().writer, Writer::Test);
    }
}
