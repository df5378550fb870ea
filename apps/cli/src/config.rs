//! Layered settings: defaults, then environment, then flags.

use figment::providers::{Env, Serialized};
use figment::value::{Uncased, UncasedStr};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tessera_log::Format;

/// Prefix of every environment variable read into [`Settings`].
pub const ENV_PREFIX: &str = "TESSERA_";

/// Emissions printed by `watch` when neither env nor flags say otherwise.
pub const DEFAULT_TAKE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emissions printed by `watch` before unsubscribing
    pub take: usize,
    /// Logger configuration
    pub log: tessera_log::Config,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            take: DEFAULT_TAKE,
            log: tessera_log::Config {
                level: "warn".to_string(),
                ..tessera_log::Config::default()
            },
        }
    }
}

/// Values given on the command line. `None` leaves lower layers in place.
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<usize>,
    pub log: LogOverrides,
}

#[derive(Debug, Default, Serialize)]
pub struct LogOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// Map a prefix-stripped variable name onto its settings path.
///
/// `TESSERA_LOG` is the level filter itself; the other `LOG_*` variables
/// address fields of the logger configuration.
fn env_key(key: &UncasedStr) -> Uncased<'_> {
    let key = key.as_str().to_ascii_lowercase();
    let path = match key.as_str() {
        "log" => "log.level".to_string(),
        "log_format" => "log.format".to_string(),
        _ => match key.strip_prefix("log_") {
            Some(field) => format!("log.display.{field}"),
            None => key,
        },
    };
    Uncased::from(path)
}

pub fn figment(overrides: &Overrides) -> Figment {
    Figment::from(Serialized::defaults(Settings::default()))
        .merge(Env::raw().only(&["RUST_LOG"]).map(|_| "log.level".into()))
        .merge(Env::prefixed(ENV_PREFIX).map(env_key))
        .merge(Serialized::defaults(overrides))
}

/// Resolve the effective settings.
pub fn load(overrides: &Overrides) -> Result<Settings, figment::Error> {
    figment(overrides).extract()
}
