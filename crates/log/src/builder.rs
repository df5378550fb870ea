//! Logger builder implementation

use tracing::Subscriber;
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format, Writer};
use crate::error::{Error, Result};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful initialization
///
/// The global subscriber outlives the guard; holding it only records which
/// configuration was installed.
#[derive(Debug)]
#[must_use = "dropping the guard immediately discards the installed configuration"]
pub struct LoggerGuard {
    config: Option<Config>,
}

impl LoggerGuard {
    /// A guard for a call that did not install anything.
    pub(crate) fn noop() -> Self {
        Self { config: None }
    }

    /// The configuration this guard installed, or `None` if another
    /// subscriber was already active.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }
}

/// Apply writer and display options shared by every format, then box.
macro_rules! boxed_fmt_layer {
    ($layer:expr, $config:expr) => {{
        let display = &$config.display;
        let layer = $layer
            .with_writer(make_writer($config.writer))
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source);
        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

fn make_writer(writer: Writer) -> BoxMakeWriter {
    match writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Test => BoxMakeWriter::new(TestWriter::new),
    }
}

fn format_layer<S>(config: &Config) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match config.format {
        Format::Pretty => boxed_fmt_layer!(tracing_subscriber::fmt::layer().pretty(), config),
        Format::Compact => boxed_fmt_layer!(tracing_subscriber::fmt::layer().compact(), config),
        Format::Json => boxed_fmt_layer!(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true),
            config
        ),
    }
}

pub(crate) fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| Error::Filter {
        filter: level.to_string(),
        reason: e.to_string(),
    })
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// - [`Error::Filter`] if `level` is not a valid `EnvFilter` directive
    /// - [`Error::AlreadyInitialized`] if a global subscriber exists
    pub fn build(self) -> Result<LoggerGuard> {
        let filter = parse_filter(&self.config.level)?;

        Registry::default()
            .with(format_layer(&self.config))
            .with(filter)
            .try_init()
            .map_err(|_| Error::AlreadyInitialized)?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            config: Some(self.config),
        })
    }
}
