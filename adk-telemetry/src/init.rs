//! Telemetry initialization and configuration

use std::sync::OnceLock;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::TelemetryError;

static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Configuration for the logging subscriber
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub default_level: Option<String>,
    pub log_directives: Vec<String>,
    pub json: bool,
}

impl TelemetryConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into(), ..Default::default() }
    }

    /// Set the default log level (e.g., "debug", "info").
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = Some(level.into());
        self
    }

    /// Add a custom tracing directive (e.g., "adk_theme=debug").
    pub fn with_log_directive(mut self, directive: impl Into<String>) -> Self {
        self.log_directives.push(directive.into());
        self
    }

    /// Emit one JSON object per event instead of human readable lines.
    pub fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Supported variables:
    /// - `SERVICE_NAME`: The name of the service (default: "adk-theme")
    /// - `LOG_LEVEL`: Default log level (default: "info")
    /// - `LOG_FORMAT`: Set to "json" for JSON output
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "adk-theme".to_string()),
            default_level: lookup("LOG_LEVEL"),
            log_directives: Vec::new(),
            json: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }

    /// Build the filter: `RUST_LOG` wins, then the configured level, then "info".
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        let mut filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                let level = self.default_level.as_deref().unwrap_or("info");
                EnvFilter::try_new(level).map_err(|e| TelemetryError::InvalidDirective {
                    directive: level.to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        for directive in &self.log_directives {
            let parsed = directive.parse::<Directive>().map_err(|e| {
                TelemetryError::InvalidDirective {
                    directive: directive.clone(),
                    reason: e.to_string(),
                }
            })?;
            filter = filter.add_directive(parsed);
        }

        Ok(filter)
    }
}

/// Initialize telemetry with basic console logging
pub fn init_telemetry(service_name: &str) -> Result<(), TelemetryError> {
    init_with_config(TelemetryConfig::new(service_name))
}

/// Install the global subscriber. Only the first call installs anything;
/// later calls return the outcome of that first attempt.
pub fn init_with_config(config: TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = config.env_filter()?;
    INIT.get_or_init(|| install(&config, filter))
        .clone()
        .map_err(|reason| TelemetryError::AlreadyInstalled { reason })
}

fn install(config: &TelemetryConfig, filter: EnvFilter) -> Result<(), String> {
    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true).with_line_number(true)).try_init()
    };
    installed.map_err(|e| e.to_string())?;

    tracing::info!(
        service.name = config.service_name,
        log.level = config.default_level.as_deref().unwrap_or("env"),
        log.json = config.json,
        "Telemetry system initialized"
    );
    Ok(())
}
