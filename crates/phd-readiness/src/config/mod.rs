use std::env;
use std::fmt;

use crate::assessment::WeightScheme;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub assessment: AssessmentConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let scheme_raw = env::var("READINESS_SCHEME").unwrap_or_else(|_| "default".to_string());
        let scheme = WeightScheme::parse(&scheme_raw)
            .ok_or(ConfigError::InvalidScheme { value: scheme_raw })?;

        let output_raw = env::var("READINESS_OUTPUT").unwrap_or_else(|_| "text".to_string());
        let output = OutputFormat::parse(&output_raw)
            .ok_or(ConfigError::InvalidOutputFormat { value: output_raw })?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            assessment: AssessmentConfig { scheme, output },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Defaults applied when the command line does not override them.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    pub scheme: WeightScheme,
    pub output: OutputFormat,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidScheme { value: String },
    InvalidOutputFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScheme { value } => write!(
                f,
                "READINESS_SCHEME must be one of default, engineering, humanities (found '{value}')"
            ),
            ConfigError::InvalidOutputFormat { value } => {
                write!(f, "READINESS_OUTPUT must be text or json (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
