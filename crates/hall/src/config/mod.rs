use std::env;
use std::fmt;

pub const DEFAULT_ROOM_COUNT: u16 = 5;
pub const DEFAULT_ROOM_PREFIX: &str = "Room";

/// Distinguishes runtime behavior for different stages of the console.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub hall: HallConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("HALL_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let room_count = match env::var("HALL_ROOM_COUNT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidRoomCount { value: raw })?,
            Err(_) => DEFAULT_ROOM_COUNT,
        };

        let room_prefix = env::var("HALL_ROOM_PREFIX")
            .ok()
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOM_PREFIX.to_string());

        let log_level = env::var("HALL_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            hall: HallConfig {
                room_prefix,
                room_count,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Shape of the room pool a fresh hall starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallConfig {
    pub room_prefix: String,
    pub room_count: u16,
}

impl Default for HallConfig {
    fn default() -> Self {
        Self {
            room_prefix: DEFAULT_ROOM_PREFIX.to_string(),
            room_count: DEFAULT_ROOM_COUNT,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRoomCount { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRoomCount { value } => {
                write!(f, "HALL_ROOM_COUNT must be a valid u16, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
