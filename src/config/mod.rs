use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::ConfigError;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Адреса REST-ресурсов бэкенда
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub tickets_url: String,
    pub bookings_url: String,
    /// Без значения запросы не ограничены по времени.
    pub timeout_seconds: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

pub const DEFAULT_TICKETS_URL: &str = "http://localhost:8585/api/tickets";
pub const DEFAULT_BOOKINGS_URL: &str = "http://localhost:8585/tickets/api/bookings";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "ticket_desk=info".to_string()),
            },
            api: ApiConfig {
                tickets_url: base_url("TICKETS_API_URL", DEFAULT_TICKETS_URL),
                bookings_url: base_url("BOOKINGS_API_URL", DEFAULT_BOOKINGS_URL),
                timeout_seconds: match env::var("HTTP_TIMEOUT_SECONDS") {
                    Ok(raw) if !raw.trim().is_empty() => Some(parse_var("HTTP_TIMEOUT_SECONDS", &raw)?),
                    _ => None,
                },
            },
        })
    }
}

// Хвостовой слэш убираем, чтобы `{base}/{id}` не давал двойной слэш
fn base_url(key: &str, default: &str) -> String {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_rejects_garbage() {
        let err = parse_var::<u64>("HTTP_TIMEOUT_SECONDS", "soon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "HTTP_TIMEOUT_SECONDS has an invalid value: soon"
        );
    }

    #[test]
    fn parse_var_trims_whitespace() {
        assert_eq!(parse_var::<u64>("HTTP_TIMEOUT_SECONDS", " 15 ").unwrap(), 15);
    }

    #[test]
    fn timeout_is_optional() {
        let api = ApiConfig {
            tickets_url: DEFAULT_TICKETS_URL.to_string(),
            bookings_url: DEFAULT_BOOKINGS_URL.to_string(),
            timeout_seconds: None,
        };
        assert!(api.timeout().is_none());

        let api = ApiConfig { timeout_seconds: Some(3), ..api };
        assert_eq!(api.timeout(), Some(Duration::from_secs(3)));
    }
}
