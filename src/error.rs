//! Ошибки клиента и уведомления для пользователя.
//!
//! `ApiError` несёт технические подробности (для логов), а `Notice` - короткий
//! текст, который видит пользователь.

use reqwest::StatusCode;
use thiserror::Error;

/// Ошибка обращения к REST-ресурсу.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера или ответ не удалось прочитать.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Сервер отклонил бронирование как дубликат (409).
    #[error("conflict: {body}")]
    Conflict { body: String },
    /// Любой другой не-2xx ответ.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Тело ответа не соответствует ожидаемой модели.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Из базового адреса не удалось собрать URL запроса.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }

    /// HTTP-статус ответа, если он был получен.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Conflict { .. } => Some(StatusCode::CONFLICT),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Сообщение пользователю после действия (аналог alert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            NoticeLevel::Info => write!(f, "{}", self.message),
            NoticeLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_reports_409() {
        let err = ApiError::Conflict { body: "dup".into() };
        assert!(err.is_conflict());
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    }

    #[test]
    fn generic_status_is_not_conflict() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        assert!(!err.is_conflict());
        assert_eq!(err.to_string(), "unexpected status 500 Internal Server Error: boom");
    }

    #[test]
    fn notice_display_marks_errors() {
        assert_eq!(Notice::info("ok").to_string(), "ok");
        assert_eq!(Notice::error("nope").to_string(), "error: nope");
        assert!(Notice::error("nope").is_error());
    }
}
