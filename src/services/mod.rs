//! Клиенты REST-ресурсов бэкенда.
//!
//! Каждый сервис оборачивает один ресурс и возвращает `ApiError` на любой сбой.
//! Общие для обоих помощники - сборка HTTP-клиента и разбор ответа.

pub mod bookings;
pub mod tickets;

pub use bookings::BookingService;
pub use tickets::TicketService;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;

/// Создаёт HTTP-клиент; таймаут задаётся только если он есть в конфиге.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Проверяет статус ответа. 409 выделяется в отдельный вариант.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::CONFLICT {
        Err(ApiError::Conflict { body })
    } else {
        Err(ApiError::Status { status, body })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = ensure_success(response).await?.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    Ok(ensure_success(response).await?.text().await?)
}
