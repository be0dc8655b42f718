use tracing::debug;

use super::{build_http_client, read_json};
use crate::{config::ApiConfig, error::ApiError, models::Booking};

/// Клиент ресурса бронирований.
#[derive(Debug, Clone)]
pub struct BookingService {
    base_url: String,
    http_client: reqwest::Client,
}

impl BookingService {
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            config.bookings_url.clone(),
            build_http_client(config.timeout())?,
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Дубликат брони возвращается как `ApiError::Conflict`.
    pub async fn create_booking(&self, booking: &Booking) -> Result<Booking, ApiError> {
        debug!(
            "POST {}: user={}, ticket_id={}",
            self.base_url, booking.user, booking.ticket.id
        );
        let response = self
            .http_client
            .post(&self.base_url)
            .json(booking)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn get_all_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        debug!("GET {}", self.base_url);
        let response = self.http_client.get(&self.base_url).send().await?;
        read_json(response).await
    }

    pub async fn get_booking_by_id(&self, id: i64) -> Result<Booking, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("GET {}", url);
        let response = self.http_client.get(&url).send().await?;
        read_json(response).await
    }

    pub async fn get_bookings_by_user(&self, user: &str) -> Result<Vec<Booking>, ApiError> {
        if user.is_empty() {
            return Err(ApiError::InvalidUrl(format!("{}/user/ (empty user)", self.base_url)));
        }
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?;
        // push() экранирует имя пользователя как один сегмент пути
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push("user")
            .push(user);
        debug!("GET {}", url);
        let response = self.http_client.get(url).send().await?;
        read_json(response).await
    }
}
