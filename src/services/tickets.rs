use tracing::debug;

use super::{build_http_client, read_json, read_text};
use crate::{config::ApiConfig, error::ApiError, models::Ticket};

/// Клиент ресурса билетов.
#[derive(Debug, Clone)]
pub struct TicketService {
    base_url: String,
    http_client: reqwest::Client,
}

impl TicketService {
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            config.tickets_url.clone(),
            build_http_client(config.timeout())?,
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_all_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        debug!("GET {}", self.base_url);
        let response = self.http_client.get(&self.base_url).send().await?;
        read_json(response).await
    }

    pub async fn get_ticket(&self, id: i64) -> Result<Ticket, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("GET {}", url);
        let response = self.http_client.get(&url).send().await?;
        read_json(response).await
    }

    pub async fn add_ticket(&self, ticket: &Ticket) -> Result<Ticket, ApiError> {
        debug!("POST {}: event={}, seat={}", self.base_url, ticket.event, ticket.seat);
        let response = self
            .http_client
            .post(&self.base_url)
            .json(ticket)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn update_ticket(&self, id: i64, ticket: &Ticket) -> Result<Ticket, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("PUT {}", url);
        let response = self.http_client.put(&url).json(ticket).send().await?;
        read_json(response).await
    }

    /// Сервер отвечает простой строкой-подтверждением, а не JSON.
    pub async fn delete_ticket(&self, id: i64) -> Result<String, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("DELETE {}", url);
        let response = self.http_client.delete(&url).send().await?;
        read_text(response).await
    }
}
