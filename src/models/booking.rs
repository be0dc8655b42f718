use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::Ticket;

/// Бронь: копия билета на момент бронирования, а не ссылка на него.
/// Последующие правки билета на старые брони не влияют.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub ticket: Ticket,
    pub user: String,
    /// ISO-8601, UTC с миллисекундами: `2024-05-01T10:00:00.000Z`.
    #[serde(rename = "bookingDate")]
    pub booking_date: String,
}

impl Booking {
    /// Новая (несохранённая) бронь с текущим временем.
    pub fn new(ticket: &Ticket, user: impl Into<String>) -> Self {
        Self::at(ticket, user, Utc::now())
    }

    pub fn at(ticket: &Ticket, user: impl Into<String>, when: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            ticket: ticket.clone(),
            user: user.into(),
            booking_date: when.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
