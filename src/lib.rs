pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod views;

use error::ApiError;
use services::{BookingService, TicketService};
use views::{BookView, BookingsView, TicketsView};

// Shared state для всего приложения: конфиг и клиенты обоих ресурсов
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::Config,
    pub tickets: TicketService,
    pub bookings: BookingService,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Self, ApiError> {
        let tickets = TicketService::from_config(&config.api)?;
        let bookings = BookingService::from_config(&config.api)?;
        Ok(Self { config, tickets, bookings })
    }

    pub fn tickets_view(&self) -> TicketsView {
        TicketsView::new(self.tickets.clone())
    }

    pub fn book_view(&self) -> BookView {
        BookView::new(self.tickets.clone(), self.bookings.clone())
    }

    pub fn bookings_view(&self) -> BookingsView {
        BookingsView::new(self.bookings.clone())
    }
}
