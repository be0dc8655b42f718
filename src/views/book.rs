use tracing::{error, info, warn};

use crate::{
    error::Notice,
    models::{Booking, Ticket},
    services::{BookingService, TicketService},
};

pub const BOOKING_DONE: &str = "Booking done successfully!";
pub const BOOKING_EXISTS: &str = "Booking already exists for this user and ticket.";
pub const BOOKING_FAILED: &str = "Failed to book ticket. Please try again.";
pub const USER_REQUIRED: &str = "Please provide user information.";
pub const LOAD_FAILED: &str = "Failed to load tickets. Please try again.";

/// Экран бронирования: выбор билета, ввод пользователя, подтверждение.
#[derive(Debug)]
pub struct BookView {
    tickets: TicketService,
    bookings: BookingService,
    ticket_list: Vec<Ticket>,
    user: String,
    selected: Option<Ticket>,
    notices: Vec<Notice>,
}

impl BookView {
    pub fn new(tickets: TicketService, bookings: BookingService) -> Self {
        Self {
            tickets,
            bookings,
            ticket_list: Vec::new(),
            user: String::new(),
            selected: None,
            notices: Vec::new(),
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.ticket_list
    }

    pub fn selected(&self) -> Option<&Ticket> {
        self.selected.as_ref()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn set_user(&mut self, user: impl Into<String>) {
        self.user = user.into();
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub async fn load_tickets(&mut self) {
        match self.tickets.get_all_tickets().await {
            Ok(tickets) => self.ticket_list = tickets,
            Err(e) => {
                error!("Error loading tickets: {}", e);
                self.notices.push(Notice::error(LOAD_FAILED));
            }
        }
    }

    /// Открывает подтверждение брони для билета.
    pub fn select(&mut self, ticket: Ticket) {
        self.selected = Some(ticket);
    }

    /// То же, что `select`, но по id из загруженного списка.
    pub fn select_by_id(&mut self, id: i64) -> bool {
        match self.ticket_list.iter().find(|t| t.id == id) {
            Some(ticket) => {
                self.selected = Some(ticket.clone());
                true
            }
            None => false,
        }
    }

    /// Сбрасывает выбор без обращения к серверу.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.user.clear();
    }

    /// Создаёт бронь на выбранный билет. Возвращает сохранённую сервером запись.
    pub async fn confirm(&mut self) -> Option<Booking> {
        let ticket = match &self.selected {
            Some(ticket) if !self.user.is_empty() => ticket,
            _ => {
                self.notices.push(Notice::error(USER_REQUIRED));
                return None;
            }
        };

        let booking = Booking::new(ticket, self.user.clone());
        match self.bookings.create_booking(&booking).await {
            Ok(saved) => {
                info!("Booking {} created for user {}", saved.id, saved.user);
                self.notices.push(Notice::info(BOOKING_DONE));
                self.cancel();
                self.load_tickets().await;
                Some(saved)
            }
            Err(e) if e.is_conflict() => {
                warn!("Duplicate booking rejected: {}", e);
                self.notices.push(Notice::error(BOOKING_EXISTS));
                None
            }
            Err(e) => {
                error!("Error creating booking: {}", e);
                self.notices.push(Notice::error(BOOKING_FAILED));
                None
            }
        }
    }
}
