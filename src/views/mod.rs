//! Модели представлений: состояние экранов и реакции на действия пользователя.
//!
//! Каждое представление держит собственную копию данных сервера и очередь
//! уведомлений. Общего состояния между представлениями нет.

pub mod book;
pub mod bookings;
pub mod tickets;

pub use book::BookView;
pub use bookings::{filter_by_user, BookingsView};
pub use tickets::TicketsView;
