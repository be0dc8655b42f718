pub mod ticket;
pub mod booking;

pub use ticket::Ticket;
pub use booking::Booking;
