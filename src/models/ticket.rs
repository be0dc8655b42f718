use serde::{Deserialize, Serialize};

/// Билет: место на событии с ценой. `id == 0` - ещё не сохранён на сервере.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub event: String,
    pub seat: String,
    pub price: f64,
}

impl Ticket {
    /// Черновик нового билета для формы добавления.
    pub fn draft(event: impl Into<String>, seat: impl Into<String>, price: f64) -> Self {
        Self {
            id: 0,
            event: event.into(),
            seat: seat.into(),
            price,
        }
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Self::draft("", "", 0.0)
    }
}
