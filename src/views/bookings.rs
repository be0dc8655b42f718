use tracing::{error, info};

use crate::{error::Notice, models::Booking, services::BookingService};

pub const LOAD_FAILED: &str = "Failed to load bookings. Please try again.";

/// Брони, у которых `user` содержит `needle` (с учётом регистра).
/// Пустой фильтр пропускает всё.
pub fn filter_by_user(bookings: &[Booking], needle: &str) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| needle.is_empty() || b.user.contains(needle))
        .cloned()
        .collect()
}

/// Просмотр броней с фильтром по пользователю.
#[derive(Debug)]
pub struct BookingsView {
    service: BookingService,
    bookings: Vec<Booking>,
    filtered: Vec<Booking>,
    filter_user: String,
    notices: Vec<Notice>,
}

impl BookingsView {
    pub fn new(service: BookingService) -> Self {
        Self {
            service,
            bookings: Vec::new(),
            filtered: Vec::new(),
            filter_user: String::new(),
            notices: Vec::new(),
        }
    }

    /// Полный список, как его вернул сервер.
    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    /// Рабочий (отфильтрованный) список.
    pub fn visible(&self) -> &[Booking] {
        &self.filtered
    }

    pub fn filter_user(&self) -> &str {
        &self.filter_user
    }

    pub fn set_filter_user(&mut self, text: impl Into<String>) {
        self.filter_user = text.into();
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub async fn load(&mut self) {
        match self.service.get_all_bookings().await {
            Ok(bookings) => {
                info!("Loaded {} bookings", bookings.len());
                self.bookings = bookings;
                self.filter();
            }
            Err(e) => {
                error!("Error loading bookings: {}", e);
                self.notices.push(Notice::error(LOAD_FAILED));
            }
        }
    }

    /// Пересчитывает рабочий список всегда из полного.
    pub fn filter(&mut self) {
        self.filtered = filter_by_user(&self.bookings, &self.filter_user);
    }

    pub fn clear_filters(&mut self) {
        self.filter_user.clear();
        self.filtered = self.bookings.clone();
    }

    #[cfg(test)]
    fn with_bookings(bookings: Vec<Booking>) -> Self {
        let service = BookingService::new("http://127.0.0.1:9/api/bookings", reqwest::Client::new());
        let mut view = Self::new(service);
        view.bookings = bookings.clone();
        view.filtered = bookings;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ticket;
    use proptest::prelude::*;

    fn booking(id: i64, user: &str) -> Booking {
        let ticket = Ticket { id, event: "Concert".into(), seat: format!("A{id}"), price: 50.0 };
        Booking { id, ticket, user: user.into(), booking_date: "2024-05-01T10:00:00.000Z".into() }
    }

    #[test]
    fn filter_is_case_sensitive_substring() {
        let all = vec![booking(1, "alice"), booking(2, "Alice"), booking(3, "malice")];
        let hits: Vec<i64> = filter_by_user(&all, "alice").iter().map(|b| b.id).collect();
        assert_eq!(hits, vec![1, 3]);
    }

    #[test]
    fn narrowing_then_widening_uses_master_list() {
        let mut view = BookingsView::with_bookings(vec![booking(1, "alice"), booking(2, "bob")]);
        view.set_filter_user("alice");
        view.filter();
        assert_eq!(view.visible().len(), 1);

        view.set_filter_user("b");
        view.filter();
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].user, "bob");
    }

    #[test]
    fn clear_restores_everything() {
        let mut view = BookingsView::with_bookings(vec![booking(1, "alice"), booking(2, "bob")]);
        view.set_filter_user("zed");
        view.filter();
        assert!(view.visible().is_empty());

        view.clear_filters();
        assert_eq!(view.filter_user(), "");
        assert_eq!(view.visible(), view.all());
    }

    fn arb_bookings() -> impl Strategy<Value = Vec<Booking>> {
        prop::collection::vec("[a-cA-C]{0,6}", 0..12).prop_map(|users| {
            users
                .iter()
                .enumerate()
                .map(|(i, u)| booking(i as i64 + 1, u))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn filter_returns_exactly_the_matching_subset(all in arb_bookings(), needle in "[a-cA-C]{0,3}") {
            let result = filter_by_user(&all, &needle);
            let expected: Vec<Booking> = all.iter().filter(|b| b.user.contains(needle.as_str())).cloned().collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn empty_filter_keeps_master_list(all in arb_bookings()) {
            prop_assert_eq!(filter_by_user(&all, ""), all);
        }

        #[test]
        fn repeated_filter_is_idempotent(all in arb_bookings(), needle in "[a-cA-C]{0,3}") {
            let mut view = BookingsView::with_bookings(all);
            view.set_filter_user(needle);
            view.filter();
            let once = view.visible().to_vec();
            view.filter();
            prop_assert_eq!(view.visible(), once.as_slice());
        }
    }
}
