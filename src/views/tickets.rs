use tracing::{error, info};

use crate::{error::Notice, models::Ticket, services::TicketService};

pub const TICKET_ADDED: &str = "Ticket Added Successfully!";
pub const TICKET_UPDATED: &str = "Ticket Updated Successfully!";
pub const LOAD_FAILED: &str = "Failed to load tickets. Please try again.";
pub const ADD_FAILED: &str = "Failed to add ticket. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete ticket. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update ticket. Please try again.";

/// Список билетов с формой добавления и редактированием одной записи.
#[derive(Debug)]
pub struct TicketsView {
    service: TicketService,
    tickets: Vec<Ticket>,
    new_ticket: Ticket,
    /// Черновик редактируемого билета; его `id` - единственный редактируемый id.
    editing: Option<Ticket>,
    notices: Vec<Notice>,
}

impl TicketsView {
    pub fn new(service: TicketService) -> Self {
        Self {
            service,
            tickets: Vec::new(),
            new_ticket: Ticket::default(),
            editing: None,
            notices: Vec::new(),
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn new_ticket(&self) -> &Ticket {
        &self.new_ticket
    }

    /// Поля формы добавления.
    pub fn new_ticket_mut(&mut self) -> &mut Ticket {
        &mut self.new_ticket
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|t| t.id)
    }

    pub fn draft(&self) -> Option<&Ticket> {
        self.editing.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Ticket> {
        self.editing.as_mut()
    }

    /// Забирает накопленные уведомления.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub async fn load(&mut self) {
        match self.service.get_all_tickets().await {
            Ok(tickets) => {
                info!("Loaded {} tickets", tickets.len());
                self.tickets = tickets;
            }
            Err(e) => {
                error!("Error loading tickets: {}", e);
                self.notices.push(Notice::error(LOAD_FAILED));
            }
        }
    }

    /// Отправляет форму; запись с присвоенным сервером id попадает в список ровно один раз.
    pub async fn add(&mut self) {
        let mut draft = self.new_ticket.clone();
        draft.id = 0;

        match self.service.add_ticket(&draft).await {
            Ok(ticket) => {
                info!("Ticket {} added", ticket.id);
                match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
                    Some(existing) => *existing = ticket,
                    None => self.tickets.push(ticket),
                }
                self.new_ticket = Ticket::default();
                self.notices.push(Notice::info(TICKET_ADDED));
            }
            Err(e) => {
                error!("Error adding ticket: {}", e);
                self.notices.push(Notice::error(ADD_FAILED));
            }
        }
    }

    /// Удаляет билет и перечитывает список целиком.
    pub async fn delete(&mut self, id: i64) {
        match self.service.delete_ticket(id).await {
            Ok(message) => {
                info!("Ticket {} deleted", id);
                if self.editing_id() == Some(id) {
                    self.editing = None;
                }
                // Сервер уже подтвердил удаление; перечитка может не удаться
                // (на пустой список бэкенд отвечает 404).
                self.tickets.retain(|t| t.id != id);
                self.load().await;
                self.notices.push(Notice::info(message));
            }
            Err(e) => {
                error!("Error deleting ticket {}: {}", id, e);
                self.notices.push(Notice::error(DELETE_FAILED));
            }
        }
    }

    /// Переводит билет в режим редактирования. Предыдущий черновик отбрасывается.
    /// Возвращает `false`, если билета с таким id в списке нет.
    pub fn start_editing(&mut self, id: i64) -> bool {
        match self.tickets.iter().find(|t| t.id == id) {
            Some(ticket) => {
                self.editing = Some(ticket.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Отправляет черновик и подменяет запись с тем же id ответом сервера.
    /// При ошибке черновик остаётся открытым.
    pub async fn save(&mut self) {
        let Some(draft) = self.editing.clone() else {
            return;
        };

        match self.service.update_ticket(draft.id, &draft).await {
            Ok(updated) => {
                info!("Ticket {} updated", updated.id);
                if let Some(slot) = self.tickets.iter_mut().find(|t| t.id == updated.id) {
                    *slot = updated;
                }
                self.editing = None;
                self.notices.push(Notice::info(TICKET_UPDATED));
            }
            Err(e) => {
                error!("Error updating ticket {}: {}", draft.id, e);
                self.notices.push(Notice::error(UPDATE_FAILED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(tickets: Vec<Ticket>) -> TicketsView {
        // Адрес не используется: тесты ниже не ходят в сеть.
        let service = TicketService::new("http://127.0.0.1:9/api/tickets", reqwest::Client::new());
        let mut view = TicketsView::new(service);
        view.tickets = tickets;
        view
    }

    fn ticket(id: i64, event: &str) -> Ticket {
        Ticket { id, event: event.into(), seat: "A1".into(), price: 10.0 }
    }

    #[test]
    fn only_one_ticket_is_edited_at_a_time() {
        let mut view = view_with(vec![ticket(1, "Concert"), ticket(2, "Opera")]);
        assert!(view.start_editing(1));
        assert!(view.start_editing(2));
        assert_eq!(view.editing_id(), Some(2));
    }

    #[test]
    fn editing_unknown_id_is_rejected() {
        let mut view = view_with(vec![ticket(1, "Concert")]);
        assert!(!view.start_editing(42));
        assert_eq!(view.editing_id(), None);
    }

    #[test]
    fn cancel_leaves_list_untouched() {
        let original = vec![ticket(1, "Concert"), ticket(2, "Opera")];
        let mut view = view_with(original.clone());
        view.start_editing(1);
        view.draft_mut().unwrap().event = "Changed".into();
        view.cancel_editing();
        assert_eq!(view.tickets(), original.as_slice());
        assert!(view.draft().is_none());
    }
}
