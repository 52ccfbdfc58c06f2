use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{CustomerId, LoanId};

/// audit events emitted by the underwriting engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    CustomerRegistered {
        customer_id: CustomerId,
        monthly_income: Money,
        approved_limit: Money,
    },
    EligibilityChecked {
        customer_id: CustomerId,
        credit_score: u8,
        approved: bool,
        corrected_rate: Rate,
    },
    LoanOriginated {
        loan_id: LoanId,
        customer_id: CustomerId,
        amount: Money,
        monthly_installment: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    LoanDeclined {
        customer_id: CustomerId,
        amount: Money,
        message: String,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use uuid::Uuid;

    fn registered() -> Event {
        Event::CustomerRegistered {
            customer_id: Uuid::new_v4(),
            monthly_income: Money::from_major(200_000),
            approved_limit: Money::from_major(7_200_000),
        }
    }

    #[test]
    fn test_emit_and_inspect_without_draining() {
        let mut store = EventStore::new();
        store.emit(registered());
        store.emit(registered());

        assert_eq!(store.events().len(), 2);
        // inspection leaves the buffer intact
        assert_eq!(store.events().len(), 2);
    }

    #[test]
    fn test_take_events_drains() {
        let mut store = EventStore::new();
        store.emit(registered());

        assert_eq!(store.take_events().len(), 1);
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_clear_discards_pending_events() {
        let mut store = EventStore::new();
        store.emit(registered());
        store.clear();
        assert!(store.events().is_empty());
    }
}
