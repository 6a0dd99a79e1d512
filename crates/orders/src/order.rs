use chrono::{DateTime, Utc};

use tindahan_cart::CartSnapshot;
use tindahan_core::{Entity, Money, OrderNumber};

/// A placed order. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    number: OrderNumber,
    snapshot: CartSnapshot,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        number: OrderNumber,
        snapshot: CartSnapshot,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            snapshot,
            placed_at,
        }
    }

    pub fn number(&self) -> OrderNumber {
        self.number
    }

    pub fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    pub fn total(&self) -> Money {
        self.snapshot.total()
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Number, total and the compact line listing.
    pub fn render(&self) -> String {
        format!(
            "Order ID: {}\nTotal Amount: {}\nOrder Details:\n{}",
            self.number,
            self.total().labelled(),
            self.snapshot.render(true)
        )
    }
}

impl Entity for Order {
    type Id = OrderNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}
