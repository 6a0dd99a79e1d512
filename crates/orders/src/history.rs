use chrono::{DateTime, Utc};

use tindahan_cart::Cart;
use tindahan_core::{DomainError, DomainResult, OrderNumber};

use crate::order::Order;

const NO_ORDERS: &str = "No previous orders available.";

/// Append-only, chronological list of the session's orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHistory {
    orders: Vec<Order>,
    next_number: OrderNumber,
}

impl Default for OrderHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderHistory {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_number: OrderNumber::FIRST,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number the next successful checkout will receive.
    pub fn next_number(&self) -> OrderNumber {
        self.next_number
    }

    /// Check out `cart`: refuse when empty, otherwise freeze it into a new
    /// order, append it, and leave `cart` empty under the same id.
    pub fn place_order(
        &mut self,
        cart: &mut Cart,
        placed_at: DateTime<Utc>,
    ) -> DomainResult<&Order> {
        if cart.is_empty() {
            tracing::info!("checkout refused, cart is empty");
            return Err(DomainError::validation("cannot place order from an empty cart"));
        }

        let number = self.next_number;
        let order = Order::new(number, cart.checkout(), placed_at);
        self.next_number = number.next();

        tracing::info!(
            order_number = %number,
            total = %order.total(),
            lines = order.snapshot().lines().len(),
            %placed_at,
            "order placed"
        );

        self.orders.push(order);
        self.orders
            .last()
            .ok_or_else(|| DomainError::invariant("order history lost the appended order"))
    }

    /// Every order, oldest first.
    pub fn render_all(&self) -> String {
        if self.orders.is_empty() {
            return format!("{NO_ORDERS}\n");
        }

        let mut out = String::from("\n*** Order History ***\n");
        for order in &self.orders {
            out.push_str(&order.render());
            out.push('\n');
        }
        out
    }
}
