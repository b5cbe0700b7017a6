//! Order Draft
//!
//! Editable view-model behind the order editor. Holds the in-progress order
//! and derives its totals; nothing here touches the network.

use chrono::NaiveDate;

use crate::forms::PickedLine;
use crate::models::{round_cents, LineItemPayload, Order, OrderLineItem, OrderPayload, OrderStatus, Product};

/// In-progress order. At most one line per product id.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub id: String,
    pub order_number: String,
    pub date: Option<NaiveDate>,
    pub status: OrderStatus,
    /// `true` until the order exists on the backend
    pub is_new: bool,
    line_items: Vec<OrderLineItem>,
}

impl OrderDraft {
    /// Empty order with a client-generated id, not yet saved
    pub fn new(id: impl Into<String>, today: NaiveDate) -> Self {
        let id = id.into();
        Self {
            order_number: id.clone(),
            id,
            date: Some(today),
            status: OrderStatus::Pending,
            is_new: true,
            line_items: Vec::new(),
        }
    }

    /// Draft for an order the backend already has
    pub fn from_order(order: Order) -> Self {
        let date = order.day();
        let order_number = order
            .order_number
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| order.id.clone());
        Self {
            id: order.id,
            order_number,
            date,
            status: order.status,
            is_new: false,
            line_items: order.line_items,
        }
    }

    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }

    pub fn line(&self, product_id: &str) -> Option<&OrderLineItem> {
        self.line_items.iter().find(|line| line.id == product_id)
    }

    /// Add `qty` of `product`. A product already on the order has the
    /// quantity merged into its existing line.
    pub fn add_line(&mut self, product: &Product, qty: u32) {
        match self.line_items.iter_mut().find(|line| line.id == product.id) {
            Some(line) => {
                let merged = line.qty.saturating_add(qty);
                line.set_qty(merged);
            }
            None => self.line_items.push(OrderLineItem::new(product, qty)),
        }
    }

    /// Replace the quantity of an existing line. Returns `false` when the
    /// product is not on the order.
    pub fn edit_line(&mut self, product_id: &str, qty: u32) -> bool {
        match self.line_items.iter_mut().find(|line| line.id == product_id) {
            Some(line) => {
                line.set_qty(qty);
                true
            }
            None => false,
        }
    }

    /// Drop the line for `product_id` from this order only.
    pub fn remove_line(&mut self, product_id: &str) -> Option<OrderLineItem> {
        let index = self.line_items.iter().position(|line| line.id == product_id)?;
        Some(self.line_items.remove(index))
    }

    /// Apply a confirmed picker selection.
    pub fn apply_pick(&mut self, picked: &PickedLine) {
        match picked {
            PickedLine::Add { product, qty } => self.add_line(product, *qty),
            PickedLine::Edit { product_id, qty } => {
                if !self.edit_line(product_id, *qty) {
                    log::warn!("Line {} vanished before its edit was applied", product_id);
                }
            }
        }
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Σ qty, widened so large quantities cannot overflow
    pub fn products_count(&self) -> u64 {
        self.line_items.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Σ totalPrice
    pub fn final_price(&self) -> f64 {
        self.line_items.iter().map(|line| line.total_price).sum()
    }

    /// Whole-order body for the create/update call
    pub fn to_payload(&self) -> OrderPayload {
        OrderPayload {
            id: self.id.clone(),
            order_number: self.order_number.clone(),
            products_number: self.products_count(),
            final_price: round_cents(self.final_price()),
            status: self.status,
            products: self
                .line_items
                .iter()
                .map(|line| LineItemPayload {
                    id: line.id.clone(),
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    qty: line.qty,
                    total_price: line.total_price,
                    order_id: self.id.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::format_price;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price: price,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_totals_example_order() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.add_line(&product("a", 10.0), 2);
        draft.add_line(&product("b", 5.0), 3);

        assert_eq!(draft.products_count(), 5);
        assert_eq!(draft.final_price(), 35.0);
        assert_eq!(format_price(draft.final_price()), "$35.00");
    }

    #[test]
    fn test_line_total_follows_add_and_edit() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.add_line(&product("a", 2.5), 4);
        assert_eq!(draft.line("a").unwrap().total_price, 10.0);

        assert!(draft.edit_line("a", 3));
        let line = draft.line("a").unwrap();
        assert_eq!(line.qty, 3);
        assert_eq!(line.total_price, line.unit_price * 3.0);
        assert_eq!(draft.final_price(), 7.5);
    }

    #[test]
    fn test_adding_same_product_merges_quantity() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.add_line(&product("a", 4.0), 1);
        draft.add_line(&product("a", 4.0), 2);

        assert_eq!(draft.line_items().len(), 1);
        assert_eq!(draft.line("a").unwrap().qty, 3);
        assert_eq!(draft.line("a").unwrap().total_price, 12.0);
    }

    #[test]
    fn test_edit_unknown_line_is_noop() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.add_line(&product("a", 1.0), 1);
        assert!(!draft.edit_line("zzz", 9));
        assert_eq!(draft.products_count(), 1);
    }

    #[test]
    fn test_remove_only_that_line() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.add_line(&product("a", 10.0), 2);
        draft.add_line(&product("b", 5.0), 3);
        draft.add_line(&product("c", 1.0), 1);

        let removed = draft.remove_line("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<&str> = draft.line_items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(draft.products_count(), 3);
        assert_eq!(draft.final_price(), 21.0);

        assert!(draft.remove_line("b").is_none());
    }

    #[test]
    fn test_apply_pick_add_then_edit() {
        let bolt = product("a", 2.0);
        let mut draft = OrderDraft::new("o-1", today());

        draft.apply_pick(&PickedLine::Add { product: bolt, qty: 2 });
        draft.apply_pick(&PickedLine::Edit { product_id: "a".to_string(), qty: 5 });

        assert_eq!(draft.line_items().len(), 1);
        assert_eq!(draft.line("a").unwrap().qty, 5);
        assert_eq!(draft.final_price(), 10.0);
    }

    #[test]
    fn test_products_count_holds_large_quantities() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.add_line(&product("a", 1.0), 3_000_000_000);
        draft.add_line(&product("b", 1.0), 3_000_000_000);

        assert_eq!(draft.products_count(), 6_000_000_000);
        assert_eq!(draft.to_payload().products_number, 6_000_000_000);
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = OrderDraft::new("o-9", today());
        assert!(draft.is_new);
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.order_number, "o-9");
        assert_eq!(draft.date, Some(today()));
        assert_eq!(draft.products_count(), 0);
        assert_eq!(draft.final_price(), 0.0);
    }

    #[test]
    fn test_status_any_transition() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.set_status(OrderStatus::Completed);
        draft.set_status(OrderStatus::Pending);
        draft.set_status(OrderStatus::InProgress);
        assert_eq!(draft.status, OrderStatus::InProgress);
    }

    #[test]
    fn test_payload_carries_order_id_on_each_line() {
        let mut draft = OrderDraft::new("o-1", today());
        draft.add_line(&product("a", 0.1), 1);
        draft.add_line(&product("b", 0.2), 1);
        draft.set_status(OrderStatus::InProgress);

        let payload = draft.to_payload();
        assert_eq!(payload.id, "o-1");
        assert_eq!(payload.products_number, 2);
        assert_eq!(payload.final_price, 0.3);
        assert_eq!(payload.status, OrderStatus::InProgress);
        assert!(payload.products.iter().all(|p| p.order_id == "o-1"));
    }

    #[test]
    fn test_from_order_uses_order_number_or_id() {
        let order = Order {
            id: "o-7".to_string(),
            order_number: None,
            date: None,
            created_at: Some(today()),
            status: OrderStatus::Completed,
            line_items: vec![OrderLineItem::new(&product("a", 3.0), 2)],
        };
        let draft = OrderDraft::from_order(order);
        assert!(!draft.is_new);
        assert_eq!(draft.order_number, "o-7");
        assert_eq!(draft.date, Some(today()));
        assert_eq!(draft.status, OrderStatus::Completed);
        assert_eq!(draft.final_price(), 6.0);
    }
}
