//! Order Domain Models
//!
//! Orders embed their line items; there is no standalone item collection.
//! Item name and price are denormalized copies taken at purchase time, and
//! totals are caller-supplied; the backend stores them as-is without
//! recomputation.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single line item embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct OrderItem {
    /// Referenced toy `_id` as string; not enforced as a foreign key
    #[validate(length(min = 1, message = "toy_id must not be empty"))]
    pub toy_id: String,

    /// Toy name at purchase time
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// Unit price at purchase time
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    /// Quantity ordered
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,

    pub image: Option<String>,
}

/// An order as persisted in the `order` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
    pub notes: Option<String>,
}

/// Payload for submitting an order.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrder {
    #[validate(length(min = 1, message = "customer_name must not be empty"))]
    pub customer_name: String,

    #[validate(email(message = "customer_email must be a valid email address"))]
    pub customer_email: String,

    #[validate(length(min = 1, message = "customer_address must not be empty"))]
    pub customer_address: String,

    /// Ordered items; must be non-empty, which the handler checks before
    /// schema validation runs.
    #[validate(nested)]
    pub items: Vec<OrderItem>,

    #[validate(range(min = 0.0, message = "subtotal must not be negative"))]
    pub subtotal: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "shipping must not be negative"))]
    pub shipping: f64,

    #[validate(range(min = 0.0, message = "total must not be negative"))]
    pub total: f64,

    pub notes: Option<String>,
}

impl From<CreateOrder> for Order {
    /// Explicit field-by-field mapping; the id is left for the store.
    fn from(payload: CreateOrder) -> Self {
        Self {
            id: None,
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            customer_address: payload.customer_address,
            items: payload.items,
            subtotal: payload.subtotal,
            shipping: payload.shipping,
            total: payload.total,
            notes: payload.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> CreateOrder {
        serde_json::from_value(json!({
            "customer_name": "Ada",
            "customer_email": "ada@example.com",
            "customer_address": "1 Engine Row",
            "items": [
                { "toy_id": "64f0a0a0a0a0a0a0a0a0a0a0", "name": "Cuddly Bear", "price": 19.99, "quantity": 2 }
            ],
            "subtotal": 39.98,
            "total": 39.98
        }))
        .unwrap()
    }

    #[test]
    fn valid_order_passes_and_shipping_defaults_to_zero() {
        let payload = valid_payload();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.shipping, 0.0);
    }

    #[test]
    fn non_email_address_is_rejected() {
        let mut payload = valid_payload();
        payload.customer_email = "abc".into();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("customer_email"));
    }

    #[test]
    fn embedded_item_constraints_are_enforced() {
        let mut payload = valid_payload();
        payload.items[0].quantity = 0;
        payload.items[0].price = -5.0;

        assert!(payload.validate().is_err());
    }

    #[test]
    fn every_offending_field_is_reported() {
        let payload: CreateOrder = serde_json::from_value(json!({
            "customer_name": "",
            "customer_email": "abc",
            "customer_address": "",
            "items": [
                { "toy_id": "t", "name": "Bear", "price": 1.0, "quantity": 1 }
            ],
            "subtotal": -1.0,
            "total": 0.0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("customer_name"));
        assert!(fields.contains_key("customer_email"));
        assert!(fields.contains_key("customer_address"));
        assert!(fields.contains_key("subtotal"));
    }

    #[test]
    fn mapping_to_entity_preserves_caller_supplied_totals() {
        // Totals are trusted as-is: no check that total == subtotal + shipping.
        let mut payload = valid_payload();
        payload.total = 1.0;

        let order = Order::from(payload);
        assert!(order.id.is_none());
        assert_eq!(order.subtotal, 39.98);
        assert_eq!(order.total, 1.0);
        assert_eq!(order.items.len(), 1);
    }
}
