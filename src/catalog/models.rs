//! Toy Catalog Domain Models

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

// =============================================================================
// Toy Domain Models
// =============================================================================

/// Returns the default rating (4.5) for new toys
fn default_rating() -> Option<f64> {
    Some(4.5)
}

/// Returns the default stock flag (true) for new toys
fn default_in_stock() -> bool {
    true
}

/// Serializes the store-generated id as its hex string for transport.
fn oid_as_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.serialize_str(&id.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// A toy product as persisted in the `toy` collection.
///
/// The id is store-generated: absent on insert, present (and stringified on
/// the wire) when read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Toy {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "oid_as_hex"
    )]
    pub id: Option<ObjectId>,

    /// Toy name
    pub name: String,

    /// Toy description
    #[serde(default)]
    pub description: Option<String>,

    /// Price in USD
    pub price: f64,

    /// Category, e.g., Plush, Puzzles, STEM
    pub category: String,

    /// Image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Average rating
    #[serde(default = "default_rating")]
    pub rating: Option<f64>,

    /// Availability
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Payload for creating a toy.
///
/// Constraints mirror the persisted entity; violations are reported for
/// every offending field at once.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateToy {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,

    pub image: Option<String>,

    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl From<CreateToy> for Toy {
    /// Explicit field-by-field mapping from the validated request to the
    /// persisted entity; the id is left for the store to generate.
    fn from(payload: CreateToy) -> Self {
        Self {
            id: None,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            image: payload.image,
            rating: payload.rating,
            in_stock: payload.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> CreateToy {
        serde_json::from_value(json!({
            "name": "Cuddly Bear",
            "price": 19.99,
            "category": "Plush"
        }))
        .unwrap()
    }

    #[test]
    fn minimal_payload_passes_and_defaults_apply() {
        let payload = valid_payload();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.rating, Some(4.5));
        assert!(payload.in_stock);
    }

    #[test]
    fn empty_name_and_negative_price_are_both_reported() {
        let payload: CreateToy = serde_json::from_value(json!({
            "name": "",
            "price": -1.0,
            "category": "Plush"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let payload: CreateToy = serde_json::from_value(json!({
            "name": "STEM Robot Kit",
            "price": 49.99,
            "category": "STEM",
            "rating": 6.0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn mapping_to_entity_leaves_id_for_the_store() {
        let toy = Toy::from(valid_payload());
        assert!(toy.id.is_none());
        assert_eq!(toy.name, "Cuddly Bear");
        assert_eq!(toy.category, "Plush");
    }

    #[test]
    fn id_serializes_as_hex_string() {
        let mut toy = Toy::from(valid_payload());
        toy.id = Some(ObjectId::parse_str("64f0a0a0a0a0a0a0a0a0a0a0").unwrap());

        let value = serde_json::to_value(&toy).unwrap();
        assert_eq!(value["_id"], "64f0a0a0a0a0a0a0a0a0a0a0");
    }

    #[test]
    fn absent_id_is_omitted_from_serialization() {
        let toy = Toy::from(valid_payload());
        let value = serde_json::to_value(&toy).unwrap();
        assert!(value.get("_id").is_none());
    }
}
