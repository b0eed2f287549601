//! Toy Catalog Helpers
//!
//! Small pure helpers for the catalog handlers, currently the fixed sample
//! set used by the seed routine.

use bson::{doc, Document};

/// The fixed sample catalog inserted by `GET /api/seed` when the `toy`
/// collection is empty.
pub fn sample_toys() -> Vec<Document> {
    vec![
        doc! {
            "name": "Cuddly Bear",
            "description": "Super soft plush bear.",
            "price": 19.99,
            "category": "Plush",
            "image": "https://images.unsplash.com/photo-1612198185720-2d3a9c5a4f8e",
            "rating": 4.7,
            "in_stock": true,
        },
        doc! {
            "name": "Rainbow Stacking Rings",
            "description": "Classic stacking rings for toddlers.",
            "price": 14.99,
            "category": "Educational",
            "image": "https://images.unsplash.com/photo-1582582621959-48f5f1d7fca1",
            "rating": 4.6,
            "in_stock": true,
        },
        doc! {
            "name": "STEM Robot Kit",
            "description": "Build and program your own robot.",
            "price": 49.99,
            "category": "STEM",
            "image": "https://images.unsplash.com/photo-1581090464777-f3220bbe1b8b",
            "rating": 4.8,
            "in_stock": true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Toy;

    #[test]
    fn sample_catalog_has_three_toys() {
        assert_eq!(sample_toys().len(), 3);
    }

    #[test]
    fn sample_documents_deserialize_into_valid_toys() {
        for document in sample_toys() {
            let toy: Toy = bson::de::deserialize_from_document(document).unwrap();
            assert!(!toy.name.is_empty());
            assert!(toy.price >= 0.0);
            let rating = toy.rating.unwrap();
            assert!((0.0..=5.0).contains(&rating));
            assert!(toy.in_stock);
        }
    }
}
