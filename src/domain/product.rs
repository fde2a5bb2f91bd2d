//! The common product shape served by the `products` query.
//!
//! Fake Store records already arrive in this shape and deserialize straight
//! into [`Product`]. DummyJSON records are mapped into it by
//! [`crate::domain::sources::DummyJsonProduct::into_product`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream identifier, kept exactly as delivered.
///
/// Integers stay integers so large ids never pass through a float.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    /// For DummyJSON records this holds the stock quantity.
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fake_store_record_deserializes_as_is() {
        let raw = json!({
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.id, ProductId::Number(1));
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.category.as_deref(), Some("men's clothing"));
        assert_eq!(product.rating, Some(Rating { rate: 3.9, count: 120 }));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let product: Product =
            serde_json::from_value(json!({ "id": 1, "title": "Shirt", "price": 20 })).unwrap();
        assert_eq!(product.price, 20.0);
        assert!(product.category.is_none());
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let missing_title = serde_json::from_value::<Product>(json!({ "id": 1, "price": 20 }));
        assert!(missing_title.is_err());

        let missing_price = serde_json::from_value::<Product>(json!({ "id": 1, "title": "Shirt" }));
        assert!(missing_price.is_err());
    }

    #[test]
    fn test_string_and_large_ids_are_preserved() {
        let text: Product =
            serde_json::from_value(json!({ "id": "sku-42", "title": "Mug", "price": 8 })).unwrap();
        assert_eq!(text.id.to_string(), "sku-42");

        let big: Product = serde_json::from_value(
            json!({ "id": 9_007_199_254_740_993_i64, "title": "Mug", "price": 8 }),
        )
        .unwrap();
        assert_eq!(big.id.to_string(), "9007199254740993");
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let product = Product {
            id: 5.into(),
            title: "Mug".to_string(),
            description: None,
            category: None,
            price: 8.0,
            image: None,
            rating: Some(Rating { rate: 3.2, count: 0 }),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({ "id": 5, "title": "Mug", "price": 8.0, "rating": { "rate": 3.2, "count": 0 } })
        );
    }
}
