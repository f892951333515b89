//! Frontend Models
//!
//! Data structures matching backend payloads, plus the pure
//! normalization and coercion helpers the views rely on.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer, Serialize};

/// Characters left bare in query values (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Authenticated user as returned by the backend.
///
/// The backend sends more fields (id, email, date_joined); only the
/// ones the UI acts on are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Access/refresh token pair issued at login and registration.
///
/// The refresh token is carried but never used by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Response body of both auth endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: TokenPair,
}

/// Sweet catalog entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SweetWire")]
pub struct Sweet {
    /// UUID primary key, opaque to the client
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: Option<String>,
    pub is_in_stock: bool,
}

/// Raw wire shape of a sweet. `is_in_stock` is a server-derived
/// field; when a response omits it, it falls back to its definition
/// (`quantity > 0`) instead of a blanket `false`.
#[derive(Deserialize)]
struct SweetWire {
    id: String,
    name: String,
    category: String,
    #[serde(deserialize_with = "decimal_or_number")]
    price: f64,
    quantity: u32,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    is_in_stock: Option<bool>,
}

impl From<SweetWire> for Sweet {
    fn from(wire: SweetWire) -> Self {
        let is_in_stock = wire.is_in_stock.unwrap_or(wire.quantity > 0);
        Self {
            id: wire.id,
            name: wire.name,
            category: wire.category,
            price: wire.price,
            quantity: wire.quantity,
            description: wire.description,
            is_in_stock,
        }
    }
}

/// Request body for create and update (full replace).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweetPayload {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

/// Working copy of the item form fields.
///
/// Price and quantity stay raw strings while the user types;
/// [`SweetDraft::into_payload`] coerces them on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweetDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl SweetDraft {
    /// Pre-fill the form from an existing sweet (edit mode).
    pub fn from_sweet(sweet: &Sweet) -> Self {
        Self {
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price.to_string(),
            quantity: sweet.quantity.to_string(),
            description: sweet.description.clone().unwrap_or_default(),
        }
    }

    /// Coerce the string fields to their numeric types.
    ///
    /// `"45.50"` becomes `45.5`, `"20"` becomes `20`. Empty or
    /// non-numeric input fails with a form-level message.
    pub fn into_payload(self) -> Result<SweetPayload, String> {
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number".to_string())?;
        Ok(SweetPayload {
            name: self.name,
            category: self.category,
            price,
            quantity,
            description: self.description,
        })
    }
}

/// List endpoints answer either a bare array or a paginated
/// `{results: [...]}` envelope. Both normalize to the same vector.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SweetListResponse {
    Plain(Vec<Sweet>),
    Paginated { results: Vec<Sweet> },
}

impl SweetListResponse {
    pub fn into_vec(self) -> Vec<Sweet> {
        match self {
            SweetListResponse::Plain(sweets) => sweets,
            SweetListResponse::Paginated { results } => results,
        }
    }
}

/// Server-side search filter; both fields are substring matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub name: String,
    pub category: String,
}

impl SearchFilter {
    /// An empty filter means "search" degrades to a full reload.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.category.trim().is_empty()
    }

    /// Query string with only the non-empty fields, URL-encoded.
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::new();
        if !self.name.trim().is_empty() {
            pairs.push(format!(
                "name={}",
                utf8_percent_encode(self.name.trim(), QUERY_VALUE)
            ));
        }
        if !self.category.trim().is_empty() {
            pairs.push(format!(
                "category={}",
                utf8_percent_encode(self.category.trim(), QUERY_VALUE)
            ));
        }
        pairs.join("&")
    }
}

/// Success body of the purchase and restock endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionResponse {
    pub message: String,
}

/// DRF serializes DecimalField as a string ("45.50"); accept both
/// that and a plain JSON number.
fn decimal_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sweet(id: &str, quantity: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": "Ladoo",
            "category": "Indian",
            "price": "45.50",
            "quantity": quantity,
            "description": null,
            "is_in_stock": quantity > 0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
        })
    }

    #[test]
    fn test_sweet_price_from_decimal_string() {
        let sweet: Sweet = serde_json::from_value(make_sweet("a1", 20)).unwrap();
        assert_eq!(sweet.price, 45.5);
        assert_eq!(sweet.quantity, 20);
        assert!(sweet.is_in_stock);
    }

    #[test]
    fn test_in_stock_derived_when_field_absent() {
        let mut value = make_sweet("a1", 5);
        value.as_object_mut().unwrap().remove("is_in_stock");
        let sweet: Sweet = serde_json::from_value(value).unwrap();
        assert!(sweet.is_in_stock);

        let mut sold_out = make_sweet("a2", 0);
        sold_out.as_object_mut().unwrap().remove("is_in_stock");
        let sweet: Sweet = serde_json::from_value(sold_out).unwrap();
        assert!(!sweet.is_in_stock);
    }

    #[test]
    fn test_in_stock_wire_value_wins() {
        // The server's derived flag is authoritative when present.
        let mut value = make_sweet("a1", 5);
        value["is_in_stock"] = serde_json::json!(false);
        let sweet: Sweet = serde_json::from_value(value).unwrap();
        assert!(!sweet.is_in_stock);
    }

    #[test]
    fn test_sweet_price_from_number() {
        let mut value = make_sweet("a1", 3);
        value["price"] = serde_json::json!(12.25);
        let sweet: Sweet = serde_json::from_value(value).unwrap();
        assert_eq!(sweet.price, 12.25);
    }

    #[test]
    fn test_list_response_bare_array() {
        let body = serde_json::json!([make_sweet("a1", 1), make_sweet("a2", 0)]);
        let list: SweetListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(list.into_vec().len(), 2);
    }

    #[test]
    fn test_list_response_paginated_envelope() {
        let body = serde_json::json!({ "count": 1, "results": [make_sweet("a1", 5)] });
        let list: SweetListResponse = serde_json::from_value(body).unwrap();
        let sweets = list.into_vec();
        assert_eq!(sweets.len(), 1);
        assert_eq!(sweets[0].id, "a1");
    }

    #[test]
    fn test_draft_coercion() {
        let draft = SweetDraft {
            name: "Ladoo".to_string(),
            category: "Indian".to_string(),
            price: "45.50".to_string(),
            quantity: "20".to_string(),
            description: String::new(),
        };
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.price, 45.5);
        assert_eq!(payload.quantity, 20);
    }

    #[test]
    fn test_draft_rejects_bad_numbers() {
        let mut draft = SweetDraft {
            price: "abc".to_string(),
            quantity: "20".to_string(),
            ..Default::default()
        };
        assert!(draft.clone().into_payload().is_err());

        draft.price = "9.99".to_string();
        draft.quantity = "2.5".to_string();
        assert!(draft.into_payload().is_err());
    }

    #[test]
    fn test_filter_empty_when_whitespace() {
        let filter = SearchFilter {
            name: "  ".to_string(),
            category: String::new(),
        };
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filter_query_skips_empty_fields() {
        let filter = SearchFilter {
            name: "choco lava".to_string(),
            category: String::new(),
        };
        assert_eq!(filter.to_query(), "name=choco%20lava");

        let both = SearchFilter {
            name: "gummy".to_string(),
            category: "Candy".to_string(),
        };
        assert_eq!(both.to_query(), "name=gummy&category=Candy");
    }

    #[test]
    fn test_filter_query_escapes_reserved_chars() {
        let filter = SearchFilter {
            name: "m&m".to_string(),
            category: "50% off".to_string(),
        };
        assert_eq!(filter.to_query(), "name=m%26m&category=50%25%20off");
    }

    #[test]
    fn test_user_ignores_extra_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "username": "alice",
            "email": "alice@example.com",
            "is_admin": true,
            "date_joined": "2024-01-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.is_admin);
    }
}
