//! Request bodies for create and update.
//!
//! Every field is optional and untyped at the JSON level, so that presence and type can be
//! checked explicitly: a missing field and a wrongly typed one are different failures.
//! Numeric fields accept either a JSON number or a numeric string.

use serde::Deserialize;
use thiserror::Error;

use crate::model::ProductFields;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<FieldInput>,
    pub description: Option<FieldInput>,
    pub price: Option<FieldInput>,
    pub stock: Option<FieldInput>,
    pub image_url: Option<FieldInput>,
}

/// One body field as it arrived. `null` deserializes to `None` on the enclosing `Option`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl FieldInput {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    fn as_price(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }

    fn as_stock(&self) -> Option<u32> {
        match self {
            Self::Number(n) => match n.as_u64() {
                Some(whole) => u32::try_from(whole).ok(),
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                    .map(|f| f as u32),
            },
            Self::Text(s) => s.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }

    fn into_text(self) -> Result<String, Self> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(other),
        }
    }

    fn raw(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Other(v) => v.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PayloadError {
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    #[error("Field {field} is not a valid {expected}: {value:?}")]
    Invalid {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl PayloadError {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

impl ProductPayload {
    /// Checks that all five fields are present, then coerces the numeric ones.
    ///
    /// Presence is checked for every field before any coercion, so a body that is both
    /// incomplete and malformed reports the missing field. Text fields must be non-empty;
    /// numeric fields only need to be present, so `0` is a valid price or stock.
    pub fn into_fields(self) -> Result<ProductFields, PayloadError> {
        let name = required_text("name", self.name)?;
        let description = required_text("description", self.description)?;
        let price = self.price.ok_or(PayloadError::Missing("price"))?;
        let stock = self.stock.ok_or(PayloadError::Missing("stock"))?;
        let image_url = required_text("imageUrl", self.image_url)?;

        let name = text("name", name)?;
        let description = text("description", description)?;
        let image_url = text("imageUrl", image_url)?;
        let price = price.as_price().ok_or_else(|| PayloadError::Invalid {
            field: "price",
            expected: "number",
            value: price.raw(),
        })?;
        let stock = stock.as_stock().ok_or_else(|| PayloadError::Invalid {
            field: "stock",
            expected: "non-negative integer",
            value: stock.raw(),
        })?;

        Ok(ProductFields {
            name,
            description,
            price,
            stock,
            image_url,
        })
    }
}

fn required_text(
    field: &'static str,
    value: Option<FieldInput>,
) -> Result<FieldInput, PayloadError> {
    value
        .filter(|input| !input.is_blank())
        .ok_or(PayloadError::Missing(field))
}

fn text(field: &'static str, input: FieldInput) -> Result<String, PayloadError> {
    input.into_text().map_err(|other| PayloadError::Invalid {
        field,
        expected: "string",
        value: other.raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> Result<ProductFields, PayloadError> {
        serde_json::from_value::<ProductPayload>(body).unwrap().into_fields()
    }

    fn full() -> serde_json::Value {
        json!({
            "name": "Vanilla Cake",
            "description": "Classic vanilla cake with a creamy vanilla frosting.",
            "price": 17.99,
            "stock": 30,
            "imageUrl": "https://example.com/images/vanilla-cake.jpg"
        })
    }

    #[test]
    fn test_complete_payload_is_accepted() {
        let fields = parse(full()).unwrap();
        assert_eq!(fields.name, "Vanilla Cake");
        assert_eq!(fields.price, 17.99);
        assert_eq!(fields.stock, 30);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let mut body = full();
        body["price"] = json!(" 19.99");
        body["stock"] = json!("50");
        let fields = parse(body).unwrap();
        assert_eq!(fields.price, 19.99);
        assert_eq!(fields.stock, 50);
    }

    #[test]
    fn test_zero_is_present() {
        let mut body = full();
        body["price"] = json!(0);
        body["stock"] = json!("0");
        let fields = parse(body).unwrap();
        assert_eq!(fields.price, 0.0);
        assert_eq!(fields.stock, 0);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in ["name", "description", "price", "stock", "imageUrl"] {
            let mut body = full();
            body.as_object_mut().unwrap().remove(field);
            assert_eq!(parse(body), Err(PayloadError::Missing(field)));
        }
    }

    #[test]
    fn test_null_and_empty_text_are_missing() {
        let mut body = full();
        body["price"] = serde_json::Value::Null;
        assert_eq!(parse(body), Err(PayloadError::Missing("price")));

        let mut body = full();
        body["name"] = json!("");
        assert_eq!(parse(body), Err(PayloadError::Missing("name")));
    }

    #[test]
    fn test_malformed_numbers_are_invalid_not_missing() {
        let mut body = full();
        body["price"] = json!("cheap");
        let err = parse(body).unwrap_err();
        assert!(!err.is_missing());

        for stock in [json!(-1), json!(2.5), json!("-3"), json!("")] {
            let mut body = full();
            body["stock"] = stock.clone();
            assert!(
                matches!(parse(body), Err(PayloadError::Invalid { field: "stock", .. })),
                "stock {stock}"
            );
        }
    }

    #[test]
    fn test_wrong_json_types_are_invalid_not_missing() {
        for (field, value) in [
            ("price", json!(true)),
            ("price", json!({})),
            ("stock", json!([1])),
            ("name", json!(123)),
            ("imageUrl", json!(false)),
        ] {
            let mut body = full();
            body[field] = value.clone();
            let err = parse(body).unwrap_err();
            assert!(
                matches!(err, PayloadError::Invalid { field: f, .. } if f == field),
                "{field} = {value}: {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_wins_over_malformed() {
        let mut body = full();
        body["price"] = json!("cheap");
        body.as_object_mut().unwrap().remove("imageUrl");
        assert_eq!(parse(body), Err(PayloadError::Missing("imageUrl")));
    }
}
