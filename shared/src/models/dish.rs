//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned dish identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(String);

impl DishId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Menu section a dish is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    Starter,
    /// Older records carry a leading space
    #[serde(rename = "Main Course", alias = " Main Course")]
    MainCourse,
    Desert,
    Beverage,
}

impl DishCategory {
    /// Every category, in menu order
    pub const ALL: [DishCategory; 4] = [
        DishCategory::Starter,
        DishCategory::MainCourse,
        DishCategory::Desert,
        DishCategory::Beverage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DishCategory::Starter => "Starter",
            DishCategory::MainCourse => "Main Course",
            DishCategory::Desert => "Desert",
            DishCategory::Beverage => "Beverage",
        }
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dish entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    #[serde(rename = "_id", alias = "id")]
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: DishCategory,
    /// `true` renders as "Still Available"
    pub sold_out: bool,
    /// Minutes
    #[serde(deserialize_with = "deserialize_minutes")]
    pub waiting_time: u32,
}

/// Create-or-update payload for `PUT /dishes`
///
/// Without an `id` the backend creates a new dish; with one it updates
/// the existing record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishUpsert {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DishId>,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: DishCategory,
    pub sold_out: bool,
    pub waiting_time: u32,
}

/// Accepts both `10` and `"10"`; the legacy form posted raw input strings.
fn deserialize_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Minutes {
        Number(u32),
        Text(String),
    }

    match Minutes::deserialize(deserializer)? {
        Minutes::Number(minutes) => Ok(minutes),
        Minutes::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dish_accepts_plain_id() {
        let dish: Dish = serde_json::from_value(json!({
            "id": "1",
            "name": "Soup",
            "description": "Hot",
            "price": 5,
            "category": "Starter",
            "soldOut": true,
            "waitingTime": 10
        }))
        .unwrap();

        assert_eq!(dish.id, DishId::new("1"));
        assert_eq!(dish.price, Decimal::from(5));
        assert_eq!(dish.category, DishCategory::Starter);
        assert!(dish.sold_out);
        assert_eq!(dish.waiting_time, 10);
    }

    #[test]
    fn test_dish_accepts_legacy_record() {
        let dish: Dish = serde_json::from_value(json!({
            "_id": "64b7f0c2a1",
            "name": "Steak",
            "description": "Grilled",
            "price": "18",
            "category": " Main Course",
            "soldOut": false,
            "waitingTime": "25",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(dish.id.as_str(), "64b7f0c2a1");
        assert_eq!(dish.price, Decimal::from(18));
        assert_eq!(dish.category, DishCategory::MainCourse);
        assert_eq!(dish.waiting_time, 25);
    }

    #[test]
    fn test_dish_rejects_non_numeric_waiting_time() {
        let result = serde_json::from_value::<Dish>(json!({
            "_id": "1",
            "name": "Soup",
            "description": "Hot",
            "price": 5,
            "category": "Starter",
            "soldOut": true,
            "waitingTime": "soon"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_value(DishCategory::MainCourse).unwrap(),
            json!("Main Course")
        );
        assert_eq!(DishCategory::Desert.to_string(), "Desert");
        assert_eq!(DishCategory::ALL.len(), 4);
    }

    #[test]
    fn test_upsert_without_id_omits_key() {
        let payload = DishUpsert {
            id: None,
            name: "Tea".into(),
            description: "Green".into(),
            price: Decimal::from(3),
            category: DishCategory::Beverage,
            sold_out: true,
            waiting_time: 2,
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("_id").is_none());
        assert!(value.get("id").is_none());
        assert_eq!(value["price"].as_f64(), Some(3.0));
        assert_eq!(value["soldOut"], json!(true));
        assert_eq!(value["waitingTime"], json!(2));
    }

    #[test]
    fn test_upsert_with_id_carries_it() {
        let payload = DishUpsert {
            id: Some(DishId::new("42")),
            name: "Tea".into(),
            description: "Green".into(),
            price: Decimal::from(3),
            category: DishCategory::Beverage,
            sold_out: false,
            waiting_time: 2,
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["_id"], json!("42"));
    }
}
