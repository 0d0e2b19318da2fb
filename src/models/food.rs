//! Food model
//!
//! A catalog food with nutrient content per 100 grams.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// A food from the catalog; nutrient fields are per 100 grams
///
/// The backend serializes the nutrient fields flat alongside id and name,
/// so the nested Nutrition is flattened on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

/// Payload for creating or replacing a food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCreate {
    pub name: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl Food {
    /// Build a lookup map from a fetched catalog, keyed by food id
    pub fn index_by_id(foods: Vec<Food>) -> HashMap<i64, Food> {
        foods.into_iter().map(|f| (f.id, f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_wire_format_is_flat() {
        let food = Food {
            id: 1,
            name: "Apple".to_string(),
            nutrition: Nutrition {
                calories: 52.0,
                protein: 0.3,
                fats: 0.2,
                carbs: 14.0,
            },
        };

        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Apple");
        assert_eq!(json["calories"], 52.0);
        assert!(json.get("nutrition").is_none());

        let parsed: Food = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, food);
    }

    #[test]
    fn test_index_by_id() {
        let foods = vec![
            Food { id: 1, name: "A".into(), nutrition: Nutrition::zero() },
            Food { id: 7, name: "B".into(), nutrition: Nutrition::zero() },
        ];
        let map = Food::index_by_id(foods);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&7].name, "B");
    }
}
