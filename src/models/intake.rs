//! Daily intake model
//!
//! A daily intake is a dated, user-owned list of (food, weight) line items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Food;

/// One (food, weight) line item within an intake, as the caller composes it
///
/// Weight is in grams. Within one intake's entry list, food ids are unique;
/// the aggregator's merge operations maintain that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeEntry {
    pub food_id: i64,
    pub weight: f64,
}

impl IntakeEntry {
    pub fn new(food_id: i64, weight: f64) -> Self {
        Self { food_id, weight }
    }
}

/// A persisted intake line item, with the full food record embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIntakeFood {
    pub id: i64,
    pub food: Food,
    pub weight: f64,
}

/// A user's recorded set of foods consumed on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIntake {
    pub id: i64,
    pub creation_date: NaiveDate,
    #[serde(default)]
    pub daily_intake_foods: Vec<DailyIntakeFood>,
}

impl DailyIntake {
    /// Extract the (food id, weight) entry list for aggregation or editing
    pub fn entries(&self) -> Vec<IntakeEntry> {
        self.daily_intake_foods
            .iter()
            .map(|item| IntakeEntry::new(item.food.id, item.weight))
            .collect()
    }
}

/// Payload for creating an intake: owning user plus the entry list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIntakeRequest {
    pub user_id: i64,
    pub food_entries: Vec<IntakeEntry>,
}

/// Payload for the update endpoint, which takes parallel id/weight arrays
///
/// The array-pair shape is a serialization detail of the backend API only;
/// everything in this crate works with entry lists and converts at the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDailyIntakeRequest {
    pub food_ids: Vec<i64>,
    pub weights: Vec<f64>,
}

impl From<&[IntakeEntry]> for UpdateDailyIntakeRequest {
    fn from(entries: &[IntakeEntry]) -> Self {
        Self {
            food_ids: entries.iter().map(|e| e.food_id).collect(),
            weights: entries.iter().map(|e| e.weight).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;

    fn sample_intake() -> DailyIntake {
        DailyIntake {
            id: 10,
            creation_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            daily_intake_foods: vec![
                DailyIntakeFood {
                    id: 100,
                    food: Food {
                        id: 1,
                        name: "Apple".into(),
                        nutrition: Nutrition {
                            calories: 52.0,
                            protein: 0.3,
                            fats: 0.2,
                            carbs: 14.0,
                        },
                    },
                    weight: 150.0,
                },
                DailyIntakeFood {
                    id: 101,
                    food: Food {
                        id: 2,
                        name: "Rice".into(),
                        nutrition: Nutrition {
                            calories: 130.0,
                            protein: 2.7,
                            fats: 0.3,
                            carbs: 28.0,
                        },
                    },
                    weight: 200.0,
                },
            ],
        }
    }

    #[test]
    fn test_entries_extraction() {
        let intake = sample_intake();
        let entries = intake.entries();
        assert_eq!(entries, vec![
            IntakeEntry::new(1, 150.0),
            IntakeEntry::new(2, 200.0),
        ]);
    }

    #[test]
    fn test_entry_wire_format() {
        let entry = IntakeEntry::new(5, 120.0);
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["foodId"], 5);
        assert_eq!(json["weight"], 120.0);
    }

    #[test]
    fn test_update_request_splits_into_parallel_arrays() {
        let entries = vec![IntakeEntry::new(1, 150.0), IntakeEntry::new(2, 200.0)];
        let request = UpdateDailyIntakeRequest::from(entries.as_slice());
        assert_eq!(request.food_ids, vec![1, 2]);
        assert_eq!(request.weights, vec![150.0, 200.0]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["foodIds"][1], 2);
        assert_eq!(json["weights"][0], 150.0);
    }

    #[test]
    fn test_intake_deserializes_from_backend_json() {
        let json = r#"{
            "id": 10,
            "creationDate": "2025-06-01",
            "dailyIntakeFoods": [
                {
                    "id": 100,
                    "food": {"id": 1, "name": "Apple", "calories": 52.0, "protein": 0.3, "fats": 0.2, "carbs": 14.0},
                    "weight": 150.0
                }
            ]
        }"#;

        let intake: DailyIntake = serde_json::from_str(json).unwrap();
        assert_eq!(intake.creation_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(intake.daily_intake_foods[0].food.name, "Apple");
        assert_eq!(intake.entries(), vec![IntakeEntry::new(1, 150.0)]);
    }

    #[test]
    fn test_intake_without_foods_defaults_to_empty() {
        let json = r#"{"id": 11, "creationDate": "2025-06-02"}"#;
        let intake: DailyIntake = serde_json::from_str(json).unwrap();
        assert!(intake.daily_intake_foods.is_empty());
        assert!(intake.entries().is_empty());
    }
}
