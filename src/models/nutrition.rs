//! Shared nutrition data structure
//!
//! Used both as a per-100g nutrient profile basis and as derived totals.

use serde::{Deserialize, Serialize};

/// Nutritional information: calories plus macronutrients in grams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,   // grams
    pub fats: f64,      // grams
    pub carbs: f64,     // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            fats: self.fats * multiplier,
            carbs: self.carbs * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fats: self.fats + other.fats,
            carbs: self.carbs + other.carbs,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_identity_for_add() {
        let n = Nutrition {
            calories: 52.0,
            protein: 0.3,
            fats: 0.2,
            carbs: 14.0,
        };
        assert_eq!(n.clone() + Nutrition::zero(), n);
    }

    #[test]
    fn test_scale_and_add() {
        let n = Nutrition {
            calories: 100.0,
            protein: 5.0,
            fats: 2.0,
            carbs: 20.0,
        };
        let doubled = n.scale(2.0);
        assert_eq!(doubled.calories, 200.0);
        assert_eq!(doubled.protein, 10.0);
        assert_eq!(doubled.fats, 4.0);
        assert_eq!(doubled.carbs, 40.0);

        let sum = n.clone() + n;
        assert_eq!(sum, doubled);
    }

    #[test]
    fn test_sum_over_iterator() {
        let parts = vec![
            Nutrition { calories: 10.0, protein: 1.0, fats: 0.5, carbs: 2.0 },
            Nutrition { calories: 20.0, protein: 2.0, fats: 1.5, carbs: 3.0 },
        ];
        let total: Nutrition = parts.into_iter().sum();
        assert_eq!(total.calories, 30.0);
        assert_eq!(total.protein, 3.0);
        assert_eq!(total.fats, 2.0);
        assert_eq!(total.carbs, 5.0);
    }

    #[test]
    fn test_serializes_flat() {
        let n = Nutrition { calories: 52.0, protein: 0.3, fats: 0.2, carbs: 14.0 };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["calories"], 52.0);
        assert_eq!(json["fats"], 0.2);
    }
}
