//! Nutrition aggregation
//!
//! Pure functions that turn an intake's (food, weight) entry list and a food
//! catalog lookup into nutrient totals, and that maintain a normalized entry
//! list while an intake is being edited. Nothing here performs I/O or holds
//! state; every operation borrows its inputs and returns a fresh value, so
//! callers can treat entry lists as immutable snapshots.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{DailyIntake, Food, IntakeEntry, Nutrition};

/// Aggregation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregationError {
    /// An entry references a food id absent from the supplied catalog map.
    /// Treating the entry as zero instead would hide a mismatch between the
    /// entry list and the catalog, so this is always surfaced.
    #[error("no food profile for food id {0}")]
    MissingFoodProfile(i64),

    #[error("invalid weight {0}: expected a finite number of grams")]
    InvalidWeight(f64),

    #[error("no entry for food id {0}")]
    EntryNotFound(i64),
}

/// Result type for aggregation operations
pub type AggResult<T> = Result<T, AggregationError>;

/// Scale a food's per-100g nutrients to the consumed weight in grams
///
/// Zero weight is valid and yields all-zero totals (a placeholder row before
/// the user fills in a weight). Negative or non-finite weights are rejected.
/// No rounding is applied; formatting is a presentation concern.
pub fn scale_nutrients(profile: &Food, weight_grams: f64) -> AggResult<Nutrition> {
    if !weight_grams.is_finite() || weight_grams < 0.0 {
        return Err(AggregationError::InvalidWeight(weight_grams));
    }

    Ok(profile.nutrition.scale(weight_grams / 100.0))
}

/// Sum nutrient totals for a list of entries against a food catalog map
///
/// Empty entries yield zero totals. The result depends only on the multiset
/// of (food, weight) pairs, never on entry order.
pub fn aggregate(
    entries: &[IntakeEntry],
    profiles: &HashMap<i64, Food>,
) -> AggResult<Nutrition> {
    let mut total = Nutrition::zero();
    for entry in entries {
        let profile = profiles
            .get(&entry.food_id)
            .ok_or(AggregationError::MissingFoodProfile(entry.food_id))?;
        total = total + scale_nutrients(profile, entry.weight)?;
    }

    Ok(total)
}

/// Sum nutrient totals across all of a user's intakes for one day
pub fn aggregate_day(
    intakes: &[DailyIntake],
    profiles: &HashMap<i64, Food>,
) -> AggResult<Nutrition> {
    let mut total = Nutrition::zero();
    for intake in intakes {
        total = total + aggregate(&intake.entries(), profiles)?;
    }

    Ok(total)
}

/// Add a food to an entry list, combining with an existing entry if present
///
/// Adding a food id that is already listed sums the weights in place rather
/// than duplicating the row, preserving relative order; otherwise the new
/// entry is appended. The input list is never mutated; the returned list is
/// the new canonical state.
pub fn merge_entry(entries: &[IntakeEntry], new_entry: IntakeEntry) -> AggResult<Vec<IntakeEntry>> {
    if !new_entry.weight.is_finite() || new_entry.weight <= 0.0 {
        return Err(AggregationError::InvalidWeight(new_entry.weight));
    }

    let mut result = entries.to_vec();
    match result.iter_mut().find(|e| e.food_id == new_entry.food_id) {
        Some(existing) => existing.weight += new_entry.weight,
        None => result.push(new_entry),
    }

    Ok(result)
}

/// Replace the weight of the entry with the given food id
///
/// A non-positive or non-finite weight is rejected rather than clamped or
/// treated as removal; deleting an entry is the explicit `remove_entry`
/// operation. Targeting a food id that is not listed is a stale-state error.
pub fn update_entry_weight(
    entries: &[IntakeEntry],
    food_id: i64,
    new_weight: f64,
) -> AggResult<Vec<IntakeEntry>> {
    if !new_weight.is_finite() || new_weight <= 0.0 {
        return Err(AggregationError::InvalidWeight(new_weight));
    }

    if !entries.iter().any(|e| e.food_id == food_id) {
        return Err(AggregationError::EntryNotFound(food_id));
    }

    Ok(entries
        .iter()
        .map(|e| {
            if e.food_id == food_id {
                IntakeEntry::new(food_id, new_weight)
            } else {
                *e
            }
        })
        .collect())
}

/// Remove the entry with the given food id, if present
///
/// Removing a food id that is not listed is a no-op, so a retried removal
/// never raises an error.
pub fn remove_entry(entries: &[IntakeEntry], food_id: i64) -> Vec<IntakeEntry> {
    entries
        .iter()
        .filter(|e| e.food_id != food_id)
        .copied()
        .collect()
}

/// Collapse duplicate food ids in an entry list by summing their weights
///
/// First-seen order is preserved. Used before submitting an intake so the
/// unique-food-id invariant holds on the wire even if the caller assembled
/// the list without `merge_entry`.
pub fn normalize_entries(entries: &[IntakeEntry]) -> AggResult<Vec<IntakeEntry>> {
    let mut result: Vec<IntakeEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        result = merge_entry(&result, *entry)?;
    }

    Ok(result)
}
