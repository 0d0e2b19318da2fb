//! Nutrition calculation module
//!
//! Pure aggregation of intake entries into nutrient totals.

pub mod aggregator;

pub use aggregator::{
    aggregate, aggregate_day, merge_entry, normalize_entries, remove_entry, scale_nutrients,
    update_entry_weight, AggResult, AggregationError,
};
