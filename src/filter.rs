// src/filter.rs
//
// Multi-criterion filtering over the full record set.
//
// A record passes when ALL predicates pass. Missing or malformed fields
// degrade to permissive defaults; this component never errors and never
// reorders its input.

use serde::{Deserialize, Serialize};

use crate::record::{field, Record};

/// Fallback age band when a bound is unset.
const AGE_FALLBACK: (i64, i64) = (0, 50);
/// Fallback market-value band when a bound is unset.
const VALUE_FALLBACK: (f64, f64) = (0.0, 999_999_999.0);

/// Fields probed by the free-text predicate, in spec order.
const SEARCH_FIELDS: [&str; 7] = [
    field::FULL_NAME,
    field::PLAYER,
    field::TEAM,
    field::BIRTH_COUNTRY,
    field::POSITION,
    field::PRIMARY_POSITION,
    field::COMPETITION,
];

/// Wildcard position filter.
pub const POSITION_ALL: &str = "all";

/// Current filter state. Owned by the caller, replaced (wholesale or
/// field-wise) on each interaction; the engine only reads it.
///
/// `None` range bounds mean "unset" and fall back to the permissive band at
/// evaluation time, so `FilterCriteria::default()` passes every well-formed
/// record. Interactive sessions usually start from `ui_defaults()` instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub position: String,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub value_min: Option<f64>,
    pub value_max: Option<f64>,
}

impl FilterCriteria {
    /// The starting point a UI seeds its controls with: age 16–40,
    /// market value 0–999,999,999, no search term, any position.
    pub fn ui_defaults() -> Self {
        Self {
            search_term: s!(),
            position: s!(POSITION_ALL),
            age_min: Some(16),
            age_max: Some(40),
            value_min: Some(0.0),
            value_max: Some(999_999_999.0),
        }
    }
}

/// Order-preserving subset of `records` satisfying every criterion.
pub fn filter<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    let out: Vec<&Record> = records.iter().filter(|r| matches(r, criteria)).collect();
    log::debug!("filter: {} of {} records match", out.len(), records.len());
    out
}

/// All predicates, ANDed.
pub fn matches(record: &Record, c: &FilterCriteria) -> bool {
    matches_search_term(record, &c.search_term)
        && matches_position(record, &c.position)
        && matches_age(record, c.age_min, c.age_max)
        && matches_value(record, c.value_min, c.value_max)
}

/// Case-insensitive substring probe across the searchable fields.
/// Empty or whitespace-only term matches everything.
pub fn matches_search_term(record: &Record, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    SEARCH_FIELDS.iter().any(|f| {
        record
            .raw(f)
            .is_some_and(|v| v.to_lowercase().contains(&term))
    })
}

/// Exact position match, or substring of the primary-position field
/// (which may list several, e.g. "CB, LB"). "all" / empty matches everything.
pub fn matches_position(record: &Record, position: &str) -> bool {
    if position.is_empty() || position == POSITION_ALL {
        return true;
    }
    record.position() == position || record.primary_position().contains(position)
}

/// Inclusive age band; unset bounds fall back to [0, 50].
pub fn matches_age(record: &Record, min: Option<i64>, max: Option<i64>) -> bool {
    let age = record.age();
    age >= min.unwrap_or(AGE_FALLBACK.0) && age <= max.unwrap_or(AGE_FALLBACK.1)
}

/// Inclusive market-value band; unset bounds fall back to [0, 999,999,999].
pub fn matches_value(record: &Record, min: Option<f64>, max: Option<f64>) -> bool {
    let value = record.market_value();
    value >= min.unwrap_or(VALUE_FALLBACK.0) && value <= max.unwrap_or(VALUE_FALLBACK.1)
}
