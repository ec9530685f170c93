// src/record.rs
//
// Sparse record model for scouting rows.
//
// Imported datasets don't share a fixed column set, so a record is a plain
// field-name → text mapping and every read goes through a defaulting
// accessor: `text` (empty when absent), `int` / `num` (0 when absent or
// unparseable). Components never coerce inline; they call these.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Well-known column names (Wyscout-style headers from the ingesting side).
pub mod field {
    pub const FULL_NAME: &str = "Full name";
    pub const PLAYER: &str = "Player";
    pub const TEAM: &str = "Team";
    pub const BIRTH_COUNTRY: &str = "Birth country";
    pub const POSITION: &str = "Position";
    pub const PRIMARY_POSITION: &str = "Primary position";
    pub const COMPETITION: &str = "Competition";
    pub const AGE: &str = "Age";
    pub const MARKET_VALUE: &str = "Market value";
}

/// Placeholder for missing display text.
pub const NOT_AVAILABLE: &str = "N/A";

/// One scouted athlete: field name → raw cell text.
/// Immutable once handed to the engine; build with `new` + `with`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insert, mainly for fixtures and ad hoc callers.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Raw cell, only if the column was present.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Text value; absent → "".
    pub fn text(&self, key: &str) -> &str {
        self.raw(key).unwrap_or("")
    }

    /// Text value; absent or blank → caller's placeholder.
    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        match self.raw(key) {
            Some(v) if !v.trim().is_empty() => v,
            _ => fallback,
        }
    }

    /// Leading-integer coercion; absent or no digit prefix → 0.
    /// "27 yrs" → 27, "x27" → 0.
    pub fn int(&self, key: &str) -> i64 {
        int_prefix(self.text(key))
    }

    /// Leading-decimal coercion; absent or no numeric prefix → 0.0.
    /// "2.5M" → 2.5, "€2.5M" → 0.0.
    pub fn num(&self, key: &str) -> f64 {
        num_prefix(self.text(key))
    }

    pub fn full_name(&self) -> &str {
        self.text(field::FULL_NAME)
    }

    pub fn short_name(&self) -> &str {
        self.text(field::PLAYER)
    }

    pub fn team(&self) -> &str {
        self.text(field::TEAM)
    }

    pub fn position(&self) -> &str {
        self.text(field::POSITION)
    }

    pub fn primary_position(&self) -> &str {
        self.text(field::PRIMARY_POSITION)
    }

    pub fn age(&self) -> i64 {
        self.int(field::AGE)
    }

    pub fn market_value(&self) -> f64 {
        self.num(field::MARKET_VALUE)
    }

    /// Natural key for exclusion/deduplication: full name, else short name.
    /// Names are NOT unique upstream; two distinct records may share an
    /// identity. Accepted limitation, callers own the consequences.
    pub fn identity(&self) -> &str {
        let full = self.full_name();
        if full.is_empty() { self.short_name() } else { full }
    }

    /// Identity for display; "N/A" when both name fields are missing.
    pub fn display_name(&self) -> &str {
        let id = self.identity();
        if id.is_empty() { NOT_AVAILABLE } else { id }
    }
}

/// Integer prefix of a string: optional sign, then digits. Anything else → 0.
pub fn int_prefix(s: &str) -> i64 {
    let t = s.trim_start();
    let (neg, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let v = digits.parse::<i64>().unwrap_or(0);
    if neg { -v } else { v }
}

/// Decimal prefix of a string: optional sign, digits, optional fraction.
/// Needs at least one digit; anything else → 0.0.
pub fn num_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let (neg, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in rest.char_indices() {
        match c {
            '0'..='9' => { seen_digit = true; end = i + 1; }
            '.' if !seen_dot => { seen_dot = true; end = i + 1; }
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }
    let v = rest[..end].trim_end_matches('.').parse::<f64>().unwrap_or(0.0);
    if neg { -v } else { v }
}
