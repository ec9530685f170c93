// src/specs/metrics.rs
//
// Metric catalog: five named categories for the comparison table and a
// fixed six-axis set for the radar view.

use serde::Serialize;

/// Directionality of a metric when deciding the best value in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MetricKind {
    HigherIsBetter,
    LowerIsBetter,
    /// No single best value is meaningful (e.g. preferred foot, height).
    Contextual,
}

/// One comparable metric. `key` is the record column; `max`/`multiplier`
/// feed the normalizer (`compare::normalize`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: MetricKind,
    pub max: f64,
    pub multiplier: f64,
}

const fn metric(
    key: &'static str,
    label: &'static str,
    kind: MetricKind,
    max: f64,
) -> MetricDef {
    MetricDef { key, label, kind, max, multiplier: 100.0 }
}

use MetricKind::{Contextual, HigherIsBetter, LowerIsBetter};

pub static ATTACKING: [MetricDef; 7] = [
    metric("Goals", "Goals", HigherIsBetter, 30.0),
    metric("xG", "Expected goals (xG)", HigherIsBetter, 25.0),
    metric("Assists", "Assists", HigherIsBetter, 15.0),
    metric("xA", "Expected assists (xA)", HigherIsBetter, 12.0),
    metric("Shots per 90", "Shots per 90", HigherIsBetter, 5.0),
    metric("Shots on target, %", "Shots on target %", HigherIsBetter, 100.0),
    metric("Goal conversion, %", "Goal conversion %", HigherIsBetter, 100.0),
];

pub static DEFENSIVE: [MetricDef; 6] = [
    metric("Defensive duels per 90", "Defensive duels per 90", HigherIsBetter, 12.0),
    metric("Defensive duels won, %", "Defensive duels won %", HigherIsBetter, 100.0),
    metric("Interceptions per 90", "Interceptions per 90", HigherIsBetter, 10.0),
    metric("Sliding tackles per 90", "Sliding tackles per 90", HigherIsBetter, 3.0),
    metric("Fouls per 90", "Fouls per 90", LowerIsBetter, 4.0),
    metric("Yellow cards", "Yellow cards", LowerIsBetter, 12.0),
];

pub static TECHNICAL: [MetricDef; 6] = [
    metric("Passes per 90", "Passes per 90", HigherIsBetter, 90.0),
    metric("Accurate passes, %", "Accurate passes %", HigherIsBetter, 100.0),
    metric("Key passes per 90", "Key passes per 90", HigherIsBetter, 2.0),
    metric("Dribbles per 90", "Dribbles per 90", HigherIsBetter, 8.0),
    metric("Successful dribbles, %", "Successful dribbles %", HigherIsBetter, 100.0),
    metric("Preferred foot", "Preferred foot", Contextual, 1.0),
];

pub static PHYSICAL: [MetricDef; 5] = [
    metric("Accelerations per 90", "Accelerations per 90", HigherIsBetter, 15.0),
    metric("Progressive runs per 90", "Progressive runs per 90", HigherIsBetter, 8.0),
    metric("Aerial duels per 90", "Aerial duels per 90", HigherIsBetter, 10.0),
    metric("Aerial duels won, %", "Aerial duels won %", HigherIsBetter, 100.0),
    metric("Height", "Height", Contextual, 1.0),
];

pub static MARKET: [MetricDef; 3] = [
    metric("Market value", "Market value", HigherIsBetter, 100_000_000.0),
    metric("Age", "Age", LowerIsBetter, 40.0),
    metric("Minutes played", "Minutes played", HigherIsBetter, 4000.0),
];

/// Six axes for the radar view; percent metrics map 1:1 onto the 0–100
/// scale, counting metrics saturate at their `max`.
pub static RADAR: [MetricDef; 6] = [
    metric("Goals", "Goals", HigherIsBetter, 30.0),
    metric("Assists", "Assists", HigherIsBetter, 15.0),
    metric("Accurate passes, %", "Accurate passes %", HigherIsBetter, 100.0),
    metric("Successful dribbles, %", "Successful dribbles %", HigherIsBetter, 100.0),
    metric("Defensive duels won, %", "Defensive duels won %", HigherIsBetter, 100.0),
    metric("Aerial duels won, %", "Aerial duels won %", HigherIsBetter, 100.0),
];

/// Category names in presentation order.
pub static CATEGORY_KEYS: &[&str] = &["attacking", "defensive", "technical", "physical", "market"];

/// Members of one named category; unknown names yield an empty slice.
pub fn category(name: &str) -> &'static [MetricDef] {
    match name {
        "attacking" => &ATTACKING,
        "defensive" => &DEFENSIVE,
        "technical" => &TECHNICAL,
        "physical" => &PHYSICAL,
        "market" => &MARKET,
        _ => &[],
    }
}
