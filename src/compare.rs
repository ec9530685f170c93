// src/compare.rs
//
// Multi-entity comparison: one base record measured against up to four
// others over a statically configured metric category, plus a normalized
// vector form for radar-style display.
//
// The pure functions (best_value / format_value / normalize and the view
// builders) are total; invalid ComparisonSet mutations are silent no-ops,
// never errors. Callers needing feedback diff pre/post state themselves.

use serde::Serialize;

use crate::record::{field, Record};
use crate::specs::metrics::{self, MetricDef, MetricKind};

/// Upper bound on comparison records alongside the base.
pub const MAX_COMPARISONS: usize = 4;

/// Normalized scores are capped here. There is deliberately no lower cap:
/// negative inputs pass through unchanged (inherited behavior, pinned by a
/// regression test — see DESIGN.md before "fixing").
pub const SCALE_CEILING: f64 = 100.0;

/// Static category lookup; unknown names yield an empty slice, not an error.
pub fn metrics_for_category(category: &str) -> &'static [MetricDef] {
    metrics::category(category)
}

/// Category names in display order, for callers building pickers.
pub fn category_keys() -> &'static [&'static str] {
    metrics::CATEGORY_KEYS
}

/// Best value across `records` for one metric: max when higher is better,
/// min when lower is better, `None` for contextual metrics (no single best
/// value is meaningful, e.g. preferred foot) or an empty row.
pub fn best_value(metric: &MetricDef, records: &[&Record]) -> Option<f64> {
    let values = records.iter().map(|r| r.num(metric.key));
    match metric.kind {
        MetricKind::HigherIsBetter => values.fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.max(v)))
        }),
        MetricKind::LowerIsBetter => values.fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.min(v)))
        }),
        MetricKind::Contextual => None,
    }
}

/// Display formatting, exact contract:
/// market value → "€" + thousands-grouped integer; percentage keys → one
/// decimal + "%"; everything else → two decimals.
pub fn format_value(value: f64, metric: &MetricDef) -> String {
    if metric.key == field::MARKET_VALUE {
        format!("€{}", group_thousands(value))
    } else if metric.key.contains('%') {
        format!("{:.1}%", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Scale a raw value onto [.., 100]: `min(value / max * multiplier, 100)`.
/// Clamped from above only; see `SCALE_CEILING`.
pub fn normalize(value: f64, metric: &MetricDef) -> f64 {
    (value / metric.max * metric.multiplier).min(SCALE_CEILING)
}

/// Rounded integer rendering with "," every three digits.
fn group_thousands(value: f64) -> String {
    let n = value.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One base record plus up to four comparison records, deduplicated by
/// name-identity. All mutators apply the silent-no-op policy: a request that
/// would break an invariant (capacity, duplicate identity, empty identity)
/// leaves the set untouched.
#[derive(Clone, Debug, Default)]
pub struct ComparisonSet {
    base: Option<Record>,
    rivals: Vec<Record>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> Option<&Record> {
        self.base.as_ref()
    }

    pub fn rivals(&self) -> &[Record] {
        &self.rivals
    }

    /// Base plus rivals, base first. Order is selection order.
    pub fn lineup(&self) -> Vec<&Record> {
        self.base.iter().chain(self.rivals.iter()).collect()
    }

    /// Identity strings of everything selected, for suggestion exclusion.
    pub fn identities(&self) -> std::collections::HashSet<&str> {
        self.lineup().iter().map(|r| r.identity()).collect()
    }

    /// A comparison needs a base and at least one rival.
    pub fn is_ready(&self) -> bool {
        self.base.is_some() && !self.rivals.is_empty()
    }

    /// Install or replace the base. No-op if the record has no identity or
    /// its identity is already among the rivals.
    pub fn set_base(&mut self, record: Record) {
        let id = record.identity();
        if id.is_empty() || self.rivals.iter().any(|r| r.identity() == id) {
            log::debug!("comparison: base rejected (empty or duplicate identity)");
            return;
        }
        self.base = Some(record);
    }

    pub fn clear_base(&mut self) {
        self.base = None;
    }

    /// Append a comparison record. No-op when full, when the identity is
    /// empty, or when it duplicates the base or an existing rival.
    pub fn add(&mut self, record: Record) {
        let id = record.identity();
        let duplicate = self.base.as_ref().is_some_and(|b| b.identity() == id)
            || self.rivals.iter().any(|r| r.identity() == id);
        if self.rivals.len() >= MAX_COMPARISONS || id.is_empty() || duplicate {
            log::debug!("comparison: add rejected ({} selected)", self.rivals.len());
            return;
        }
        self.rivals.push(record);
    }

    /// Drop whichever selected record carries this identity (base included).
    pub fn remove(&mut self, identity: &str) {
        if self.base.as_ref().is_some_and(|b| b.identity() == identity) {
            self.base = None;
        }
        self.rivals.retain(|r| r.identity() != identity);
    }

    pub fn clear(&mut self) {
        self.base = None;
        self.rivals.clear();
    }
}

/// One cell of the comparison table: coerced value, display text, and
/// whether it ties the row's best value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompareCell {
    pub value: f64,
    pub display: String,
    pub best: bool,
}

/// One metric row across the whole lineup (base cell first).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    pub cells: Vec<CompareCell>,
}

/// Tabular view-model: column labels (base first) and one row per metric in
/// the selected category. Plain data for a rendering collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CompareTable {
    pub columns: Vec<String>,
    pub rows: Vec<MetricRow>,
}

/// Build the raw-value table for one category. An unready set (no base, or
/// no rivals) yields an empty table — callers render that as an empty state.
pub fn table_view(set: &ComparisonSet, category: &str) -> CompareTable {
    if !set.is_ready() {
        return CompareTable::default();
    }
    let lineup = set.lineup();
    let rows = metrics_for_category(category)
        .iter()
        .map(|metric| {
            let best = best_value(metric, &lineup);
            let cells = lineup
                .iter()
                .map(|r| {
                    let value = r.num(metric.key);
                    CompareCell {
                        value,
                        display: format_value(value, metric),
                        best: best == Some(value),
                    }
                })
                .collect();
            MetricRow { label: metric.label, cells }
        })
        .collect();

    CompareTable {
        columns: lineup.iter().map(|r| r.display_name().to_string()).collect(),
        rows,
    }
}

/// One record's normalized scores, index-aligned with `RadarView::labels`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub scores: Vec<f64>,
}

/// Normalized vector view over the fixed radar metric set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RadarView {
    pub labels: Vec<&'static str>,
    pub series: Vec<RadarSeries>,
}

/// Build the radar view-model: one series per selected record (base first),
/// scores normalized onto the 0–100 scale (upper clamp only).
pub fn radar_view(set: &ComparisonSet) -> RadarView {
    if !set.is_ready() {
        return RadarView::default();
    }
    let series = set
        .lineup()
        .into_iter()
        .map(|r| RadarSeries {
            name: r.display_name().to_string(),
            scores: metrics::RADAR
                .iter()
                .map(|m| normalize(r.num(m.key), m))
                .collect(),
        })
        .collect();

    RadarView {
        labels: metrics::RADAR.iter().map(|m| m.label).collect(),
        series,
    }
}
