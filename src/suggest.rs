// src/suggest.rs
//
// Relevance-ranked name lookup for interactive selection.
//
// Scores every candidate against a partial query, first matching rule wins:
//
//   full name starts with query   100
//   short name starts with query   90
//   full name contains query       70
//   short name contains query      60
//   team contains query            30
//   otherwise                       0  (dropped)
//
// Scoring is case-insensitive; the exclusion check is case-SENSITIVE on the
// raw identity string. That asymmetry is inherited behavior, kept on purpose
// and pinned by tests — do not unify without confirming upstream intent.

use std::collections::HashSet;

use serde::Serialize;

use crate::record::{Record, NOT_AVAILABLE};

/// Queries shorter than this return nothing; avoids scoring the whole
/// collection on the first keystroke.
pub const MIN_QUERY_LEN: usize = 2;
/// Suggestion count when the caller has no opinion.
pub const DEFAULT_LIMIT: usize = 5;
/// Largest limit any current caller asks for.
pub const MAX_LIMIT: usize = 8;

/// Markers wrapping the matched span in a suggestion's display label.
/// Plain data; the rendering side translates them into real markup.
pub const MARK_OPEN: &str = "«";
pub const MARK_CLOSE: &str = "»";

/// One ranked hit, rebuilt per keystroke and discarded on selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suggestion<'a> {
    pub record: &'a Record,
    /// Display name with the first query occurrence wrapped in
    /// `MARK_OPEN`/`MARK_CLOSE`.
    pub display: String,
    /// "Team • Position", placeholders for missing fields.
    pub subtitle: String,
    pub score: u32,
}

/// Rank `records` against `query`, skipping any whose identity appears in
/// `exclude` (already-selected records), truncated to `limit`.
///
/// Ordering is by descending score; ties keep collection order (stable).
pub fn suggest<'a>(
    records: &'a [Record],
    query: &str,
    exclude: &HashSet<&str>,
    limit: usize,
) -> Vec<Suggestion<'a>> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let term = query.to_lowercase();

    let mut hits: Vec<(&Record, u32)> = records
        .iter()
        .filter(|r| !exclude.contains(r.identity()))
        .filter_map(|r| {
            let s = score(r, &term);
            (s > 0).then_some((r, s))
        })
        .collect();

    // Stable sort: equal scores retain collection order.
    hits.sort_by(|a, b| b.1.cmp(&a.1));
    hits.truncate(limit);

    log::debug!("suggest: {} hits for {}-char query", hits.len(), term.len());

    hits.into_iter()
        .map(|(record, score)| Suggestion {
            record,
            display: mark_match(record.display_name(), query),
            subtitle: format!(
                "{} • {}",
                record.text_or(crate::record::field::TEAM, NOT_AVAILABLE),
                record.text_or(crate::record::field::POSITION, NOT_AVAILABLE),
            ),
            score,
        })
        .collect()
}

/// Relevance of one candidate for an already-lowercased query term.
pub fn score(record: &Record, term_lower: &str) -> u32 {
    let full = record.full_name().to_lowercase();
    let short = record.short_name().to_lowercase();
    let team = record.team().to_lowercase();

    if full.starts_with(term_lower) {
        100
    } else if short.starts_with(term_lower) {
        90
    } else if full.contains(term_lower) {
        70
    } else if short.contains(term_lower) {
        60
    } else if team.contains(term_lower) {
        30
    } else {
        0
    }
}

/// Exact (case-insensitive) lookup on full or short name. Resolves a
/// committed selection back to its record.
pub fn find_by_name<'a>(records: &'a [Record], name: &str) -> Option<&'a Record> {
    let name = name.to_lowercase();
    records.iter().find(|r| {
        r.full_name().to_lowercase() == name || r.short_name().to_lowercase() == name
    })
}

/// Wrap the FIRST case-insensitive occurrence of `query` in the highlight
/// markers. Later occurrences are left alone (defined contract, not
/// best-effort). No occurrence → unchanged text.
pub fn mark_match(text: &str, query: &str) -> String {
    match find_ci(text, &query.to_lowercase()) {
        Some((s, e)) => format!(
            "{}{}{}{}{}",
            &text[..s],
            MARK_OPEN,
            &text[s..e],
            MARK_CLOSE,
            &text[e..]
        ),
        None => text.to_string(),
    }
}

/// Byte span of the first case-insensitive occurrence of `needle_lower`
/// in `text`. Char-wise scan so multibyte names don't break span offsets.
fn find_ci(text: &str, needle_lower: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle_lower.chars().collect();
    if needle.is_empty() {
        return None;
    }
    let hay: Vec<(usize, char)> = text.char_indices().collect();

    for start in 0..hay.len() {
        let mut ti = start;
        let mut ni = 0;
        'window: while ni < needle.len() && ti < hay.len() {
            for lc in hay[ti].1.to_lowercase() {
                if ni < needle.len() && lc == needle[ni] {
                    ni += 1;
                } else {
                    break 'window;
                }
            }
            ti += 1;
        }
        if ni == needle.len() {
            let s = hay[start].0;
            let e = if ti < hay.len() { hay[ti].0 } else { text.len() };
            return Some((s, e));
        }
    }
    None
}
