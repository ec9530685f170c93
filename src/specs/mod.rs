// src/specs/mod.rs
//! # Static configuration “specs”
//!
//! This module hosts the **statically configured reference data** the engine
//! operates against: the metric catalog (grouped into named categories, plus
//! the fixed radar set) and the selectable position list.
//!
//! ## What lives here
//! - **Metric definitions** — column key, display label, directionality
//!   (higher/lower is better, or contextual), and the `max`/`multiplier`
//!   pair the normalizer uses.
//! - **Category grouping** — which metrics belong to "attacking",
//!   "technical", and so on, and the order categories are presented in.
//! - **Position codes** — the values the position filter may be set to.
//!
//! ## What does **not** live here
//! - Any computation. The engine treats all of this as read-only data; it
//!   never derives, validates, or mutates it.
//! - Record field access — that's `record::field` plus the defaulting
//!   accessors on `Record`.
//!
//! ## Conventions & invariants
//! - Metric `key`s are the ingesting side's column headers verbatim
//!   (Wyscout-style, including the ", %" suffix on percentage columns —
//!   the formatter keys off that suffix).
//! - `max` is the expected ceiling for the metric in practice; values above
//!   it saturate at 100 after normalization. `multiplier` is the scale
//!   factor applied before the cap (100 for everything at present).
//! - Category slices are stable: callers may cache indices into them.

pub mod metrics;
pub mod positions;
