// src/specs/positions.rs
//
// Selectable position codes for the position filter. "all" is the wildcard;
// the rest match the ingesting side's position column values. Multi-role
// players are caught through the primary-position substring rule instead.

pub const ALL: &str = "all";

pub static SELECTABLE: &[&str] = &[
    ALL, "GK", "CB", "LB", "RB", "DMF", "CMF", "AMF", "LW", "RW", "CF",
];
