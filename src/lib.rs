// src/lib.rs

#[macro_use]
pub mod macros;

pub mod specs;

pub mod compare;
pub mod filter;
pub mod record;
pub mod suggest;
