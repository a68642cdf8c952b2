//! Shared domain contracts for the inventory frontend.
//!
//! Everything in this crate is UI-free: plain types and total functions
//! that the Leptos frontend (and its tests) call into.

pub mod domain;
