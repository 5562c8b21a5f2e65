//! # API Route Modules
//!
//! Route modules for the footprint tracker surface:
//!
//! - `pages` — the HTML form flow: input form, calculate submission, and the
//!   flash-message redirect on invalid input.
//! - `estimates` — JSON estimate endpoint with the same semantics as the
//!   form flow.
//! - `activities` — read-only catalog API (list and single lookup).

pub mod activities;
pub mod estimates;
pub mod pages;
