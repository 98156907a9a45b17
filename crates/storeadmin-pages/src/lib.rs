//! storeadmin-pages: page controllers for the admin dashboard.
//!
//! Each page owns its in-memory view state, orchestrates the resource
//! clients, and reports every outcome through the notification and
//! confirmation ports. View state is a cache with an invalidate-and-reload
//! policy: every successful mutation is followed by a full re-fetch.

pub mod config;
pub mod errors;
pub mod pages;
pub mod view;

pub use storeadmin_types::{domain, ports};
