//! Domain types and rules shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O.

pub mod booking;
pub mod dashboard;
pub mod error;
pub mod schedule;
pub mod types;
pub mod validation;
