//! Core for the noteful API.
//!
//! Pure domain types, request payloads, validation rules, the HTML sanitizer
//! and the storage traits implemented by the server's backends. Nothing in
//! this crate performs I/O.

pub mod notes;
pub mod sanitize;
pub mod serde;
pub mod storage;
