//! API Layer
//!
//! Typed client for the MedScan classification REST API.

mod client;

pub use client::*;
