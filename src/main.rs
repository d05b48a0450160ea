//! MedScan Dashboard
//!
//! Single-page client for a remote chest X-ray classification service,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Account registration and login with a bearer session
//! - X-ray upload (drag-drop or file picker) with instant preview
//! - Top-5 ranked class probabilities for every prediction
//! - Per-user prediction history with one-click rehydration
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that
//! compiles to WebAssembly. It communicates with the MedScan API over
//! HTTP; the model itself runs server-side.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
