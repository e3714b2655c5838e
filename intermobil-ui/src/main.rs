//! Intermobil Dashboard
//!
//! Administration dashboard for the Intermobil virtual tours, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Sidebar navigation with a mobile drawer
//! - Light and dark themes
//! - Virtual tour gallery
//! - Statistics with CSV import/export, KPIs and a visitor chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Parsing and aggregation live in the `intermobil` crate; this
//! crate only holds state, components and browser glue.

use leptos::*;

mod app;
mod components;
mod files;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
