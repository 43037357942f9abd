//! EmotionAI Client
//!
//! Single-page web client for the EmotionAI backend, built with Leptos (WASM).
//!
//! # Features
//!
//! - Login / registration against the backend
//! - Conversational chat with a character-by-character reveal effect
//! - Personal journal keyed by calendar date
//! - Read-only personality profile (emotion chart, Big Five radar, enneagram)
//! - Server-generated personal goals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic lives in the backend; the client is a thin
//! presentation and state-synchronization layer over its REST API.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
