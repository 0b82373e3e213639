//! Curió
//!
//! Educational platform frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Student dashboard with progress, streaks and recent activity
//! - Singapore Method (Concrete-Pictorial-Abstract) teaching flow
//! - Daily problem with answer submission and hints
//! - AI tutor chat
//! - Gamification: points, levels, achievements, leaderboard
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All real computation (auth, scoring, tutoring, content)
//! happens in a remote REST backend; the app holds only ephemeral view
//! state plus one bearer token in local storage.

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
