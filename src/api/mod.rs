//! API Layer
//!
//! HTTP communication with the Curió REST backend.

pub mod client;

pub use client::*;
