//! Waste-management chat proxy.
//!
//! `POST /chat` wraps the user's question in a fixed "brief expert" prompt,
//! forwards it to an Ollama server and trims the answer to two sentences.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
