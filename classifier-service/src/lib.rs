//! Waste image classification service.
//!
//! `POST /predict` runs an uploaded photo through a pre-trained model and
//! returns the predicted waste category together with static disposal
//! guidance for it.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
