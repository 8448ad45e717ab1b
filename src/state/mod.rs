//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Section, Focus)
//! - State error handling

mod error;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use navigation::{Focus, Section};
pub use state_impl::State;
