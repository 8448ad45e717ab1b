//! Terminal portfolio with a validated contact form.
//!
//! The crate is split into pure state (`contact`, `theme`, `state`) and the
//! side effects that drive it (`events`, `storage`, `app`), so everything
//! except the terminal loop can be exercised without a TTY.

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ui;
