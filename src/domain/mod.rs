//! Pure dashboard model: no DOM, no network, no timers.

pub mod activity;
pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod state;
pub mod system;
