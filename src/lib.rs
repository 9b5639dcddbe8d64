pub mod config;
pub mod fetch;
pub mod logging;
pub mod trips;
pub mod ui;
