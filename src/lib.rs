//! BabbageBox Library
//!
//! Core library for the BabbageBox desktop chat client.

pub mod api;
pub mod app;
pub mod storage;
pub mod store;
pub mod types;
pub mod ui;
