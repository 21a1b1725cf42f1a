//! Shared UI building blocks

pub mod confirm_dialog;
pub mod loading;
