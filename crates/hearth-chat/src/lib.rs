//! Hearth Chat: a single-room desktop chat that hosts the message action sheet.
//!
//! Re-exports components and state for embedding in other apps.

pub mod components;
pub mod state;

/// Chat-specific CSS for embedding in host apps.
pub const CHAT_CSS: &str = include_str!("style.css");
