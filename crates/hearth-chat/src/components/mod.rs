//! UI components for the chat application.

pub mod app;
pub mod message_input;
pub mod message_list;
pub mod thread_panel;
