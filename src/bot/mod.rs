//! Bot module for handling Telegram interactions
//!
//! This module adapts Telegram updates to the routing core:
//! - `message_handler`: Handles incoming commands and text messages
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards from menu references

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;
