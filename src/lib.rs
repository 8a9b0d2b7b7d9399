//! # Seshat Assistant Telegram Bot
//!
//! A menu-driven Telegram bot for the Académie Sapience Universelle. It
//! renders informational pages behind inline keyboards and issues one
//! discount code per user, either directly or after the user submits an
//! email address.

pub mod bot;
pub mod config;
pub mod content;
pub mod db;
pub mod discount;
pub mod errors;
pub mod event;
pub mod handlers;
pub mod ledger;
pub mod router;
pub mod session;
