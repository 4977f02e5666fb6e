//! Notification event model shared by the herald daemon and its clients.
//!
//! A received notification becomes a [`event::NotificationEventArgs`] that
//! carries one or more style payloads ([`style::StyleArgs`]), each reachable
//! by its key or through [`event::NotificationEventArgs::get_style`].

pub mod action;
pub mod config;
pub mod errors;
pub mod event;
pub mod framing;
pub mod hints;
pub mod history;
pub mod pipeline;
pub mod protocol;
pub mod store;
pub mod style;

#[cfg(feature = "daemon")]
pub mod listener;
