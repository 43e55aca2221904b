//! Prayer Times Bot - Telegram bot answering with daily prayer times
//!
//! Users start a session with `/start`, then send a place name or share
//! their location. Each location is geocoded, daily timings are fetched for
//! its coordinates, and a report is sent back before prompting again.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
