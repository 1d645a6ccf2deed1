//! Tip Pool Engine
//!
//! This crate distributes pooled restaurant tips across day and night shift
//! staff, remembers per-staff tip-earning multipliers, keeps an append-only
//! history of calculations and exports that history as spreadsheets.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod service;
pub mod store;
