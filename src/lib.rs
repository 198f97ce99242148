//! Time & Attendance Engine
//!
//! This crate records employee clock punches in an append-only ledger,
//! reconstructs daily shifts from them, aggregates weekly hours with an
//! overtime split, estimates pay, and drives the timesheet approval
//! lifecycle. A live roster view reports who is working right now.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod models;
pub mod notify;
pub mod store;
