//! Client record management and mortgage simulation HTTP service.
//!
//! Stores client records keyed by their Spanish national id (DNI) in SQLite
//! and exposes a fixed-rate mortgage payment calculator over JSON.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod mortgage;
pub mod validation;
