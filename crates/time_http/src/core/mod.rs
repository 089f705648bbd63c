//! # WAT Time Server Core
//!
//! This module provides the fixed-offset time reading served over HTTP.
//!
//! ## Features
//! - Current time in West Africa Time (UTC+1, no DST)
//! - Second-resolution formatting with a zone abbreviation
//! - Injectable clock for deterministic tests
//!
//! ## Modules
//! - `clock`: Clock abstraction and the system clock
//! - `error`: Custom error types and HTTP mapping
//! - `models`: Time reading and response body
//! - `provider`: Offset conversion and formatting
//! - `utils`: Format constants and offset construction

pub mod clock;
pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
