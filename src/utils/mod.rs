//! Utility modules for the Rollbook API.
//!
//! This module contains shared utilities used throughout the application:
//!
//! - [`errors`]: Application error types and handling

pub mod errors;
