//! Configuration modules for the Rollbook API.
//!
//! This module contains all configuration-related types and utilities
//! for the application. Each submodule handles a specific aspect of
//! configuration, typically loaded from environment variables.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: SQLite database connection pool initialization
//! - [`server`]: Listen address configuration
//!
//! # Environment Variables
//!
//! Most configuration is loaded from environment variables. See each
//! submodule for specific variable names and their defaults.

pub mod cors;
pub mod database;
pub mod server;
