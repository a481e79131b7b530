//! Utility functions shared by the binary and the server.
//!
//! - [`app_data`] - Application data directory and configuration file

pub mod app_data;

pub use app_data::*;
