//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Process environment and dotenv file sources
//! - Schema validation backed by figment extraction
//! - Settings management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod env;
pub mod logging;
pub mod validators;
