//! Domain layer: schema, raw and validated environment models, and the ports
//! the loader depends on.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{EnvError, EnvResult, FieldError, ValidationFailure};
