//! Service layer: orchestration of the domain ports

pub mod env_loader;

pub use env_loader::{load, load_with_dotenv, EnvironmentLoader};
