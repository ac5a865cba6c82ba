pub mod bootstrap;

pub use bootstrap::{bootstrap, environment_loader};
