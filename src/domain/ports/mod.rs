pub mod env_source;
pub mod validator;

pub use env_source::EnvSource;
pub use validator::Validator;
