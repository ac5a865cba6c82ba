//! Environment sources: the process environment and `.env` files

pub mod dotenv;
pub mod process;

pub use dotenv::{load_dotenv, DotenvOutcome, DEFAULT_DOTENV_FILE};
pub use process::ProcessEnv;
