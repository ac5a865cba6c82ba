//! Loading the API environment from the real process environment.
//!
//! Every test scopes its variables with temp-env, which serializes access to
//! the process environment across test threads.

use envgate::{load, load_with_dotenv, Env, EnvError, EnvironmentLoader};
use std::fs;
use tempfile::TempDir;

const VAR: &str = "NEXT_PUBLIC_API_URL";

#[test]
fn test_scenario_variable_set() {
    temp_env::with_var(VAR, Some("https://api.example.com"), || {
        let env = load().unwrap();
        assert_eq!(
            env,
            Env {
                api_url: "https://api.example.com".to_string()
            }
        );
    });
}

#[test]
fn test_scenario_variable_missing() {
    temp_env::with_var_unset(VAR, || {
        let err = load().unwrap_err();

        let EnvError::ConfigurationInvalid(failure) = &err;
        assert_eq!(failure.fields().collect::<Vec<_>>(), vec!["API_URL"]);
        assert!(err.to_string().contains("- API_URL:"));
    });
}

#[test]
fn test_scenario_dotenv_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "NEXT_PUBLIC_API_URL=https://file.example.com\n").unwrap();

    temp_env::with_var_unset(VAR, || {
        let env: Env = EnvironmentLoader::new().with_dotenv(&path).load().unwrap();
        assert_eq!(env.api_url, "https://file.example.com");
    });
}

#[test]
fn test_dotenv_missing_file_still_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");

    temp_env::with_var(VAR, Some("https://api.example.com"), || {
        let env: Env = EnvironmentLoader::new().with_dotenv(&path).load().unwrap();
        assert_eq!(env.api_url, "https://api.example.com");
    });

    temp_env::with_var_unset(VAR, || {
        let result: Result<Env, _> = EnvironmentLoader::new().with_dotenv(&path).load();
        assert!(result.is_err());
    });
}

#[test]
fn test_dotenv_does_not_override_process() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "NEXT_PUBLIC_API_URL=https://file.example.com\n").unwrap();

    temp_env::with_var(VAR, Some("https://process.example.com"), || {
        let env: Env = EnvironmentLoader::new().with_dotenv(&path).load().unwrap();
        assert_eq!(env.api_url, "https://process.example.com");
    });
}

#[test]
fn test_load_with_dotenv_without_file_in_cwd() {
    // The test working directory is the crate root, which ships no .env file.
    temp_env::with_var(VAR, Some("https://api.example.com"), || {
        assert_eq!(load_with_dotenv().unwrap().api_url, "https://api.example.com");
    });
}

#[test]
fn test_repeated_loads_are_equal() {
    temp_env::with_var(VAR, Some("https://api.example.com"), || {
        assert_eq!(load().unwrap(), load().unwrap());
    });
}

#[cfg(unix)]
#[test]
fn test_non_unicode_value_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let value = OsStr::from_bytes(&[0x66, 0x6f, 0xff, 0x6f]);
    temp_env::with_var(VAR, Some(value), || {
        let message = load().unwrap_err().to_string();
        assert!(message.contains("- API_URL: Expected string, received non-unicode data"));
    });
}
