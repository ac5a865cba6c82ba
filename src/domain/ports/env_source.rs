use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

/// Port for reading named environment values.
///
/// Implemented by the process environment in production and by plain maps in
/// tests, so loaders can be exercised without touching global state.
pub trait EnvSource {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).cloned().ok_or(VarError::NotPresent)
    }
}
