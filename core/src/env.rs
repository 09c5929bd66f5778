use std::collections::HashMap;
use std::fmt::Debug;

/// Env is where credentials are looked up.
///
/// Lookups happen on every call, so changes to the environment are seen by
/// the next request.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable, `None` if it is unset or not valid utf-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// A fixed set of variables, handy for tests and for callers that keep
/// credentials outside the process environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The variables visible through this env.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}
