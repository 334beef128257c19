#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use numclass::facts::FixedFacts;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable `ServiceConfig::from_env` reads. Tests clear the ones they do
/// not set so the developer's shell cannot leak into assertions.
pub const CONFIG_VARS: &[&str] = &[
    "HOST",
    "PORT",
    "CORS_ALLOWED_ORIGINS",
    "MAX_NUMBER_MAGNITUDE",
    "NUMBERS_API_URL",
    "NUMBERS_API_TIMEOUT_MS",
    "FUN_FACT_FALLBACK",
    "CONTACT_EMAIL",
    "GITHUB_URL",
    "NUMCLASS_CONFIG",
];

/// Runs `f` with the configuration variables cleared and `changes` applied.
///
/// Restores the previous values on return or unwind, and serializes access to
/// the process environment because tests run in parallel.
pub fn with_config_env<F, R>(changes: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut all: Vec<(&str, Option<&str>)> = CONFIG_VARS.iter().map(|k| (*k, None)).collect();
    all.extend(changes.iter().map(|(k, v)| (*k, Some(*v))));

    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(&all);
    f()
}

/// Runs `f` with `dir` as the working directory, restoring the previous one afterwards.
///
/// Only call this inside [`with_config_env`], which holds the lock that keeps
/// environment-sensitive tests from running concurrently.
pub fn in_dir<F, R>(dir: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ScopedDir::enter(dir);
    f()
}

struct ScopedDir {
    previous: PathBuf,
}

impl ScopedDir {
    fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().expect("current dir");
        std::env::set_current_dir(dir).expect("enter test dir");
        Self { previous }
    }
}

impl Drop for ScopedDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    /// Later entries for the same key win.
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Facts for the numbers used across the HTTP tests.
pub fn sample_facts() -> FixedFacts {
    FixedFacts::new()
        .with_fact(371, "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371")
        .with_fact(28, "28 is the second perfect number.")
        .with_fact(-58, "-58 is a negative number.")
        .with_fact(0, "0 is the additive identity.")
}
