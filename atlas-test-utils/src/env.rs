//! Environment variable management for testing
//!
//! Environment variables are process-global while tests run in parallel, so
//! every [`EnvVarGuard`] holds a shared lock for its whole lifetime.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Saves a set of environment variables, lets the test change them and
/// restores the original values when dropped
pub struct EnvVarGuard {
  saved: Vec<(String, Option<String>)>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Take the environment lock and remember the current values of `names`
  pub fn new(names: &[&str]) -> Self {
    let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let saved = names
      .iter()
      .map(|name| (name.to_string(), env::var(name).ok()))
      .collect();

    Self { saved, _lock: lock }
  }

  pub fn set(&self, name: &str, value: &str) {
    self.assert_guarded(name);
    // SAFETY: the guard holds ENV_LOCK, so no other guarded test touches the
    // environment concurrently.
    unsafe {
      env::set_var(name, value);
    }
  }

  pub fn remove(&self, name: &str) {
    self.assert_guarded(name);
    // SAFETY: see `set`.
    unsafe {
      env::remove_var(name);
    }
  }

  fn assert_guarded(&self, name: &str) {
    assert!(
      self.saved.iter().any(|(saved, _)| saved == name),
      "{name} is not managed by this EnvVarGuard"
    );
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    for (name, value) in &self.saved {
      // SAFETY: the lock is still held; it is released after this body runs.
      unsafe {
        match value {
          Some(value) => env::set_var(name, value),
          None => env::remove_var(name),
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_restores_original_values() {
    const NAME: &str = "ATLAS_TEST_UTILS_ENV_GUARD";

    {
      let guard = EnvVarGuard::new(&[NAME]);
      guard.remove(NAME);
      assert!(env::var(NAME).is_err());
      guard.set(NAME, "temporary");
      assert_eq!(env::var(NAME).unwrap(), "temporary");
    }

    assert!(env::var(NAME).is_err());
  }
}
