//! Environment variable management for testing
//!
//! This module provides utilities for managing environment variables during
//! testing to ensure tests don't interfere with each other.

use std::env;

/// RAII guard for a single environment variable
///
/// Captures the variable's value on construction and restores it when
/// dropped, so tests can mutate the environment without leaking state.
pub struct EnvVarGuard {
  name: &'static str,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Create a guard for the given variable, capturing its current value
  pub fn new(name: &'static str) -> Self {
    let original = env::var(name).ok();
    Self { name, original }
  }

  /// Set the variable to the given value
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(self.name, value);
    }
  }

  /// Remove the variable
  pub fn remove(&self) {
    unsafe {
      env::remove_var(self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(self.name, val);
      },
      None => unsafe {
        env::remove_var(self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_restores_original_value() {
    const NAME: &str = "JIRA_TEST_UTILS_GUARD_VAR";

    unsafe {
      env::set_var(NAME, "before");
    }

    {
      let guard = EnvVarGuard::new(NAME);
      guard.set("during");
      assert_eq!(env::var(NAME).unwrap(), "during");

      guard.remove();
      assert!(env::var(NAME).is_err());
    }

    assert_eq!(env::var(NAME).unwrap(), "before");

    unsafe {
      env::remove_var(NAME);
    }
  }

  #[test]
  fn test_guard_removes_variable_it_introduced() {
    const NAME: &str = "JIRA_TEST_UTILS_GUARD_NEW_VAR";

    {
      let guard = EnvVarGuard::new(NAME);
      guard.set("transient");
      assert_eq!(env::var(NAME).unwrap(), "transient");
    }

    assert!(env::var(NAME).is_err());
  }
}
