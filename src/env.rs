//! Environment variable access with a mockable backend.
//!
//! The binary constructs [`Env::real()`], which reads the process
//! environment. Tests construct [`Env::mock()`] from literal pairs, so
//! config tests never have to call `std::env::set_var` (which is
//! `unsafe` and leaks between parallel tests).

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    mock: Option<HashMap<String, String>>,
}

impl Env {
    /// An `Env` backed by the real process environment.
    pub fn real() -> Self {
        Self { mock: None }
    }

    /// An `Env` backed by the given key-value pairs only.
    #[cfg(test)]
    pub fn mock<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mock: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Look up a variable, `None` when absent.
    pub fn get(&self, name: &str) -> Option<String> {
        match &self.mock {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Whether the variable is present.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Interpret a variable as an on/off switch.
    ///
    /// Recognises `true/1/yes/on` and `false/0/no/off` (case-insensitive).
    /// Returns `None` when the variable is absent or unrecognised.
    pub fn flag(&self, name: &str) -> Option<bool> {
        let value = self.get(name)?;
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => {
                log::debug!("ignoring unrecognised {name} value: {value}");
                None
            }
        }
    }
}
