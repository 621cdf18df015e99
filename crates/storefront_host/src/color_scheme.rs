//! OS color-scheme preference contract.
//!
//! The storefront theme falls back to the operating-system preference until the
//! user explicitly picks light or dark. The browser adapter probes
//! `prefers-color-scheme`; non-browser targets use [`FixedColorSchemeSource`].

use serde::{Deserialize, Serialize};

/// Resolved color scheme applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl ColorScheme {
    /// Stable identifier persisted under the `theme` storage key.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted scheme identifier.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the opposite scheme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Host service reporting the OS-level color-scheme preference.
pub trait ColorSchemeSource {
    /// Returns the current OS preference.
    fn preferred(&self) -> ColorScheme;
}

#[derive(Debug, Clone, Copy)]
/// Color-scheme source returning a fixed value; default for tests and non-browser targets.
pub struct FixedColorSchemeSource(pub ColorScheme);

impl Default for FixedColorSchemeSource {
    fn default() -> Self {
        Self(ColorScheme::Light)
    }
}

impl ColorSchemeSource for FixedColorSchemeSource {
    fn preferred(&self) -> ColorScheme {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_ids_round_trip() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(ColorScheme::parse(scheme.id()), Some(scheme));
        }
        assert_eq!(ColorScheme::parse("sepia"), None);
    }

    #[test]
    fn toggle_flips_scheme() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
    }
}
