//! Storage contracts for keyed JSON preference and collection values.

pub mod prefs;
