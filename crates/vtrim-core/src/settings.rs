use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-library trim configuration. Both offsets are seconds; zero disables
/// the corresponding trim.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrimSettings {
    #[serde(default)]
    pub start_seconds: f64,
    #[serde(default)]
    pub end_seconds: f64,
}

impl TrimSettings {
    /// Label the host renders next to the start offset field.
    pub const START_LABEL: &'static str = "Seconds to trim off the start of the files";
    /// Label the host renders next to the end offset field.
    pub const END_LABEL: &'static str = "Seconds to trim off the end of the files";

    pub fn new(start_seconds: f64, end_seconds: f64) -> Self {
        Self {
            start_seconds,
            end_seconds,
        }
    }

    /// Parse the host's persisted settings blob. Missing fields fall back to
    /// zero, so an empty object `{}` is a valid no-trim configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
