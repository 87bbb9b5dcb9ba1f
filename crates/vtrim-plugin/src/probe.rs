use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Container-level metadata as reported by an ffprobe-style inspection tool.
///
/// ffprobe emits its numeric fields as JSON strings, so `duration` stays a
/// string here and is parsed on demand via [`FileProbe::duration_secs`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeFormat {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub format_name: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub bit_rate: Option<String>,
}

/// One stream entry from the probe. Only the fields the plugin cares about
/// are modeled; anything else in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub codec_type: Option<String>,
    #[serde(default)]
    pub codec_name: Option<String>,
}

/// The probe state the host hands in for the current file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileProbe {
    #[serde(default)]
    pub format: ProbeFormat,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

impl FileProbe {
    pub fn from_json(json: &str) -> Result<Self> {
        let probe: Self = serde_json::from_str(json)?;
        Ok(probe)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let probe: Self = serde_json::from_str(&json)?;
        Ok(probe)
    }

    /// Total duration in seconds, if the probe reported a usable one.
    ///
    /// Returns `None` when the field is absent, unparseable, or not a
    /// positive finite number.
    pub fn duration_secs(&self) -> Option<f64> {
        self.format
            .duration
            .as_deref()
            .and_then(|d| d.trim().parse::<f64>().ok())
            .filter(|d| d.is_finite() && *d > 0.0)
    }
}
