use serde::{Deserialize, Serialize};

use crate::settings::TrimSettings;

/// The computed trim window for a single file.
///
/// `start_secs` is a seek offset into the source. `end_secs` is an absolute
/// end timestamp, not a duration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrimWindow {
    pub start_secs: Option<f64>,
    pub end_secs: Option<f64>,
}

impl TrimWindow {
    /// True when neither offset applies and the file passes through untrimmed.
    pub fn is_passthrough(&self) -> bool {
        self.start_secs.is_none() && self.end_secs.is_none()
    }
}

/// Outcome of the trim computation for one file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrimDecision {
    /// Leave the file untouched for this run; it may be picked up again after
    /// reconfiguration.
    Skip,
    Proceed(TrimWindow),
}

/// Decide whether the configured offsets fit inside `duration` and, if so,
/// compute the window to apply.
///
/// An unknown or non-positive duration skips the file, as does either offset
/// exceeding the duration. Offsets that are zero or negative are treated as
/// "no trim". The end offset is checked against the original duration, never
/// against the duration remaining after the start trim.
pub fn compute_trim_window(duration: Option<f64>, settings: &TrimSettings) -> TrimDecision {
    let Some(duration) = duration.filter(|d| d.is_finite() && *d > 0.0) else {
        return TrimDecision::Skip;
    };

    let mut window = TrimWindow::default();

    if settings.start_seconds > 0.0 {
        if settings.start_seconds > duration {
            return TrimDecision::Skip;
        }
        window.start_secs = Some(settings.start_seconds);
    }

    if settings.end_seconds > 0.0 {
        if settings.end_seconds > duration {
            return TrimDecision::Skip;
        }
        window.end_secs = Some(duration - settings.end_seconds);
    }

    TrimDecision::Proceed(window)
}
