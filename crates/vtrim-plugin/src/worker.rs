use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vtrim_core::settings::TrimSettings;
use vtrim_core::trim::{TrimDecision, compute_trim_window};

use crate::command::TranscodeCommand;
use crate::error::Result;
use crate::probe::FileProbe;

/// One file handed to the worker stage by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerTask {
    /// Source file the ffmpeg command would read.
    pub file_in: PathBuf,
    /// Destination file the ffmpeg command would write.
    pub file_out: PathBuf,
    /// Absolute path to the original library file, when it differs from
    /// `file_in` (earlier plugins may have produced an intermediate).
    #[serde(default)]
    pub original_file_path: Option<PathBuf>,
    /// Probe state for the current file; `None` when probing failed upstream.
    #[serde(default)]
    pub probe: Option<FileProbe>,
}

impl WorkerTask {
    pub fn new(file_in: impl Into<PathBuf>, file_out: impl Into<PathBuf>) -> Self {
        Self {
            file_in: file_in.into(),
            file_out: file_out.into(),
            original_file_path: None,
            probe: None,
        }
    }

    pub fn with_probe(mut self, probe: FileProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let task: Self = serde_json::from_str(json)?;
        Ok(task)
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

/// What the host should do with the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerOutcome {
    /// Leave the file untouched and do not run ffmpeg this pass.
    Skip,
    /// Run ffmpeg with these arguments.
    Transcode { args: Vec<String> },
}

impl WorkerOutcome {
    pub fn should_transcode(&self) -> bool {
        matches!(self, WorkerOutcome::Transcode { .. })
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

/// Worker-stage hook: decide whether the configured trim applies to this
/// file and, when it does, emit the full ffmpeg argument list.
///
/// A missing probe, an unknown duration, or an offset larger than the file
/// all skip the file whole; there is no partial processing. A configuration
/// with both offsets at zero still transcodes, with no seek or end-timestamp
/// tokens in the output.
pub fn on_worker_process(task: &WorkerTask, settings: &TrimSettings) -> WorkerOutcome {
    let duration = task.probe.as_ref().and_then(FileProbe::duration_secs);

    match compute_trim_window(duration, settings) {
        TrimDecision::Skip => WorkerOutcome::Skip,
        TrimDecision::Proceed(window) => {
            let args = TranscodeCommand::new(&task.file_in, &task.file_out)
                .with_window(&window)
                .build();
            WorkerOutcome::Transcode { args }
        }
    }
}
