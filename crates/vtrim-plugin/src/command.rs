use std::path::Path;

use vtrim_core::trim::TrimWindow;

/// Builds the argument list for an ffmpeg stream-copy transcode.
///
/// Token order is fixed: input, logging/format flags, optional seek-start
/// pair, optional end-timestamp pair, stream-copy/mapping flags, output.
/// This type never spawns the process; the host owns execution.
#[derive(Debug, Clone)]
pub struct TranscodeCommand {
    input_path: String,
    output_path: String,
    start_secs: Option<f64>,
    end_secs: Option<f64>,
}

impl TranscodeCommand {
    pub fn new(input: &Path, output: &Path) -> Self {
        Self {
            input_path: input.to_string_lossy().to_string(),
            output_path: output.to_string_lossy().to_string(),
            start_secs: None,
            end_secs: None,
        }
    }

    /// Seek this many seconds into the source before copying (`-ss`).
    pub fn seek_start(mut self, secs: f64) -> Self {
        self.start_secs = Some(secs);
        self
    }

    /// Stop output at this absolute timestamp (`-to`), not a duration.
    pub fn end_at(mut self, secs: f64) -> Self {
        self.end_secs = Some(secs);
        self
    }

    /// Apply a computed trim window; `None` fields leave the command as-is.
    pub fn with_window(mut self, window: &TrimWindow) -> Self {
        if let Some(ss) = window.start_secs {
            self = self.seek_start(ss);
        }
        if let Some(to) = window.end_secs {
            self = self.end_at(to);
        }
        self
    }

    /// Produce the argument vector, excluding the program name.
    pub fn build(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-i".into(),
            self.input_path.clone(),
            "-hide_banner".into(),
            "-loglevel".into(),
            "info".into(),
            "-strict".into(),
            "-2".into(),
            "-max_muxing_queue_size".into(),
            "4096".into(),
        ];

        if let Some(ss) = self.start_secs {
            args.push("-ss".into());
            args.push(ss.to_string());
        }
        if let Some(to) = self.end_secs {
            args.push("-to".into());
            args.push(to.to_string());
        }

        args.extend([
            "-c".into(),
            "copy".into(),
            "-map".into(),
            "0".into(),
            "-y".into(),
            self.output_path.clone(),
        ]);

        args
    }
}
