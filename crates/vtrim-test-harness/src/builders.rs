use vtrim_plugin::probe::{FileProbe, ProbeFormat, ProbeStream};
use vtrim_plugin::worker::WorkerTask;

/// A minimal probe reporting the given duration, with a single video stream.
pub fn probe_with_duration(secs: f64) -> FileProbe {
    FileProbe {
        format: ProbeFormat {
            duration: Some(secs.to_string()),
            format_name: Some("matroska,webm".into()),
            ..ProbeFormat::default()
        },
        streams: vec![ProbeStream {
            index: 0,
            codec_type: Some("video".into()),
            codec_name: Some("h264".into()),
        }],
    }
}

/// A probe whose format section carries no duration (failed or partial probe).
pub fn probe_without_duration() -> FileProbe {
    FileProbe {
        format: ProbeFormat {
            format_name: Some("h264".into()),
            ..ProbeFormat::default()
        },
        streams: Vec::new(),
    }
}

/// A worker task for `file_in` -> `file_out`, optionally carrying a probe.
pub fn task(file_in: &str, file_out: &str, probe: Option<FileProbe>) -> WorkerTask {
    let task = WorkerTask::new(file_in, file_out);
    match probe {
        Some(probe) => task.with_probe(probe),
        None => task,
    }
}
