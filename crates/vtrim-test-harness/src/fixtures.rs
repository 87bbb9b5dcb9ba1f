use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Real-shaped ffprobe output for a two-minute matroska file. Note that
/// ffprobe reports `duration` as a JSON string.
pub const PROBE_MKV: &str = r#"{
  "streams": [
    {
      "index": 0,
      "codec_name": "h264",
      "codec_type": "video",
      "width": 1920,
      "height": 1080
    },
    {
      "index": 1,
      "codec_name": "aac",
      "codec_type": "audio",
      "channels": 2
    }
  ],
  "format": {
    "filename": "episode.mkv",
    "nb_streams": 2,
    "format_name": "matroska,webm",
    "duration": "120.064000",
    "size": "73400320",
    "bit_rate": "4891210"
  }
}"#;

/// Probe output with no duration field at all (e.g. a raw stream).
pub const PROBE_NO_DURATION: &str = r#"{
  "streams": [
    {
      "index": 0,
      "codec_name": "h264",
      "codec_type": "video"
    }
  ],
  "format": {
    "filename": "capture.h264",
    "format_name": "h264"
  }
}"#;

/// Probe output whose duration is not a number.
pub const PROBE_BAD_DURATION: &str = r#"{
  "streams": [],
  "format": {
    "filename": "broken.avi",
    "format_name": "avi",
    "duration": "N/A"
  }
}"#;

/// Create a temporary directory for test fixtures. The directory is removed
/// when the returned guard is dropped.
pub fn fixture_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create fixture dir")
}

/// Write a probe JSON document into `dir` and return its path.
pub fn write_probe_json(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, json).expect("failed to write probe fixture");
    path
}
