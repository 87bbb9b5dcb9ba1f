use std::path::Path;

use vtrim_core::trim::TrimWindow;
use vtrim_plugin::command::TranscodeCommand;
use vtrim_test_harness::assertions::{assert_flag_pair, assert_no_flag, assert_token_order};

fn command() -> TranscodeCommand {
    TranscodeCommand::new(Path::new("/library/in.mkv"), Path::new("/cache/out.mkv"))
}

#[test]
fn test_passthrough_argument_list_is_exact() {
    let args = command().build();
    let expected: Vec<String> = [
        "-i",
        "/library/in.mkv",
        "-hide_banner",
        "-loglevel",
        "info",
        "-strict",
        "-2",
        "-max_muxing_queue_size",
        "4096",
        "-c",
        "copy",
        "-map",
        "0",
        "-y",
        "/cache/out.mkv",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(args, expected);
}

#[test]
fn test_seek_start_inserted_between_format_and_copy_flags() {
    let args = command().seek_start(10.0).build();
    assert_flag_pair(&args, "-ss", "10");
    assert_no_flag(&args, "-to");
    assert_token_order(&args, &["-max_muxing_queue_size", "-ss", "-c", "-y"]);
}

#[test]
fn test_end_timestamp_inserted_between_format_and_copy_flags() {
    let args = command().end_at(80.0).build();
    assert_flag_pair(&args, "-to", "80");
    assert_no_flag(&args, "-ss");
    assert_token_order(&args, &["-max_muxing_queue_size", "-to", "-c", "-y"]);
}

#[test]
fn test_seek_start_precedes_end_timestamp() {
    let args = command().seek_start(10.0).end_at(80.0).build();
    assert_token_order(&args, &["-i", "-ss", "-to", "-c", "-map", "-y"]);
}

#[test]
fn test_fractional_seconds_are_preserved() {
    let args = command().seek_start(2.5).end_at(117.564).build();
    assert_flag_pair(&args, "-ss", "2.5");
    assert_flag_pair(&args, "-to", "117.564");
}

#[test]
fn test_with_window_applies_only_set_fields() {
    let window = TrimWindow {
        start_secs: None,
        end_secs: Some(95.0),
    };
    let args = command().with_window(&window).build();
    assert_no_flag(&args, "-ss");
    assert_flag_pair(&args, "-to", "95");
}

#[test]
fn test_output_file_is_last_token() {
    let args = command().seek_start(1.0).build();
    assert_eq!(args.last().map(String::as_str), Some("/cache/out.mkv"));
}
