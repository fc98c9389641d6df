// Unit tests for domain models

use super::*;

#[test]
fn test_parse_time_hh_mm_ss() {
    assert_eq!(parse_time("00:00:00").unwrap(), 0);
    assert_eq!(parse_time("00:01:30").unwrap(), 90);
    assert_eq!(parse_time("01:02:03").unwrap(), 3723);
}

#[test]
fn test_parse_time_does_not_bound_fields() {
    assert_eq!(parse_time("0:75:90").unwrap(), 75 * 60 + 90);
    assert_eq!(parse_time("100:00:00").unwrap(), 360_000);
}

#[test]
fn test_parse_time_invalid() {
    for bad in [
        "", "12:30", "1:2:3:4", "aa:bb:cc", "-1:00:00", "+1:00:00", "00:00:1.5", "00: 01:00",
        "00::00",
    ] {
        assert!(
            matches!(parse_time(bad), Err(DomainError::InvalidFormat(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_format_time_pads_and_floors() {
    assert_eq!(format_time(0.0), "00:00:00");
    assert_eq!(format_time(59.999), "00:00:59");
    assert_eq!(format_time(3723.7), "01:02:03");
    assert_eq!(format_time(36_000.0), "10:00:00");
}

#[test]
fn test_format_time_degenerate_input() {
    assert_eq!(format_time(-4.0), "00:00:00");
    assert_eq!(format_time(f64::NAN), "00:00:00");
}

#[test]
fn test_time_round_trip() {
    for text in ["00:00:00", "00:01:30", "01:59:59", "12:00:01", "99:59:59"] {
        let seconds = parse_time(text).unwrap();
        assert_eq!(format_time(seconds as f64), text);
    }
}

#[test]
fn test_duration_scenario() {
    let d = duration("00:01:00", "00:01:30").unwrap();
    assert_eq!(
        d,
        ClipDuration {
            minutes: 0,
            seconds: 30,
            total_seconds: 30
        }
    );
    assert_eq!(d.to_string(), "0m 30s");
}

#[test]
fn test_duration_may_be_negative() {
    let d = duration("00:02:00", "00:01:30").unwrap();
    assert_eq!(d.total_seconds, -30);
    assert!(d.minutes < 0);
}

#[test]
fn test_duration_rejects_bad_text() {
    assert!(duration("00:01", "00:02:00").is_err());
}

#[test]
fn test_parse_time_rejects_overflowing_fields() {
    for text in [
        "99999999999999999:00:00",
        "00:999999999999999999:00",
        "00:00:18446744073709551615",
        "00:00:9223372036854775808",
        "00:00:99999999999999999999",
    ] {
        assert!(
            matches!(parse_time(text), Err(DomainError::InvalidFormat(_))),
            "{:?} should be out of range",
            text
        );
    }
    assert_eq!(
        parse_time("00:00:9223372036854775807").unwrap(),
        MAX_TIME_SECONDS
    );
}

#[test]
fn test_duration_with_huge_end_is_an_error() {
    assert!(matches!(
        duration("00:00:00", "00:00:18446744073709551615"),
        Err(DomainError::InvalidFormat(_))
    ));
    let d = duration("00:00:00", "00:00:9223372036854775807").unwrap();
    assert_eq!(d.total_seconds, i64::MAX);
}

#[test]
fn test_time_code_from_huge_position_stays_in_range() {
    let code = TimeCode::from_seconds(1e30);
    assert_eq!(code.seconds(), MAX_TIME_SECONDS);
    let span = ClipDuration::between(&TimeCode::from_seconds(0.0), &code);
    assert_eq!(span.total_seconds, i64::MAX);
}

#[test]
fn test_time_code_from_seconds() {
    let code = TimeCode::from_seconds(61.9);
    assert_eq!(code.as_str(), "00:01:01");
    assert_eq!(code.seconds(), 61);
    assert_eq!(code.hyphenated(), "00-01-01");
}

#[test]
fn test_download_request_filename() {
    let request = DownloadRequest {
        url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        start_time: "00:01:00".to_string(),
        end_time: "00:01:30".to_string(),
    };
    assert_eq!(request.filename(), "youtube-clip-00-01-00-to-00-01-30.mp4");
}

#[test]
fn test_download_request_json_shape() {
    let request = DownloadRequest {
        url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        start_time: "00:01:00".to_string(),
        end_time: "00:01:30".to_string(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["url"], "https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(value["start_time"], "00:01:00");
    assert_eq!(value["end_time"], "00:01:30");
}

#[test]
fn test_outcome_status_messages() {
    let success = DownloadOutcome::Success {
        bytes: vec![1, 2, 3],
        duration: ClipDuration::from_total(95),
        filename: "x.mp4".to_string(),
    };
    assert_eq!(
        success.status(),
        StatusMessage::Success("Clip downloaded successfully! Duration: 1m 35s".to_string())
    );
    assert!(DownloadOutcome::TimedOut.status().is_error());
    assert!(DownloadOutcome::TimedOut
        .status()
        .text()
        .contains("too long or the server is busy"));
}

#[test]
fn test_selection_clear() {
    let mut selection = ClipSelection::with_bounds(
        TimeCode::parse("00:00:10").unwrap(),
        TimeCode::parse("00:00:20").unwrap(),
    );
    assert!(selection.is_complete());
    selection.clear();
    assert_eq!(selection, ClipSelection::new());
}
