// Unit tests for business rules

use super::*;

fn selection(start: &str, end: &str) -> ClipSelection {
    ClipSelection::with_bounds(TimeCode::parse(start).unwrap(), TimeCode::parse(end).unwrap())
}

fn from_seconds(start: u64, end: u64) -> ClipSelection {
    ClipSelection::with_bounds(
        TimeCode::from_seconds(start as f64),
        TimeCode::from_seconds(end as f64),
    )
}

#[test]
fn test_incomplete_selection() {
    let mut partial = ClipSelection::new();
    assert_eq!(
        ClipValidator::validate(&partial),
        Err(SelectionError::Incomplete)
    );

    partial.start = Some(TimeCode::parse("00:00:10").unwrap());
    assert_eq!(
        ClipValidator::validate(&partial),
        Err(SelectionError::Incomplete)
    );
}

#[test]
fn test_valid_selection_duration_is_exact() {
    for (start, end) in [(0u64, 1u64), (60, 90), (100, 2800), (3600, 3600 + 1234)] {
        let duration = ClipValidator::validate(&from_seconds(start, end)).unwrap();
        assert_eq!(duration.total_seconds, (end - start) as i64);
    }
}

#[test]
fn test_non_positive_duration() {
    for (start, end) in [(10u64, 10u64), (90, 60), (3600, 0)] {
        assert_eq!(
            ClipValidator::validate(&from_seconds(start, end)),
            Err(SelectionError::NonPositiveDuration)
        );
    }
}

#[test]
fn test_max_duration_boundary() {
    assert!(ClipValidator::validate(&from_seconds(0, 2700)).is_ok());
    assert_eq!(
        ClipValidator::validate(&from_seconds(0, 2701)),
        Err(SelectionError::TooLong {
            minutes: 45,
            seconds: 1
        })
    );
}

#[test]
fn test_too_long_message_reports_duration() {
    let err = ClipValidator::validate(&selection("00:00:00", "01:00:30")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Clip duration cannot exceed 45 minutes. Current duration: 60m 30s"
    );
}

#[test]
fn test_estimate_size_scenario() {
    let duration = ClipValidator::validate(&selection("00:01:00", "00:01:30")).unwrap();
    assert_eq!(duration.minutes, 0);
    assert_eq!(duration.seconds, 30);
    assert_eq!(ClipValidator::estimate_size_mb(duration.total_seconds), 4);
    assert_eq!(ClipValidator::estimate_size_mb(2700), 360);
}

#[test]
fn test_to_request_carries_bounds() {
    let (request, duration) = ClipValidator::to_request(
        "https://youtu.be/dQw4w9WgXcQ",
        &selection("00:01:00", "00:01:30"),
        MAX_CLIP_SECONDS,
    )
    .unwrap();
    assert_eq!(request.start_time, "00:01:00");
    assert_eq!(request.end_time, "00:01:30");
    assert_eq!(duration.total_seconds, 30);
}

#[test]
fn test_custom_limit() {
    assert!(ClipValidator::validate_with_limit(&from_seconds(0, 120), 60).is_err());
    assert!(ClipValidator::validate_with_limit(&from_seconds(0, 60), 60).is_ok());
}

#[test]
fn test_far_end_is_too_long_not_reversed() {
    let sel = selection("00:00:00", "00:00:9223372036854775807");
    assert!(matches!(
        ClipValidator::validate(&sel),
        Err(SelectionError::TooLong { .. })
    ));
}
