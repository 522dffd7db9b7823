use super::*;

#[test]
fn utc_clock_label_formats_epoch_as_midnight() {
    assert_eq!(utc_clock_label(0.0), "00:00");
}

#[test]
fn utc_clock_label_pads_hours_and_minutes() {
    // 1970-01-01T09:05:59Z
    let ms = ((9 * 60 + 5) * 60 + 59) as f64 * 1000.0;
    assert_eq!(utc_clock_label(ms), "09:05");
}

#[test]
fn utc_clock_label_wraps_across_days() {
    // 2024-03-01T23:59:00Z
    assert_eq!(utc_clock_label(1_709_337_540_000.0), "23:59");
}

#[test]
fn utc_clock_label_handles_pre_epoch_times() {
    assert_eq!(utc_clock_label(-60_000.0), "23:59");
}

#[test]
fn utc_clock_label_is_empty_for_non_finite_input() {
    assert_eq!(utc_clock_label(f64::NAN), "");
    assert_eq!(utc_clock_label(f64::INFINITY), "");
}

#[cfg(not(feature = "csr"))]
#[test]
fn time_label_matches_utc_label_off_browser() {
    assert_eq!(time_label(0.0), utc_clock_label(0.0));
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}
