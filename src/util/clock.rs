//! Wall-clock helpers for message timestamps.
//!
//! In the browser the label comes from `Date.toLocaleTimeString` so it
//! follows the visitor's locale. Off-browser (tests) it falls back to a
//! UTC `HH:MM` rendering.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}

/// Localized hour:minute label for a message sent at `ms`.
pub fn time_label(ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;

        let options = js_sys::Object::new();
        let hour = js_sys::Reflect::set(&options, &JsValue::from_str("hour"), &JsValue::from_str("2-digit"));
        let minute = js_sys::Reflect::set(&options, &JsValue::from_str("minute"), &JsValue::from_str("2-digit"));
        if hour.is_err() || minute.is_err() {
            return utc_clock_label(ms);
        }
        let date = js_sys::Date::new(&JsValue::from_f64(ms));
        // Only time fields are requested, so no date part is added.
        String::from(date.to_locale_string("default", &options))
    }
    #[cfg(not(feature = "csr"))]
    {
        utc_clock_label(ms)
    }
}

/// `HH:MM` in UTC for a millisecond timestamp. Non-finite input yields an
/// empty label.
#[allow(clippy::cast_possible_truncation)]
pub fn utc_clock_label(ms: f64) -> String {
    if !ms.is_finite() {
        return String::new();
    }
    let minutes = (ms / MS_PER_MINUTE).floor() as i64;
    let minute_of_day = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}
