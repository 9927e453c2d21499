use js_sys::Date;
use wasm_bindgen::JsValue;

/// `HH:MM:SS` in the browser's local time zone, as shown next to quotes and
/// activity lines.
pub fn format_clock(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    format_hms(date.get_hours(), date.get_minutes(), date.get_seconds())
}

pub fn format_hms(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Label for an optional update time; `-` until the first update.
pub fn format_last_update(timestamp: Option<u64>, format: impl Fn(u64) -> String) -> String {
    timestamp.map(format).unwrap_or_else(|| "-".to_string())
}
