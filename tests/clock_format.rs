#![cfg(target_arch = "wasm32")]
use js_sys::Date;
use stock_dashboard_wasm::time_utils::format_clock;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn clock_uses_local_time() {
    let ts = 1_700_000_000_000u64;
    let date = Date::new(&JsValue::from_f64(ts as f64));
    assert_eq!(
        format_clock(ts),
        format!("{:02}:{:02}:{:02}", date.get_hours(), date.get_minutes(), date.get_seconds())
    );
}
