//! Display Formatting
//!
//! Small helpers for timestamps, currency, and parking durations.

use wasm_bindgen::JsValue;

/// Locale-formatted date and time, "N/A" when the backend sent nothing.
pub fn datetime(value: Option<&str>) -> String {
    match value {
        Some(v) => js_sys::Date::new(&JsValue::from_str(v))
            .to_locale_string("en-US", &JsValue::UNDEFINED)
            .into(),
        None => "N/A".to_string(),
    }
}

/// Locale-formatted date only.
pub fn date(value: Option<&str>) -> String {
    match value {
        Some(v) => js_sys::Date::new(&JsValue::from_str(v))
            .to_locale_date_string("en-US", &JsValue::UNDEFINED)
            .into(),
        None => "N/A".to_string(),
    }
}

/// Whole minutes elapsed since an ISO timestamp, floored at zero.
pub fn minutes_since(iso: &str) -> u64 {
    let then = js_sys::Date::new(&JsValue::from_str(iso)).get_time();
    let elapsed = js_sys::Date::now() - then;
    (elapsed / 60_000.0).max(0.0) as u64
}

/// Whether an ISO timestamp falls on the current local date.
pub fn is_today(iso: &str) -> bool {
    let then = js_sys::Date::new(&JsValue::from_str(iso));
    let now = js_sys::Date::new_0();
    then.get_full_year() == now.get_full_year()
        && then.get_month() == now.get_month()
        && then.get_date() == now.get_date()
}

/// Fractional days until an ISO timestamp; negative when already past.
pub fn days_until(iso: &str) -> f64 {
    let then = js_sys::Date::new(&JsValue::from_str(iso)).get_time();
    (then - js_sys::Date::now()) / 86_400_000.0
}

/// Amount in VND with thousands separators, e.g. `1,250,000 VND`.
pub fn vnd(amount: f64) -> String {
    let n = amount.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out} VND")
    } else {
        format!("{out} VND")
    }
}

#[cfg(test)]
mod tests {
    use super::vnd;

    #[test]
    fn vnd_groups_thousands() {
        assert_eq!(vnd(0.0), "0 VND");
        assert_eq!(vnd(950.0), "950 VND");
        assert_eq!(vnd(15_000.0), "15,000 VND");
        assert_eq!(vnd(1_250_000.0), "1,250,000 VND");
        assert_eq!(vnd(-15_000.0), "-15,000 VND");
    }

    #[test]
    fn vnd_rounds_fractions() {
        assert_eq!(vnd(999.6), "1,000 VND");
    }
}
