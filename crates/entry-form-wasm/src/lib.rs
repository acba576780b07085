//! Entry form WASM
//!
//! WebAssembly bindings for the entry form's live checks.
//! The page calls these on blur / keyup; the server re-validates on submit.

use std::collections::HashMap;

use chrono::NaiveDate;
use entry_form_core::live;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Failing group returned to JavaScript
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupError {
    pub group: String,
    pub message: String,
}

/// The browser's local calendar date
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn message(outcome: Option<&'static str>) -> Option<String> {
    outcome.map(str::to_string)
}

#[wasm_bindgen(js_name = validateName)]
pub fn validate_name(value: &str) -> Option<String> {
    message(live::check_name(value))
}

#[wasm_bindgen(js_name = validateKana)]
pub fn validate_kana(value: &str) -> Option<String> {
    message(live::check_kana(value))
}

/// Birth date from the year / month / day selects
#[wasm_bindgen(js_name = validateBirthDate)]
pub fn validate_birth_date(year: &str, month: &str, day: &str) -> Option<String> {
    message(live::check_birth_parts(year, month, day, today()))
}

/// Birth date from a single `YYYY-MM-DD` input
#[wasm_bindgen(js_name = validateBirthDateIso)]
pub fn validate_birth_date_iso(value: &str) -> Option<String> {
    message(live::check_birth_date(value, today()))
}

#[wasm_bindgen(js_name = validatePostalCode)]
pub fn validate_postal_code(value: &str) -> Option<String> {
    message(live::check_postal_code(value))
}

#[wasm_bindgen(js_name = validateAddress)]
pub fn validate_address(prefecture: &str, city_town: &str, building: &str) -> Option<String> {
    message(live::check_address(prefecture, city_town, building))
}

#[wasm_bindgen(js_name = validateTel)]
pub fn validate_tel(value: &str) -> Option<String> {
    message(live::check_tel(value))
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email(value: &str) -> Option<String> {
    message(live::check_email(value))
}

/// Check every group whose inputs are present in `values`
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm({ name: '山田太郎', postal_code: '1000001' });
/// // [{ group: 'postal_code', message: '...' }]
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: HashMap<String, String> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;

    let errors = form_errors(&values, today());
    if !errors.is_empty() {
        web_sys::console::debug_1(&JsValue::from_str(&format!("{} group(s) failed", errors.len())));
    }

    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

fn form_errors(values: &HashMap<String, String>, today: NaiveDate) -> Vec<GroupError> {
    live::check_form(values, today)
        .into_iter()
        .map(|(group, message)| GroupError {
            group: group.to_string(),
            message: message.to_string(),
        })
        .collect()
}
