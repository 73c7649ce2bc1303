//! Promise utilities for talking to injected JavaScript APIs.

use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::dom;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected; carries the rejection value.
    Error(JsValue),
}

/// Race a promise against a timeout.
///
/// The timer resolves with a private marker object, so a promise that
/// legitimately resolves to `undefined` still counts as completed.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error(JsValue::from_str("Window not available"));
    };

    let marker: JsValue = Object::new().into();
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_1(
            &resolve, timeout_ms, &marker,
        );
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) if Object::is(&result, &marker) => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(e),
    }
}

// =============================================================================
// Error Formatting
// =============================================================================

/// Describe a thrown or rejected JS value for logs.
///
/// EIP-1193 errors are objects with `message` and a numeric `code`
/// (4001 when the user closes the popup).
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if !err.is_object() {
        return format!("{:?}", err);
    }

    let message = Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string());
    let code = Reflect::get(err, &"code".into())
        .ok()
        .and_then(|c| c.as_f64());

    match (message, code) {
        (Some(message), Some(code)) => format!("{} (code {})", message, code),
        (Some(message), None) => message,
        (None, Some(code)) => format!("code {}", code),
        (None, None) => format!("{:?}", err),
    }
}
