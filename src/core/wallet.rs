//! Wallet connection logic using web-sys.
//!
//! Provides MetaMask (EIP-1193) wallet connectivity through
//! direct JavaScript interop via Reflect API, behind the
//! [`WalletProvider`] capability so the UI never reads globals itself.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use js_sys::{Function, Object, Promise, Reflect};
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::PROVIDER_GLOBAL;
use crate::core::error::WalletError;
use crate::utils::{RaceResult, dom, js_error_message, race_with_timeout};

/// Future returned by [`WalletProvider::request`].
pub type ProviderFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, WalletError>> + 'a>>;

/// Provider handle shared between the component and its pending requests.
pub type SharedProvider = Rc<dyn WalletProvider>;

/// A `{ method, params? }` request as understood by `provider.request`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Value>>,
}

impl RpcRequest {
    /// Request without parameters.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }
}

/// Injected wallet capability.
pub trait WalletProvider {
    /// Whether a wallet is present right now. Must not have side effects.
    fn is_available(&self) -> bool;

    /// Send one request and wait for the wallet's answer.
    fn request(&self, request: RpcRequest) -> ProviderFuture<'_>;
}

/// The provider MetaMask injects as `window.ethereum`.
///
/// The global is looked up on every call, so a wallet that injects after
/// page load is still picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip1193Provider {
    timeout_ms: Option<i32>,
}

impl Eip1193Provider {
    /// Provider that waits on the wallet indefinitely.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that gives up with [`WalletError::Timeout`] after `timeout_ms`.
    pub fn with_timeout(timeout_ms: i32) -> Self {
        Self {
            timeout_ms: Some(timeout_ms),
        }
    }
}

impl WalletProvider for Eip1193Provider {
    fn is_available(&self) -> bool {
        get_ethereum().is_ok()
    }

    fn request(&self, request: RpcRequest) -> ProviderFuture<'_> {
        let timeout_ms = self.timeout_ms;
        Box::pin(async move {
            let promise = dispatch(&request)?;

            let result = match timeout_ms {
                Some(ms) => match race_with_timeout(promise, ms).await {
                    RaceResult::Completed(value) => value,
                    RaceResult::TimedOut => return Err(WalletError::Timeout),
                    RaceResult::Error(e) => {
                        return Err(WalletError::RequestRejected(js_error_message(&e)));
                    }
                },
                None => JsFuture::from(promise)
                    .await
                    .map_err(|e| WalletError::RequestRejected(js_error_message(&e)))?,
            };

            serde_wasm_bindgen::from_value(result)
                .map_err(|e| WalletError::InvalidResponse(e.to_string()))
        })
    }
}

/// Get the window.ethereum object injected by MetaMask.
fn get_ethereum() -> Result<Object, WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    Reflect::get(&window, &PROVIDER_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WalletError::NotInstalled)
}

/// Call `ethereum.request(args)` and hand back its promise.
fn dispatch(request: &RpcRequest) -> Result<Promise, WalletError> {
    let ethereum = get_ethereum()?;

    // Plain object, not a JS Map
    let args = request
        .serialize(&Serializer::json_compatible())
        .map_err(|_| WalletError::RequestCreationFailed)?;

    let request_fn = Reflect::get(&ethereum, &"request".into())
        .map_err(|_| WalletError::RequestCreationFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestCreationFailed)?;

    // Some providers throw synchronously instead of rejecting
    let returned = request_fn
        .call1(&ethereum, &args)
        .map_err(|e| WalletError::RequestRejected(js_error_message(&e)))?;

    Ok(Promise::resolve(&returned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_params_omits_field() {
        let json = serde_json::to_value(RpcRequest::new("eth_requestAccounts")).unwrap();
        assert_eq!(json, serde_json::json!({ "method": "eth_requestAccounts" }));
    }

    #[test]
    fn test_request_with_params() {
        let request = RpcRequest {
            method: "eth_getBalance".to_string(),
            params: Some(vec![Value::from("0xabc"), Value::from("latest")]),
        };
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["params"], serde_json::json!(["0xabc", "latest"]));
    }
}
