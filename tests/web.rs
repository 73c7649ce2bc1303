//! Browser tests for the `window.ethereum` bridge.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Object, Reflect};
use metamask_login::core::{
    Eip1193Provider, LoginError, RpcRequest, WalletError, WalletProvider, request_account,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const ADDRESS: &str = "0x1111111111111111111111111111111111aaaa";

/// Install a fake provider whose `request` runs `body` with `args` in scope.
fn install_ethereum(body: &str) {
    let ethereum = Object::new();
    let request = Function::new_with_args("args", body);
    Reflect::set(&ethereum, &"request".into(), &request).unwrap();
    Reflect::set(&web_sys::window().unwrap(), &"ethereum".into(), &ethereum).unwrap();
}

fn remove_ethereum() {
    let window: Object = web_sys::window().unwrap().into();
    Reflect::delete_property(&window, &"ethereum".into()).unwrap();
}

#[wasm_bindgen_test]
fn test_probe_without_wallet() {
    remove_ethereum();
    assert!(!Eip1193Provider::new().is_available());
}

#[wasm_bindgen_test]
fn test_probe_ignores_non_object() {
    Reflect::set(
        &web_sys::window().unwrap(),
        &"ethereum".into(),
        &JsValue::from_str("not a provider"),
    )
    .unwrap();
    assert!(!Eip1193Provider::new().is_available());
    remove_ethereum();
}

#[wasm_bindgen_test]
async fn test_request_accounts_round_trip() {
    install_ethereum(&format!(
        "if (args.method !== 'eth_requestAccounts' || 'params' in args) {{ \
             return Promise.reject(new Error('unexpected ' + JSON.stringify(args))); \
         }} \
         return Promise.resolve(['{ADDRESS}']);"
    ));

    let account = request_account(&Eip1193Provider::new()).await;
    assert_eq!(account, Ok(ADDRESS.to_string()));
    remove_ethereum();
}

#[wasm_bindgen_test]
async fn test_user_rejection() {
    install_ethereum(
        "const err = new Error('User rejected the request.'); \
         err.code = 4001; \
         return Promise.reject(err);",
    );

    let result = Eip1193Provider::new()
        .request(RpcRequest::new("eth_requestAccounts"))
        .await;
    assert_eq!(
        result,
        Err(WalletError::RequestRejected(
            "User rejected the request. (code 4001)".to_string()
        ))
    );
    remove_ethereum();
}

#[wasm_bindgen_test]
async fn test_synchronous_throw() {
    install_ethereum("throw new Error('boom');");

    let result = request_account(&Eip1193Provider::new()).await;
    assert!(matches!(result, Err(LoginError::ConnectionFailed(_))));
    remove_ethereum();
}

#[wasm_bindgen_test]
async fn test_timeout() {
    install_ethereum("return new Promise(() => {});");

    let result = Eip1193Provider::with_timeout(20)
        .request(RpcRequest::new("eth_requestAccounts"))
        .await;
    assert_eq!(result, Err(WalletError::Timeout));
    remove_ethereum();
}

#[wasm_bindgen_test]
async fn test_undefined_result_is_not_a_timeout() {
    install_ethereum("return Promise.resolve(undefined);");

    let result = request_account(&Eip1193Provider::with_timeout(1_000)).await;
    assert!(matches!(
        result,
        Err(LoginError::ConnectionFailed(WalletError::InvalidResponse(_)))
    ));
    remove_ethereum();
}
