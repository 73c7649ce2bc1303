//! In-memory [`WalletProvider`] for tests.

use std::cell::RefCell;

use serde_json::Value;

use crate::core::error::WalletError;
use crate::core::wallet::{ProviderFuture, RpcRequest, WalletProvider};

/// Scripted wallet that answers every request with the same response and
/// records what it was asked.
#[derive(Debug)]
pub struct MockProvider {
    installed: bool,
    response: Result<Value, WalletError>,
    requests: RefCell<Vec<RpcRequest>>,
}

impl MockProvider {
    /// Installed wallet answering with `response`.
    pub fn responding(response: Value) -> Self {
        Self {
            installed: true,
            response: Ok(response),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Installed wallet that exposes `accounts`.
    pub fn with_accounts(accounts: &[&str]) -> Self {
        Self::responding(Value::from(accounts.to_vec()))
    }

    /// Installed wallet that fails every request with `err`.
    pub fn failing(err: WalletError) -> Self {
        Self {
            installed: true,
            response: Err(err),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// No wallet injected.
    pub fn absent() -> Self {
        Self {
            installed: false,
            ..Self::with_accounts(&[])
        }
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Requests received, oldest first.
    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.borrow().clone()
    }
}

impl WalletProvider for MockProvider {
    fn is_available(&self) -> bool {
        self.installed
    }

    fn request(&self, request: RpcRequest) -> ProviderFuture<'_> {
        self.requests.borrow_mut().push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}
