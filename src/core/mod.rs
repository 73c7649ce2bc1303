//! Core wallet logic.
//!
//! This module provides:
//! - [`WalletProvider`] and the real [`Eip1193Provider`] bridge
//! - [`request_account`], the one-shot account request flow
//! - [`LoginError`] and [`WalletError`]

pub mod error;
mod login;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod wallet;

pub use error::{LoginError, WalletError};
pub use login::request_account;
pub use wallet::{Eip1193Provider, RpcRequest, SharedProvider, WalletProvider};
