//! Data models and types for the application.
//!
//! Contains:
//! - [`LoginState`], [`WalletStatus`] - Wallet connection state shown by the widget

mod wallet;

pub use wallet::{LoginState, WalletStatus};
