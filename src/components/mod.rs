//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`login`] - MetaMask sign-in widget

pub mod icons;
pub mod login;

pub use login::LoginWithMetaMask;
