//! Sign-in widget for browser-injected EIP-1193 wallets (MetaMask),
//! built with Leptos for client-side rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
