//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the document title.
pub const APP_NAME: &str = "Sign in with MetaMask";

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Wallet Configuration
// =============================================================================

/// Global binding under which EIP-1193 wallets inject their provider.
pub const PROVIDER_GLOBAL: &str = "ethereum";

/// JSON-RPC method that prompts the user to expose their accounts.
pub const REQUEST_ACCOUNTS_METHOD: &str = "eth_requestAccounts";

/// Upper bound on how long a pending account request may stay open.
///
/// The wallet popup waits on the user, so this is generous.
pub const WALLET_REQUEST_TIMEOUT_MS: i32 = 120_000;

/// Address truncation for display (`0x11...aaaa`).
pub mod address_display {
    /// Leading characters kept.
    pub const PREFIX_CHARS: usize = 4;
    /// Trailing characters kept.
    pub const SUFFIX_CHARS: usize = 4;
    /// Separator between prefix and suffix.
    pub const ELLIPSIS: &str = "...";
}

// =============================================================================
// UI Text
// =============================================================================

/// Label shown next to the connected address.
pub const CONNECTED_LABEL: &str = "Connected:";

/// Label shown next to the connect button.
pub const SIGN_IN_LABEL: &str = "Sign in Metamask :";

/// Tooltip over the connect button.
pub const WALLET_TOOLTIP: &str = "MetaMask";

/// Tooltip over the connect button while a request is pending.
pub const CONNECTING_TOOLTIP: &str = "Connecting...";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
