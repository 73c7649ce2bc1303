//! Error types for the wallet login flow.
//!
//! Two layers:
//!
//! - [`WalletError`] - what went wrong talking to the injected provider
//! - [`LoginError`] - what the user is told about it

use thiserror::Error;

/// Wallet-related errors for MetaMask/EIP-1193 integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// MetaMask or compatible wallet not installed
    #[error("MetaMask not installed. Please install MetaMask extension.")]
    NotInstalled,
    /// Failed to build or dispatch the request
    #[error("Failed to create wallet request")]
    RequestCreationFailed,
    /// Request rejected by the user or failed inside the wallet
    #[error("Wallet request rejected: {0}")]
    RequestRejected(String),
    /// Wallet did not answer in time
    #[error("Wallet request timed out")]
    Timeout,
    /// Wallet answered with something that is not an account list
    #[error("Invalid wallet response: {0}")]
    InvalidResponse(String),
}

/// User-facing login failures.
///
/// The display strings are exactly what the widget shows under the button.
/// Detail from the underlying [`WalletError`] is kept as the source for
/// diagnostics and never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("MetaMask is not installed!")]
    ProviderNotInstalled,
    #[error("No accounts found!")]
    NoAccountsFound,
    #[error("Failed to connect to MetaMask")]
    ConnectionFailed(#[source] WalletError),
}

impl From<WalletError> for LoginError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::NoWindow | WalletError::NotInstalled => Self::ProviderNotInstalled,
            other => Self::ConnectionFailed(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            LoginError::ProviderNotInstalled.to_string(),
            "MetaMask is not installed!"
        );
        assert_eq!(LoginError::NoAccountsFound.to_string(), "No accounts found!");
        assert_eq!(
            LoginError::ConnectionFailed(WalletError::Timeout).to_string(),
            "Failed to connect to MetaMask"
        );
    }

    #[test]
    fn test_connection_failed_hides_detail() {
        let err = LoginError::from(WalletError::RequestRejected(
            "User rejected the request.".to_string(),
        ));
        assert!(!err.to_string().contains("User rejected"));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("Wallet request rejected: User rejected the request.")
        );
    }

    #[test]
    fn test_missing_provider_maps_to_not_installed() {
        assert_eq!(
            LoginError::from(WalletError::NotInstalled),
            LoginError::ProviderNotInstalled
        );
        assert_eq!(
            LoginError::from(WalletError::NoWindow),
            LoginError::ProviderNotInstalled
        );
    }

    #[test]
    fn test_other_wallet_errors_map_to_connection_failed() {
        for err in [
            WalletError::RequestCreationFailed,
            WalletError::Timeout,
            WalletError::InvalidResponse("null".to_string()),
        ] {
            assert!(matches!(
                LoginError::from(err),
                LoginError::ConnectionFailed(_)
            ));
        }
    }
}
