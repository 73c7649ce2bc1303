use crate::config::{CONNECTED_LABEL, SIGN_IN_LABEL};
use crate::core::LoginError;
use crate::utils::truncate_address;

/// Wallet connection status
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected { address: String },
}

/// Widget state: connection status plus the last error, if any.
///
/// An error only ever accompanies a disconnected widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    status: WalletStatus,
    error: Option<LoginError>,
}

impl LoginState {
    pub fn status(&self) -> &WalletStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self.status, WalletStatus::Connected { .. })
    }

    /// Check if an account request is pending
    pub fn is_connecting(&self) -> bool {
        matches!(self.status, WalletStatus::Connecting)
    }

    /// Start an attempt. Returns `false` if one is already running or the
    /// wallet is connected, in which case nothing changes.
    ///
    /// The previous error is cleared so a new attempt never shows a stale one.
    pub fn begin(&mut self) -> bool {
        if !matches!(self.status, WalletStatus::Disconnected) {
            return false;
        }
        self.status = WalletStatus::Connecting;
        self.error = None;
        true
    }

    /// Apply the outcome of an attempt.
    ///
    /// Failures are dropped once connected; `Connected` is final.
    pub fn finish(&mut self, outcome: Result<String, LoginError>) {
        match outcome {
            Ok(address) => {
                self.status = WalletStatus::Connected { address };
                self.error = None;
            }
            Err(_) if self.is_connected() => {}
            Err(err) => {
                self.status = WalletStatus::Disconnected;
                self.error = Some(err);
            }
        }
    }

    /// Text before the button or address badge.
    pub fn label(&self) -> &'static str {
        if self.is_connected() {
            CONNECTED_LABEL
        } else {
            SIGN_IN_LABEL
        }
    }

    /// Shortened address when connected.
    pub fn display_address(&self) -> Option<String> {
        match &self.status {
            WalletStatus::Connected { address } => Some(truncate_address(address)),
            _ => None,
        }
    }

    /// Error line text, if one should be shown.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
