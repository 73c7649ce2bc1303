//! Account request flow.
//!
//! Probes the provider, asks it for accounts once and reduces the answer to
//! a single address or a [`LoginError`]. Raw wallet failures are logged here
//! and never reach the UI.

use crate::config::{PROVIDER_GLOBAL, REQUEST_ACCOUNTS_METHOD};
use crate::core::error::{LoginError, WalletError};
use crate::core::wallet::{RpcRequest, WalletProvider};

/// Ask the wallet for account access and return the active account.
///
/// The provider is never called when [`WalletProvider::is_available`]
/// reports it missing.
pub async fn request_account(provider: &dyn WalletProvider) -> Result<String, LoginError> {
    if !provider.is_available() {
        leptos::logging::log!("no wallet provider at window.{}", PROVIDER_GLOBAL);
        return Err(LoginError::ProviderNotInstalled);
    }

    let response = provider
        .request(RpcRequest::new(REQUEST_ACCOUNTS_METHOD))
        .await
        .map_err(failed)?;

    let accounts: Vec<String> = serde_json::from_value(response)
        .map_err(|e| failed(WalletError::InvalidResponse(e.to_string())))?;

    first_account(accounts)
}

/// Pick the active account. Extra accounts are ignored.
fn first_account(accounts: Vec<String>) -> Result<String, LoginError> {
    accounts
        .into_iter()
        .next()
        .filter(|address| !address.is_empty())
        .ok_or(LoginError::NoAccountsFound)
}

fn failed(err: WalletError) -> LoginError {
    leptos::logging::error!("wallet connection failed: {}", err);
    LoginError::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_account_wins() {
        assert_eq!(
            first_account(accounts(&["0xaaaa", "0xbbbb"])),
            Ok("0xaaaa".to_string())
        );
    }

    #[test]
    fn test_no_accounts() {
        assert_eq!(first_account(vec![]), Err(LoginError::NoAccountsFound));
    }

    #[test]
    fn test_empty_first_account() {
        assert_eq!(
            first_account(accounts(&["", "0xbbbb"])),
            Err(LoginError::NoAccountsFound)
        );
    }
}
