//! # Wallet Connector
//!
//! Detect → authorize → verify chain → session.
//!
//! ```text
//! connect(None, ..)          -> Err(ProviderMissing)        no provider calls
//! eth_requestAccounts fails  -> Err(UserRejected | Provider)
//! eth_chainId != chain_id    -> Err(WrongNetwork)           no switch attempted
//! otherwise                  -> Ok(WalletSession { accounts[0], chain_id })
//! ```

use crate::config::Config;
use crate::error::WalletError;
use crate::provider::{self, Eip1193};
use crate::session::WalletSession;
use tracing::{info, warn};

/// Connect to `provider` and check it is on `config.chain_id`.
///
/// Calling this again for an already-authorized account produces an equal
/// session, so repeated clicks never fork the connected address.
pub async fn connect<P: Eip1193 + ?Sized>(
    provider: Option<&P>,
    config: &Config,
) -> Result<WalletSession, WalletError> {
    let Some(provider) = provider else {
        warn!("Wallet provider not found");
        return Err(WalletError::ProviderMissing);
    };
    info!("Wallet provider detected, requesting accounts");

    let accounts = provider::request_accounts(provider).await?;
    let account = accounts.first().ok_or(WalletError::NoAccounts)?;
    let address = provider::parse_account(account)?;

    let chain_id = provider::chain_id(provider).await?;
    if chain_id != config.chain_id {
        warn!(expected = config.chain_id, actual = chain_id, "Wallet is on the wrong network");
        return Err(WalletError::WrongNetwork {
            expected: config.chain_id,
            actual: chain_id,
            chain_name: config.chain_name.clone(),
        });
    }

    let session = WalletSession::new(address, chain_id);
    info!(address = %session.display_address(), chain_id, "Wallet connected");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockProvider;
    use futures::executor::block_on;
    use shared::dto::rpc::{ETH_CHAIN_ID, ETH_REQUEST_ACCOUNTS, INTERNAL_ERROR, USER_REJECTED_REQUEST};

    #[test]
    fn test_connect_without_provider() {
        let result = block_on(connect::<MockProvider>(None, &Config::tea_sepolia()));
        assert_eq!(result, Err(WalletError::ProviderMissing));
    }

    #[test]
    fn test_connect_success() {
        let provider = MockProvider::connected("0x27ea");
        let session = block_on(connect(Some(&provider), &Config::tea_sepolia())).unwrap();

        assert_eq!(session.chain_id, 10218);
        assert_eq!(session.display_address(), "0x52908400098527886E0F7030069857D2E4169EE7");
        assert_eq!(provider.methods(), vec![ETH_REQUEST_ACCOUNTS, ETH_CHAIN_ID]);
    }

    #[test]
    fn test_connect_wrong_network() {
        for chain in ["0x1", "0xaa36a7", "0x27eb"] {
            let provider = MockProvider::connected(chain);
            let result = block_on(connect(Some(&provider), &Config::tea_sepolia()));
            assert!(
                matches!(result, Err(WalletError::WrongNetwork { expected: 10218, .. })),
                "chain {} should be rejected",
                chain
            );
        }
    }

    #[test]
    fn test_connect_user_rejected() {
        let provider = MockProvider::connected("0x27ea")
            .rejecting_accounts(USER_REJECTED_REQUEST, "User rejected the request.");
        let result = block_on(connect(Some(&provider), &Config::tea_sepolia()));

        assert_eq!(result, Err(WalletError::UserRejected("User rejected the request.".to_string())));
        assert_eq!(provider.methods(), vec![ETH_REQUEST_ACCOUNTS]);
    }

    #[test]
    fn test_connect_other_provider_error() {
        let provider = MockProvider::connected("0x27ea")
            .rejecting_accounts(-32002, "Request of type 'wallet_requestPermissions' already pending");
        let result = block_on(connect(Some(&provider), &Config::tea_sepolia()));

        match result {
            Err(WalletError::Provider(err)) => {
                assert_eq!(err.code, -32002);
                assert!(err.message.contains("already pending"));
            }
            other => panic!("expected a provider error, got {:?}", other),
        }
        assert_eq!(provider.methods(), vec![ETH_REQUEST_ACCOUNTS]);
    }

    #[test]
    fn test_connect_malformed_account() {
        let provider = MockProvider::connected("0x27ea").with_accounts(&["garbage"]);
        let result = block_on(connect(Some(&provider), &Config::tea_sepolia()));

        match result {
            Err(WalletError::Provider(err)) => {
                assert_eq!(err.code, INTERNAL_ERROR);
                assert!(err.message.starts_with("Unexpected response to eth_requestAccounts"));
            }
            other => panic!("expected a provider error, got {:?}", other),
        }
        assert_eq!(provider.methods(), vec![ETH_REQUEST_ACCOUNTS]);
    }

    #[test]
    fn test_connect_no_accounts() {
        let provider = MockProvider::connected("0x27ea").with_accounts(&[]);
        let result = block_on(connect(Some(&provider), &Config::tea_sepolia()));
        assert_eq!(result, Err(WalletError::NoAccounts));
    }

    #[test]
    fn test_connect_twice_same_account() {
        let provider = MockProvider::connected("0x27ea");
        let config = Config::tea_sepolia();
        let first = block_on(connect(Some(&provider), &config)).unwrap();
        let second = block_on(connect(Some(&provider), &config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_connect_follows_account_change() {
        let config = Config::tea_sepolia();
        let before = block_on(connect(Some(&MockProvider::connected("0x27ea")), &config)).unwrap();
        let switched = MockProvider::connected("0x27ea").with_accounts(&[MockProvider::RECIPIENT]);
        let after = block_on(connect(Some(&switched), &config)).unwrap();
        assert_ne!(before.address, after.address);
    }
}
