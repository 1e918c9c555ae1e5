//! Account and chain queries through the shared client
//!
//! Errors are flattened to display strings at this layer; pages only show
//! them.

use lib_web3::Web3;

/// What the UI shows about the active wallet session.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionSummary {
    pub accounts: Vec<String>,
    pub chain_id: u64,
}

/// Ask the wallet for account access (prompts the user on first use) and
/// report the resulting session.
pub async fn request_connection(web3: &Web3) -> Result<ConnectionSummary, String> {
    let accounts = web3
        .request_accounts()
        .await
        .map_err(|e| format!("wallet refused account access: {e}"))?;
    let chain_id = web3
        .chain_id()
        .await
        .map_err(|e| format!("failed to read chain id: {e}"))?;
    Ok(ConnectionSummary { accounts, chain_id })
}

/// Read the session without prompting (`eth_accounts`); accounts are empty
/// when the page has no access yet.
pub async fn session_summary(web3: &Web3) -> Result<ConnectionSummary, String> {
    let accounts = web3
        .accounts()
        .await
        .map_err(|e| format!("failed to read accounts: {e}"))?;
    let chain_id = web3
        .chain_id()
        .await
        .map_err(|e| format!("failed to read chain id: {e}"))?;
    Ok(ConnectionSummary { accounts, chain_id })
}
