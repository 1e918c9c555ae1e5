//! Application constants

use lib_web3::{AddChainParams, NativeCurrency};

/// Local-storage key holding the selected wallet's rdns.
pub const PROVIDER_STORAGE_KEY: &str = "provider";

/// Delay before the backup loading-screen hide runs.
pub const LOADING_HIDE_BACKUP_MS: u32 = 100;

/// A chain the networks page can switch to, with enough metadata to register
/// it via `wallet_addEthereumChain` when the wallet does not know it.
pub struct KnownChain {
    pub id: u64,
    pub name: &'static str,
    pub currency_symbol: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

pub const KNOWN_CHAINS: &[KnownChain] = &[
    KnownChain {
        id: 1,
        name: "Ethereum Mainnet",
        currency_symbol: "ETH",
        rpc_url: "https://eth.llamarpc.com",
        explorer_url: "https://etherscan.io",
    },
    KnownChain {
        id: 11_155_111,
        name: "Sepolia",
        currency_symbol: "ETH",
        rpc_url: "https://rpc.sepolia.org",
        explorer_url: "https://sepolia.etherscan.io",
    },
    KnownChain {
        id: 137,
        name: "Polygon Mainnet",
        currency_symbol: "POL",
        rpc_url: "https://polygon-rpc.com",
        explorer_url: "https://polygonscan.com",
    },
    KnownChain {
        id: 42_161,
        name: "Arbitrum One",
        currency_symbol: "ETH",
        rpc_url: "https://arb1.arbitrum.io/rpc",
        explorer_url: "https://arbiscan.io",
    },
    KnownChain {
        id: 8453,
        name: "Base",
        currency_symbol: "ETH",
        rpc_url: "https://mainnet.base.org",
        explorer_url: "https://basescan.org",
    },
];

impl KnownChain {
    /// Registration parameters for `wallet_addEthereumChain`.
    pub fn add_params(&self) -> AddChainParams {
        AddChainParams::new(self.id, self.name, vec![self.rpc_url.to_string()])
            .with_native_currency(NativeCurrency {
                name: self.currency_symbol.to_string(),
                symbol: self.currency_symbol.to_string(),
                decimals: 18,
            })
            .with_block_explorer(self.explorer_url)
    }
}

/// Display name for a chain id, if it is one we know about.
pub fn chain_name(id: u64) -> Option<&'static str> {
    KNOWN_CHAINS
        .iter()
        .find(|chain| chain.id == id)
        .map(|chain| chain.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_name_lookup() {
        assert_eq!(chain_name(1), Some("Ethereum Mainnet"));
        assert_eq!(chain_name(137), Some("Polygon Mainnet"));
        assert_eq!(chain_name(999_999), None);
    }

    #[test]
    fn test_add_params_carry_registration_metadata() {
        let sepolia = KNOWN_CHAINS
            .iter()
            .find(|chain| chain.id == 11_155_111)
            .unwrap();
        let params = sepolia.add_params();
        assert_eq!(params.chain_id, "0xaa36a7");
        assert_eq!(params.chain_name, "Sepolia");
        assert_eq!(params.rpc_urls, vec!["https://rpc.sepolia.org".to_string()]);
        assert_eq!(params.native_currency.as_ref().unwrap().decimals, 18);
        assert_eq!(
            params.block_explorer_urls,
            vec!["https://sepolia.etherscan.io".to_string()]
        );
    }
}
