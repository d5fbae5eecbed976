use crate::entity::WalletError;

/// Bebop PMM settlement contract, deployed at the same address on most chains
pub const DEFAULT_SETTLEMENT_ADDRESS: &str = "0xbbbbbBB520d69a9775E85b458C58c648259FAD5F";
const ZKSYNC_SETTLEMENT_ADDRESS: &str = "0x574d1fcF950eb48b11de5DF22A007703cbD2b129";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub chain_id: u64,
    pub name: &'static str,
    /// Network segment used in the swap venue URL
    pub venue_network: &'static str,
    /// Chain name understood by the custody balance endpoint, if it reports this chain
    pub balance_chain: Option<&'static str>,
    pub explorer_tx_url: &'static str,
    pub rpc_url: &'static str,
    pub settlement_address: &'static str,
}

impl ChainInfo {
    pub fn explorer_link(&self, tx_hash: &str) -> String {
        format!("{}{}", self.explorer_tx_url, tx_hash)
    }
}

pub static SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        chain_id: 1,
        name: "Ethereum",
        venue_network: "ethereum",
        balance_chain: Some("ethereum"),
        explorer_tx_url: "https://etherscan.io/tx/",
        rpc_url: "https://ethereum-rpc.publicnode.com",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 10,
        name: "Optimism",
        venue_network: "optimism",
        balance_chain: Some("optimism"),
        explorer_tx_url: "https://optimistic.etherscan.io/tx/",
        rpc_url: "https://mainnet.optimism.io",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 56,
        name: "BNB Smart Chain",
        venue_network: "bsc",
        balance_chain: None,
        explorer_tx_url: "https://bscscan.com/tx/",
        rpc_url: "https://bsc-dataseed.bnbchain.org",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 137,
        name: "Polygon",
        venue_network: "polygon",
        balance_chain: Some("polygon"),
        explorer_tx_url: "https://polygonscan.com/tx/",
        rpc_url: "https://polygon-rpc.com",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 324,
        name: "zkSync Era",
        venue_network: "zksync",
        balance_chain: Some("zksync_era"),
        explorer_tx_url: "https://explorer.zksync.io/tx/",
        rpc_url: "https://mainnet.era.zksync.io",
        settlement_address: ZKSYNC_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 8453,
        name: "Base",
        venue_network: "base",
        balance_chain: Some("base"),
        explorer_tx_url: "https://basescan.org/tx/",
        rpc_url: "https://mainnet.base.org",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 34443,
        name: "Mode",
        venue_network: "mode",
        balance_chain: None,
        explorer_tx_url: "https://modescan.io/tx/",
        rpc_url: "https://mainnet.mode.network",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 42161,
        name: "Arbitrum One",
        venue_network: "arbitrum",
        balance_chain: Some("arbitrum"),
        explorer_tx_url: "https://arbiscan.io/tx/",
        rpc_url: "https://arb1.arbitrum.io/rpc",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 81457,
        name: "Blast",
        venue_network: "blast",
        balance_chain: None,
        explorer_tx_url: "https://blastscan.io/tx/",
        rpc_url: "https://rpc.blast.io",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 167000,
        name: "Taiko",
        venue_network: "taiko",
        balance_chain: None,
        explorer_tx_url: "https://taikoscan.io/tx/",
        rpc_url: "https://rpc.mainnet.taiko.xyz",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
    ChainInfo {
        chain_id: 534352,
        name: "Scroll",
        venue_network: "scroll",
        balance_chain: None,
        explorer_tx_url: "https://scrollscan.com/tx/",
        rpc_url: "https://rpc.scroll.io",
        settlement_address: DEFAULT_SETTLEMENT_ADDRESS,
    },
];

/// Look up a supported chain by its numeric id
pub fn chain_info(chain_id: u64) -> Result<&'static ChainInfo, WalletError> {
    SUPPORTED_CHAINS
        .iter()
        .find(|chain| chain.chain_id == chain_id)
        .ok_or(WalletError::UnsupportedChain(chain_id))
}

pub fn venue_network(chain_id: u64) -> Result<&'static str, WalletError> {
    chain_info(chain_id).map(|chain| chain.venue_network)
}

pub fn balance_chain(chain_id: u64) -> Result<&'static str, WalletError> {
    chain_info(chain_id)?
        .balance_chain
        .ok_or(WalletError::UnsupportedChain(chain_id))
}

pub fn caip2(chain_id: u64) -> String {
    format!("eip155:{}", chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_supported_chain_has_one_distinct_venue_network() {
        let networks: HashSet<_> = SUPPORTED_CHAINS.iter().map(|c| c.venue_network).collect();
        assert_eq!(networks.len(), SUPPORTED_CHAINS.len());

        for chain in SUPPORTED_CHAINS {
            assert_eq!(venue_network(chain.chain_id).unwrap(), chain.venue_network);
        }
    }

    #[test]
    fn chain_ids_are_unique() {
        let ids: HashSet<_> = SUPPORTED_CHAINS.iter().map(|c| c.chain_id).collect();
        assert_eq!(ids.len(), SUPPORTED_CHAINS.len());
    }

    #[test]
    fn unknown_chain_is_rejected() {
        for chain_id in [0, 5, 11155111, 999_999] {
            match venue_network(chain_id) {
                Err(WalletError::UnsupportedChain(id)) => assert_eq!(id, chain_id),
                other => panic!("expected UnsupportedChain, got {:?}", other),
            }
        }
    }

    #[test]
    fn base_entry() {
        let base = chain_info(8453).unwrap();
        assert_eq!(base.venue_network, "base");
        assert_eq!(caip2(base.chain_id), "eip155:8453");
        assert_eq!(
            base.explorer_link("0xabc"),
            "https://basescan.org/tx/0xabc"
        );
    }

    #[test]
    fn balance_chain_requires_custody_support() {
        assert_eq!(balance_chain(42161).unwrap(), "arbitrum");
        assert!(matches!(
            balance_chain(81457),
            Err(WalletError::UnsupportedChain(81457))
        ));
    }
}
