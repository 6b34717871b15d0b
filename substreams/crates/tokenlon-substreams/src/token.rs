use hex_literal::hex;
use serde::Deserialize;

use crate::abi::{erc20, erc20_bytes32};

pub const ZERO_ADDRESS: [u8; 20] = [0u8; 20];
/// Placeholder some contracts use for native ether.
pub const ETH_ADDRESS: [u8; 20] = hex!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");
pub const WETH_MAINNET: [u8; 20] = hex!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
pub const WETH_ARBITRUM: [u8; 20] = hex!("82aF49447D8a07e3bd95BD0d56f35241523fBab1");
pub const WETH_GOERLI: [u8; 20] = hex!("B4FBF271143F4FBf7B91A5ded31805e42b2208d6");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    Mainnet,
    ArbitrumOne,
    Goerli,
    #[serde(other)]
    Unknown,
}

impl Network {
    pub fn weth(&self) -> [u8; 20] {
        match self {
            Network::Mainnet => WETH_MAINNET,
            Network::ArbitrumOne => WETH_ARBITRUM,
            Network::Goerli => WETH_GOERLI,
            Network::Unknown => ETH_ADDRESS,
        }
    }
}

pub fn is_eth(token: &[u8]) -> bool {
    [ZERO_ADDRESS, ETH_ADDRESS, WETH_MAINNET, WETH_ARBITRUM, WETH_GOERLI]
        .iter()
        .any(|eth| eth.as_slice() == token)
}

/// Ether in any of its spellings is tracked as the network's WETH.
pub fn normalize_token(token: &[u8], network: Network) -> Vec<u8> {
    if is_eth(token) {
        network.weth().to_vec()
    } else {
        token.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub decimals: i32,
    pub name: String,
    pub symbol: String,
}

pub trait TokenMetadataSource {
    /// `None` when the address does not behave like an ERC20 token.
    fn metadata(&self, token: &[u8]) -> Option<TokenMetadata>;
}

/// Reads token metadata with `eth_call`s at the current block.
pub struct RpcTokenMetadata;

impl TokenMetadataSource for RpcTokenMetadata {
    fn metadata(&self, token: &[u8]) -> Option<TokenMetadata> {
        let address = token.to_vec();
        let decimals = erc20::functions::Decimals {}.call(address.clone())?;
        let name = erc20::functions::Name {}
            .call(address.clone())
            .or_else(|| {
                erc20_bytes32::functions::Name {}
                    .call(address.clone())
                    .map(|raw| bytes32_to_string(&raw))
            })?;
        let symbol = erc20::functions::Symbol {}
            .call(address.clone())
            .or_else(|| {
                erc20_bytes32::functions::Symbol {}
                    .call(address)
                    .map(|raw| bytes32_to_string(&raw))
            })?;

        Some(TokenMetadata { decimals: decimals.to_string().parse().ok()?, name, symbol })
    }
}

/// Early tokens such as MKR return their name and symbol as `bytes32`.
pub fn bytes32_to_string(raw: &[u8; 32]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches('\u{0}')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        let dai = hex!("6B175474E89094C44Da98b954EedeAC495271d0F");

        assert_eq!(normalize_token(&ZERO_ADDRESS, Network::Mainnet), WETH_MAINNET.to_vec());
        assert_eq!(normalize_token(&ETH_ADDRESS, Network::ArbitrumOne), WETH_ARBITRUM.to_vec());
        assert_eq!(normalize_token(&WETH_MAINNET, Network::Goerli), WETH_GOERLI.to_vec());
        assert_eq!(normalize_token(&WETH_MAINNET, Network::Unknown), ETH_ADDRESS.to_vec());
        assert_eq!(normalize_token(&dai, Network::Mainnet), dai.to_vec());
    }

    #[test]
    fn test_network_from_params() {
        #[derive(Deserialize)]
        struct Params {
            network: Network,
        }

        let parse = |query: &str| serde_qs::from_str::<Params>(query).unwrap().network;
        assert_eq!(parse("network=mainnet"), Network::Mainnet);
        assert_eq!(parse("network=arbitrum-one"), Network::ArbitrumOne);
        assert_eq!(parse("network=goerli"), Network::Goerli);
        assert_eq!(parse("network=bsc"), Network::Unknown);
    }

    #[test]
    fn test_bytes32_to_string() {
        let mut raw = [0u8; 32];
        raw[..5].copy_from_slice(b"Maker");
        assert_eq!(bytes32_to_string(&raw), "Maker");
    }
}
