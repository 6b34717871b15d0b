use anyhow::Result;
use serde::Deserialize;
use tokenlon_substreams::params::{decode_address, parse_params};

use crate::constants::{LON_ADDRESS, LON_STAKING_ADDRESS, REWARD_DISTRIBUTOR_ADDRESS};

#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    lon_staking: Option<String>,
    reward_distributor: Option<String>,
    lon: Option<String>,
}

/// Contracts indexed by the staking modules. Unset params fall back to the mainnet deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub lon_staking: Vec<u8>,
    pub reward_distributor: Vec<u8>,
    pub lon: Vec<u8>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            lon_staking: LON_STAKING_ADDRESS.to_vec(),
            reward_distributor: REWARD_DISTRIBUTOR_ADDRESS.to_vec(),
            lon: LON_ADDRESS.to_vec(),
        }
    }
}

impl Params {
    pub fn parse_from_query(query: &str) -> Result<Self> {
        let query: QueryParams = parse_params(query)?;
        let defaults = Params::default();

        Ok(Params {
            lon_staking: address_or(query.lon_staking, defaults.lon_staking)?,
            reward_distributor: address_or(query.reward_distributor, defaults.reward_distributor)?,
            lon: address_or(query.lon, defaults.lon)?,
        })
    }

    pub fn is_tracked(&self, address: &[u8]) -> bool {
        address == self.lon_staking.as_slice() || address == self.reward_distributor.as_slice()
    }
}

fn address_or(value: Option<String>, default: Vec<u8>) -> Result<Vec<u8>> {
    match value {
        Some(value) => decode_address(&value),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_defaults_to_mainnet() {
        assert_eq!(Params::parse_from_query("").unwrap(), Params::default());
    }

    #[test]
    fn test_overrides() {
        let params = Params::parse_from_query(
            "lon_staking=0x1111111111111111111111111111111111111111&lon=2222222222222222222222222222222222222222",
        )
        .unwrap();

        assert_eq!(params.lon_staking, vec![0x11; 20]);
        assert_eq!(params.lon, vec![0x22; 20]);
        assert_eq!(params.reward_distributor, REWARD_DISTRIBUTOR_ADDRESS.to_vec());
        assert!(params.is_tracked(&[0x11; 20]));
        assert!(!params.is_tracked(&hex!("0712629ced85a3a62e5bca96303b8fdd06cbf8dd")));
    }

    #[test]
    fn test_rejects_bad_address() {
        assert!(Params::parse_from_query("lon=0x1234").is_err());
    }
}
