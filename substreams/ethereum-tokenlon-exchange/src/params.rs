use anyhow::Result;
use serde::Deserialize;
use tokenlon_substreams::{
    params::{decode_address, parse_params},
    token::Network,
};

#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    #[serde(default)]
    network: Network,
    amm_wrapper: Option<String>,
    amm_wrapper_with_path: Option<String>,
    pmm: Option<String>,
    rfq: Option<String>,
    limit_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
    AmmWrapper,
    AmmWrapperWithPath,
    Pmm,
    Rfq,
    LimitOrder,
}

/// Deployment being indexed. A contract without an address is not indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub network: Network,
    pub amm_wrapper: Option<Vec<u8>>,
    pub amm_wrapper_with_path: Option<Vec<u8>>,
    pub pmm: Option<Vec<u8>>,
    pub rfq: Option<Vec<u8>>,
    pub limit_order: Option<Vec<u8>>,
}

impl Params {
    pub fn parse_from_query(query: &str) -> Result<Self> {
        let query: QueryParams = parse_params(query)?;

        Ok(Params {
            network: query.network,
            amm_wrapper: optional_address(query.amm_wrapper)?,
            amm_wrapper_with_path: optional_address(query.amm_wrapper_with_path)?,
            pmm: optional_address(query.pmm)?,
            rfq: optional_address(query.rfq)?,
            limit_order: optional_address(query.limit_order)?,
        })
    }

    /// Which indexed contract emitted a log, if any.
    pub fn contract(&self, address: &[u8]) -> Option<Contract> {
        [
            (Contract::AmmWrapper, &self.amm_wrapper),
            (Contract::AmmWrapperWithPath, &self.amm_wrapper_with_path),
            (Contract::Pmm, &self.pmm),
            (Contract::Rfq, &self.rfq),
            (Contract::LimitOrder, &self.limit_order),
        ]
        .into_iter()
        .find_map(|(contract, deployed)| (deployed.as_deref() == Some(address)).then_some(contract))
    }
}

fn optional_address(value: Option<String>) -> Result<Option<Vec<u8>>> {
    match value {
        Some(value) if !value.trim().is_empty() => decode_address(&value).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_indexes_nothing() {
        let params = Params::parse_from_query("").unwrap();
        assert_eq!(params, Params::default());
        assert_eq!(params.network, Network::Mainnet);
        assert_eq!(params.contract(&[0u8; 20]), None);
    }

    #[test]
    fn test_contracts() {
        let params = Params::parse_from_query(
            "network=arbitrum-one&pmm=0x1111111111111111111111111111111111111111&rfq=&limit_order=2222222222222222222222222222222222222222",
        )
        .unwrap();

        assert_eq!(params.network, Network::ArbitrumOne);
        assert_eq!(params.rfq, None);
        assert_eq!(params.contract(&[0x11; 20]), Some(Contract::Pmm));
        assert_eq!(params.contract(&[0x22; 20]), Some(Contract::LimitOrder));
        assert_eq!(params.contract(&[0x33; 20]), None);
    }

    #[test]
    fn test_rejects_bad_address() {
        assert!(Params::parse_from_query("amm_wrapper=0x12").is_err());
    }
}
