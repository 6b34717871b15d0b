use std::cell::OnceCell;

use substreams::{
    log::info,
    scalar::{BigDecimal, BigInt},
};
use tokenlon_substreams::{abi::erc20, prelude::scale_index};

use crate::{
    abi::{lon_staking, reward_distributor},
    params::Params,
    pb::tokenlon::staking::v1::FeeTokenConfig,
};

/// Contract state the staking handlers read while decoding a block.
pub trait ChainReader {
    /// LON held by the staking contract per staking share.
    fn scale_index(&self) -> BigDecimal;

    fn cooldown_seconds(&self) -> BigInt;

    /// Buyback configuration of `token`, `None` when the call reverts.
    fn fee_token_config(&self, token: &[u8]) -> Option<FeeTokenConfig>;
}

/// Reads through `eth_call`s at the block being processed.
pub struct RpcChainReader<'p> {
    params: &'p Params,
    scale_index: OnceCell<BigDecimal>,
}

impl<'p> RpcChainReader<'p> {
    pub fn new(params: &'p Params) -> Self {
        RpcChainReader { params, scale_index: OnceCell::new() }
    }
}

impl ChainReader for RpcChainReader<'_> {
    // Calls read post-block state, so the index is fixed for the block.
    fn scale_index(&self) -> BigDecimal {
        self.scale_index
            .get_or_init(|| {
                let supply = lon_staking::functions::TotalSupply {}
                    .call(self.params.lon_staking.clone())
                    .unwrap_or_else(BigInt::zero);
                if supply.is_zero() {
                    return BigDecimal::zero();
                }

                let balance = erc20::functions::BalanceOf { owner: self.params.lon_staking.clone() }
                    .call(self.params.lon.clone())
                    .unwrap_or_else(|| {
                        info!("balanceOf reverted on lon {}", hex::encode(&self.params.lon));
                        BigInt::zero()
                    });
                scale_index(&balance, &supply)
            })
            .clone()
    }

    fn cooldown_seconds(&self) -> BigInt {
        lon_staking::functions::CooldownSeconds {}
            .call(self.params.lon_staking.clone())
            .unwrap_or_else(|| {
                info!("COOLDOWN_SECONDS reverted on {}", hex::encode(&self.params.lon_staking));
                BigInt::zero()
            })
    }

    fn fee_token_config(&self, token: &[u8]) -> Option<FeeTokenConfig> {
        let (_, l_factor, r_factor, _, _, min_buy, max_buy) =
            reward_distributor::functions::FeeTokens { token: token.to_vec() }
                .call(self.params.reward_distributor.clone())?;

        Some(FeeTokenConfig {
            l_factor: l_factor.to_string(),
            r_factor: r_factor.to_string(),
            min_buy: min_buy.to_string(),
            max_buy: max_buy.to_string(),
        })
    }
}
