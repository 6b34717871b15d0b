use std::collections::HashSet;

use anyhow::Result;
use substreams_ethereum::{
    pb::eth::{self, v2::Log},
    Event as _,
};
use tokenlon_substreams::prelude::*;

use crate::{
    abi::{lon_staking::events as staking_events, reward_distributor::events as distributor_events},
    chain::{ChainReader, RpcChainReader},
    params::Params,
    pb::tokenlon::staking::v1::{
        staking_event::{
            BuyBack, Cooldown, DistributeLon, EnableFeeToken, Event, MintLon, Redeem,
            SetFeeToken, Staked,
        },
        StakingEvent, StakingEvents,
    },
};

#[substreams::handlers::map]
pub fn map_events(params: String, block: eth::v2::Block) -> Result<StakingEvents> {
    let params = Params::parse_from_query(&params)?;
    let chain = RpcChainReader::new(&params);

    let logs = block
        .logs()
        .filter(|log| params.is_tracked(log.address()))
        .map(|log| (log.log, EventMeta::from_log(&block, &log)));

    Ok(StakingEvents { events: collect_events(&params, logs, &chain) })
}

/// Decodes the tracked logs, in ordinal order, and attaches the contract reads their handlers
/// depend on.
pub(crate) fn collect_events<'a>(
    params: &Params,
    logs: impl IntoIterator<Item = (&'a Log, EventMeta)>,
    chain: &impl ChainReader,
) -> Vec<StakingEvent> {
    // transactions that already have a BuyBack record
    let mut bought_back: HashSet<Vec<u8>> = HashSet::new();

    logs.into_iter()
        .filter_map(|(log, meta)| {
            let mut event = decode_event(log, params)?;
            match &mut event {
                Event::Staked(staked) => staked.scale_index = chain.scale_index().to_string(),
                Event::Redeem(redeem) => redeem.scale_index = chain.scale_index().to_string(),
                Event::Cooldown(cooldown) => {
                    cooldown.cooldown_seconds = chain.cooldown_seconds().to_string()
                }
                Event::BuyBack(_) => {
                    bought_back.insert(meta.tx_hash.clone());
                }
                Event::DistributeLon(distribute) => {
                    distribute.scale_index = chain.scale_index().to_string();
                    if bought_back.insert(meta.tx_hash.clone()) {
                        distribute.self_buyback = true;
                        distribute.lon_fee_token = chain.fee_token_config(&params.lon);
                    }
                }
                _ => {}
            }
            Some(StakingEvent { meta: Some(meta), event: Some(event) })
        })
        .collect()
}

fn decode_event(log: &Log, params: &Params) -> Option<Event> {
    if log.address == params.lon_staking {
        if let Some(ev) = staking_events::Staked::match_and_decode(log) {
            Some(Event::Staked(Staked {
                user: ev.user,
                amount: ev.amount.to_string(),
                share: ev.share.to_string(),
                scale_index: String::new(),
            }))
        } else if let Some(ev) = staking_events::Redeem::match_and_decode(log) {
            Some(Event::Redeem(Redeem {
                user: ev.user,
                share: ev.share.to_string(),
                redeem_amount: ev.redeem_amount.to_string(),
                penalty_amount: ev.penalty_amount.to_string(),
                scale_index: String::new(),
            }))
        } else {
            staking_events::Cooldown::match_and_decode(log).map(|ev| {
                Event::Cooldown(Cooldown { user: ev.user, cooldown_seconds: String::new() })
            })
        }
    } else if log.address == params.reward_distributor {
        if let Some(ev) = distributor_events::BuyBack::match_and_decode(log) {
            Some(Event::BuyBack(BuyBack {
                fee_token: ev.fee_token,
                fee_token_amount: ev.fee_token_amount.to_string(),
                swapped_lon_amount: ev.swapped_lon_amount.to_string(),
                l_factor: ev.l_factor.to_string(),
                r_factor: ev.r_factor.to_string(),
                min_buy: ev.min_buy.to_string(),
                max_buy: ev.max_buy.to_string(),
            }))
        } else if let Some(ev) = distributor_events::DistributeLon::match_and_decode(log) {
            Some(Event::DistributeLon(DistributeLon {
                treasury_amount: ev.treasury_amount.to_string(),
                lon_staking_amount: ev.lon_staking_amount.to_string(),
                ..Default::default()
            }))
        } else if let Some(ev) = distributor_events::MintLon::match_and_decode(log) {
            Some(Event::MintLon(MintLon { minted_amount: ev.minted_amount.to_string() }))
        } else if let Some(ev) = distributor_events::EnableFeeToken::match_and_decode(log) {
            Some(Event::EnableFeeToken(EnableFeeToken { fee_token: ev.fee_token, enable: ev.enable }))
        } else {
            distributor_events::SetFeeToken::match_and_decode(log).map(|ev| {
                Event::SetFeeToken(SetFeeToken {
                    fee_token: ev.fee_token,
                    exchange_index: ev.exchange_index.to_string(),
                    path: ev.path,
                    l_factor: ev.l_factor.to_string(),
                    r_factor: ev.r_factor.to_string(),
                    min_buy: ev.min_buy.to_string(),
                    max_buy: ev.max_buy.to_string(),
                })
            })
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ethabi::Token;
    use substreams::scalar::{BigDecimal, BigInt};
    use tokenlon_substreams::testing::{
        address, address_topic, event_meta, log, signature_topic, tx_hash, uint,
    };

    use super::*;
    use crate::pb::tokenlon::staking::v1::FeeTokenConfig;

    #[derive(Default)]
    struct FakeChain {
        fee_token_reads: Cell<u32>,
        reverts: bool,
    }

    impl ChainReader for FakeChain {
        fn scale_index(&self) -> BigDecimal {
            "1.5".parse().unwrap()
        }

        fn cooldown_seconds(&self) -> BigInt {
            BigInt::from(1_209_600u64)
        }

        fn fee_token_config(&self, token: &[u8]) -> Option<FeeTokenConfig> {
            assert_eq!(token, crate::constants::LON_ADDRESS.as_slice());
            self.fee_token_reads
                .set(self.fee_token_reads.get() + 1);
            (!self.reverts).then(|| FeeTokenConfig {
                l_factor: "1".into(),
                r_factor: "2".into(),
                min_buy: "100".into(),
                max_buy: "200".into(),
            })
        }
    }

    fn staking_log(signature: &str, user: &[u8], data: &[Token]) -> Log {
        log(
            &crate::constants::LON_STAKING_ADDRESS,
            vec![signature_topic(signature), address_topic(user)],
            data,
        )
    }

    fn distributor_log(signature: &str, data: &[Token]) -> Log {
        log(&crate::constants::REWARD_DISTRIBUTOR_ADDRESS, vec![signature_topic(signature)], data)
    }

    fn buyback_log() -> Log {
        distributor_log(
            "BuyBack(address,uint256,uint256,uint256,uint256,uint256,uint256)",
            &[address(&[0xdd; 20]), uint(50), uint(40), uint(1), uint(2), uint(3), uint(4)],
        )
    }

    fn distribute_log() -> Log {
        distributor_log("DistributeLon(uint256,uint256)", &[uint(10), uint(30)])
    }

    #[test]
    fn test_decode_staking_events() {
        let user = [0xaa; 20];
        let logs = [
            staking_log("Staked(address,uint256,uint256)", &user, &[uint(100), uint(90)]),
            staking_log(
                "Redeem(address,uint256,uint256,uint256)",
                &user,
                &[uint(90), uint(95), uint(5)],
            ),
            staking_log("Cooldown(address)", &user, &[]),
        ];
        let chain = FakeChain::default();

        let events = collect_events(
            &Params::default(),
            logs.iter()
                .enumerate()
                .map(|(i, log)| (log, event_meta(10, i as u64))),
            &chain,
        );

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0].event,
            Some(Event::Staked(Staked {
                user: user.to_vec(),
                amount: "100".into(),
                share: "90".into(),
                scale_index: "1.5".into(),
            }))
        );
        assert_eq!(
            events[1].event,
            Some(Event::Redeem(Redeem {
                user: user.to_vec(),
                share: "90".into(),
                redeem_amount: "95".into(),
                penalty_amount: "5".into(),
                scale_index: "1.5".into(),
            }))
        );
        assert_eq!(
            events[2].event,
            Some(Event::Cooldown(Cooldown {
                user: user.to_vec(),
                cooldown_seconds: "1209600".into()
            }))
        );
        assert_eq!(events[2].meta.as_ref().unwrap().ordinal, 2);
    }

    #[test]
    fn test_decode_fee_token_events() {
        let path = vec![[0x01; 20].to_vec(), [0x02; 20].to_vec()];
        let logs = [
            distributor_log(
                "EnableFeeToken(address,bool)",
                &[address(&[0xdd; 20]), Token::Bool(true)],
            ),
            distributor_log(
                "SetFeeToken(address,uint256,address[],uint256,uint256,uint256,uint256)",
                &[
                    address(&[0xdd; 20]),
                    uint(1),
                    Token::Array(path.iter().map(|hop| address(hop)).collect()),
                    uint(2),
                    uint(3),
                    uint(4),
                    uint(5),
                ],
            ),
            distributor_log("MintLon(uint256)", &[uint(77)]),
        ];

        let events = collect_events(
            &Params::default(),
            logs.iter()
                .enumerate()
                .map(|(i, log)| (log, event_meta(10, i as u64))),
            &FakeChain::default(),
        );

        assert_eq!(
            events[0].event,
            Some(Event::EnableFeeToken(EnableFeeToken { fee_token: vec![0xdd; 20], enable: true }))
        );
        assert_eq!(
            events[1].event,
            Some(Event::SetFeeToken(SetFeeToken {
                fee_token: vec![0xdd; 20],
                exchange_index: "1".into(),
                path,
                l_factor: "2".into(),
                r_factor: "3".into(),
                min_buy: "4".into(),
                max_buy: "5".into(),
            }))
        );
        assert_eq!(events[2].event, Some(Event::MintLon(MintLon { minted_amount: "77".into() })));
    }

    #[test]
    fn test_self_buyback_only_without_buyback_in_tx() {
        let logs = [buyback_log(), distribute_log(), distribute_log(), distribute_log()];
        let metas = [
            EventMeta { tx_hash: tx_hash(1), ..event_meta(10, 0) },
            EventMeta { tx_hash: tx_hash(1), ..event_meta(10, 1) },
            EventMeta { tx_hash: tx_hash(2), ..event_meta(10, 2) },
            EventMeta { tx_hash: tx_hash(2), ..event_meta(10, 3) },
        ];
        let chain = FakeChain::default();

        let events = collect_events(&Params::default(), logs.iter().zip(metas), &chain);

        let distributions = events
            .iter()
            .filter_map(|event| match &event.event {
                Some(Event::DistributeLon(distribute)) => Some(distribute.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(distributions.len(), 3);
        assert!(!distributions[0].self_buyback);
        assert_eq!(distributions[0].lon_fee_token, None);
        assert!(distributions[1].self_buyback);
        assert_eq!(distributions[1].lon_fee_token.as_ref().unwrap().max_buy, "200");
        assert!(!distributions[2].self_buyback);
        assert_eq!(distributions[1].treasury_amount, "10");
        assert_eq!(distributions[1].lon_staking_amount, "30");
        assert_eq!(chain.fee_token_reads.get(), 1);
    }

    #[test]
    fn test_reverted_fee_token_read() {
        let logs = [distribute_log()];
        let chain = FakeChain { reverts: true, ..Default::default() };

        let events =
            collect_events(&Params::default(), logs.iter().map(|log| (log, event_meta(10, 0))), &chain);

        match &events[0].event {
            Some(Event::DistributeLon(distribute)) => {
                assert!(distribute.self_buyback);
                assert_eq!(distribute.lon_fee_token, None);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_skips_foreign_logs() {
        let mut foreign = buyback_log();
        foreign.address = vec![0x99; 20];
        let unknown = distributor_log("Paused(address)", &[address(&[0x01; 20])]);

        let events = collect_events(
            &Params::default(),
            [(&foreign, event_meta(10, 0)), (&unknown, event_meta(10, 1))],
            &FakeChain::default(),
        );
        assert!(events.is_empty());
    }
}
