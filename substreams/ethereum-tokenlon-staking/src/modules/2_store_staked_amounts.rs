use std::ops::Neg;

use substreams::{
    scalar::BigInt,
    store::{StoreAddBigInt, StoreNew},
};
use tokenlon_substreams::prelude::*;

use crate::{
    keys::{self, DAILY_STAKED_AMOUNT, PENALTY, TOTAL_STAKED_AMOUNT, TX_COUNT},
    pb::tokenlon::staking::v1::{staking_event::Event, StakingEvents},
};

#[substreams::handlers::store]
pub fn store_staked_amounts(events: StakingEvents, store: StoreAddBigInt) {
    add_totals(&store, staked_deltas(&events));
}

pub(crate) fn staked_deltas(events: &StakingEvents) -> Vec<TotalDelta> {
    let mut deltas = Vec::new();
    for (meta, event) in events.iter() {
        let ord = meta.ordinal;
        let day = meta.day_id();
        let mut staked = |amount: BigInt| {
            deltas.push(TotalDelta::new(ord, keys::staked_total(TOTAL_STAKED_AMOUNT), amount.clone()));
            deltas.push(TotalDelta::new(ord, keys::staked_day(day, DAILY_STAKED_AMOUNT), amount));
        };

        match event {
            Event::Staked(ev) => staked(parse_bigint(&ev.amount)),
            Event::Redeem(ev) => staked(parse_bigint(&ev.redeem_amount).neg()),
            Event::DistributeLon(ev) => staked(parse_bigint(&ev.lon_staking_amount)),
            _ => {}
        }

        match event {
            Event::Staked(_) | Event::Cooldown(_) => {
                deltas.push(TotalDelta::new(ord, keys::staked_total(TX_COUNT), BigInt::one()))
            }
            Event::Redeem(ev) => {
                deltas.push(TotalDelta::new(ord, keys::staked_total(TX_COUNT), BigInt::one()));
                deltas.push(TotalDelta::new(
                    ord,
                    keys::staked_day(day, PENALTY),
                    parse_bigint(&ev.penalty_amount),
                ));
            }
            _ => {}
        }
    }
    deltas
}

#[cfg(test)]
mod tests {
    use tokenlon_substreams::testing::{event_meta, MemoryTotals};

    use super::*;
    use crate::pb::tokenlon::staking::v1::{
        staking_event::{Cooldown, DistributeLon, MintLon, Redeem, Staked},
        StakingEvent,
    };

    fn event(ordinal: u64, event: Event) -> StakingEvent {
        StakingEvent { meta: Some(event_meta(10, ordinal)), event: Some(event) }
    }

    #[test]
    fn test_staked_deltas() {
        let events = StakingEvents {
            events: vec![
                event(1, Event::Staked(Staked { amount: "100".into(), ..Default::default() })),
                event(
                    2,
                    Event::Redeem(Redeem {
                        redeem_amount: "40".into(),
                        penalty_amount: "4".into(),
                        ..Default::default()
                    }),
                ),
                event(3, Event::Cooldown(Cooldown::default())),
                event(
                    4,
                    Event::DistributeLon(DistributeLon {
                        lon_staking_amount: "7".into(),
                        ..Default::default()
                    }),
                ),
                event(5, Event::MintLon(MintLon { minted_amount: "1000".into() })),
            ],
        };
        let day = event_meta(10, 0).day_id();

        let mut totals = MemoryTotals::default();
        totals.apply(staked_deltas(&events));

        let total = keys::staked_total(TOTAL_STAKED_AMOUNT);
        assert_eq!(totals.total_at(1, &total), BigInt::from(100u64));
        assert_eq!(totals.total_at(2, &total), BigInt::from(60u64));
        assert_eq!(totals.total_at(5, &total), BigInt::from(67u64));
        assert_eq!(totals.total_at(5, &keys::staked_day(day, DAILY_STAKED_AMOUNT)), BigInt::from(67u64));
        assert_eq!(totals.total_at(5, &keys::staked_day(day, PENALTY)), BigInt::from(4u64));
        assert_eq!(totals.total_at(2, &keys::staked_total(TX_COUNT)), BigInt::from(2u64));
        assert_eq!(totals.total_at(5, &keys::staked_total(TX_COUNT)), BigInt::from(3u64));
    }
}
