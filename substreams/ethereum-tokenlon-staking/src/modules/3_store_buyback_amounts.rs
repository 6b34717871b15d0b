use substreams::{
    log::info,
    scalar::BigInt,
    store::{StoreAddBigInt, StoreGet, StoreGetString, StoreNew},
};
use tokenlon_substreams::prelude::*;

use crate::{
    keys::{
        self, BUYBACK_DAY_DATA, DAILY_LON_STAKING_AMOUNT, DAILY_MINTED_AMOUNT,
        DAILY_TREASURY_AMOUNT, TOTAL_LON_STAKING_AMOUNT, TOTAL_MINTED_AMOUNT,
        TOTAL_TREASURY_AMOUNT, TX_COUNT,
    },
    pb::tokenlon::staking::v1::{staking_event::Event, StakingEvents},
};

#[substreams::handlers::store]
pub fn store_buyback_amounts(
    events: StakingEvents,
    entity_keys: StoreGetString,
    store: StoreAddBigInt,
) {
    add_totals(&store, buyback_deltas(&events, &entity_keys));
}

pub(crate) fn buyback_deltas(events: &StakingEvents, entity_keys: &impl FirstSeen) -> Vec<TotalDelta> {
    let mut deltas = Vec::new();
    for (meta, event) in events.iter() {
        let ord = meta.ordinal;
        let day = meta.day_id();

        match event {
            Event::DistributeLon(ev) => {
                let treasury = parse_bigint(&ev.treasury_amount);
                let lon_staking = parse_bigint(&ev.lon_staking_amount);
                deltas.extend([
                    TotalDelta::new(ord, keys::buyback_total(TOTAL_TREASURY_AMOUNT), treasury.clone()),
                    TotalDelta::new(ord, keys::buyback_total(TOTAL_LON_STAKING_AMOUNT), lon_staking.clone()),
                    TotalDelta::new(ord, keys::buyback_total(TX_COUNT), BigInt::one()),
                    TotalDelta::new(ord, keys::buyback_day(day, DAILY_TREASURY_AMOUNT), treasury),
                    TotalDelta::new(ord, keys::buyback_day(day, DAILY_LON_STAKING_AMOUNT), lon_staking),
                    TotalDelta::new(ord, keys::buyback_day(day, TX_COUNT), BigInt::one()),
                ]);
            }
            Event::MintLon(ev) => {
                let minted = parse_bigint(&ev.minted_amount);
                let day_key = entity_key(BUYBACK_DAY_DATA, &day.to_string());
                if entity_keys.seen_at_or_before(&day_key, meta.block_number, ord) {
                    deltas.push(TotalDelta::new(
                        ord,
                        keys::buyback_day(day, DAILY_MINTED_AMOUNT),
                        minted.clone(),
                    ));
                } else {
                    info!("no buyback day data for mint in transaction {}", meta.tx_id());
                }
                deltas.push(TotalDelta::new(ord, keys::buyback_total(TOTAL_MINTED_AMOUNT), minted));
            }
            _ => {}
        }
    }
    deltas
}

#[cfg(test)]
mod tests {
    use tokenlon_substreams::testing::{event_meta, MemoryKeys, MemoryTotals};

    use super::*;
    use crate::{
        modules::store_entity_keys::entity_occurrences,
        pb::tokenlon::staking::v1::{
            staking_event::{DistributeLon, MintLon},
            StakingEvent,
        },
    };

    fn mint(ordinal: u64) -> StakingEvent {
        StakingEvent {
            meta: Some(event_meta(10, ordinal)),
            event: Some(Event::MintLon(MintLon { minted_amount: "5".into() })),
        }
    }

    #[test]
    fn test_mint_counts_for_day_only_after_distribution() {
        let events = StakingEvents {
            events: vec![
                mint(1),
                StakingEvent {
                    meta: Some(event_meta(10, 2)),
                    event: Some(Event::DistributeLon(DistributeLon {
                        treasury_amount: "20".into(),
                        lon_staking_amount: "80".into(),
                        ..Default::default()
                    })),
                },
                mint(3),
            ],
        };
        let day = event_meta(10, 0).day_id();
        let mut entity_keys = MemoryKeys::default();
        entity_keys.apply(entity_occurrences(&events));

        let mut totals = MemoryTotals::default();
        totals.apply(buyback_deltas(&events, &entity_keys));

        assert_eq!(totals.total_at(3, &keys::buyback_total(TOTAL_MINTED_AMOUNT)), BigInt::from(10u64));
        assert_eq!(totals.total_at(3, &keys::buyback_day(day, DAILY_MINTED_AMOUNT)), BigInt::from(5u64));
        assert_eq!(totals.total_at(3, &keys::buyback_total(TOTAL_TREASURY_AMOUNT)), BigInt::from(20u64));
        assert_eq!(totals.total_at(3, &keys::buyback_day(day, DAILY_LON_STAKING_AMOUNT)), BigInt::from(80u64));
        assert_eq!(totals.total_at(3, &keys::buyback_day(day, TX_COUNT)), BigInt::one());
    }
}
