use substreams::store::{StoreNew, StoreSetIfNotExistsString};
use tokenlon_substreams::prelude::*;

use crate::{
    constants::{BUYBACK_TOTAL_ID, STAKED_TOTAL_ID},
    keys::{BUYBACK_DAY_DATA, BUYBACK_TOTAL, FEE_TOKEN, STAKED_DAY_DATA, STAKED_TOTAL},
    pb::tokenlon::staking::v1::{staking_event::Event, StakingEvents},
};

#[substreams::handlers::store]
pub fn store_entity_keys(events: StakingEvents, store: StoreSetIfNotExistsString) {
    record_occurrences(&store, entity_occurrences(&events));
}

/// Keys of the entities that outlive their block, as touched by each event.
pub(crate) fn entity_occurrences(events: &StakingEvents) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    for (meta, event) in events.iter() {
        let day = meta.day_id().to_string();
        let keys = match event {
            Event::Staked(_) | Event::Redeem(_) => {
                vec![entity_key(STAKED_TOTAL, STAKED_TOTAL_ID), entity_key(STAKED_DAY_DATA, &day)]
            }
            Event::Cooldown(_) => vec![entity_key(STAKED_TOTAL, STAKED_TOTAL_ID)],
            Event::DistributeLon(_) => vec![
                entity_key(BUYBACK_TOTAL, BUYBACK_TOTAL_ID),
                entity_key(BUYBACK_DAY_DATA, &day),
                entity_key(STAKED_TOTAL, STAKED_TOTAL_ID),
                entity_key(STAKED_DAY_DATA, &day),
            ],
            Event::MintLon(_) => vec![entity_key(BUYBACK_TOTAL, BUYBACK_TOTAL_ID)],
            Event::EnableFeeToken(ev) => vec![entity_key(FEE_TOKEN, &to_hex(&ev.fee_token))],
            Event::SetFeeToken(ev) => vec![entity_key(FEE_TOKEN, &to_hex(&ev.fee_token))],
            Event::BuyBack(_) => vec![],
        };

        occurrences.extend(
            keys.into_iter()
                .map(|key| Occurrence { ord: meta.ordinal, key, marker: meta.marker() }),
        );
    }
    occurrences
}
