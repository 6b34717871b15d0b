use substreams::store::{StoreNew, StoreSetIfNotExistsString};
use tokenlon_substreams::{prelude::*, token::normalize_token};

use crate::{
    constants::TOTAL_ID,
    keys::{FILL_ORDER_TOTAL, FILL_RFQ_V1_ORDER_TOTAL, ORDER, SWAPPED_TOTAL, TRADED_TOKEN, USER},
    params::Params,
    pb::tokenlon::exchange::v1::{exchange_event::Event, ExchangeEvents},
};

#[substreams::handlers::store]
pub fn store_entity_keys(params: String, events: ExchangeEvents, store: StoreSetIfNotExistsString) {
    // store handlers cannot return an error
    let params = Params::parse_from_query(&params)
        .unwrap_or_else(|e| panic!("invalid store_entity_keys params {params:?}: {e}"));
    record_occurrences(&store, entity_occurrences(&params, &events));
}

/// Keys of the entities that outlive their block, as touched by each event.
pub(crate) fn entity_occurrences(params: &Params, events: &ExchangeEvents) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    for (meta, event) in events.iter() {
        let mut keys = match event {
            Event::Swapped(_) => vec![entity_key(SWAPPED_TOTAL, TOTAL_ID)],
            Event::PmmFillOrder(_) => vec![entity_key(FILL_ORDER_TOTAL, TOTAL_ID)],
            Event::RfqFillOrder(_) => vec![entity_key(FILL_RFQ_V1_ORDER_TOTAL, TOTAL_ID)],
            _ => vec![],
        };
        // a token is only seen once its metadata could be read
        keys.extend(
            event
                .traded_tokens()
                .into_iter()
                .filter(|token| events.token(token).is_some())
                .map(|token| entity_key(TRADED_TOKEN, &to_hex(&normalize_token(token, params.network)))),
        );
        keys.extend(
            event
                .trader()
                .map(|user| entity_key(USER, &to_hex(user))),
        );
        keys.extend(
            event
                .filled_order()
                .map(|order| entity_key(ORDER, &to_hex(order))),
        );

        occurrences.extend(
            keys.into_iter()
                .map(|key| Occurrence { ord: meta.ordinal, key, marker: meta.marker() }),
        );
    }
    occurrences
}

#[cfg(test)]
mod tests {
    use tokenlon_substreams::{
        testing::{event_meta, MemoryKeys},
        token::{ETH_ADDRESS, WETH_MAINNET},
    };

    use super::*;
    use crate::pb::tokenlon::exchange::v1::{
        ExchangeEvent, FillReceipt, LimitOrderFilledByTrader, OrderCancelled, Swapped, Token,
    };

    #[test]
    fn test_first_occurrence_wins() {
        let events = ExchangeEvents {
            events: vec![
                ExchangeEvent {
                    meta: Some(event_meta(10, 2)),
                    event: Some(Event::Swapped(Swapped {
                        user_addr: vec![0xaa; 20],
                        taker_asset_addr: ETH_ADDRESS.to_vec(),
                        maker_asset_addr: vec![0xcc; 20],
                        ..Default::default()
                    })),
                },
                ExchangeEvent {
                    meta: Some(event_meta(10, 3)),
                    event: Some(Event::OrderCancelled(OrderCancelled {
                        order_hash: vec![0x05; 32],
                        maker: vec![0x0a; 20],
                    })),
                },
                ExchangeEvent {
                    meta: Some(event_meta(10, 4)),
                    event: Some(Event::LimitOrderFilledByTrader(LimitOrderFilledByTrader {
                        order_hash: vec![0x05; 32],
                        fill_receipt: Some(FillReceipt {
                            maker_token: vec![0xcc; 20],
                            taker_token: WETH_MAINNET.to_vec(),
                            ..Default::default()
                        }),
                        ..Default::default()
                    })),
                },
            ],
            tokens: [WETH_MAINNET, [0xcc; 20]]
                .iter()
                .map(|address| Token { address: address.to_vec(), ..Default::default() })
                .collect(),
        };

        let mut keys = MemoryKeys::default();
        keys.apply(entity_occurrences(&Params::default(), &events));

        let weth = format!("TradedToken:{}", to_hex(&WETH_MAINNET));
        let maker_token = format!("TradedToken:0x{}", "cc".repeat(20));
        let order = format!("Order:0x{}", "05".repeat(32));
        assert_eq!(keys.first_seen("SwappedTotal:1").as_deref(), Some("10:2"));
        assert_eq!(keys.first_seen(&weth).as_deref(), Some("10:2"));
        assert_eq!(keys.first_seen(&maker_token).as_deref(), Some("10:2"));
        assert_eq!(keys.first_seen(&format!("User:0x{}", "aa".repeat(20))).as_deref(), Some("10:2"));
        assert_eq!(keys.first_seen(&order).as_deref(), Some("10:4"));
        assert_eq!(keys.first_seen(&format!("TradedToken:{}", to_hex(&ETH_ADDRESS))), None);
    }

    #[test]
    fn test_token_without_metadata_is_not_seen() {
        let swap = ExchangeEvent {
            meta: Some(event_meta(10, 2)),
            event: Some(Event::Swapped(Swapped {
                taker_asset_addr: ETH_ADDRESS.to_vec(),
                maker_asset_addr: vec![0xba; 20],
                ..Default::default()
            })),
        };
        let events = ExchangeEvents { events: vec![swap], ..Default::default() };

        let occurrences = entity_occurrences(&Params::default(), &events);

        assert!(occurrences
            .iter()
            .all(|occurrence| !occurrence.key.starts_with("TradedToken:")));
    }
}
