use substreams::{
    scalar::BigInt,
    store::{StoreAddBigInt, StoreNew},
};
use tokenlon_substreams::prelude::*;

use crate::{
    keys::{self, FILL_ORDER_TOTAL, FILL_RFQ_V1_ORDER_TOTAL, SWAPPED_TOTAL},
    pb::tokenlon::exchange::v1::{exchange_event::Event, ExchangeEvents},
};

#[substreams::handlers::store]
pub fn store_totals(events: ExchangeEvents, store: StoreAddBigInt) {
    add_totals(&store, total_deltas(&events));
}

/// One per trade for the matching `*Total` counter and for the trader's `tradeCount`.
pub(crate) fn total_deltas(events: &ExchangeEvents) -> Vec<TotalDelta> {
    let mut deltas = Vec::new();
    for (meta, event) in events.iter() {
        let counter = match event {
            Event::Swapped(_) => SWAPPED_TOTAL,
            Event::PmmFillOrder(_) => FILL_ORDER_TOTAL,
            Event::RfqFillOrder(_) => FILL_RFQ_V1_ORDER_TOTAL,
            _ => continue,
        };
        deltas.push(TotalDelta::new(meta.ordinal, keys::total(counter), BigInt::one()));

        if let Some(trader) = event.trader() {
            deltas.push(TotalDelta::new(
                meta.ordinal,
                keys::trade_count(&to_hex(trader)),
                BigInt::one(),
            ));
        }
    }
    deltas
}

#[cfg(test)]
mod tests {
    use tokenlon_substreams::testing::{event_meta, MemoryTotals};

    use super::*;
    use crate::pb::tokenlon::exchange::v1::{
        ExchangeEvent, FillOrder, OrderCancelled, Swapped,
    };

    #[test]
    fn test_counts_trades() {
        let user = vec![0xaa; 20];
        let at = |ordinal, event| ExchangeEvent { meta: Some(event_meta(10, ordinal)), event: Some(event) };
        let events = ExchangeEvents {
            events: vec![
                at(1, Event::Swapped(Swapped { user_addr: user.clone(), ..Default::default() })),
                at(2, Event::PmmFillOrder(FillOrder { user_addr: user.clone(), ..Default::default() })),
                at(3, Event::OrderCancelled(OrderCancelled::default())),
                at(4, Event::RfqFillOrder(FillOrder { user_addr: user, ..Default::default() })),
                at(5, Event::Swapped(Swapped { user_addr: vec![0xbb; 20], ..Default::default() })),
            ],
            ..Default::default()
        };

        let mut totals = MemoryTotals::default();
        totals.apply(total_deltas(&events));

        let trades = format!("User:0x{}:tradeCount", "aa".repeat(20));
        assert_eq!(totals.total_at(5, "SwappedTotal:total"), BigInt::from(2u64));
        assert_eq!(totals.total_at(4, "SwappedTotal:total"), BigInt::one());
        assert_eq!(totals.total_at(5, "FillOrderTotal:total"), BigInt::one());
        assert_eq!(totals.total_at(5, "FillRFQV1OrderTotal:total"), BigInt::one());
        assert_eq!(totals.total_at(2, &trades), BigInt::from(2u64));
        assert_eq!(totals.total_at(5, &trades), BigInt::from(3u64));
    }
}
