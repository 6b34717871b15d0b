mod abi;
mod constants;
mod keys;
mod modules;
mod params;
mod pb;

use pb::tokenlon::exchange::v1::{exchange_event::Event, ExchangeEvents, Token};
use tokenlon_substreams::prelude::EventMeta;

impl ExchangeEvents {
    /// Events in ordinal order. Events missing their metadata or payload are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&EventMeta, &Event)> {
        self.events
            .iter()
            .filter_map(|event| Some((event.meta.as_ref()?, event.event.as_ref()?)))
    }

    /// Metadata read for `address` in this block.
    pub(crate) fn token(&self, address: &[u8]) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|token| token.address == address)
    }
}

impl Event {
    /// The trader of a swap or an RFQ/PMM fill.
    pub(crate) fn trader(&self) -> Option<&[u8]> {
        match self {
            Event::Swapped(ev) => Some(ev.user_addr.as_slice()),
            Event::PmmFillOrder(ev) | Event::RfqFillOrder(ev) => Some(ev.user_addr.as_slice()),
            _ => None,
        }
    }

    /// Tokens changing hands, as emitted.
    pub(crate) fn traded_tokens(&self) -> Vec<&[u8]> {
        match self {
            Event::Swapped(ev) => vec![ev.taker_asset_addr.as_slice(), ev.maker_asset_addr.as_slice()],
            Event::PmmFillOrder(ev) | Event::RfqFillOrder(ev) => {
                vec![ev.taker_asset_addr.as_slice(), ev.maker_asset_addr.as_slice()]
            }
            Event::LimitOrderFilledByProtocol(ev) => ev
                .fill_receipt
                .iter()
                .flat_map(|receipt| [receipt.maker_token.as_slice(), receipt.taker_token.as_slice()])
                .collect(),
            Event::LimitOrderFilledByTrader(ev) => ev
                .fill_receipt
                .iter()
                .flat_map(|receipt| [receipt.maker_token.as_slice(), receipt.taker_token.as_slice()])
                .collect(),
            Event::OrderCancelled(_) => vec![],
        }
    }

    /// Hash of the limit order a fill belongs to.
    pub(crate) fn filled_order(&self) -> Option<&[u8]> {
        match self {
            Event::LimitOrderFilledByProtocol(ev) => Some(ev.order_hash.as_slice()),
            Event::LimitOrderFilledByTrader(ev) => Some(ev.order_hash.as_slice()),
            _ => None,
        }
    }
}
