use substreams::{
    log::info,
    scalar::BigInt,
    store::{StoreGet, StoreGetBigInt, StoreGetString},
};
use substreams_entity_change::{pb::entity::EntityChanges, tables::Row};
use tokenlon_substreams::{
    prelude::*,
    token::{normalize_token, Network},
};

use crate::{
    constants::{LimitOrderFilledType, OrderStatus, TOTAL_ID},
    keys::{self, FILL_ORDER_TOTAL, FILL_RFQ_V1_ORDER_TOTAL, ORDER, SWAPPED_TOTAL, TRADED_TOKEN, USER},
    params::Params,
    pb::tokenlon::exchange::v1::{
        exchange_event::Event, ExchangeEvents, FillOrder, FillReceipt, LimitOrderFilledByProtocol,
        LimitOrderFilledByTrader, OrderCancelled, Swapped,
    },
};

#[substreams::handlers::map]
pub fn graph_out(
    params: String,
    events: ExchangeEvents,
    totals: StoreGetBigInt,
    entity_keys: StoreGetString,
) -> Result<EntityChanges, substreams::errors::Error> {
    let params = Params::parse_from_query(&params)?;
    Ok(entity_changes(&params, &events, &totals, &entity_keys))
}

pub(crate) fn entity_changes<K, S>(
    params: &Params,
    events: &ExchangeEvents,
    totals: &S,
    entity_keys: &K,
) -> EntityChanges
where
    K: FirstSeen,
    S: RunningTotals,
{
    let Some(block_number) = events
        .iter()
        .next()
        .map(|(meta, _)| meta.block_number)
    else {
        return EntityChanges::default();
    };

    let mut graph = ExchangeGraph {
        writer: EntityWriter::new(entity_keys, block_number),
        totals,
        events,
        network: params.network,
    };
    for (meta, event) in events.iter() {
        match event {
            Event::Swapped(ev) => graph.swapped(meta, ev),
            Event::PmmFillOrder(ev) => graph.fill_order(meta, ev, "FillOrder", FILL_ORDER_TOTAL),
            Event::RfqFillOrder(ev) => {
                graph.fill_order(meta, ev, "FillRFQV1Order", FILL_RFQ_V1_ORDER_TOTAL)
            }
            Event::LimitOrderFilledByProtocol(ev) => graph.filled_by_protocol(meta, ev),
            Event::LimitOrderFilledByTrader(ev) => graph.filled_by_trader(meta, ev),
            Event::OrderCancelled(ev) => graph.order_cancelled(meta, ev),
        }

        for token in event.traded_tokens() {
            graph.add_traded_token(meta, token);
        }
        if let Some(trader) = event.trader() {
            graph.trade_by(meta, trader);
        }
    }
    graph.writer.into_entity_changes()
}

struct ExchangeGraph<'a, K: FirstSeen, S> {
    writer: EntityWriter<'a, K>,
    totals: &'a S,
    events: &'a ExchangeEvents,
    network: Network,
}

impl<K: FirstSeen, S: RunningTotals> ExchangeGraph<'_, K, S> {
    fn swapped(&mut self, meta: &EventMeta, ev: &Swapped) {
        let id = meta.event_id();
        let tx_number = self.write_total(meta, SWAPPED_TOTAL);

        write_swap_fields(self.writer.create("Swapped", &id), meta, ev)
            .set("txNumber", tx_number)
            .set("inputs", &ev.inputs);
        info!("Swapped transaction hash: {}", meta.tx_id());

        if parse_bigint(&ev.settle_amount) > parse_bigint(&ev.received_amount) {
            write_swap_fields(self.writer.create("SubsidizedSwapped", &id), meta, ev);
            info!("SubsidizedSwapped transaction hash: {}", meta.tx_id());
        }
    }

    fn fill_order(&mut self, meta: &EventMeta, ev: &FillOrder, entity: &str, counter: &str) {
        let tx_number = self.write_total(meta, counter);

        write_tx_fields(self.writer.create(entity, &meta.event_id()), meta)
            .set("txNumber", tx_number)
            .set("source", ev.source.as_str())
            .set("blockHash", to_hex(&meta.block_hash))
            .set("executeTxHash", &ev.execute_tx_hash)
            .set("orderHash", &ev.order_hash)
            .set("userAddr", &ev.user_addr)
            .set("takerAssetAddr", &ev.taker_asset_addr)
            .set("takerAssetAmount", parse_bigint(&ev.taker_asset_amount))
            .set("makerAddr", &ev.maker_addr)
            .set("makerAssetAddr", &ev.maker_asset_addr)
            .set("makerAssetAmount", parse_bigint(&ev.maker_asset_amount))
            .set("receiverAddr", &ev.receiver_addr)
            .set("settleAmount", parse_bigint(&ev.settle_amount))
            .set("feeFactor", ev.fee_factor as i32);
        info!("{} transaction hash: {}", entity, meta.tx_id());
    }

    /// Writes the `*Total` singleton and returns its count at this event.
    fn write_total(&mut self, meta: &EventMeta, counter: &str) -> BigInt {
        let total = self
            .totals
            .total_at(meta.ordinal, &keys::total(counter));
        let (row, _) = self.writer.upsert(counter, TOTAL_ID);
        row.set("total", total.clone());
        total
    }

    fn filled_by_protocol(&mut self, meta: &EventMeta, ev: &LimitOrderFilledByProtocol) {
        let id = meta.event_id();
        let receipt = ev.fill_receipt.clone().unwrap_or_default();
        let profit = parse_bigint(&ev.taker_token_profit);
        let profit_fee = parse_bigint(&ev.taker_token_profit_fee);
        let back_to_maker = parse_bigint(&ev.taker_token_profit_back_to_maker);

        let row = self
            .writer
            .create("LimitOrderFilledByProtocol", &id);
        write_fill_receipt(row, &receipt)
            .set("orderHash", &ev.order_hash)
            .set("maker", &ev.maker)
            .set("taker", &ev.taker)
            .set("allowFillHash", &ev.allow_fill_hash)
            .set("relayer", &ev.relayer)
            .set("profitRecipient", &ev.profit_recipient)
            .set("takerTokenProfit", profit.clone())
            .set("takerTokenProfitFee", profit_fee.clone())
            .set("takerTokenProfitBackToMaker", back_to_maker.clone());
        write_block_fields(row, meta);
        info!(
            "LimitOrderFilledByProtocol entity created at transaction hash: {}, this entity id: {}.",
            meta.tx_id(),
            id
        );

        let order = self.fill_order_of(meta, &ev.order_hash, &ev.maker, &receipt);
        let row = self.limit_order_filled(meta, &order, LimitOrderFilledType::ByProtocol, &receipt);
        row.set("maker", &ev.maker)
            .set("taker", &ev.taker)
            .set("allowFillHash", &ev.allow_fill_hash)
            .set("relayer", &ev.relayer)
            .set("profitRecipient", &ev.profit_recipient)
            .set("takerTokenProfit", profit)
            .set("takerTokenProfitFee", profit_fee)
            .set("takerTokenProfitBackToMaker", back_to_maker)
            .set("recipient", vec![0u8; 20]);
    }

    fn filled_by_trader(&mut self, meta: &EventMeta, ev: &LimitOrderFilledByTrader) {
        let id = meta.event_id();
        let receipt = ev.fill_receipt.clone().unwrap_or_default();

        let row = self
            .writer
            .create("LimitOrderFilledByTrader", &id);
        write_fill_receipt(row, &receipt)
            .set("orderHash", &ev.order_hash)
            .set("maker", &ev.maker)
            .set("taker", &ev.taker)
            .set("allowFillHash", &ev.allow_fill_hash)
            .set("recipient", &ev.recipient);
        write_block_fields(row, meta);
        info!(
            "LimitOrderFilledByTrader entity created at transaction hash: {}, this entity id: {}.",
            meta.tx_id(),
            id
        );

        let order = self.fill_order_of(meta, &ev.order_hash, &ev.maker, &receipt);
        let row = self.limit_order_filled(meta, &order, LimitOrderFilledType::ByTrader, &receipt);
        row.set("maker", &ev.maker)
            .set("taker", &ev.taker)
            .set("allowFillHash", &ev.allow_fill_hash)
            .set("relayer", vec![0u8; 20])
            .set("profitRecipient", vec![0u8; 20])
            .set("takerTokenProfit", BigInt::zero())
            .set("takerTokenProfitFee", BigInt::zero())
            .set("takerTokenProfitBackToMaker", BigInt::zero())
            .set("recipient", &ev.recipient);
    }

    /// Records a fill on its `Order` and returns the order id.
    fn fill_order_of(
        &mut self,
        meta: &EventMeta,
        order_hash: &[u8],
        maker: &[u8],
        receipt: &FillReceipt,
    ) -> String {
        let id = to_hex(order_hash);
        let timestamp = BigInt::from(meta.timestamp);

        let (row, created) = self.writer.upsert(ORDER, &id);
        if created {
            row.set("orderStatus", OrderStatus::Normal.as_str())
                .set("maker", maker.to_vec())
                .set("makerToken", &receipt.maker_token)
                .set("takerToken", &receipt.taker_token)
                .set("firstFilledTime", timestamp.clone())
                .set("cancelledTime", BigInt::zero());
            info!("Order entity created at transaction hash: {}, this entity id: {}.", meta.tx_id(), id);
        }
        row.set("lastFilledTime", timestamp);

        if parse_bigint(&receipt.remaining_amount) == BigInt::zero() {
            row.set("orderStatus", OrderStatus::FullyFilled.as_str());
            info!("Order is filled all, the order hash: {}.", id);
        }
        id
    }

    fn limit_order_filled(
        &mut self,
        meta: &EventMeta,
        order: &str,
        filled_type: LimitOrderFilledType,
        receipt: &FillReceipt,
    ) -> &mut Row {
        let row = self
            .writer
            .create("LimitOrderFilled", &meta.event_id());
        row.set("order", order)
            .set("limitOrderFilledType", filled_type.as_str())
            .set("makerToken", &receipt.maker_token)
            .set("takerToken", &receipt.taker_token)
            .set("makerTokenFilledAmount", parse_bigint(&receipt.maker_token_filled_amount))
            .set("takerTokenFilledAmount", parse_bigint(&receipt.taker_token_filled_amount))
            .set("remainingAmount", parse_bigint(&receipt.remaining_amount))
            .set("makerTokenFee", parse_bigint(&receipt.maker_token_fee))
            .set("takerTokenFee", parse_bigint(&receipt.taker_token_fee));
        write_block_fields(row, meta)
    }

    fn order_cancelled(&mut self, meta: &EventMeta, ev: &OrderCancelled) {
        let row = self
            .writer
            .create("OrderCancelled", &meta.event_id());
        row.set("orderHash", &ev.order_hash)
            .set("maker", &ev.maker);
        write_block_fields(row, meta);

        let id = to_hex(&ev.order_hash);
        if self.writer.exists(ORDER, &id, meta) {
            let (row, _) = self.writer.upsert(ORDER, &id);
            row.set("orderStatus", OrderStatus::Cancelled.as_str())
                .set("cancelledTime", BigInt::from(meta.timestamp));
            info!("Order cancelled by maker at transaction hash: {}.", meta.tx_id());
        }
    }

    /// Caches the metadata of a token the first time it is traded with readable metadata.
    /// Ether is cached under the network's WETH.
    fn add_traded_token(&mut self, meta: &EventMeta, token: &[u8]) {
        let events = self.events;
        let Some(metadata) = events.token(token) else {
            return;
        };
        let id = to_hex(&normalize_token(token, self.network));
        let first_sighting = self
            .writer
            .keys()
            .is_first_occurrence(&entity_key(TRADED_TOKEN, &id), &meta.marker());
        if !first_sighting || self.writer.written(TRADED_TOKEN, &id) {
            return;
        }

        let (row, _) = self.writer.upsert(TRADED_TOKEN, &id);
        row.set("address", token.to_vec())
            .set("startDate", meta.timestamp_i32())
            .set("decimals", metadata.decimals)
            .set("name", metadata.name.as_str())
            .set("symbol", metadata.symbol.as_str());
    }

    fn trade_by(&mut self, meta: &EventMeta, user: &[u8]) {
        let id = to_hex(user);
        let trade_count = self
            .totals
            .total_at(meta.ordinal, &keys::trade_count(&id));

        let (row, created) = self.writer.upsert(USER, &id);
        if created {
            row.set("firstSeen", meta.timestamp_i32())
                .set("firstBlock", BigInt::from(meta.block_number))
                .set("firstTx", meta.tx_id());
        }
        row.set("tradeCount", trade_count.to_i32())
            .set("lastSeen", meta.timestamp_i32());
    }
}

fn write_swap_fields<'r>(row: &'r mut Row, meta: &EventMeta, ev: &Swapped) -> &'r mut Row {
    write_tx_fields(row, meta)
        .set("source", ev.source.as_str())
        .set("blockHash", to_hex(&meta.block_hash))
        .set("executeTxHash", &ev.execute_tx_hash)
        .set("userAddr", &ev.user_addr)
        .set("takerAssetAddr", &ev.taker_asset_addr)
        .set("takerAssetAmount", parse_bigint(&ev.taker_asset_amount))
        .set("makerAddr", &ev.maker_addr)
        .set("makerAssetAddr", &ev.maker_asset_addr)
        .set("makerAssetAmount", parse_bigint(&ev.maker_asset_amount))
        .set("receiverAddr", &ev.receiver_addr)
        .set("settleAmount", parse_bigint(&ev.settle_amount))
        .set("receivedAmount", parse_bigint(&ev.received_amount))
        .set("feeFactor", ev.fee_factor as i32)
        .set("subsidyFactor", ev.subsidy_factor as i32)
        .set("salt", parse_bigint(&ev.salt))
        .set("deadline", parse_bigint(&ev.deadline))
}

fn write_fill_receipt<'r>(row: &'r mut Row, receipt: &FillReceipt) -> &'r mut Row {
    row.set("fillReceiptMakerToken", &receipt.maker_token)
        .set("fillReceiptTakerToken", &receipt.taker_token)
        .set(
            "fillReceiptMakerTokenFilledAmount",
            parse_bigint(&receipt.maker_token_filled_amount),
        )
        .set(
            "fillReceiptTakerTokenFilledAmount",
            parse_bigint(&receipt.taker_token_filled_amount),
        )
        .set("fillReceiptRemainingAmount", parse_bigint(&receipt.remaining_amount))
        .set("fillReceiptMakerTokenFee", parse_bigint(&receipt.maker_token_fee))
        .set("fillReceiptTakerTokenFee", parse_bigint(&receipt.taker_token_fee))
}

/// Block fields of the limit order entities.
fn write_block_fields<'r>(row: &'r mut Row, meta: &EventMeta) -> &'r mut Row {
    row.set("blockNumber", BigInt::from(meta.block_number))
        .set("blockTimestamp", BigInt::from(meta.timestamp))
        .set("transactionHash", &meta.tx_hash)
}

#[cfg(test)]
mod tests {
    use substreams_entity_change::pb::entity::{entity_change::Operation, value::Typed};
    use tokenlon_substreams::{
        testing::{bigint, event_meta, field, has_entity, operation, MemoryKeys, MemoryTokens, MemoryTotals},
        token::{ETH_ADDRESS, WETH_MAINNET},
    };

    use super::*;
    use crate::{
        modules::{
            map_events::traded_tokens, store_entity_keys::entity_occurrences, store_totals::total_deltas,
        },
        pb::tokenlon::exchange::v1::ExchangeEvent,
    };

    const USER_ADDR: [u8; 20] = [0xaa; 20];
    const DAI: [u8; 20] = [0xda; 20];

    /// The ether placeholder has no code, so its metadata calls revert.
    fn ether_reverts() -> MemoryTokens {
        MemoryTokens::reverting(&[&ETH_ADDRESS])
    }

    fn run(events: Vec<ExchangeEvent>, entity_keys: &mut MemoryKeys, tokens: &MemoryTokens) -> EntityChanges {
        let params = Params::default();
        let tokens = traded_tokens(&events, tokens);
        let events = ExchangeEvents { events, tokens };
        entity_keys.apply(entity_occurrences(&params, &events));
        let mut totals = MemoryTotals::default();
        totals.apply(total_deltas(&events));

        entity_changes(&params, &events, &totals, entity_keys)
    }

    fn at(meta: EventMeta, event: Event) -> ExchangeEvent {
        ExchangeEvent { meta: Some(meta), event: Some(event) }
    }

    fn swapped(settle_amount: &str) -> Event {
        Event::Swapped(Swapped {
            source: "Uniswap V2".into(),
            execute_tx_hash: vec![0x01; 32],
            user_addr: USER_ADDR.to_vec(),
            taker_asset_addr: ETH_ADDRESS.to_vec(),
            taker_asset_amount: "100".into(),
            maker_addr: vec![0xdd; 20],
            maker_asset_addr: DAI.to_vec(),
            maker_asset_amount: "200".into(),
            receiver_addr: USER_ADDR.to_vec(),
            settle_amount: settle_amount.into(),
            received_amount: "200".into(),
            fee_factor: 30,
            subsidy_factor: 5,
            salt: "0".into(),
            deadline: "0".into(),
            inputs: vec![0xfe, 0xed],
        })
    }

    fn fill_order() -> FillOrder {
        FillOrder {
            source: "RFQ v1".into(),
            execute_tx_hash: vec![0x01; 32],
            order_hash: vec![0x02; 32],
            user_addr: USER_ADDR.to_vec(),
            taker_asset_addr: DAI.to_vec(),
            taker_asset_amount: "100".into(),
            maker_addr: vec![0xdd; 20],
            maker_asset_addr: [0xcc; 20].to_vec(),
            maker_asset_amount: "50".into(),
            receiver_addr: USER_ADDR.to_vec(),
            settle_amount: "50".into(),
            fee_factor: 10,
        }
    }

    fn receipt(remaining: &str) -> Option<FillReceipt> {
        Some(FillReceipt {
            maker_token: DAI.to_vec(),
            taker_token: [0xcc; 20].to_vec(),
            maker_token_filled_amount: "10".into(),
            taker_token_filled_amount: "20".into(),
            remaining_amount: remaining.into(),
            maker_token_fee: "1".into(),
            taker_token_fee: "2".into(),
        })
    }

    fn filled_by_trader(remaining: &str) -> Event {
        Event::LimitOrderFilledByTrader(LimitOrderFilledByTrader {
            order_hash: vec![0x05; 32],
            maker: vec![0x0a; 20],
            taker: vec![0x0b; 20],
            allow_fill_hash: vec![0x06; 32],
            recipient: vec![0x0e; 20],
            fill_receipt: receipt(remaining),
        })
    }

    fn order_id() -> String {
        to_hex(&[0x05; 32])
    }

    fn user_id() -> String {
        to_hex(&USER_ADDR)
    }

    #[test]
    fn test_swapped() {
        let meta = event_meta(10, 1);
        let id = meta.event_id();
        let tokens = ether_reverts();
        let changes = run(vec![at(meta.clone(), swapped("210"))], &mut MemoryKeys::default(), &tokens);

        assert_eq!(field(&changes, "Swapped", &id, "txNumber"), bigint("1"));
        assert_eq!(field(&changes, "Swapped", &id, "source"), Some(Typed::String("Uniswap V2".into())));
        assert_eq!(field(&changes, "Swapped", &id, "settleAmount"), bigint("210"));
        assert_eq!(field(&changes, "Swapped", &id, "feeFactor"), Some(Typed::Int32(30)));
        assert_eq!(field(&changes, "Swapped", &id, "salt"), bigint("0"));
        assert_eq!(
            field(&changes, "Swapped", &id, "blockHash"),
            Some(Typed::String(to_hex(&meta.block_hash)))
        );
        assert_eq!(field(&changes, "SwappedTotal", "1", "total"), bigint("1"));

        assert!(has_entity(&changes, "SubsidizedSwapped", &id));
        assert_eq!(field(&changes, "SubsidizedSwapped", &id, "txNumber"), None);
        assert_eq!(field(&changes, "SubsidizedSwapped", &id, "inputs"), None);
        assert_eq!(field(&changes, "SubsidizedSwapped", &id, "receivedAmount"), bigint("200"));

        assert_eq!(operation(&changes, "User", &user_id()), Some(Operation::Create));
        assert_eq!(field(&changes, "User", &user_id(), "tradeCount"), Some(Typed::Int32(1)));
        assert_eq!(
            field(&changes, "User", &user_id(), "firstSeen"),
            Some(Typed::Int32(meta.timestamp_i32()))
        );
        assert_eq!(field(&changes, "User", &user_id(), "firstTx"), Some(Typed::String(meta.tx_id())));
    }

    #[test]
    fn test_swap_without_subsidy() {
        let meta = event_meta(10, 1);
        let changes = run(
            vec![at(meta.clone(), swapped("200"))],
            &mut MemoryKeys::default(),
            &ether_reverts(),
        );

        assert!(has_entity(&changes, "Swapped", &meta.event_id()));
        assert!(!has_entity(&changes, "SubsidizedSwapped", &meta.event_id()));
    }

    #[test]
    fn test_traded_tokens_are_cached_once() {
        let tokens = ether_reverts();
        let changes = run(
            vec![at(event_meta(10, 1), swapped("200")), at(event_meta(10, 2), swapped("200"))],
            &mut MemoryKeys::default(),
            &tokens,
        );

        let dai = to_hex(&DAI);
        assert_eq!(operation(&changes, "TradedToken", &dai), Some(Operation::Create));
        assert!(matches!(field(&changes, "TradedToken", &dai, "address"), Some(Typed::Bytes(_))));
        assert_eq!(field(&changes, "TradedToken", &dai, "decimals"), Some(Typed::Int32(18)));
        assert_eq!(field(&changes, "TradedToken", &dai, "symbol"), Some(Typed::String("T218".into())));
        assert!(!has_entity(&changes, "TradedToken", &to_hex(&WETH_MAINNET)));
        assert!(!has_entity(&changes, "TradedToken", &to_hex(&ETH_ADDRESS)));
        assert_eq!(tokens.calls(), vec![ETH_ADDRESS.to_vec(), DAI.to_vec()]);

        assert_eq!(field(&changes, "SwappedTotal", "1", "total"), bigint("2"));
        assert_eq!(field(&changes, "User", &user_id(), "tradeCount"), Some(Typed::Int32(2)));
    }

    #[test]
    fn test_weth_is_cached_under_its_address() {
        let swap = match swapped("200") {
            Event::Swapped(swap) => Event::Swapped(Swapped { taker_asset_addr: WETH_MAINNET.to_vec(), ..swap }),
            _ => unreachable!(),
        };
        let changes = run(vec![at(event_meta(10, 1), swap)], &mut MemoryKeys::default(), &ether_reverts());

        let weth = to_hex(&WETH_MAINNET);
        assert_eq!(operation(&changes, "TradedToken", &weth), Some(Operation::Create));
        assert_eq!(field(&changes, "TradedToken", &weth, "symbol"), Some(Typed::String("T192".into())));
    }

    #[test]
    fn test_known_token_is_not_written_again() {
        let mut entity_keys = MemoryKeys::default();
        entity_keys.apply(vec![Occurrence {
            ord: 4,
            key: format!("TradedToken:{}", to_hex(&DAI)),
            marker: "9:4".into(),
        }]);

        let changes = run(vec![at(event_meta(10, 1), swapped("200"))], &mut entity_keys, &ether_reverts());

        assert!(!has_entity(&changes, "TradedToken", &to_hex(&DAI)));
    }

    #[test]
    fn test_reverted_metadata_writes_no_token() {
        let swap = match swapped("200") {
            Event::Swapped(swap) => Event::Swapped(Swapped { maker_asset_addr: vec![0xba; 20], ..swap }),
            _ => unreachable!(),
        };
        let meta = event_meta(10, 1);
        let changes = run(
            vec![at(meta.clone(), swap)],
            &mut MemoryKeys::default(),
            &MemoryTokens::reverting(&[&ETH_ADDRESS, &[0xba; 20]]),
        );

        assert!(!has_entity(&changes, "TradedToken", &to_hex(&[0xba; 20])));
        assert!(has_entity(&changes, "Swapped", &meta.event_id()));
    }

    #[test]
    fn test_token_is_cached_once_its_metadata_reads() {
        let mut entity_keys = MemoryKeys::default();
        let first = run(
            vec![at(event_meta(10, 1), swapped("200"))],
            &mut entity_keys,
            &MemoryTokens::reverting(&[&ETH_ADDRESS, &DAI]),
        );
        assert!(!has_entity(&first, "TradedToken", &to_hex(&DAI)));

        let meta = event_meta(11, 1);
        let second = run(vec![at(meta.clone(), swapped("200"))], &mut entity_keys, &ether_reverts());

        assert_eq!(operation(&second, "TradedToken", &to_hex(&DAI)), Some(Operation::Create));
        assert_eq!(
            field(&second, "TradedToken", &to_hex(&DAI), "startDate"),
            Some(Typed::Int32(meta.timestamp_i32()))
        );
    }

    #[test]
    fn test_fill_orders_keep_separate_counters() {
        let pmm = event_meta(10, 1);
        let rfq = event_meta(10, 2);
        let changes = run(
            vec![
                at(pmm.clone(), Event::PmmFillOrder(fill_order())),
                at(rfq.clone(), Event::RfqFillOrder(fill_order())),
            ],
            &mut MemoryKeys::default(),
            &ether_reverts(),
        );

        assert_eq!(field(&changes, "FillOrder", &pmm.event_id(), "txNumber"), bigint("1"));
        assert!(matches!(
            field(&changes, "FillOrder", &pmm.event_id(), "orderHash"),
            Some(Typed::Bytes(_))
        ));
        assert_eq!(field(&changes, "FillRFQV1Order", &rfq.event_id(), "txNumber"), bigint("1"));
        assert_eq!(field(&changes, "FillRFQV1Order", &rfq.event_id(), "feeFactor"), Some(Typed::Int32(10)));
        assert_eq!(field(&changes, "FillOrderTotal", "1", "total"), bigint("1"));
        assert_eq!(field(&changes, "FillRFQV1OrderTotal", "1", "total"), bigint("1"));
        assert_eq!(field(&changes, "User", &user_id(), "tradeCount"), Some(Typed::Int32(2)));
    }

    #[test]
    fn test_returning_user_is_updated() {
        let mut entity_keys = MemoryKeys::default();
        entity_keys.apply(vec![Occurrence {
            ord: 3,
            key: format!("User:{}", user_id()),
            marker: "9:3".into(),
        }]);
        let meta = event_meta(10, 1);

        let changes = run(vec![at(meta.clone(), swapped("200"))], &mut entity_keys, &ether_reverts());

        assert_eq!(operation(&changes, "User", &user_id()), Some(Operation::Update));
        assert_eq!(field(&changes, "User", &user_id(), "firstSeen"), None);
        assert_eq!(
            field(&changes, "User", &user_id(), "lastSeen"),
            Some(Typed::Int32(meta.timestamp_i32()))
        );
    }

    #[test]
    fn test_limit_order_filled_by_trader() {
        let first = event_meta(10, 1);
        let second = event_meta(10, 2);
        let changes = run(
            vec![at(first.clone(), filled_by_trader("5")), at(second.clone(), filled_by_trader("0"))],
            &mut MemoryKeys::default(),
            &ether_reverts(),
        );

        let id = second.event_id();
        assert_eq!(field(&changes, "LimitOrderFilledByTrader", &id, "fillReceiptRemainingAmount"), bigint("0"));
        assert_eq!(
            field(&changes, "LimitOrderFilledByTrader", &id, "recipient"),
            field(&changes, "LimitOrderFilled", &id, "recipient")
        );
        assert!(matches!(
            field(&changes, "LimitOrderFilled", &id, "recipient"),
            Some(Typed::Bytes(_))
        ));
        assert_eq!(field(&changes, "LimitOrderFilled", &id, "order"), Some(Typed::String(order_id())));
        assert_eq!(
            field(&changes, "LimitOrderFilled", &id, "limitOrderFilledType"),
            Some(Typed::String("ByTrader".into()))
        );
        assert_eq!(field(&changes, "LimitOrderFilled", &id, "takerTokenProfit"), bigint("0"));

        assert_eq!(operation(&changes, "Order", &order_id()), Some(Operation::Create));
        assert_eq!(
            field(&changes, "Order", &order_id(), "orderStatus"),
            Some(Typed::String("FullyFilled".into()))
        );
        assert_eq!(
            field(&changes, "Order", &order_id(), "firstFilledTime"),
            bigint(&first.timestamp.to_string())
        );
        assert_eq!(
            field(&changes, "Order", &order_id(), "lastFilledTime"),
            bigint(&second.timestamp.to_string())
        );
        assert!(has_entity(&changes, "TradedToken", &to_hex(&DAI)));
        assert!(!has_entity(&changes, "User", &to_hex(&[0x0b; 20])));
    }

    #[test]
    fn test_limit_order_filled_by_protocol() {
        let meta = event_meta(10, 1);
        let event = Event::LimitOrderFilledByProtocol(LimitOrderFilledByProtocol {
            order_hash: vec![0x05; 32],
            maker: vec![0x0a; 20],
            taker: vec![0x0b; 20],
            allow_fill_hash: vec![0x06; 32],
            relayer: vec![0x0c; 20],
            profit_recipient: vec![0x0d; 20],
            fill_receipt: receipt("5"),
            taker_token_profit: "3".into(),
            taker_token_profit_fee: "4".into(),
            taker_token_profit_back_to_maker: "6".into(),
        });
        let changes = run(vec![at(meta.clone(), event)], &mut MemoryKeys::default(), &ether_reverts());

        let id = meta.event_id();
        assert_eq!(field(&changes, "LimitOrderFilledByProtocol", &id, "takerTokenProfitBackToMaker"), bigint("6"));
        assert_eq!(
            field(&changes, "LimitOrderFilledByProtocol", &id, "blockTimestamp"),
            bigint(&meta.timestamp.to_string())
        );
        assert_eq!(
            field(&changes, "LimitOrderFilled", &id, "limitOrderFilledType"),
            Some(Typed::String("ByProtocol".into()))
        );
        assert_eq!(
            field(&changes, "LimitOrderFilled", &id, "relayer"),
            field(&changes, "LimitOrderFilledByProtocol", &id, "relayer")
        );
        assert_ne!(
            field(&changes, "LimitOrderFilled", &id, "recipient"),
            field(&changes, "LimitOrderFilled", &id, "relayer")
        );
        assert_eq!(
            field(&changes, "Order", &order_id(), "orderStatus"),
            Some(Typed::String("Normal".into()))
        );
        assert_eq!(field(&changes, "Order", &order_id(), "cancelledTime"), bigint("0"));
    }

    #[test]
    fn test_cancel_existing_order() {
        let mut entity_keys = MemoryKeys::default();
        entity_keys.apply(vec![Occurrence {
            ord: 3,
            key: format!("Order:{}", order_id()),
            marker: "9:3".into(),
        }]);
        let meta = event_meta(10, 1);
        let cancel = Event::OrderCancelled(OrderCancelled { order_hash: vec![0x05; 32], maker: vec![0x0a; 20] });

        let changes = run(vec![at(meta.clone(), cancel)], &mut entity_keys, &ether_reverts());

        assert!(has_entity(&changes, "OrderCancelled", &meta.event_id()));
        assert_eq!(operation(&changes, "Order", &order_id()), Some(Operation::Update));
        assert_eq!(
            field(&changes, "Order", &order_id(), "orderStatus"),
            Some(Typed::String("Cancelled".into()))
        );
        assert_eq!(
            field(&changes, "Order", &order_id(), "cancelledTime"),
            bigint(&meta.timestamp.to_string())
        );
    }

    #[test]
    fn test_cancel_before_first_fill_leaves_order_alone() {
        let cancel = Event::OrderCancelled(OrderCancelled { order_hash: vec![0x05; 32], maker: vec![0x0a; 20] });
        let changes = run(
            vec![at(event_meta(10, 1), cancel), at(event_meta(10, 2), filled_by_trader("5"))],
            &mut MemoryKeys::default(),
            &ether_reverts(),
        );

        assert_eq!(operation(&changes, "Order", &order_id()), Some(Operation::Create));
        assert_eq!(
            field(&changes, "Order", &order_id(), "orderStatus"),
            Some(Typed::String("Normal".into()))
        );
        assert_eq!(field(&changes, "Order", &order_id(), "cancelledTime"), bigint("0"));
    }

    #[test]
    fn test_empty_block() {
        let changes = run(vec![], &mut MemoryKeys::default(), &ether_reverts());
        assert!(changes.entity_changes.is_empty());
    }
}
