use anyhow::Result;
use itertools::Itertools;
use substreams::{log::info, scalar::BigInt};
use substreams_ethereum::{
    pb::eth::{self, v2::Log},
    Event as _,
};
use tokenlon_substreams::{
    prelude::*,
    token::{RpcTokenMetadata, TokenMetadataSource},
};

use crate::{
    abi::{amm_wrapper, amm_wrapper_with_path, limit_order, limit_order_back_to_maker, pmm},
    params::{Contract, Params},
    pb::tokenlon::exchange::v1::{
        exchange_event::Event, ExchangeEvent, ExchangeEvents, FillOrder, FillReceipt,
        LimitOrderFilledByProtocol, LimitOrderFilledByTrader, OrderCancelled, Swapped, Token,
    },
};

type ReceiptTuple = (Vec<u8>, Vec<u8>, BigInt, BigInt, BigInt, BigInt, BigInt);

#[substreams::handlers::map]
pub fn map_events(params: String, block: eth::v2::Block) -> Result<ExchangeEvents> {
    let params = Params::parse_from_query(&params)?;

    let events = block
        .logs()
        .filter_map(|log| {
            let contract = params.contract(log.address())?;
            let input = log
                .receipt
                .transaction
                .input
                .get(4..)
                .unwrap_or_default();
            let event = decode_event(contract, log.log, input)?;
            Some(ExchangeEvent { meta: Some(EventMeta::from_log(&block, &log)), event: Some(event) })
        })
        .collect_vec();
    let tokens = traded_tokens(&events, &RpcTokenMetadata);

    Ok(ExchangeEvents { events, tokens })
}

/// Reads the metadata of each token traded in the block once, at its emitted address.
pub(crate) fn traded_tokens(events: &[ExchangeEvent], source: &impl TokenMetadataSource) -> Vec<Token> {
    events
        .iter()
        .filter_map(|event| event.event.as_ref())
        .flat_map(|event| event.traded_tokens())
        .unique()
        .filter_map(|address| {
            let Some(metadata) = source.metadata(address) else {
                info!("skipping token {}: metadata calls reverted", to_hex(address));
                return None;
            };
            Some(Token {
                address: address.to_vec(),
                decimals: metadata.decimals,
                name: metadata.name,
                symbol: metadata.symbol,
            })
        })
        .collect_vec()
}

/// Decodes a log of an indexed contract. `input` is the calldata of the transaction without
/// its selector.
pub(crate) fn decode_event(contract: Contract, log: &Log, input: &[u8]) -> Option<Event> {
    match contract {
        Contract::AmmWrapper => flat_swap(log, input),
        Contract::AmmWrapperWithPath => flat_swap(log, input).or_else(|| {
            amm_wrapper_with_path::events::Swapped::match_and_decode(log).and_then(|ev| {
                let (source, transaction_hash, settle_amount, received_amount, fee_factor, subsidy_factor) =
                    ev.tx_meta_data;
                let (
                    maker_addr,
                    taker_asset_addr,
                    maker_asset_addr,
                    taker_asset_amount,
                    maker_asset_amount,
                    user_addr,
                    receiver_addr,
                    salt,
                    deadline,
                ) = ev.order;

                Some(Event::Swapped(Swapped {
                    source,
                    execute_tx_hash: transaction_hash.to_vec(),
                    user_addr,
                    taker_asset_addr,
                    taker_asset_amount: taker_asset_amount.to_string(),
                    maker_addr,
                    maker_asset_addr,
                    maker_asset_amount: maker_asset_amount.to_string(),
                    receiver_addr,
                    settle_amount: settle_amount.to_string(),
                    received_amount: received_amount.to_string(),
                    fee_factor: factor(&fee_factor)?,
                    subsidy_factor: factor(&subsidy_factor)?,
                    salt: salt.to_string(),
                    deadline: deadline.to_string(),
                    inputs: input.to_vec(),
                }))
            })
        }),
        Contract::Pmm => fill_order(log).map(Event::PmmFillOrder),
        Contract::Rfq => fill_order(log).map(Event::RfqFillOrder),
        Contract::LimitOrder => limit_order_event(log),
    }
}

fn flat_swap(log: &Log, input: &[u8]) -> Option<Event> {
    let ev = amm_wrapper::events::Swapped::match_and_decode(log)?;
    Some(Event::Swapped(Swapped {
        source: ev.source,
        execute_tx_hash: ev.transaction_hash.to_vec(),
        user_addr: ev.user_addr,
        taker_asset_addr: ev.taker_asset_addr,
        taker_asset_amount: ev.taker_asset_amount.to_string(),
        maker_addr: ev.maker_addr,
        maker_asset_addr: ev.maker_asset_addr,
        maker_asset_amount: ev.maker_asset_amount.to_string(),
        receiver_addr: ev.receiver_addr,
        settle_amount: ev.settle_amount.to_string(),
        received_amount: ev.received_amount.to_string(),
        fee_factor: factor(&ev.fee_factor)?,
        subsidy_factor: factor(&ev.subsidy_factor)?,
        salt: "0".to_string(),
        deadline: "0".to_string(),
        inputs: input.to_vec(),
    }))
}

fn fill_order(log: &Log) -> Option<FillOrder> {
    let ev = pmm::events::FillOrder::match_and_decode(log)?;
    Some(FillOrder {
        source: ev.source,
        execute_tx_hash: ev.transaction_hash.to_vec(),
        order_hash: ev.order_hash.to_vec(),
        user_addr: ev.user_addr,
        taker_asset_addr: ev.taker_asset_addr,
        taker_asset_amount: ev.taker_asset_amount.to_string(),
        maker_addr: ev.maker_addr,
        maker_asset_addr: ev.maker_asset_addr,
        maker_asset_amount: ev.maker_asset_amount.to_string(),
        receiver_addr: ev.receiver_addr,
        settle_amount: ev.settle_amount.to_string(),
        fee_factor: factor(&ev.fee_factor)?,
    })
}

/// Fee and subsidy factors are `uint16` basis points.
fn factor(value: &BigInt) -> Option<u32> {
    value.to_string().parse::<u16>().ok().map(u32::from)
}

fn limit_order_event(log: &Log) -> Option<Event> {
    if let Some(ev) = limit_order::events::LimitOrderFilledByProtocol::match_and_decode(log) {
        Some(Event::LimitOrderFilledByProtocol(LimitOrderFilledByProtocol {
            order_hash: ev.order_hash.to_vec(),
            maker: ev.maker,
            taker: ev.taker,
            allow_fill_hash: ev.allow_fill_hash.to_vec(),
            relayer: ev.relayer,
            profit_recipient: ev.profit_recipient,
            fill_receipt: Some(fill_receipt(ev.fill_receipt)),
            taker_token_profit: ev.relayer_taker_token_profit.to_string(),
            taker_token_profit_fee: ev.relayer_taker_token_profit_fee.to_string(),
            taker_token_profit_back_to_maker: "0".to_string(),
        }))
    } else if let Some(ev) =
        limit_order_back_to_maker::events::LimitOrderFilledByProtocol::match_and_decode(log)
    {
        Some(Event::LimitOrderFilledByProtocol(LimitOrderFilledByProtocol {
            order_hash: ev.order_hash.to_vec(),
            maker: ev.maker,
            taker: ev.taker,
            allow_fill_hash: ev.allow_fill_hash.to_vec(),
            relayer: ev.relayer,
            profit_recipient: ev.profit_recipient,
            fill_receipt: Some(fill_receipt(ev.fill_receipt)),
            taker_token_profit: ev.taker_token_profit.to_string(),
            taker_token_profit_fee: ev.taker_token_profit_fee.to_string(),
            taker_token_profit_back_to_maker: ev.taker_token_profit_back_to_maker.to_string(),
        }))
    } else if let Some(ev) = limit_order::events::LimitOrderFilledByTrader::match_and_decode(log) {
        Some(Event::LimitOrderFilledByTrader(LimitOrderFilledByTrader {
            order_hash: ev.order_hash.to_vec(),
            maker: ev.maker,
            taker: ev.taker,
            allow_fill_hash: ev.allow_fill_hash.to_vec(),
            recipient: ev.recipient,
            fill_receipt: Some(fill_receipt(ev.fill_receipt)),
        }))
    } else {
        limit_order::events::OrderCancelled::match_and_decode(log).map(|ev| {
            Event::OrderCancelled(OrderCancelled { order_hash: ev.order_hash.to_vec(), maker: ev.maker })
        })
    }
}

fn fill_receipt(receipt: ReceiptTuple) -> FillReceipt {
    let (
        maker_token,
        taker_token,
        maker_token_filled_amount,
        taker_token_filled_amount,
        remaining_amount,
        maker_token_fee,
        taker_token_fee,
    ) = receipt;

    FillReceipt {
        maker_token,
        taker_token,
        maker_token_filled_amount: maker_token_filled_amount.to_string(),
        taker_token_filled_amount: taker_token_filled_amount.to_string(),
        remaining_amount: remaining_amount.to_string(),
        maker_token_fee: maker_token_fee.to_string(),
        taker_token_fee: taker_token_fee.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ethabi::Token;
    use tokenlon_substreams::testing::{
        address, address_topic, event_meta, log, signature_topic, uint, MemoryTokens,
    };

    use super::*;

    const CONTRACT: [u8; 20] = [0x11; 20];
    const USER: [u8; 20] = [0xaa; 20];
    const TAKER_ASSET: [u8; 20] = [0xbb; 20];
    const MAKER_ASSET: [u8; 20] = [0xcc; 20];

    const FILL_RECEIPT: &str = "(address,address,uint256,uint256,uint256,uint256,uint256)";

    fn receipt_token(remaining: u64) -> Token {
        Token::Tuple(vec![
            address(&MAKER_ASSET),
            address(&TAKER_ASSET),
            uint(10),
            uint(20),
            uint(remaining),
            uint(1),
            uint(2),
        ])
    }

    fn expected_receipt(remaining: &str) -> FillReceipt {
        FillReceipt {
            maker_token: MAKER_ASSET.to_vec(),
            taker_token: TAKER_ASSET.to_vec(),
            maker_token_filled_amount: "10".into(),
            taker_token_filled_amount: "20".into(),
            remaining_amount: remaining.into(),
            maker_token_fee: "1".into(),
            taker_token_fee: "2".into(),
        }
    }

    fn flat_swapped_log() -> Log {
        log(
            &CONTRACT,
            vec![
                signature_topic(
                    "Swapped(string,bytes32,address,address,uint256,address,address,uint256,address,uint256,uint256,uint16,uint16)",
                ),
                vec![0x01; 32],
                address_topic(&USER),
            ],
            &[
                Token::String("Uniswap V2".into()),
                address(&TAKER_ASSET),
                uint(100),
                address(&[0xdd; 20]),
                address(&MAKER_ASSET),
                uint(200),
                address(&USER),
                uint(210),
                uint(200),
                uint(30),
                uint(5),
            ],
        )
    }

    #[test]
    fn test_flat_swapped() {
        let event = decode_event(Contract::AmmWrapper, &flat_swapped_log(), &[0xfe, 0xed]);

        assert_eq!(
            event,
            Some(Event::Swapped(Swapped {
                source: "Uniswap V2".into(),
                execute_tx_hash: vec![0x01; 32],
                user_addr: USER.to_vec(),
                taker_asset_addr: TAKER_ASSET.to_vec(),
                taker_asset_amount: "100".into(),
                maker_addr: vec![0xdd; 20],
                maker_asset_addr: MAKER_ASSET.to_vec(),
                maker_asset_amount: "200".into(),
                receiver_addr: USER.to_vec(),
                settle_amount: "210".into(),
                received_amount: "200".into(),
                fee_factor: 30,
                subsidy_factor: 5,
                salt: "0".into(),
                deadline: "0".into(),
                inputs: vec![0xfe, 0xed],
            }))
        );
    }

    #[test]
    fn test_tuple_swapped() {
        let log = log(
            &CONTRACT,
            vec![signature_topic(
                "Swapped((string,bytes32,uint256,uint256,uint16,uint16),(address,address,address,uint256,uint256,address,address,uint256,uint256))",
            )],
            &[
                Token::Tuple(vec![
                    Token::String("Curve".into()),
                    Token::FixedBytes(vec![0x02; 32]),
                    uint(90),
                    uint(95),
                    uint(30),
                    uint(0),
                ]),
                Token::Tuple(vec![
                    address(&[0xdd; 20]),
                    address(&TAKER_ASSET),
                    address(&MAKER_ASSET),
                    uint(100),
                    uint(90),
                    address(&USER),
                    address(&[0xee; 20]),
                    uint(7),
                    uint(1_700_000_000),
                ]),
            ],
        );

        let Some(Event::Swapped(swapped)) = decode_event(Contract::AmmWrapperWithPath, &log, &[]) else {
            panic!("tuple Swapped not decoded");
        };
        assert_eq!(swapped.source, "Curve");
        assert_eq!(swapped.execute_tx_hash, vec![0x02; 32]);
        assert_eq!(swapped.user_addr, USER.to_vec());
        assert_eq!(swapped.maker_addr, vec![0xdd; 20]);
        assert_eq!(swapped.receiver_addr, vec![0xee; 20]);
        assert_eq!(swapped.taker_asset_amount, "100");
        assert_eq!(swapped.settle_amount, "90");
        assert_eq!(swapped.received_amount, "95");
        assert_eq!(swapped.salt, "7");
        assert_eq!(swapped.deadline, "1700000000");

        // the path wrapper also emits the flat event
        assert!(matches!(
            decode_event(Contract::AmmWrapperWithPath, &flat_swapped_log(), &[]),
            Some(Event::Swapped(_))
        ));
        assert_eq!(decode_event(Contract::AmmWrapper, &log, &[]), None);
    }

    #[test]
    fn test_fill_order_by_contract() {
        let log = log(
            &CONTRACT,
            vec![
                signature_topic(
                    "FillOrder(string,bytes32,bytes32,address,address,uint256,address,address,uint256,address,uint256,uint16)",
                ),
                vec![0x01; 32],
                vec![0x02; 32],
                address_topic(&USER),
            ],
            &[
                Token::String("RFQ v1".into()),
                address(&TAKER_ASSET),
                uint(100),
                address(&[0xdd; 20]),
                address(&MAKER_ASSET),
                uint(200),
                address(&USER),
                uint(200),
                uint(10),
            ],
        );
        let expected = FillOrder {
            source: "RFQ v1".into(),
            execute_tx_hash: vec![0x01; 32],
            order_hash: vec![0x02; 32],
            user_addr: USER.to_vec(),
            taker_asset_addr: TAKER_ASSET.to_vec(),
            taker_asset_amount: "100".into(),
            maker_addr: vec![0xdd; 20],
            maker_asset_addr: MAKER_ASSET.to_vec(),
            maker_asset_amount: "200".into(),
            receiver_addr: USER.to_vec(),
            settle_amount: "200".into(),
            fee_factor: 10,
        };

        assert_eq!(decode_event(Contract::Pmm, &log, &[]), Some(Event::PmmFillOrder(expected.clone())));
        assert_eq!(decode_event(Contract::Rfq, &log, &[]), Some(Event::RfqFillOrder(expected)));
        assert_eq!(decode_event(Contract::LimitOrder, &log, &[]), None);
    }

    fn order_topics(signature: &str) -> Vec<Vec<u8>> {
        vec![
            signature_topic(signature),
            vec![0x05; 32],
            address_topic(&[0x0a; 20]),
            address_topic(&[0x0b; 20]),
        ]
    }

    #[test]
    fn test_limit_order_filled_by_protocol_variants() {
        let mainnet = log(
            &CONTRACT,
            order_topics(&format!(
                "LimitOrderFilledByProtocol(bytes32,address,address,bytes32,address,address,{FILL_RECEIPT},uint256,uint256)"
            )),
            &[
                Token::FixedBytes(vec![0x06; 32]),
                address(&[0x0c; 20]),
                address(&[0x0d; 20]),
                receipt_token(0),
                uint(3),
                uint(4),
            ],
        );
        let back_to_maker = log(
            &CONTRACT,
            order_topics(&format!(
                "LimitOrderFilledByProtocol(bytes32,address,address,bytes32,address,address,{FILL_RECEIPT},uint256,uint256,uint256)"
            )),
            &[
                Token::FixedBytes(vec![0x06; 32]),
                address(&[0x0c; 20]),
                address(&[0x0d; 20]),
                receipt_token(5),
                uint(3),
                uint(4),
                uint(6),
            ],
        );
        let expected = LimitOrderFilledByProtocol {
            order_hash: vec![0x05; 32],
            maker: vec![0x0a; 20],
            taker: vec![0x0b; 20],
            allow_fill_hash: vec![0x06; 32],
            relayer: vec![0x0c; 20],
            profit_recipient: vec![0x0d; 20],
            fill_receipt: Some(expected_receipt("0")),
            taker_token_profit: "3".into(),
            taker_token_profit_fee: "4".into(),
            taker_token_profit_back_to_maker: "0".into(),
        };

        assert_eq!(
            decode_event(Contract::LimitOrder, &mainnet, &[]),
            Some(Event::LimitOrderFilledByProtocol(expected.clone()))
        );
        assert_eq!(
            decode_event(Contract::LimitOrder, &back_to_maker, &[]),
            Some(Event::LimitOrderFilledByProtocol(LimitOrderFilledByProtocol {
                fill_receipt: Some(expected_receipt("5")),
                taker_token_profit_back_to_maker: "6".into(),
                ..expected
            }))
        );
    }

    #[test]
    fn test_limit_order_filled_by_trader_and_cancel() {
        let filled = log(
            &CONTRACT,
            order_topics(&format!(
                "LimitOrderFilledByTrader(bytes32,address,address,bytes32,address,{FILL_RECEIPT})"
            )),
            &[Token::FixedBytes(vec![0x06; 32]), address(&[0x0e; 20]), receipt_token(5)],
        );
        let cancelled = log(
            &CONTRACT,
            vec![signature_topic("OrderCancelled(bytes32,address)")],
            &[Token::FixedBytes(vec![0x05; 32]), address(&[0x0a; 20])],
        );

        assert_eq!(
            decode_event(Contract::LimitOrder, &filled, &[]),
            Some(Event::LimitOrderFilledByTrader(LimitOrderFilledByTrader {
                order_hash: vec![0x05; 32],
                maker: vec![0x0a; 20],
                taker: vec![0x0b; 20],
                allow_fill_hash: vec![0x06; 32],
                recipient: vec![0x0e; 20],
                fill_receipt: Some(expected_receipt("5")),
            }))
        );
        assert_eq!(
            decode_event(Contract::LimitOrder, &cancelled, &[]),
            Some(Event::OrderCancelled(OrderCancelled {
                order_hash: vec![0x05; 32],
                maker: vec![0x0a; 20],
            }))
        );
    }

    #[test]
    fn test_factor_out_of_range() {
        assert_eq!(factor(&BigInt::from(30)), Some(30));
        assert_eq!(factor(&BigInt::from(u16::MAX as u64 + 1)), None);
    }

    #[test]
    fn test_traded_tokens_read_once_per_block() {
        let swap = decode_event(Contract::AmmWrapper, &flat_swapped_log(), &[]);
        let events = vec![
            ExchangeEvent { meta: Some(event_meta(10, 1)), event: swap.clone() },
            ExchangeEvent { meta: Some(event_meta(10, 2)), event: swap },
        ];
        let source = MemoryTokens::reverting(&[&TAKER_ASSET]);

        let tokens = traded_tokens(&events, &source);

        assert_eq!(source.calls(), vec![TAKER_ASSET.to_vec(), MAKER_ASSET.to_vec()]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].address, MAKER_ASSET.to_vec());
        assert_eq!(tokens[0].symbol, "T204");
    }
}
