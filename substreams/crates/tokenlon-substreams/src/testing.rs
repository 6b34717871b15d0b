//! Fakes and builders for exercising handlers without the substreams runtime.
use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
};

use ethabi::Token;
use substreams::scalar::BigInt;
use substreams_entity_change::pb::entity::{entity_change::Operation, value::Typed, EntityChanges};
use substreams_ethereum::pb::eth::v2::Log;
use tiny_keccak::{Hasher, Keccak};

use crate::{
    pb::tokenlon::common::v1::EventMeta,
    store::{FirstSeen, Occurrence, RunningTotals, TotalDelta},
    token::{TokenMetadata, TokenMetadataSource},
};

pub const GENESIS_TIMESTAMP: u64 = 1_617_206_400;

/// In-memory `StoreAddBigInt`/`StoreGetBigInt` pair.
#[derive(Default, Debug)]
pub struct MemoryTotals {
    values: BTreeMap<String, Vec<(u64, BigInt)>>,
}

impl MemoryTotals {
    pub fn apply(&mut self, deltas: Vec<TotalDelta>) {
        for delta in deltas {
            let history = self.values.entry(delta.key).or_default();
            let current = history
                .last()
                .map(|(_, value)| value.clone())
                .unwrap_or_else(BigInt::zero);
            history.push((delta.ord, current + delta.value));
        }
    }
}

impl RunningTotals for MemoryTotals {
    fn total_at(&self, ord: u64, key: &str) -> BigInt {
        self.values
            .get(key)
            .and_then(|history| {
                history
                    .iter()
                    .rev()
                    .find(|(at, _)| *at <= ord)
            })
            .map(|(_, value)| value.clone())
            .unwrap_or_else(BigInt::zero)
    }
}

/// In-memory `StoreSetIfNotExistsString`/`StoreGetString` pair.
#[derive(Default, Debug)]
pub struct MemoryKeys {
    markers: HashMap<String, String>,
}

impl MemoryKeys {
    pub fn apply(&mut self, occurrences: Vec<Occurrence>) {
        for occurrence in occurrences {
            self.markers
                .entry(occurrence.key)
                .or_insert(occurrence.marker);
        }
    }
}

impl FirstSeen for MemoryKeys {
    fn first_seen(&self, key: &str) -> Option<String> {
        self.markers.get(key).cloned()
    }
}

/// Answers metadata for every address except the reverting ones, and records each lookup.
#[derive(Default, Debug)]
pub struct MemoryTokens {
    reverting: Vec<Vec<u8>>,
    calls: RefCell<Vec<Vec<u8>>>,
}

impl MemoryTokens {
    pub fn reverting(tokens: &[&[u8]]) -> Self {
        MemoryTokens {
            reverting: tokens.iter().map(|token| token.to_vec()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.borrow().clone()
    }
}

impl TokenMetadataSource for MemoryTokens {
    fn metadata(&self, token: &[u8]) -> Option<TokenMetadata> {
        self.calls.borrow_mut().push(token.to_vec());
        if self.reverting.iter().any(|reverting| reverting == token) {
            return None;
        }
        let seed = token.first().copied().unwrap_or_default();
        Some(TokenMetadata { decimals: 18, name: format!("Token {seed}"), symbol: format!("T{seed}") })
    }
}

pub fn tx_hash(seed: u8) -> Vec<u8> {
    vec![seed; 32]
}

/// Metadata of a log at `ordinal`, in a transaction of its own. Blocks are 12 seconds apart.
pub fn event_meta(block_number: u64, ordinal: u64) -> EventMeta {
    EventMeta {
        block_number,
        block_hash: vec![block_number as u8; 32],
        timestamp: GENESIS_TIMESTAMP + block_number * 12,
        tx_hash: tx_hash(ordinal as u8),
        tx_from: vec![0x22; 20],
        tx_to: vec![0x33; 20],
        gas_price: "1000000000".to_string(),
        log_index: ordinal as u32,
        ordinal,
        address: vec![0x11; 20],
    }
}

pub fn signature_topic(signature: &str) -> Vec<u8> {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    output.to_vec()
}

pub fn address_topic(address: &[u8]) -> Vec<u8> {
    let mut topic = vec![0u8; 12];
    topic.extend_from_slice(address);
    topic
}

pub fn log(address: &[u8], topics: Vec<Vec<u8>>, data: &[Token]) -> Log {
    Log { address: address.to_vec(), topics, data: ethabi::encode(data), ..Default::default() }
}

pub fn uint(value: u64) -> Token {
    Token::Uint(value.into())
}

pub fn address(value: &[u8]) -> Token {
    Token::Address(ethabi::Address::from_slice(value))
}

fn find_change<'c>(
    changes: &'c EntityChanges,
    entity: &str,
    id: &str,
) -> Option<&'c substreams_entity_change::pb::entity::EntityChange> {
    changes
        .entity_changes
        .iter()
        .find(|change| change.entity == entity && change.id == id)
}

pub fn has_entity(changes: &EntityChanges, entity: &str, id: &str) -> bool {
    find_change(changes, entity, id).is_some()
}

pub fn operation(changes: &EntityChanges, entity: &str, id: &str) -> Option<Operation> {
    find_change(changes, entity, id).and_then(|change| Operation::from_i32(change.operation))
}

pub fn field(changes: &EntityChanges, entity: &str, id: &str, name: &str) -> Option<Typed> {
    find_change(changes, entity, id)?
        .fields
        .iter()
        .find(|field| field.name == name)
        .and_then(|field| field.new_value.as_ref())
        .and_then(|value| value.typed.clone())
}

pub fn bigint(value: &str) -> Option<Typed> {
    Some(Typed::Bigint(value.to_string()))
}
