use num_bigint::BigUint;
use substreams::scalar::BigInt;
use substreams_ethereum::{block_view::LogView, pb::eth::v2 as eth};

use crate::pb::tokenlon::common::v1::EventMeta;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Renders bytes the way graph entities key and display them: `0x` followed by lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn day_id(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

pub fn day_start(timestamp: u64) -> u64 {
    day_id(timestamp) * SECONDS_PER_DAY
}

impl EventMeta {
    pub fn from_log(block: &eth::Block, log: &LogView) -> Self {
        let transaction = log.receipt.transaction;
        EventMeta {
            block_number: block.number,
            block_hash: block.hash.clone(),
            timestamp: block.timestamp_seconds(),
            tx_hash: transaction.hash.clone(),
            tx_from: transaction.from.clone(),
            tx_to: transaction.to.clone(),
            gas_price: transaction
                .gas_price
                .as_ref()
                .map(|price| BigInt::from_unsigned_bytes_be(&price.bytes).to_string())
                .unwrap_or_else(|| "0".to_string()),
            log_index: log.log.block_index,
            ordinal: log.log.ordinal,
            address: log.log.address.clone(),
        }
    }

    /// Id of entities recorded once per transaction.
    pub fn tx_id(&self) -> String {
        to_hex(&self.tx_hash)
    }

    /// Id of entities recorded once per log: `{blockHash}-{txHash}-{logIndex}`.
    pub fn event_id(&self) -> String {
        format!("{}-{}-{}", to_hex(&self.block_hash), to_hex(&self.tx_hash), self.log_index)
    }

    /// Id of fee token configuration events.
    ///
    /// The transaction hash is read as an unsigned little-endian integer, the log index is
    /// added to it and the sum is rendered as minimal `0x` hex. Existing deployments key
    /// `SetFeeToken` and `EnableFeeToken` this way, so the encoding must not change.
    pub fn tx_log_key(&self) -> String {
        let key = BigUint::from_bytes_le(&self.tx_hash) + BigUint::from(self.log_index);
        format!("0x{key:x}")
    }

    /// First occurrence marker of anything this log creates.
    pub fn marker(&self) -> String {
        crate::store::occurrence_marker(self.block_number, self.ordinal)
    }

    pub fn day_id(&self) -> u64 {
        day_id(self.timestamp)
    }

    pub fn day_start(&self) -> u64 {
        day_start(self.timestamp)
    }

    /// Timestamps are stored as graph `Int`.
    pub fn timestamp_i32(&self) -> i32 {
        self.timestamp as i32
    }

    pub fn gas_price(&self) -> BigInt {
        crate::scalar::parse_bigint(&self.gas_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::event_meta;

    #[test]
    fn test_day_bucket() {
        assert_eq!(day_id(1_617_206_400), 18_717);
        assert_eq!(day_start(1_617_206_400), 1_617_148_800);
        assert_eq!(day_start(86_399), 0);

        // 2021-03-31T00:00:00Z and the second before it
        assert_eq!(day_id(1_617_148_800), 18_717);
        assert_eq!(day_start(1_617_148_800), 1_617_148_800);
        assert_eq!(day_id(1_617_148_799), 18_716);
        assert_eq!(day_start(1_617_148_799), 1_617_062_400);
    }

    #[test]
    fn test_event_ids() {
        let meta = EventMeta {
            block_hash: vec![0xab; 2],
            tx_hash: vec![0x01, 0x02],
            log_index: 7,
            ..event_meta(1, 1)
        };

        assert_eq!(meta.tx_id(), "0x0102");
        assert_eq!(meta.event_id(), "0xabab-0x0102-7");
    }

    #[test]
    fn test_tx_log_key_reads_hash_little_endian() {
        // 0x0102 little-endian is 0x0201, plus log index 0x10.
        let meta = EventMeta { tx_hash: vec![0x01, 0x02], log_index: 16, ..event_meta(1, 1) };
        assert_eq!(meta.tx_log_key(), "0x211");

        let zero = EventMeta { tx_hash: vec![0; 32], log_index: 0, ..event_meta(1, 1) };
        assert_eq!(zero.tx_log_key(), "0x0");
    }

    #[test]
    fn test_marker() {
        assert_eq!(event_meta(12, 340).marker(), "12:340");
    }
}
