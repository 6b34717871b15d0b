use substreams::{
    scalar::BigInt,
    store::{
        StoreAdd, StoreAddBigInt, StoreGet, StoreGetBigInt, StoreGetString, StoreSetIfNotExists,
        StoreSetIfNotExistsString,
    },
};

/// `{block}:{ordinal}` of the log that first touched a key.
pub fn occurrence_marker(block_number: u64, ordinal: u64) -> String {
    format!("{block_number}:{ordinal}")
}

fn parse_marker(marker: &str) -> Option<(u64, u64)> {
    let (block, ordinal) = marker.split_once(':')?;
    Some((block.parse().ok()?, ordinal.parse().ok()?))
}

pub fn entity_key(entity: &str, id: &str) -> String {
    format!("{entity}:{id}")
}

/// A signed change to a running total.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalDelta {
    pub ord: u64,
    pub key: String,
    pub value: BigInt,
}

impl TotalDelta {
    pub fn new(ord: u64, key: impl Into<String>, value: BigInt) -> Self {
        TotalDelta { ord, key: key.into(), value }
    }
}

/// A key touched by the log at `ord`, with that log's occurrence marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub ord: u64,
    pub key: String,
    pub marker: String,
}

pub fn add_totals(store: &StoreAddBigInt, deltas: Vec<TotalDelta>) {
    for delta in deltas {
        store.add(delta.ord, delta.key, delta.value);
    }
}

pub fn record_occurrences(store: &StoreSetIfNotExistsString, occurrences: Vec<Occurrence>) {
    for occurrence in occurrences {
        store.set_if_not_exists(occurrence.ord, occurrence.key, &occurrence.marker);
    }
}

/// Read side of an additive store.
pub trait RunningTotals {
    /// Value of `key` once every delta up to and including `ord` is applied. Missing keys
    /// read as zero.
    fn total_at(&self, ord: u64, key: &str) -> BigInt;
}

impl RunningTotals for StoreGetBigInt {
    fn total_at(&self, ord: u64, key: &str) -> BigInt {
        self.get_at(ord, key)
            .unwrap_or_else(BigInt::zero)
    }
}

/// Read side of a store of first occurrence markers.
///
/// Keys that were never recorded belong to entities scoped to a single transaction or log,
/// which are always born in the block being processed.
pub trait FirstSeen {
    fn first_seen(&self, key: &str) -> Option<String>;

    fn is_first_occurrence(&self, key: &str, marker: &str) -> bool {
        self.first_seen(key).as_deref() == Some(marker)
    }

    fn born_in_block(&self, key: &str, block_number: u64) -> bool {
        match self
            .first_seen(key)
            .as_deref()
            .and_then(parse_marker)
        {
            Some((block, _)) => block == block_number,
            None => true,
        }
    }

    fn seen_at_or_before(&self, key: &str, block_number: u64, ordinal: u64) -> bool {
        self.first_seen(key)
            .as_deref()
            .and_then(parse_marker)
            .is_some_and(|seen| seen <= (block_number, ordinal))
    }
}

impl FirstSeen for StoreGetString {
    fn first_seen(&self, key: &str) -> Option<String> {
        self.get_last(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryKeys;

    #[test]
    fn test_parse_marker() {
        assert_eq!(parse_marker("12:3"), Some((12, 3)));
        assert_eq!(parse_marker("12"), None);
        assert_eq!(parse_marker("a:3"), None);
    }

    #[test]
    fn test_first_seen_ordering() {
        let mut keys = MemoryKeys::default();
        keys.apply(vec![Occurrence { ord: 5, key: "Order:0x01".into(), marker: "10:5".into() }]);

        assert!(keys.is_first_occurrence("Order:0x01", "10:5"));
        assert!(!keys.is_first_occurrence("Order:0x01", "10:6"));

        assert!(keys.born_in_block("Order:0x01", 10));
        assert!(!keys.born_in_block("Order:0x01", 11));
        assert!(keys.born_in_block("StakedChange:0xaa", 11));

        assert!(!keys.seen_at_or_before("Order:0x01", 10, 4));
        assert!(keys.seen_at_or_before("Order:0x01", 10, 5));
        assert!(keys.seen_at_or_before("Order:0x01", 11, 0));
        assert!(!keys.seen_at_or_before("Order:0x02", 11, 0));
    }
}
